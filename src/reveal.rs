pub const REVEAL_SELECTOR: &str = ".fade-in-scroll, .stat-item";
pub const HERO_SELECTOR: &str = ".hero-left, .hero-right";
pub const VISIBLE_CLASS: &str = "visible";

/// Observer settings for the scroll-triggered fade-ins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    /// Pixels trimmed off the bottom of the viewport, so elements reveal a
    /// little before they reach the bottom edge.
    pub bottom_margin: u32,
    pub stagger_ms: u32,
}

impl RevealOptions {
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_margin)
    }
}

/// A pending reveal: the entry's index in its batch and the delay before it
/// gets the visible class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledReveal {
    pub index: usize,
    pub delay_ms: u32,
}

/// Staggers the intersecting entries of one observer batch.
///
/// The delay follows the entry's position in the batch, so entries that are
/// not intersecting still hold their slot in the cascade.
pub fn stagger_batch(
    intersecting: impl IntoIterator<Item = bool>,
    stagger_ms: u32,
) -> Vec<ScheduledReveal> {
    intersecting
        .into_iter()
        .enumerate()
        .filter(|(_, is_intersecting)| *is_intersecting)
        .map(|(index, _)| ScheduledReveal {
            index,
            delay_ms: u32::try_from(index)
                .unwrap_or(u32::MAX)
                .saturating_mul(stagger_ms),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simultaneous_entries_cascade_in_observation_order() {
        let plan = stagger_batch([true, true, true], 100);
        let delays: Vec<u32> = plan.iter().map(|reveal| reveal.delay_ms).collect();
        assert_eq!(delays, vec![0, 100, 200]);
    }

    #[test]
    fn leaving_entries_are_skipped_but_keep_their_slot() {
        let plan = stagger_batch([false, true, false, true], 100);
        assert_eq!(
            plan,
            vec![
                ScheduledReveal {
                    index: 1,
                    delay_ms: 100,
                },
                ScheduledReveal {
                    index: 3,
                    delay_ms: 300,
                },
            ]
        );
    }

    #[test]
    fn empty_batch_schedules_nothing() {
        assert!(stagger_batch(Vec::new(), 100).is_empty());
    }

    #[test]
    fn root_margin_trims_the_viewport_bottom() {
        let options = RevealOptions {
            threshold: 0.15,
            bottom_margin: 80,
            stagger_ms: 100,
        };
        assert_eq!(options.root_margin(), "0px 0px -80px 0px");
    }
}
