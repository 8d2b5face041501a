#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavVisibility {
    Hidden,
    Visible,
}

impl NavVisibility {
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }
}

/// Shows the floating nav only while the reader scrolls back up past the
/// top of the page.
pub struct NavTracker {
    reveal_offset: f64,
    last_offset: f64,
    visibility: NavVisibility,
}

impl NavTracker {
    pub fn new(reveal_offset: f64) -> Self {
        Self {
            reveal_offset,
            last_offset: 0.0,
            visibility: NavVisibility::Hidden,
        }
    }

    pub fn visibility(&self) -> NavVisibility {
        self.visibility
    }

    pub fn observe(&mut self, offset: f64) -> NavVisibility {
        self.visibility = if offset <= self.reveal_offset || offset > self.last_offset {
            NavVisibility::Hidden
        } else {
            NavVisibility::Visible
        };
        self.last_offset = offset;
        self.visibility
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use NavVisibility::{Hidden, Visible};

    fn run(offsets: &[f64]) -> Vec<NavVisibility> {
        let mut tracker = NavTracker::new(100.0);
        offsets.iter().map(|offset| tracker.observe(*offset)).collect()
    }

    #[test]
    fn starts_hidden() {
        assert_eq!(NavTracker::new(100.0).visibility(), Hidden);
    }

    #[test]
    fn shows_only_when_scrolling_up_below_the_fold() {
        assert_eq!(
            run(&[0.0, 50.0, 150.0, 120.0]),
            vec![Hidden, Hidden, Hidden, Visible]
        );
    }

    #[test]
    fn hides_again_near_the_top_and_when_scrolling_down() {
        assert_eq!(
            run(&[400.0, 300.0, 350.0, 200.0, 100.0]),
            vec![Hidden, Visible, Hidden, Visible, Hidden]
        );
    }

    #[test]
    fn unchanged_offset_counts_as_scrolling_up() {
        assert_eq!(run(&[300.0, 300.0]), vec![Hidden, Visible]);
    }
}
