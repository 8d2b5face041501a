//! Geometry and styling for the decorative effects: parallax, card tilt,
//! card ripple, card entrance and the drifting background blobs.

pub const HOVER_SELECTOR: &str = ".cta-button, .project-card, .social-link";
pub const HOVER_TRANSITION: &str = "all 0.3s cubic-bezier(0.34, 1.56, 0.64, 1)";
pub const BLOB_SELECTOR: &str = ".gradient-blob";
pub const PAGE_FADE_DELAY_MS: u32 = 100;
pub const PAGE_FADE_TRANSITION: &str = "opacity 0.5s ease-in";

pub const CARD_STYLES: &str = r#"
@keyframes ripple {
  to { transform: scale(4); opacity: 0; }
}
@keyframes shimmer {
  0% { background-position: -1000px 0; }
  100% { background-position: 1000px 0; }
}
.project-card {
  position: relative;
  overflow: hidden;
}
.project-card::after {
  content: '';
  position: absolute;
  top: 0;
  left: -100%;
  width: 100%;
  height: 100%;
  background: linear-gradient(90deg, transparent, rgba(255, 255, 255, 0.2), transparent);
  transition: left 0.5s ease;
}
.project-card:hover::after {
  left: 100%;
}
"#;

pub fn parallax_transform(scroll_offset: f64, factor: f64) -> String {
    format!("translateY({}px)", scroll_offset * factor)
}

/// Viewport-relative box of the element under the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    /// Leans the card toward the pointer; `divisor` damps the angle.
    pub fn from_pointer(rect: CardRect, client_x: f64, client_y: f64, divisor: f64) -> Self {
        let x = client_x - rect.left;
        let y = client_y - rect.top;
        let center_x = rect.width / 2.0;
        let center_y = rect.height / 2.0;

        Self {
            rotate_x: (y - center_y) / divisor,
            rotate_y: (center_x - x) / divisor,
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg) translateY(-12px) scale(1.03)",
            self.rotate_x, self.rotate_y
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Ripple {
    pub id: u64,
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    /// A circle covering the card, centered on the click.
    pub fn at_click(id: u64, rect: CardRect, client_x: f64, client_y: f64) -> Self {
        let size = rect.width.max(rect.height);
        Self {
            id,
            size,
            left: client_x - rect.left - size / 2.0,
            top: client_y - rect.top - size / 2.0,
        }
    }

    pub fn style(&self, accent: &str, duration_ms: u32) -> String {
        format!(
            "width: {size}px; height: {size}px; left: {left}px; top: {top}px; \
             position: absolute; border-radius: 50%; background: {accent}30; \
             transform: scale(0); animation: ripple {duration_ms}ms ease-out; \
             pointer-events: none; z-index: 10;",
            size = self.size,
            left = self.left,
            top = self.top,
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ActiveRipple {
    pub ripple: Ripple,
    pub style: String,
}

/// Ripples currently animating on one card. Every click adds a ripple with
/// a fresh id, so rapid clicks overlap instead of restarting one another.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RippleSet {
    ripples: Vec<ActiveRipple>,
    last_id: u64,
}

impl RippleSet {
    pub fn ripples(&self) -> &[ActiveRipple] {
        &self.ripples
    }

    pub fn spawn(
        &mut self,
        rect: CardRect,
        client_x: f64,
        client_y: f64,
        accent: &str,
        duration_ms: u32,
    ) -> u64 {
        self.last_id += 1;
        let ripple = Ripple::at_click(self.last_id, rect, client_x, client_y);
        let style = ripple.style(accent, duration_ms);
        self.ripples.push(ActiveRipple { ripple, style });
        self.last_id
    }

    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.ripples.len();
        self.ripples.retain(|active| active.ripple.id != id);
        self.ripples.len() != before
    }
}

/// Style for a project card before and after its staggered entrance.
pub fn card_entrance_style(entered: bool) -> &'static str {
    if entered {
        "opacity: 1; transform: translateY(0); transition: opacity 0.6s ease, transform 0.6s ease;"
    } else {
        "opacity: 0; transform: translateY(30px);"
    }
}

pub fn card_entrance_delay_ms(index: usize, stagger_ms: u32) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(stagger_ms)
}

/// Accumulated drift of one background blob.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlobDrift {
    speed: f64,
    x: f64,
    y: f64,
}

impl BlobDrift {
    pub fn for_index(index: usize) -> Self {
        Self {
            speed: 0.5 + index as f64 * 0.2,
            x: 0.0,
            y: 0.0,
        }
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Advances one frame using the wall-clock time in milliseconds.
    pub fn step(&mut self, now_ms: f64) -> (f64, f64) {
        let phase = now_ms * 0.001 * self.speed;
        self.x += phase.sin() * 0.5;
        self.y += phase.cos() * 0.5;
        (self.x, self.y)
    }

    pub fn transform(&self) -> String {
        format!("translate({}px, {}px)", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: CardRect = CardRect {
        left: 100.0,
        top: 50.0,
        width: 300.0,
        height: 200.0,
    };

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn parallax_moves_at_thirty_percent() {
        assert_eq!(parallax_transform(200.0, 0.3), format!("translateY({}px)", 200.0 * 0.3));
        assert_eq!(parallax_transform(0.0, 0.3), "translateY(0px)");
    }

    #[test]
    fn centered_pointer_does_not_tilt() {
        let tilt = Tilt::from_pointer(CARD, 250.0, 150.0, 20.0);
        assert!(close(tilt.rotate_x, 0.0));
        assert!(close(tilt.rotate_y, 0.0));
    }

    #[test]
    fn corner_pointer_tilts_toward_itself() {
        let tilt = Tilt::from_pointer(CARD, 100.0, 50.0, 20.0);
        assert!(close(tilt.rotate_x, -5.0));
        assert!(close(tilt.rotate_y, 7.5));
        assert_eq!(
            tilt.transform(),
            "perspective(1000px) rotateX(-5deg) rotateY(7.5deg) translateY(-12px) scale(1.03)"
        );
    }

    #[test]
    fn ripple_covers_the_larger_side_and_centers_on_click() {
        let ripple = Ripple::at_click(7, CARD, 130.0, 70.0);
        assert_eq!(ripple.size, 300.0);
        assert_eq!(ripple.left, -120.0);
        assert_eq!(ripple.top, -130.0);

        let style = ripple.style("#00B3FF", 600);
        assert!(style.contains("background: #00B3FF30;"));
        assert!(style.contains("animation: ripple 600ms ease-out;"));
    }

    #[test]
    fn rapid_clicks_keep_every_ripple_until_removed() {
        let mut set = RippleSet::default();
        let first = set.spawn(CARD, 130.0, 70.0, "#00B3FF", 600);
        let second = set.spawn(CARD, 130.0, 70.0, "#00B3FF", 600);

        assert_ne!(first, second);
        assert_eq!(set.ripples().len(), 2);
        assert_eq!(set.ripples()[0].style, set.ripples()[1].style);

        assert!(set.remove(first));
        assert_eq!(set.ripples().len(), 1);
        assert_eq!(set.ripples()[0].ripple.id, second);
        assert!(!set.remove(first));
    }

    #[test]
    fn cards_clip_their_ripples() {
        let card_rule = ".project-card {\n  position: relative;\n  overflow: hidden;\n}";
        assert!(CARD_STYLES.contains(card_rule));
        assert!(CARD_STYLES.contains("@keyframes ripple"));
        assert!(CARD_STYLES.contains("@keyframes shimmer"));
    }

    #[test]
    fn card_entrance_staggers_by_index() {
        assert_eq!(card_entrance_delay_ms(0, 100), 0);
        assert_eq!(card_entrance_delay_ms(3, 100), 300);
        assert!(card_entrance_style(false).contains("opacity: 0"));
        assert!(card_entrance_style(true).contains("transition: opacity 0.6s ease"));
    }

    #[test]
    fn blob_speed_grows_with_index() {
        assert!(close(BlobDrift::for_index(0).speed(), 0.5));
        assert!(close(BlobDrift::for_index(2).speed(), 0.9));
    }

    #[test]
    fn blob_drift_accumulates_across_frames() {
        let mut blob = BlobDrift::for_index(0);

        let (x, y) = blob.step(0.0);
        assert!(close(x, 0.0));
        assert!(close(y, 0.5));

        let (x, y) = blob.step(0.0);
        assert!(close(x, 0.0));
        assert!(close(y, 1.0));
        assert_eq!(blob.transform(), "translate(0px, 1px)");
    }
}
