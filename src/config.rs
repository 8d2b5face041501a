use tracing::Level;

use crate::reveal::RevealOptions;
use crate::toast::ToastTiming;

const DEFAULT_NAV_REVEAL_OFFSET: f64 = 100.0;
const DEFAULT_ANCHOR_CLEARANCE: f64 = 80.0;
const DEFAULT_REVEAL_THRESHOLD: f64 = 0.15;
const DEFAULT_REVEAL_BOTTOM_MARGIN: u32 = 80;
const DEFAULT_REVEAL_STAGGER_MS: u32 = 100;
const DEFAULT_CARD_STAGGER_MS: u32 = 100;
const DEFAULT_TOAST_DISPLAY_MS: u32 = 4_000;
const DEFAULT_TOAST_EXIT_MS: u32 = 300;
const DEFAULT_PARALLAX_FACTOR: f64 = 0.3;
const DEFAULT_TILT_DIVISOR: f64 = 20.0;
const DEFAULT_RIPPLE_MS: u32 = 600;
const DEFAULT_THEME_TRANSITION_MS: u32 = 600;
const DEFAULT_LOG_LEVEL: Level = Level::INFO;

const NAV_REVEAL_OFFSET_BOUNDS: (f64, f64) = (0.0, 2_000.0);
const ANCHOR_CLEARANCE_BOUNDS: (f64, f64) = (0.0, 400.0);
const REVEAL_STAGGER_MS_BOUNDS: (u32, u32) = (0, 1_000);
const CARD_STAGGER_MS_BOUNDS: (u32, u32) = (0, 1_000);
const TOAST_DISPLAY_MS_BOUNDS: (u32, u32) = (500, 30_000);
const TOAST_EXIT_MS_BOUNDS: (u32, u32) = (0, 2_000);
const PARALLAX_FACTOR_BOUNDS: (f64, f64) = (0.0, 1.0);
const TILT_DIVISOR_BOUNDS: (f64, f64) = (1.0, 200.0);
const RIPPLE_MS_BOUNDS: (u32, u32) = (100, 5_000);

/// Tuning for every page effect.
///
/// Defaults mirror the timings in `style/main.css`; the mount element may
/// override a value with a `data-*` attribute. Overrides outside their bounds are ignored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EffectsConfig {
    pub nav_reveal_offset: f64,
    pub anchor_clearance: f64,
    pub reveal: RevealOptions,
    /// Delay between project card entrances, separate from the fade-in cascade.
    pub card_stagger_ms: u32,
    pub toast: ToastTiming,
    pub parallax_factor: f64,
    pub tilt_divisor: f64,
    pub ripple_ms: u32,
    pub theme_transition_ms: u32,
    pub log_level: Level,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            nav_reveal_offset: DEFAULT_NAV_REVEAL_OFFSET,
            anchor_clearance: DEFAULT_ANCHOR_CLEARANCE,
            reveal: RevealOptions {
                threshold: DEFAULT_REVEAL_THRESHOLD,
                bottom_margin: DEFAULT_REVEAL_BOTTOM_MARGIN,
                stagger_ms: DEFAULT_REVEAL_STAGGER_MS,
            },
            card_stagger_ms: DEFAULT_CARD_STAGGER_MS,
            toast: ToastTiming {
                display_ms: DEFAULT_TOAST_DISPLAY_MS,
                exit_ms: DEFAULT_TOAST_EXIT_MS,
            },
            parallax_factor: DEFAULT_PARALLAX_FACTOR,
            tilt_divisor: DEFAULT_TILT_DIVISOR,
            ripple_ms: DEFAULT_RIPPLE_MS,
            theme_transition_ms: DEFAULT_THEME_TRANSITION_MS,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl EffectsConfig {
    /// Builds the config from attribute lookups such as `data-ripple-ms`.
    pub fn from_attributes(attribute: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            nav_reveal_offset: parse_f64_with_bounds(
                attribute("data-nav-reveal-offset"),
                defaults.nav_reveal_offset,
                NAV_REVEAL_OFFSET_BOUNDS,
            ),
            anchor_clearance: parse_f64_with_bounds(
                attribute("data-anchor-clearance"),
                defaults.anchor_clearance,
                ANCHOR_CLEARANCE_BOUNDS,
            ),
            reveal: RevealOptions {
                stagger_ms: parse_u32_with_bounds(
                    attribute("data-reveal-stagger-ms"),
                    defaults.reveal.stagger_ms,
                    REVEAL_STAGGER_MS_BOUNDS,
                ),
                ..defaults.reveal
            },
            card_stagger_ms: parse_u32_with_bounds(
                attribute("data-card-stagger-ms"),
                defaults.card_stagger_ms,
                CARD_STAGGER_MS_BOUNDS,
            ),
            toast: ToastTiming {
                display_ms: parse_u32_with_bounds(
                    attribute("data-toast-display-ms"),
                    defaults.toast.display_ms,
                    TOAST_DISPLAY_MS_BOUNDS,
                ),
                exit_ms: parse_u32_with_bounds(
                    attribute("data-toast-exit-ms"),
                    defaults.toast.exit_ms,
                    TOAST_EXIT_MS_BOUNDS,
                ),
            },
            parallax_factor: parse_f64_with_bounds(
                attribute("data-parallax-factor"),
                defaults.parallax_factor,
                PARALLAX_FACTOR_BOUNDS,
            ),
            tilt_divisor: parse_f64_with_bounds(
                attribute("data-tilt-divisor"),
                defaults.tilt_divisor,
                TILT_DIVISOR_BOUNDS,
            ),
            ripple_ms: parse_u32_with_bounds(
                attribute("data-ripple-ms"),
                defaults.ripple_ms,
                RIPPLE_MS_BOUNDS,
            ),
            theme_transition_ms: defaults.theme_transition_ms,
            log_level: parse_log_level(attribute("data-log-level"), defaults.log_level),
        }
    }
}

fn parse_u32_with_bounds(value: Option<String>, default: u32, bounds: (u32, u32)) -> u32 {
    value
        .and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_f64_with_bounds(value: Option<String>, default: f64, bounds: (f64, f64)) -> f64 {
    value
        .and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite() && (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_log_level(value: Option<String>, default: Level) -> Level {
    match value
        .map(|value| value.trim().to_ascii_lowercase())
        .as_deref()
    {
        Some("trace") => Level::TRACE,
        Some("debug") => Level::DEBUG,
        Some("info") => Level::INFO,
        Some("warn") => Level::WARN,
        Some("error") => Level::ERROR,
        _ => default,
    }
}
