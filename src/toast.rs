pub const ACCENT_VARIABLE: &str = "--primary";
pub const ACCENT_FALLBACK: &str = "#00B3FF";
pub const DANGER_COLOR: &str = "#e74c3c";

pub const TOAST_KEYFRAMES: &str = r#"
@keyframes slideIn {
  from { transform: translateX(400px); opacity: 0; }
  to { transform: translateX(0); opacity: 1; }
}
@keyframes slideOut {
  from { transform: translateX(0); opacity: 1; }
  to { transform: translateX(400px); opacity: 0; }
}
"#;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    pub fn class_name(self) -> String {
        format!("notification notification-{}", self.as_str())
    }
}

/// Picks the accent color, falling back when the CSS variable is unset.
pub fn resolve_accent(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(ACCENT_FALLBACK)
        .to_string()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    Showing,
    Leaving,
}

impl ToastPhase {
    fn animation(self) -> &'static str {
        match self {
            Self::Showing => "slideIn 0.3s ease-out",
            Self::Leaving => "slideOut 0.3s ease-out",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastTiming {
    pub display_ms: u32,
    pub exit_ms: u32,
}

impl ToastTiming {
    /// Phase of a toast `elapsed_ms` after it was shown; `None` once removed.
    pub fn phase_at(&self, elapsed_ms: u32) -> Option<ToastPhase> {
        if elapsed_ms < self.display_ms {
            Some(ToastPhase::Showing)
        } else if elapsed_ms < self.display_ms.saturating_add(self.exit_ms) {
            Some(ToastPhase::Leaving)
        } else {
            None
        }
    }

    pub fn lifetime_ms(&self) -> u32 {
        self.display_ms.saturating_add(self.exit_ms)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    pub accent: String,
}

impl Toast {
    pub fn background(&self) -> &str {
        match self.kind {
            ToastKind::Success => &self.accent,
            ToastKind::Error => DANGER_COLOR,
        }
    }

    pub fn style(&self, phase: ToastPhase) -> String {
        format!(
            "position: fixed; top: 20px; right: 20px; padding: 1rem 1.5rem; \
             background: {}; color: white; border-radius: 8px; \
             box-shadow: 0 4px 16px rgba(0, 0, 0, 0.2); z-index: 10000; \
             animation: {}; font-family: 'Inter', sans-serif; font-weight: 500;",
            self.background(),
            phase.animation()
        )
    }
}

/// Toasts on screen, oldest first. Each push gets its own id so identical
/// messages stack instead of replacing each other.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastStack {
    toasts: Vec<Toast>,
    last_id: u64,
}

impl ToastStack {
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn push(&mut self, kind: ToastKind, message: String, accent: String) -> u64 {
        self.last_id += 1;
        self.toasts.push(Toast {
            id: self.last_id,
            message,
            kind,
            accent,
        });
        self.last_id
    }

    /// Returns `false` when the toast was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMING: ToastTiming = ToastTiming {
        display_ms: 4_000,
        exit_ms: 300,
    };

    fn toast(kind: ToastKind) -> Toast {
        Toast {
            id: 1,
            message: "hello".to_string(),
            kind,
            accent: "#123456".to_string(),
        }
    }

    #[test]
    fn toast_is_present_immediately_and_gone_after_exit() {
        assert_eq!(TIMING.phase_at(0), Some(ToastPhase::Showing));
        assert_eq!(TIMING.phase_at(3_999), Some(ToastPhase::Showing));
        assert_eq!(TIMING.phase_at(4_000), Some(ToastPhase::Leaving));
        assert_eq!(TIMING.phase_at(4_299), Some(ToastPhase::Leaving));
        assert_eq!(TIMING.phase_at(4_300), None);
        assert_eq!(TIMING.lifetime_ms(), 4_300);
    }

    #[test]
    fn success_uses_accent_and_error_uses_danger() {
        assert_eq!(toast(ToastKind::Success).background(), "#123456");
        assert_eq!(toast(ToastKind::Error).background(), DANGER_COLOR);
    }

    #[test]
    fn accent_falls_back_when_variable_is_blank() {
        assert_eq!(resolve_accent(None), ACCENT_FALLBACK);
        assert_eq!(resolve_accent(Some("   ")), ACCENT_FALLBACK);
        assert_eq!(resolve_accent(Some(" #ff00aa ")), "#ff00aa");
    }

    #[test]
    fn leaving_toast_switches_animation() {
        let style = toast(ToastKind::Error).style(ToastPhase::Leaving);
        assert!(style.contains("animation: slideOut 0.3s ease-out;"));
        assert!(style.contains("background: #e74c3c;"));
        assert_eq!(ToastKind::Error.class_name(), "notification notification-error");
    }

    #[test]
    fn identical_toasts_stack_and_dismiss_independently() {
        let mut stack = ToastStack::default();
        let first = stack.push(ToastKind::Success, "saved".to_string(), "#123456".to_string());
        let second = stack.push(ToastKind::Success, "saved".to_string(), "#123456".to_string());

        assert_ne!(first, second);
        assert_eq!(stack.toasts().len(), 2);
        assert!(stack.toasts().iter().all(|toast| toast.message == "saved"));

        assert!(stack.dismiss(first));
        assert_eq!(stack.toasts().len(), 1);
        assert_eq!(stack.toasts()[0].id, second);

        assert!(!stack.dismiss(first));
        assert_eq!(stack.toasts().len(), 1);
    }

    #[test]
    fn ids_are_not_reused_after_dismissal() {
        let mut stack = ToastStack::default();
        let first = stack.push(ToastKind::Error, "oops".to_string(), ACCENT_FALLBACK.to_string());
        stack.dismiss(first);
        let second = stack.push(ToastKind::Error, "oops".to_string(), ACCENT_FALLBACK.to_string());

        assert!(second > first);
        assert_eq!(stack.toasts()[0].kind, ToastKind::Error);
    }
}
