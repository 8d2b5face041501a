use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::toast::ToastKind;

pub const SUCCESS_MESSAGE: &str = "Thank you for subscribing! You'll hear from me soon.";
pub const ERROR_MESSAGE: &str = "Please enter a valid email address.";

/// Loose shape check: something, an `@`, something, a dot, something.
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    #[error("email address is empty")]
    Empty,
    #[error("email address is malformed")]
    Malformed,
}

pub fn validate_email(raw: &str) -> Result<&str, EmailError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(EmailError::Empty);
    }

    if EMAIL_SHAPE.is_match(email) {
        Ok(email)
    } else {
        Err(EmailError::Malformed)
    }
}

/// What the form should do after a submit.
#[derive(Debug, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub kind: ToastKind,
    pub message: &'static str,
    pub clear_input: bool,
}

impl SubmitOutcome {
    pub fn from_input(raw: &str) -> Result<Self, (Self, EmailError)> {
        match validate_email(raw) {
            Ok(_) => Ok(Self {
                kind: ToastKind::Success,
                message: SUCCESS_MESSAGE,
                clear_input: true,
            }),
            Err(error) => Err((
                Self {
                    kind: ToastKind::Error,
                    message: ERROR_MESSAGE,
                    clear_input: false,
                },
                error,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_minimal_address() {
        assert_eq!(validate_email("a@b.co"), Ok("a@b.co"));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(validate_email("  me@alasrambus.com \n"), Ok("me@alasrambus.com"));
    }

    #[test]
    fn rejects_empty_and_blank_input() {
        assert_eq!(validate_email(""), Err(EmailError::Empty));
        assert_eq!(validate_email("   "), Err(EmailError::Empty));
    }

    #[test]
    fn rejects_malformed_shapes() {
        for input in ["plainstring", "a@b", "a@b.", "@b.co", "a b@c.de", "a@@b.co"] {
            assert!(
                matches!(validate_email(input), Err(EmailError::Malformed)),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn valid_submit_clears_input_with_success_toast() {
        let outcome = SubmitOutcome::from_input("reader@example.org").expect("valid address");
        assert_eq!(outcome.kind, ToastKind::Success);
        assert_eq!(outcome.message, SUCCESS_MESSAGE);
        assert!(outcome.clear_input);
    }

    #[test]
    fn invalid_submit_keeps_input_with_error_toast() {
        let (outcome, error) = SubmitOutcome::from_input("reader@").expect_err("invalid address");
        assert_eq!(outcome.kind, ToastKind::Error);
        assert_eq!(outcome.message, ERROR_MESSAGE);
        assert!(!outcome.clear_input);
        assert_eq!(error, EmailError::Malformed);
    }

    #[test]
    fn rejection_message_leaves_out_the_address() {
        let error = validate_email("private.reader@").expect_err("invalid address");
        let message = error.to_string();
        assert_eq!(message, "email address is malformed");
        assert!(!message.contains("private.reader"));
    }

    #[test]
    fn email_pattern_compiles() {
        assert!(EMAIL_SHAPE.is_match("x@y.z"));
        assert!(!EMAIL_SHAPE.is_match("x@y"));
    }
}
