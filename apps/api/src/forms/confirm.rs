#![allow(dead_code)]

use serde::Serialize;

/// Prompt used when a button carries no explicit message.
pub const DEFAULT_CONFIRM_MESSAGE: &str = "Are you sure?";

/// A destructive-action button guarded by a confirmation prompt.
/// Rendered as a `data-confirm` attribute; the click handler blocks
/// submission unless the prompt is accepted.
#[derive(Debug, Clone, Serialize)]
pub struct ConfirmButton {
    pub message: Option<String>,
}

impl ConfirmButton {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or(DEFAULT_CONFIRM_MESSAGE)
    }

    /// The markup attribute the front end binds the prompt to.
    pub fn attribute(&self) -> String {
        format!(r#"data-confirm="{}""#, self.message())
    }

    /// Whether a click should go through: only when the prompt was accepted.
    pub fn should_submit(&self, confirmed: bool) -> bool {
        confirmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_carries_the_message() {
        let button = ConfirmButton::new("Delete this company?");
        assert_eq!(button.attribute(), r#"data-confirm="Delete this company?""#);
    }

    #[test]
    fn missing_message_falls_back_to_default() {
        let button = ConfirmButton { message: None };
        assert_eq!(button.message(), "Are you sure?");
    }

    #[test]
    fn unconfirmed_click_does_not_submit() {
        let button = ConfirmButton::new("Delete this company?");
        assert!(!button.should_submit(false));
        assert!(button.should_submit(true));
    }
}
