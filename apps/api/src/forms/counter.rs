#![allow(dead_code)]

use serde::Serialize;

/// CSS class applied to the counter element.
pub const COUNTER_CLASS: &str = "text-muted d-block text-end";
/// CSS class added once input passes the warning threshold.
pub const WARNING_CLASS: &str = "text-warning";

/// Live character-counter state for a `maxlength`-bound textarea.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CounterState {
    pub label: String,
    pub warning: bool,
}

/// `"<len> / <max> characters"`, exactly as the counter renders it.
pub fn counter_label(len: usize, max: usize) -> String {
    format!("{len} / {max} characters")
}

/// Warning kicks in strictly above 90% of `maxlength`.
pub fn counter_warning(len: usize, max: usize) -> bool {
    len * 10 > max * 9
}

pub fn counter_state(len: usize, max: usize) -> CounterState {
    CounterState {
        label: counter_label(len, max),
        warning: counter_warning(len, max),
    }
}

/// The classes the counter element carries for the given state.
pub fn counter_classes(state: &CounterState) -> String {
    if state.warning {
        format!("{COUNTER_CLASS} {WARNING_CLASS}")
    } else {
        COUNTER_CLASS.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_matches_display_format() {
        assert_eq!(counter_label(0, 100), "0 / 100 characters");
        assert_eq!(counter_label(95, 100), "95 / 100 characters");
    }

    #[test]
    fn warning_threshold_is_strictly_above_ninety_percent() {
        assert!(!counter_warning(90, 100));
        assert!(counter_warning(91, 100));
        assert!(counter_warning(95, 100));
        assert!(counter_warning(100, 100));
    }

    #[test]
    fn ninety_five_of_one_hundred_warns() {
        let state = counter_state(95, 100);
        assert_eq!(state.label, "95 / 100 characters");
        assert!(state.warning);
        assert!(counter_classes(&state).contains(WARNING_CLASS));
    }

    #[test]
    fn below_threshold_has_no_warning_class() {
        let state = counter_state(10, 100);
        assert!(!state.warning);
        assert_eq!(counter_classes(&state), COUNTER_CLASS);
    }

    #[test]
    fn odd_maxlength_rounds_like_the_client() {
        // maxlength 10: warning strictly above 9.0 characters.
        assert!(!counter_warning(9, 10));
        assert!(counter_warning(10, 10));
    }
}
