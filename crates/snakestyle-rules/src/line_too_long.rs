//! Rule to flag lines longer than 79 characters.

use snakestyle_core::{LineRule, ScanState, SourceLine, StyleCode, Violation};

/// Rule code for line-too-long.
pub const CODE: StyleCode = StyleCode::S001;

/// Rule name for line-too-long.
pub const NAME: &str = "line-too-long";

/// Maximum visible line length, in characters.
pub const MAX_LENGTH: usize = 79;

/// Flags lines whose visible length exceeds [`MAX_LENGTH`] characters.
///
/// The trailing newline does not count; length is measured in characters,
/// not bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineTooLong;

impl LineTooLong {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl LineRule for LineTooLong {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> StyleCode {
        CODE
    }

    fn check(&self, line: &SourceLine<'_>, _state: &mut ScanState) -> Option<Violation> {
        (line.visible().chars().count() > MAX_LENGTH)
            .then(|| Violation::new(line.number, CODE, "Too long"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(text: &str) -> Option<Violation> {
        let mut state = ScanState::new();
        LineTooLong::new().check(&SourceLine::new(text, 1), &mut state)
    }

    #[test]
    fn accepts_line_at_the_limit() {
        let text = format!("{}\n", "a".repeat(79));
        assert!(check(&text).is_none());
    }

    #[test]
    fn flags_line_over_the_limit() {
        let text = format!("{}\n", "a".repeat(80));
        let violation = check(&text).expect("should flag");
        assert_eq!(violation.message, "Too long");
        assert_eq!(violation.code, StyleCode::S001);
    }

    #[test]
    fn trailing_newline_does_not_count() {
        // 79 visible characters plus the newline is still within the limit.
        let text = format!("{}\n", "b".repeat(79));
        assert!(check(&text).is_none());
    }

    #[test]
    fn length_is_measured_in_characters() {
        let text = format!("{}\n", "é".repeat(80));
        assert!(check(&text).is_some());
        let text = format!("{}\n", "é".repeat(79));
        assert!(check(&text).is_none());
    }

    #[test]
    fn last_line_without_newline_is_measured_too() {
        assert!(check(&"c".repeat(80)).is_some());
    }
}
