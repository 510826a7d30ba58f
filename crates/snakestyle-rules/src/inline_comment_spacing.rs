//! Rule to require two spaces before inline comments.

use snakestyle_core::{LineRule, ScanState, SourceLine, StyleCode, Violation};

/// Rule code for inline-comment-spacing.
pub const CODE: StyleCode = StyleCode::S004;

/// Rule name for inline-comment-spacing.
pub const NAME: &str = "inline-comment-spacing";

/// Flags inline comments not preceded by at least two spaces.
///
/// A comment starting at column 0 is a full-line comment and exempt. The
/// `#` is found textually, so one inside a string literal counts too.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineCommentSpacing;

impl InlineCommentSpacing {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl LineRule for InlineCommentSpacing {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> StyleCode {
        CODE
    }

    fn check(&self, line: &SourceLine<'_>, _state: &mut ScanState) -> Option<Violation> {
        let pos = line.comment_start()?;
        if pos == 0 {
            return None;
        }
        (!line.text[..pos].ends_with("  ")).then(|| {
            Violation::new(
                line.number,
                CODE,
                "At least two spaces required before inline comments",
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(text: &str) -> Option<Violation> {
        let mut state = ScanState::new();
        InlineCommentSpacing::new().check(&SourceLine::new(text, 1), &mut state)
    }

    #[test]
    fn accepts_two_spaces_before_comment() {
        assert!(check("x = 1  # note\n").is_none());
    }

    #[test]
    fn accepts_more_than_two_spaces() {
        assert!(check("x = 1     # note\n").is_none());
    }

    #[test]
    fn flags_single_space() {
        let violation = check("x = 1 # note\n").expect("should flag");
        assert_eq!(
            violation.message,
            "At least two spaces required before inline comments"
        );
    }

    #[test]
    fn flags_no_space() {
        assert!(check("x = 1# note\n").is_some());
    }

    #[test]
    fn full_line_comment_is_exempt() {
        assert!(check("# a comment\n").is_none());
    }

    #[test]
    fn indented_comment_needs_two_leading_spaces() {
        assert!(check(" # one space\n").is_some());
        assert!(check("  # two spaces\n").is_none());
    }

    #[test]
    fn line_without_comment_is_exempt() {
        assert!(check("x = 1\n").is_none());
    }
}
