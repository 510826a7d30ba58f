//! Rule to flag statements ending in a semicolon.

use snakestyle_core::{LineRule, ScanState, SourceLine, StyleCode, Violation};

/// Rule code for unnecessary-semicolon.
pub const CODE: StyleCode = StyleCode::S003;

/// Rule name for unnecessary-semicolon.
pub const NAME: &str = "unnecessary-semicolon";

/// Flags lines whose code portion ends with a semicolon.
///
/// The code portion is everything before the first `#`, right-trimmed of
/// spaces. Comment-only lines are exempt; a `#` inside a string literal
/// still counts as the comment start.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnnecessarySemicolon;

impl UnnecessarySemicolon {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl LineRule for UnnecessarySemicolon {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> StyleCode {
        CODE
    }

    fn check(&self, line: &SourceLine<'_>, _state: &mut ScanState) -> Option<Violation> {
        let visible = line.visible();
        if visible.is_empty() || visible.starts_with('#') {
            return None;
        }
        let code = match visible.find('#') {
            Some(pos) => &visible[..pos],
            None => visible,
        };
        code.trim_end_matches(' ')
            .ends_with(';')
            .then(|| Violation::new(line.number, CODE, "Unnecessary semicolon"))
    }
}
