//! Rule to flag TODO markers in comments.

use snakestyle_core::{LineRule, ScanState, SourceLine, StyleCode, Violation};

/// Rule code for todo-comment.
pub const CODE: StyleCode = StyleCode::S005;

/// Rule name for todo-comment.
pub const NAME: &str = "todo-comment";

/// Flags comments containing `TODO`, in any case mix.
///
/// Only the comment text is searched, from the first `#` onward; a TODO
/// in code proper does not trigger.
#[derive(Debug, Clone, Copy, Default)]
pub struct TodoComment;

impl TodoComment {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl LineRule for TodoComment {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> StyleCode {
        CODE
    }

    fn check(&self, line: &SourceLine<'_>, _state: &mut ScanState) -> Option<Violation> {
        let pos = line.comment_start()?;
        line.text[pos..]
            .to_lowercase()
            .contains("todo")
            .then(|| Violation::new(line.number, CODE, "TODO found"))
    }
}
