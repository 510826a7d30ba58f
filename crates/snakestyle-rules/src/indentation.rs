//! Rule to flag indentation that is not a multiple of four.

use snakestyle_core::{LineRule, ScanState, SourceLine, StyleCode, Violation};

/// Rule code for indentation.
pub const CODE: StyleCode = StyleCode::S002;

/// Rule name for indentation.
pub const NAME: &str = "indentation";

/// Flags lines whose leading whitespace is not a multiple of four.
///
/// Only a bare newline is exempt. A whitespace-only line counts every
/// leading whitespace character, its newline included, so `"  \n"` has an
/// indent of three.
#[derive(Debug, Clone, Copy, Default)]
pub struct Indentation;

impl Indentation {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl LineRule for Indentation {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> StyleCode {
        CODE
    }

    fn check(&self, line: &SourceLine<'_>, _state: &mut ScanState) -> Option<Violation> {
        if line.is_blank() {
            return None;
        }
        let indent = line
            .text
            .chars()
            .take_while(|c| c.is_whitespace())
            .count();
        (indent % 4 != 0)
            .then(|| Violation::new(line.number, CODE, "Indentation is not a multiple of four"))
    }
}
