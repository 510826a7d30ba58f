//! Rule to flag extra spaces after `class` and `def`.

use regex::Regex;
use std::sync::LazyLock;

use snakestyle_core::{LineRule, ScanState, SourceLine, StyleCode, Violation};

/// Rule code for construct-spacing.
pub const CODE: StyleCode = StyleCode::S007;

/// Rule name for construct-spacing.
pub const NAME: &str = "construct-spacing";

/// A `class` or `def` keyword, the whitespace gap after it, and the start
/// of whatever follows. Words merely starting with a keyword do not match,
/// and neither does a keyword with nothing after the gap.
#[allow(clippy::unwrap_used)] // Pattern is a fixed literal
static CONSTRUCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(class|def)(\s+)\S").unwrap());

/// Flags `class` and `def` keywords followed by more than one space.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstructSpacing;

impl ConstructSpacing {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl LineRule for ConstructSpacing {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> StyleCode {
        CODE
    }

    fn check(&self, line: &SourceLine<'_>, _state: &mut ScanState) -> Option<Violation> {
        let caps = CONSTRUCT.captures(line.text)?;
        if caps[2].chars().count() <= 1 {
            return None;
        }
        let keyword = &caps[1];
        Some(
            Violation::new(
                line.number,
                CODE,
                format!("Too many spaces after '{keyword}'"),
            )
            .with_detail(keyword),
        )
    }
}
