//! Rule to flag class names that are not CamelCase.

use regex::Regex;
use std::sync::LazyLock;

use snakestyle_core::{naming, LineRule, ScanState, SourceLine, StyleCode, Violation};

/// Rule code for class-naming.
pub const CODE: StyleCode = StyleCode::S008;

/// Rule name for class-naming.
pub const NAME: &str = "class-naming";

/// A `class` keyword and the name after it, at any indentation.
#[allow(clippy::unwrap_used)] // Pattern is a fixed literal
static CLASS_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*class\s+([A-Za-z_][A-Za-z0-9_]*)").unwrap());

/// Flags class definitions whose name does not start with an uppercase
/// letter.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassNaming;

impl ClassNaming {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl LineRule for ClassNaming {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> StyleCode {
        CODE
    }

    fn check(&self, line: &SourceLine<'_>, _state: &mut ScanState) -> Option<Violation> {
        let caps = CLASS_HEADER.captures(line.text)?;
        let name = &caps[1];
        if naming::is_camel_case(name) {
            return None;
        }
        Some(
            Violation::new(
                line.number,
                CODE,
                format!("Class name '{name}' should be written in CamelCase"),
            )
            .with_detail(name),
        )
    }
}
