//! Rule to flag function names that are not snake_case.

use regex::Regex;
use std::sync::LazyLock;

use snakestyle_core::{naming, LineRule, ScanState, SourceLine, StyleCode, Violation};

/// Rule code for function-naming.
pub const CODE: StyleCode = StyleCode::S009;

/// Rule name for function-naming.
pub const NAME: &str = "function-naming";

/// A `def` keyword and the name after it, at any indentation.
#[allow(clippy::unwrap_used)] // Pattern is a fixed literal
static DEF_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*def\s+([A-Za-z_][A-Za-z0-9_]*)").unwrap());

/// Flags function definitions whose name is not snake_case.
///
/// Dunder names such as `__init__` pass; a plain leading underscore does
/// not.
#[derive(Debug, Clone, Copy, Default)]
pub struct FunctionNaming;

impl FunctionNaming {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl LineRule for FunctionNaming {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> StyleCode {
        CODE
    }

    fn check(&self, line: &SourceLine<'_>, _state: &mut ScanState) -> Option<Violation> {
        let caps = DEF_HEADER.captures(line.text)?;
        let name = &caps[1];
        if naming::is_valid_function_name(name) {
            return None;
        }
        Some(
            Violation::new(
                line.number,
                CODE,
                format!("Function name '{name}' should use snake_case"),
            )
            .with_detail(name),
        )
    }
}
