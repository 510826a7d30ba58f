//! Rule to flag mutable default argument values.

use snakestyle_core::{SourceFacts, SourceLine, StyleCode, TreeRule, Violation};

/// Rule code for mutable-default.
pub const CODE: StyleCode = StyleCode::S012;

/// Rule name for mutable-default.
pub const NAME: &str = "mutable-default";

/// Flags function headers with a literal list, dictionary, or set as a
/// default value.
///
/// One violation per function definition, however many of its defaults
/// are mutable.
#[derive(Debug, Clone, Copy, Default)]
pub struct MutableDefault;

impl MutableDefault {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl TreeRule for MutableDefault {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> StyleCode {
        CODE
    }

    fn check(&self, line: &SourceLine<'_>, facts: &SourceFacts) -> Option<Violation> {
        facts
            .default_args
            .iter()
            .find(|f| f.line == line.number && f.any_mutable)
            .map(|_| Violation::new(line.number, CODE, "Default argument value is mutable"))
    }
}
