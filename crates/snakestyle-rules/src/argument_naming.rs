//! Rule to flag argument names that are not snake_case.

use snakestyle_core::{naming, SourceFacts, SourceLine, StyleCode, TreeRule, Violation};

/// Rule code for argument-naming.
pub const CODE: StyleCode = StyleCode::S010;

/// Rule name for argument-naming.
pub const NAME: &str = "argument-naming";

/// Flags function headers declaring a parameter whose name is not
/// snake_case.
///
/// At most one violation per line: the first offending parameter in
/// declaration order wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArgumentNaming;

impl ArgumentNaming {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl TreeRule for ArgumentNaming {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> StyleCode {
        CODE
    }

    fn check(&self, line: &SourceLine<'_>, facts: &SourceFacts) -> Option<Violation> {
        facts
            .arguments
            .iter()
            .find(|f| f.line == line.number && !naming::is_snake_case(&f.name))
            .map(|f| {
                Violation::new(
                    line.number,
                    CODE,
                    format!("Argument name '{}' should use snake_case", f.name),
                )
                .with_detail(f.name.as_str())
            })
    }
}
