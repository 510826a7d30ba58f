//! Rule to flag variable names that are not snake_case.

use snakestyle_core::{SourceFacts, SourceLine, StyleCode, TreeRule, Violation};

/// Rule code for variable-naming.
pub const CODE: StyleCode = StyleCode::S011;

/// Rule name for variable-naming.
pub const NAME: &str = "variable-naming";

/// Flags assignments to names that are not snake_case.
///
/// The name shape is classified at fact-extraction time; this rule only
/// cross-references the line. At most one violation per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct VariableNaming;

impl VariableNaming {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl TreeRule for VariableNaming {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> StyleCode {
        CODE
    }

    fn check(&self, line: &SourceLine<'_>, facts: &SourceFacts) -> Option<Violation> {
        facts
            .assignments
            .iter()
            .find(|f| f.line == line.number && !f.snake_case)
            .map(|f| {
                Violation::new(
                    line.number,
                    CODE,
                    format!("Variable '{}' should be written in snake_case", f.name),
                )
                .with_detail(f.name.as_str())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snakestyle_core::AssignmentFact;

    fn facts_with(names: &[(&str, usize)]) -> SourceFacts {
        let mut facts = SourceFacts::new();
        for (name, line) in names {
            facts.assignments.push(AssignmentFact::new(*name, *line));
        }
        facts
    }

    fn check(facts: &SourceFacts, number: usize) -> Option<Violation> {
        VariableNaming::new().check(&SourceLine::new("...\n", number), facts)
    }

    #[test]
    fn accepts_snake_case_variables() {
        let facts = facts_with(&[("total", 1), ("running_sum", 2)]);
        assert!(check(&facts, 1).is_none());
        assert!(check(&facts, 2).is_none());
    }

    #[test]
    fn flags_camel_case_variable() {
        let facts = facts_with(&[("totalSum", 4)]);
        let violation = check(&facts, 4).expect("should flag");
        assert_eq!(
            violation.message,
            "Variable 'totalSum' should be written in snake_case"
        );
        assert_eq!(violation.line, 4);
    }

    #[test]
    fn first_offender_on_the_line_wins() {
        let facts = facts_with(&[("ok", 2), ("Bad", 2), ("Worse", 2)]);
        let violation = check(&facts, 2).expect("should flag");
        assert_eq!(violation.detail.as_deref(), Some("Bad"));
    }

    #[test]
    fn underscore_prefix_is_allowed_for_variables() {
        let facts = facts_with(&[("_cache", 1)]);
        assert!(check(&facts, 1).is_none());
    }
}
