//! Style checking engine that drives rules across a file's lines.

use crate::facts::SourceFacts;
use crate::rule::{LineRuleBox, TreeRuleBox};
use crate::types::{ScanState, SourceLine, Violation};

use tracing::debug;

/// Drives an ordered rule set across each line of a source file.
///
/// For every line, all line rules run first, then all tree rules, each in
/// registration order. Violations come back in exactly that evaluation
/// order: line by line, rule by rule, with no reordering or merging.
pub struct StyleChecker {
    line_rules: Vec<LineRuleBox>,
    tree_rules: Vec<TreeRuleBox>,
}

impl StyleChecker {
    /// Creates a checker from ordered rule vectors.
    #[must_use]
    pub fn new(line_rules: Vec<LineRuleBox>, tree_rules: Vec<TreeRuleBox>) -> Self {
        Self {
            line_rules,
            tree_rules,
        }
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.line_rules.len() + self.tree_rules.len()
    }

    /// Checks one file's source text against that file's fact set.
    ///
    /// The text is split into physical lines with `split_inclusive('\n')`,
    /// so each line keeps its trailing newline and the numbering starts at
    /// 1. Scan state is fresh for this call and never leaks across files.
    #[must_use]
    pub fn check(&self, source: &str, facts: &SourceFacts) -> Vec<Violation> {
        let mut violations = Vec::new();
        let mut state = ScanState::new();
        let mut lines = 0usize;

        for (index, text) in source.split_inclusive('\n').enumerate() {
            let line = SourceLine::new(text, index + 1);
            lines = line.number;

            for rule in &self.line_rules {
                if let Some(violation) = rule.check(&line, &mut state) {
                    violations.push(violation);
                }
            }

            for rule in &self.tree_rules {
                if let Some(violation) = rule.check(&line, facts) {
                    violations.push(violation);
                }
            }
        }

        debug!(
            "Checked {} line(s): {} violation(s)",
            lines,
            violations.len()
        );

        violations
    }
}
