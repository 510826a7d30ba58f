//! Rule traits for the fixed rule set.

use crate::facts::SourceFacts;
use crate::types::{ScanState, SourceLine, StyleCode, Violation};

/// A rule evaluated against each physical line of a file.
///
/// Line rules see the raw line text plus the mutable scan state. They run
/// in a fixed order and return at most one violation per line.
///
/// # Example
///
/// ```ignore
/// use snakestyle_core::{LineRule, ScanState, SourceLine, StyleCode, Violation};
///
/// pub struct NoTabs;
///
/// impl LineRule for NoTabs {
///     fn name(&self) -> &'static str { "no-tabs" }
///     fn code(&self) -> StyleCode { StyleCode::S002 }
///
///     fn check(&self, line: &SourceLine<'_>, _state: &mut ScanState) -> Option<Violation> {
///         line.text
///             .contains('\t')
///             .then(|| Violation::new(line.number, self.code(), "Tab character used"))
///     }
/// }
/// ```
pub trait LineRule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "line-too-long").
    fn name(&self) -> &'static str;

    /// Returns the rule code.
    fn code(&self) -> StyleCode;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        self.code().description()
    }

    /// Checks a single line, updating the scan state as needed.
    ///
    /// # Arguments
    ///
    /// * `line` - The physical line under check
    /// * `state` - Mutable state carried across the file's lines
    ///
    /// # Returns
    ///
    /// The violation found on this line, if any.
    fn check(&self, line: &SourceLine<'_>, state: &mut ScanState) -> Option<Violation>;
}

/// Type alias for boxed `LineRule` trait objects.
pub type LineRuleBox = Box<dyn LineRule>;

/// A rule evaluated against each line using facts from the syntax tree.
///
/// Tree rules never look at the raw text. They cross-reference the line
/// number against facts extracted once per file, so a fact produced by a
/// header spanning several lines is reported on the header's first line.
pub trait TreeRule: Send + Sync {
    /// Returns the kebab-case name of this rule.
    fn name(&self) -> &'static str;

    /// Returns the rule code.
    fn code(&self) -> StyleCode;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        self.code().description()
    }

    /// Checks a single line against the file's fact set.
    fn check(&self, line: &SourceLine<'_>, facts: &SourceFacts) -> Option<Violation>;
}

/// Type alias for boxed `TreeRule` trait objects.
pub type TreeRuleBox = Box<dyn TreeRule>;
