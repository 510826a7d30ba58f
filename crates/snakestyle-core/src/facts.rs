//! Facts derived from a parsed Python source file.
//!
//! Facts are extracted once per file, before the line loop, and shared
//! read-only across all tree rules. Every `line` field is 1-indexed and
//! refers to the line a cross-referencing rule will report on.

use crate::naming;

/// A formal parameter of a function definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentFact {
    /// Parameter name.
    pub name: String,
    /// Line the defining `def` header begins on (1-indexed).
    pub line: usize,
}

/// A simple assignment target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentFact {
    /// Target name.
    pub name: String,
    /// Line the assignment begins on (1-indexed).
    pub line: usize,
    /// Whether the name fits the variable snake_case shape.
    pub snake_case: bool,
}

impl AssignmentFact {
    /// Creates an assignment fact, classifying the name on the spot.
    #[must_use]
    pub fn new(name: impl Into<String>, line: usize) -> Self {
        let name = name.into();
        let snake_case = naming::is_snake_case(&name);
        Self {
            name,
            line,
            snake_case,
        }
    }
}

/// Default-value summary for one function definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultArgFact {
    /// Line the `def` header begins on (1-indexed).
    pub line: usize,
    /// Whether any default value is a literal list, dictionary, or set.
    pub any_mutable: bool,
}

/// All facts extracted from one source file.
#[derive(Debug, Clone, Default)]
pub struct SourceFacts {
    /// One fact per formal parameter, across all function definitions.
    pub arguments: Vec<ArgumentFact>,
    /// One fact per simple assignment target, in collection order.
    pub assignments: Vec<AssignmentFact>,
    /// One fact per function definition.
    pub default_args: Vec<DefaultArgFact>,
}

impl SourceFacts {
    /// Creates an empty fact set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
