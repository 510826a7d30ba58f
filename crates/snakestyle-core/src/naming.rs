//! Name-shape predicates for Python identifiers.
//!
//! The shapes are deliberately permissive where the rules are: the
//! argument/variable shape accepts leading underscores and bare
//! underscores, while the function shape does not (dunder names aside).

use regex::Regex;
use std::sync::LazyLock;

/// Shape accepted for argument and variable names.
static SNAKE_CASE: LazyLock<Regex> = LazyLock::new(|| compiled(r"^[a-z0-9]*(_[a-z0-9]*)*$"));

/// Shape accepted for function names, dunder names aside.
static SNAKE_CASE_STRICT: LazyLock<Regex> = LazyLock::new(|| compiled(r"^[a-z0-9]+(_[a-z0-9]+)*$"));

/// Dunder names such as `__init__`.
static DUNDER: LazyLock<Regex> = LazyLock::new(|| compiled(r"^__[a-z0-9_]*__$"));

#[allow(clippy::unwrap_used)] // Patterns are fixed literals
fn compiled(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap()
}

/// Returns true when `name` fits the argument/variable snake_case shape.
#[must_use]
pub fn is_snake_case(name: &str) -> bool {
    SNAKE_CASE.is_match(name)
}

/// Returns true when `name` fits the function naming convention:
/// strict snake_case, or a dunder name.
#[must_use]
pub fn is_valid_function_name(name: &str) -> bool {
    SNAKE_CASE_STRICT.is_match(name) || DUNDER.is_match(name)
}

/// Returns true when `name` begins with an ASCII uppercase letter,
/// the criterion used for CamelCase class names.
#[must_use]
pub fn is_camel_case(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}
