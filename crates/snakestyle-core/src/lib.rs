//! # snakestyle-core
//!
//! Core framework for the snakestyle Python style checker.
//!
//! This crate provides the foundational traits and types for line-based
//! style checking. It includes:
//!
//! - [`LineRule`] trait for rules over raw line text
//! - [`TreeRule`] trait for rules over syntax-tree facts
//! - [`StyleChecker`] for driving a rule set across a file
//! - [`Violation`] for representing findings
//!
//! ## Example
//!
//! ```ignore
//! use snakestyle_core::{SourceFacts, StyleChecker};
//!
//! let checker = StyleChecker::new(line_rules, tree_rules);
//! for violation in checker.check(&source, &SourceFacts::new()) {
//!     println!("{violation}");
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod checker;
mod facts;
mod rule;
mod types;

/// Name-shape predicates shared by the naming rules.
pub mod naming;

pub use checker::StyleChecker;
pub use facts::{ArgumentFact, AssignmentFact, DefaultArgFact, SourceFacts};
pub use rule::{LineRule, LineRuleBox, TreeRule, TreeRuleBox};
pub use types::{ScanState, SourceLine, StyleCode, Violation};
