//! # snakestyle-rules
//!
//! Built-in style rules for snakestyle.
//!
//! This crate provides the fixed twelve-rule set. The first nine rules
//! work on raw line text; the last three cross-reference syntax-tree
//! facts extracted by `snakestyle-python`.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | S001 | `line-too-long` | Line is longer than 79 characters |
//! | S002 | `indentation` | Indentation is not a multiple of four |
//! | S003 | `unnecessary-semicolon` | Statement ends with an unnecessary semicolon |
//! | S004 | `inline-comment-spacing` | Less than two spaces before an inline comment |
//! | S005 | `todo-comment` | Comment contains a TODO marker |
//! | S006 | `blank-lines` | More than two blank lines precede a code line |
//! | S007 | `construct-spacing` | Too many spaces after 'class' or 'def' |
//! | S008 | `class-naming` | Class name is not written in CamelCase |
//! | S009 | `function-naming` | Function name is not written in snake_case |
//! | S010 | `argument-naming` | Argument name is not written in snake_case |
//! | S011 | `variable-naming` | Variable name is not written in snake_case |
//! | S012 | `mutable-default` | Default argument value is mutable |
//!
//! ## Usage
//!
//! ```ignore
//! use snakestyle_core::StyleChecker;
//! use snakestyle_rules::{line_rules, tree_rules};
//!
//! let checker = StyleChecker::new(line_rules(), tree_rules());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod argument_naming;
mod blank_lines;
mod class_naming;
mod construct_spacing;
mod function_naming;
mod indentation;
mod inline_comment_spacing;
mod line_too_long;
mod mutable_default;
mod registry;
mod todo_comment;
mod unnecessary_semicolon;
mod variable_naming;

pub use argument_naming::ArgumentNaming;
pub use blank_lines::BlankLines;
pub use class_naming::ClassNaming;
pub use construct_spacing::ConstructSpacing;
pub use function_naming::FunctionNaming;
pub use indentation::Indentation;
pub use inline_comment_spacing::InlineCommentSpacing;
pub use line_too_long::LineTooLong;
pub use mutable_default::MutableDefault;
pub use registry::{line_rules, tree_rules};
pub use todo_comment::TodoComment;
pub use unnecessary_semicolon::UnnecessarySemicolon;
pub use variable_naming::VariableNaming;

/// Re-export core types for convenience.
pub use snakestyle_core::{LineRule, StyleCode, TreeRule, Violation};
