//! # snakestyle-python
//!
//! Tree-sitter based Python fact extraction for snakestyle.
//!
//! This crate turns raw Python source into the read-only fact set the
//! tree rules consume. It reuses `snakestyle-core` types (`SourceFacts`,
//! `ArgumentFact`, `AssignmentFact`, `DefaultArgFact`) and adds:
//!
//! - [`PythonExtractor`] for parsing and fact collection
//! - [`ExtractError`] for grammar and syntax failures

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod extractor;

pub use extractor::{ExtractError, PythonExtractor};
