//! Python fact extraction using Tree-sitter.
//!
//! The tree is walked breadth-first, so facts from shallower nodes are
//! recorded before facts from nested ones.

use std::collections::VecDeque;

use tracing::debug;
use tree_sitter::{Language, LanguageError, Node, Parser};

use snakestyle_core::{ArgumentFact, AssignmentFact, DefaultArgFact, SourceFacts};

/// Errors that can occur during fact extraction.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The Python grammar could not be loaded into the parser.
    #[error("failed to load python grammar: {0}")]
    Language(#[from] LanguageError),

    /// The parser returned no tree.
    #[error("parser produced no syntax tree")]
    Cancelled,

    /// The source is not valid Python.
    #[error("source is not valid python")]
    InvalidSyntax,
}

/// Extracts argument, assignment, and default-value facts from Python source.
pub struct PythonExtractor {
    language: Language,
}

impl PythonExtractor {
    /// Creates a new Python extractor.
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: tree_sitter_python::LANGUAGE.into(),
        }
    }

    fn text<'a>(node: &Node<'_>, src: &'a [u8]) -> &'a str {
        std::str::from_utf8(&src[node.start_byte()..node.end_byte()]).unwrap_or("")
    }

    /// Parses `source` and collects the fact set for one file.
    ///
    /// # Errors
    ///
    /// Returns an error if the grammar cannot be loaded, the parser yields
    /// no tree, or the tree contains syntax errors.
    pub fn extract(&self, source: &str) -> Result<SourceFacts, ExtractError> {
        let mut parser = Parser::new();
        parser.set_language(&self.language)?;

        let src = source.as_bytes();
        let tree = parser.parse(src, None).ok_or(ExtractError::Cancelled)?;
        let root = tree.root_node();
        if root.has_error() {
            return Err(ExtractError::InvalidSyntax);
        }

        let mut facts = SourceFacts::new();
        let mut assignments_done = false;

        let mut queue = VecDeque::new();
        queue.push_back(root);

        while let Some(node) = queue.pop_front() {
            match node.kind() {
                "function_definition" => Self::record_function(&node, src, &mut facts),
                "assignment" if !assignments_done => {
                    assignments_done = !Self::record_assignment(&node, src, &mut facts);
                }
                _ => {}
            }

            let mut cursor = node.walk();
            for child in node.named_children(&mut cursor) {
                queue.push_back(child);
            }
        }

        debug!(
            "Extracted {} argument(s), {} assignment(s), {} function(s)",
            facts.arguments.len(),
            facts.assignments.len(),
            facts.default_args.len()
        );

        Ok(facts)
    }

    /// Records parameter names and the default-value summary of one `def`.
    ///
    /// Every fact is attributed to the line the header begins on, so rules
    /// report multi-line headers on their first line.
    fn record_function(node: &Node<'_>, src: &[u8], facts: &mut SourceFacts) {
        let line = node.start_position().row + 1;
        let mut any_mutable = false;

        if let Some(params) = node.child_by_field_name("parameters") {
            let mut cursor = params.walk();
            for param in params.named_children(&mut cursor) {
                if let Some(name) = Self::parameter_name(&param, src) {
                    facts.arguments.push(ArgumentFact {
                        name: name.to_owned(),
                        line,
                    });
                }
                if Self::has_mutable_default(&param) {
                    any_mutable = true;
                }
            }
        }

        facts.default_args.push(DefaultArgFact { line, any_mutable });
    }

    /// Bare name of a formal parameter node, if it carries one.
    fn parameter_name<'a>(param: &Node<'_>, src: &'a [u8]) -> Option<&'a str> {
        match param.kind() {
            "identifier" => Some(Self::text(param, src)),
            "default_parameter" | "typed_default_parameter" => param
                .child_by_field_name("name")
                .filter(|n| n.kind() == "identifier")
                .map(|n| Self::text(&n, src)),
            "list_splat_pattern" | "dictionary_splat_pattern" => param
                .named_child(0)
                .filter(|n| n.kind() == "identifier")
                .map(|n| Self::text(&n, src)),
            "typed_parameter" => match param.named_child(0) {
                Some(inner) if inner.kind() == "identifier" => Some(Self::text(&inner, src)),
                Some(inner) => Self::parameter_name(&inner, src),
                None => None,
            },
            _ => None,
        }
    }

    /// Whether a parameter defaults to a literal list, dictionary, or set.
    fn has_mutable_default(param: &Node<'_>) -> bool {
        if param.kind() != "default_parameter" && param.kind() != "typed_default_parameter" {
            return false;
        }
        param
            .child_by_field_name("value")
            .is_some_and(|v| matches!(v.kind(), "list" | "dictionary" | "set"))
    }

    /// Records a simple assignment target.
    ///
    /// Returns false when the target shape stops assignment collection for
    /// the rest of the file. Chained assignments contribute their first
    /// target only; annotated targets produce no fact either way.
    fn record_assignment(node: &Node<'_>, src: &[u8], facts: &mut SourceFacts) -> bool {
        if node.parent().is_some_and(|p| p.kind() == "assignment") {
            return true;
        }
        if node.child_by_field_name("type").is_some() {
            return true;
        }

        let left = match node.child_by_field_name("left") {
            Some(l) => l,
            None => return true,
        };
        if left.kind() != "identifier" {
            return false;
        }

        facts.assignments.push(AssignmentFact::new(
            Self::text(&left, src),
            node.start_position().row + 1,
        ));
        true
    }
}

impl Default for PythonExtractor {
    fn default() -> Self {
        Self::new()
    }
}
