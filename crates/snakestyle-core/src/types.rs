//! Core types for style violations and line scanning.

/// Rule codes for the fixed rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleCode {
    /// Line longer than 79 characters.
    S001,
    /// Indentation that is not a multiple of four.
    S002,
    /// Unnecessary semicolon after a statement.
    S003,
    /// Less than two spaces before an inline comment.
    S004,
    /// TODO marker inside a comment.
    S005,
    /// More than two blank lines before a code line.
    S006,
    /// Too many spaces after `class` or `def`.
    S007,
    /// Class name not written in CamelCase.
    S008,
    /// Function name not written in snake_case.
    S009,
    /// Argument name not written in snake_case.
    S010,
    /// Variable name not written in snake_case.
    S011,
    /// Mutable default argument value.
    S012,
}

impl StyleCode {
    /// Returns the code as printed in diagnostics (e.g., "S001").
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::S001 => "S001",
            Self::S002 => "S002",
            Self::S003 => "S003",
            Self::S004 => "S004",
            Self::S005 => "S005",
            Self::S006 => "S006",
            Self::S007 => "S007",
            Self::S008 => "S008",
            Self::S009 => "S009",
            Self::S010 => "S010",
            Self::S011 => "S011",
            Self::S012 => "S012",
        }
    }

    /// Returns a brief description of what the rule checks.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::S001 => "Line is longer than 79 characters",
            Self::S002 => "Indentation is not a multiple of four",
            Self::S003 => "Statement ends with an unnecessary semicolon",
            Self::S004 => "Less than two spaces before an inline comment",
            Self::S005 => "Comment contains a TODO marker",
            Self::S006 => "More than two blank lines precede a code line",
            Self::S007 => "Too many spaces after 'class' or 'def'",
            Self::S008 => "Class name is not written in CamelCase",
            Self::S009 => "Function name is not written in snake_case",
            Self::S010 => "Argument name is not written in snake_case",
            Self::S011 => "Variable name is not written in snake_case",
            Self::S012 => "Default argument value is mutable",
        }
    }
}

impl std::fmt::Display for StyleCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A style violation found on one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Line number (1-indexed) the violation was found on.
    pub line: usize,
    /// Rule code that produced this violation.
    pub code: StyleCode,
    /// Human-readable message.
    pub message: String,
    /// Offending identifier or keyword, when the rule names one.
    pub detail: Option<String>,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub fn new(line: usize, code: StyleCode, message: impl Into<String>) -> Self {
        Self {
            line,
            code,
            message: message.into(),
            detail: None,
        }
    }

    /// Attaches the offending identifier or keyword to this violation.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Line {}: {} {}", self.line, self.code, self.message)
    }
}

/// A single physical line of a source file.
///
/// Lines come from `split_inclusive('\n')`, so every line except possibly
/// the last carries its trailing newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    /// Raw line text, including the trailing newline when present.
    pub text: &'a str,
    /// Line number (1-indexed).
    pub number: usize,
}

impl<'a> SourceLine<'a> {
    /// Creates a new source line.
    #[must_use]
    pub fn new(text: &'a str, number: usize) -> Self {
        Self { text, number }
    }

    /// Returns the line text without its trailing newline.
    #[must_use]
    pub fn visible(&self) -> &'a str {
        self.text.strip_suffix('\n').unwrap_or(self.text)
    }

    /// Returns true when the line holds no visible characters.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.visible().is_empty()
    }

    /// Returns the byte position of the first `#` in the raw text.
    ///
    /// A `#` counts wherever it appears, string literals included.
    #[must_use]
    pub fn comment_start(&self) -> Option<usize> {
        self.text.find('#')
    }
}

/// Mutable state threaded through a single file's scan.
///
/// Fresh per file; never crosses file boundaries.
#[derive(Debug, Default)]
pub struct ScanState {
    /// Consecutive blank lines seen immediately before the current line.
    pub blank_run: u32,
}

impl ScanState {
    /// Creates a fresh state for a new file.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the blank-line run counter.
    pub fn reset_blank_run(&mut self) {
        self.blank_run = 0;
    }
}
