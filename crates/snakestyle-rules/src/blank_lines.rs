//! Rule to flag code preceded by more than two blank lines.

use snakestyle_core::{LineRule, ScanState, SourceLine, StyleCode, Violation};

/// Rule code for blank-lines.
pub const CODE: StyleCode = StyleCode::S006;

/// Rule name for blank-lines.
pub const NAME: &str = "blank-lines";

/// Maximum run of blank lines allowed before a code line.
pub const MAX_BLANK_RUN: u32 = 2;

/// Flags the first code line after a run of more than two blank lines.
///
/// The run counter lives in [`ScanState`]. A violation resets it; so does
/// any line with more than one visible character. A one-character line
/// leaves a short run standing, which can join it to a later run.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlankLines;

impl BlankLines {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl LineRule for BlankLines {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> StyleCode {
        CODE
    }

    fn check(&self, line: &SourceLine<'_>, state: &mut ScanState) -> Option<Violation> {
        if line.is_blank() {
            state.blank_run += 1;
            return None;
        }

        if state.blank_run > MAX_BLANK_RUN {
            state.reset_blank_run();
            return Some(Violation::new(
                line.number,
                CODE,
                "More than two blank lines used before this line",
            ));
        }

        if line.visible().chars().count() > 1 {
            state.reset_blank_run();
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Runs the rule over each line of `source`, collecting violations.
    fn scan(source: &str) -> Vec<Violation> {
        let rule = BlankLines::new();
        let mut state = ScanState::new();
        source
            .split_inclusive('\n')
            .enumerate()
            .filter_map(|(i, text)| rule.check(&SourceLine::new(text, i + 1), &mut state))
            .collect()
    }

    #[test]
    fn two_blank_lines_are_fine() {
        assert!(scan("x = 1\n\n\ny = 2\n").is_empty());
    }

    #[test]
    fn three_blank_lines_flag_the_next_code_line() {
        let violations = scan("x = 1\n\n\n\ny = 2\n");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].line, 5);
        assert_eq!(
            violations[0].message,
            "More than two blank lines used before this line"
        );
    }

    #[test]
    fn violation_resets_the_counter() {
        // Only the first code line after the long run is flagged.
        let violations = scan("x = 1\n\n\n\ny = 2\nz = 3\n");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].line, 5);
    }

    #[test]
    fn blank_lines_at_file_start_count() {
        let violations = scan("\n\n\nx = 1\n");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].line, 4);
    }

    #[test]
    fn one_character_line_leaves_a_short_run_standing() {
        // Two blanks, a one-character line, then two more blanks: the runs
        // join into four and the next code line is flagged.
        let violations = scan("x = 1\n\n\n)\n\n\ny = 2\n");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].line, 7);
    }

    #[test]
    fn longer_line_resets_the_run() {
        let violations = scan("x = 1\n\n\nok = 1\n\n\ny = 2\n");
        assert!(violations.is_empty());
    }

    #[test]
    fn trailing_blank_lines_are_not_flagged() {
        assert!(scan("x = 1\n\n\n\n").is_empty());
    }
}
