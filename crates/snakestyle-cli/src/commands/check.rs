//! Check command implementation.

use anyhow::{Context, Result};
use snakestyle_core::StyleChecker;
use snakestyle_python::PythonExtractor;
use snakestyle_rules::{line_rules, tree_rules};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Runs the check command.
///
/// Streams one diagnostic per line to stdout in the form
/// `<path>: Line <line>: <CODE> <message>`, writing each file's findings
/// before the next file is read, so a file that fails to read or parse
/// later in the run never takes back what was already printed. Violations
/// never affect the exit status; only unreadable paths or unparsable
/// sources do.
pub fn run(path: &Path) -> Result<()> {
    let stdout = std::io::stdout();
    check_path(path, &mut stdout.lock())
}

/// Checks a file or directory, writing each diagnostic to `out` as soon as
/// it is found.
fn check_path(path: &Path, out: &mut impl Write) -> Result<()> {
    let checker = StyleChecker::new(line_rules(), tree_rules());
    let extractor = PythonExtractor::new();
    let targets = discover_targets(path)?;

    tracing::info!(
        "Checking {} file(s) with {} rule(s)",
        targets.len(),
        checker.rule_count()
    );

    for target in &targets {
        let source = std::fs::read_to_string(&target.file)
            .with_context(|| format!("Failed to read {}", target.file.display()))?;
        // Python opens source files with universal newlines
        let source = source.replace("\r\n", "\n").replace('\r', "\n");

        let facts = extractor
            .extract(&source)
            .with_context(|| format!("Failed to parse {}", target.file.display()))?;

        let violations = checker.check(&source, &facts);
        tracing::debug!(
            "{}: {} violation(s)",
            target.display.display(),
            violations.len()
        );

        for violation in violations {
            writeln!(out, "{}: {}", target.display.display(), violation)?;
        }
    }

    Ok(())
}

/// A file to check, paired with the path to print for it.
struct Target {
    file: PathBuf,
    display: PathBuf,
}

/// Expands `path` into the list of files to check.
///
/// A file path is checked as-is and printed as supplied. A directory is
/// scanned one level deep for `.py` entries in file-name order, each
/// printed as the supplied directory joined with the entry name.
fn discover_targets(path: &Path) -> Result<Vec<Target>> {
    let metadata = std::fs::metadata(path)
        .with_context(|| format!("Failed to access {}", path.display()))?;

    if metadata.is_file() {
        return Ok(vec![Target {
            file: path.to_path_buf(),
            display: path.to_path_buf(),
        }]);
    }

    let mut targets = Vec::new();
    for entry in walkdir::WalkDir::new(path)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if !entry.file_name().to_string_lossy().ends_with(".py") {
            continue;
        }
        targets.push(Target {
            file: entry.path().to_path_buf(),
            display: path.join(entry.file_name()),
        });
    }

    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn diagnostics(path: &Path) -> Vec<String> {
        let mut out = Vec::new();
        check_path(path, &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn blank_run_is_reported_once_on_the_following_line() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("test.py");
        fs::write(&file, "x = 1\n\n\n\n\nprint(x)  # ok\n").unwrap();

        assert_eq!(
            diagnostics(&file),
            vec![format!(
                "{}: Line 6: S006 More than two blank lines used before this line",
                file.display()
            )]
        );
    }

    #[test]
    fn directory_entries_are_sorted_and_filtered() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("b.py"), "import os;\n").unwrap();
        fs::write(tmp.path().join("a.py"), "import os;\n").unwrap();
        fs::write(tmp.path().join("c.py"), "import os;\n").unwrap();
        fs::write(tmp.path().join("notes.txt"), "import os;\n").unwrap();
        fs::create_dir(tmp.path().join("sub.py")).unwrap();

        let expected: Vec<String> = ["a.py", "b.py", "c.py"]
            .iter()
            .map(|name| {
                format!(
                    "{}: Line 1: S003 Unnecessary semicolon",
                    tmp.path().join(name).display()
                )
            })
            .collect();
        assert_eq!(diagnostics(tmp.path()), expected);
    }

    #[test]
    fn crlf_sources_are_normalized_before_checking() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("test.py");
        fs::write(&file, "x = 1;\r\n").unwrap();

        assert_eq!(
            diagnostics(&file),
            vec![format!(
                "{}: Line 1: S003 Unnecessary semicolon",
                file.display()
            )]
        );
    }

    #[test]
    fn cr_only_sources_are_normalized_before_checking() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("test.py");
        fs::write(&file, "x = 1;\rprint(x)\r").unwrap();

        assert_eq!(
            diagnostics(&file),
            vec![format!(
                "{}: Line 1: S003 Unnecessary semicolon",
                file.display()
            )]
        );
    }

    #[test]
    fn rule_order_is_stable_within_a_line() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("test.py");
        fs::write(&file, "x = 1; # todo\n").unwrap();

        let lines = diagnostics(&file);
        let codes: Vec<&str> = lines
            .iter()
            .map(|d| d.split(": ").nth(2).unwrap())
            .collect();
        assert_eq!(
            codes,
            vec![
                "S003 Unnecessary semicolon",
                "S004 At least two spaces required before inline comments",
                "S005 TODO found"
            ]
        );
    }

    #[test]
    fn earlier_diagnostics_survive_a_later_fatal_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.py"), "x = 1;\n").unwrap();
        fs::write(tmp.path().join("z.py"), "def broken(:\n").unwrap();

        let mut out = Vec::new();
        let err = check_path(tmp.path(), &mut out).unwrap_err();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!(
                "{}: Line 1: S003 Unnecessary semicolon\n",
                tmp.path().join("a.py").display()
            )
        );
        assert!(format!("{err:#}").contains("Failed to parse"));
    }

    #[test]
    fn invalid_python_is_a_fatal_error() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("broken.py");
        fs::write(&file, "def f(:\n").unwrap();

        let mut out = Vec::new();
        let err = check_path(&file, &mut out).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse"));
    }

    #[test]
    fn missing_path_is_a_fatal_error() {
        let tmp = TempDir::new().unwrap();

        let mut out = Vec::new();
        let err = check_path(&tmp.path().join("absent.py"), &mut out).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to access"));
    }

    #[test]
    fn empty_directory_produces_no_diagnostics() {
        let tmp = TempDir::new().unwrap();
        assert!(diagnostics(tmp.path()).is_empty());
    }
}
