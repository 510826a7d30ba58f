//! End-to-end tests for the `snakestyle` binary.
//!
//! These run the compiled binary and assert on the split between the two
//! output streams: diagnostics on stdout, logs and errors on stderr.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn snakestyle() -> Command {
    Command::new(env!("CARGO_BIN_EXE_snakestyle"))
}

#[test]
fn stdout_carries_diagnostics_and_nothing_else() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("test.py");
    fs::write(&file, "x = 1\n\n\n\n\nprint(x)  # ok\n").unwrap();

    let output = snakestyle().arg("check").arg(&file).output().unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        format!(
            "{}: Line 6: S006 More than two blank lines used before this line\n",
            file.display()
        )
    );
}

#[test]
fn log_output_goes_to_stderr() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("clean.py");
    fs::write(&file, "x = 1\n").unwrap();

    let output = snakestyle().arg("check").arg(&file).output().unwrap();

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Checking 1 file(s)"));
}

#[test]
fn failing_run_keeps_earlier_diagnostics_on_stdout() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("a.py"), "x = 1;\n").unwrap();
    fs::write(tmp.path().join("z.py"), "def broken(:\n").unwrap();

    let output = snakestyle().arg("check").arg(tmp.path()).output().unwrap();

    assert!(!output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        format!(
            "{}: Line 1: S003 Unnecessary semicolon\n",
            tmp.path().join("a.py").display()
        )
    );
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to parse"));
}
