use tempfile::TempDir;

use crate::helpers::{misconfig, run};

#[test]
fn test_must_pass_path() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    let output = misconfig(directory).output()?;
    assert_eq!(output.status.code(), Some(2));
    let combined = format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(combined.contains("Usage: misconfig"));

    Ok(())
}

#[test]
fn test_help() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    let output = misconfig(directory).arg("--help").output()?;
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    assert!(stdout.contains("a linter for YAML and JSON configuration files"));
    assert!(stdout.contains("--filetype"));
    assert!(stdout.contains("--fix"));

    Ok(())
}

#[test]
fn test_no_config_files() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("notes.txt"), "not a config file")?;

    insta::assert_snapshot!(
        run(misconfig(directory).arg(".")),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Warning: No configuration files found under the given path(s).
    ----- stderr -----
    "
    );

    Ok(())
}

#[test]
fn test_no_lints() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("test.yaml"), "key: value\n")?;

    insta::assert_snapshot!(
        run(misconfig(directory).arg(".")),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    All checks passed!
    ----- stderr -----
    "
    );

    Ok(())
}

#[test]
fn test_one_lint() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("test.yaml"), "key: value")?;

    insta::assert_snapshot!(
        run(misconfig(directory).arg(".")),
        @r"
    success: false
    exit_code: 1
    ----- stdout -----
    test.yaml [1:11] missing_final_newline No newline at end of file.

    Found 1 error.
    1 fixable with the `--fix` option.
    ----- stderr -----
    "
    );

    Ok(())
}

#[test]
fn test_several_lints_several_files() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("test.yaml"), "a: 1 \n")?;
    std::fs::write(directory.join("test2.yaml"), "b: yes\n")?;

    insta::assert_snapshot!(
        run(misconfig(directory).arg(".")),
        @r"
    success: false
    exit_code: 1
    ----- stdout -----
    test.yaml [1:5] trailing_whitespace Line has trailing whitespace.
    test2.yaml [1:4] truthy_value Truthy value `yes` is ambiguous. Use `true`/`false`, or quote the string.

    Found 2 errors.
    1 fixable with the `--fix` option (1 hidden fix can be enabled with the `--unsafe-fixes` option).
    ----- stderr -----
    "
    );

    Ok(())
}

#[test]
fn test_file_not_found() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    insta::assert_snapshot!(
        run(misconfig(directory).arg("missing.yaml")),
        @r"
    success: false
    exit_code: 2
    ----- stdout -----
    ----- stderr -----
    error: File not found: missing.yaml
    "
    );

    Ok(())
}

#[test]
fn test_unknown_extension() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("config.txt"), "key: value\n")?;

    insta::assert_snapshot!(
        run(misconfig(directory).arg("config.txt")),
        @r"
    success: false
    exit_code: 2
    ----- stdout -----
    ----- stderr -----
    Error: Failed to get checks for file: config.txt: Could not determine the file type of config.txt. Specify it with `--filetype`.
    "
    );

    Ok(())
}

#[test]
fn test_filetype_override() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("config.txt"), "key: value\n")?;

    insta::assert_snapshot!(
        run(misconfig(directory).args(["config.txt", "-t", "yaml"])),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    All checks passed!
    ----- stderr -----
    "
    );

    std::fs::write(directory.join("data.txt"), "{\"a\":1}\n")?;

    insta::assert_snapshot!(
        run(misconfig(directory).args(["data.txt", "-t", "json"])),
        @r"
    success: false
    exit_code: 1
    ----- stdout -----
    data.txt [1:1] pretty_formatting File is not in canonical pretty-printed form. Re-format with `--fix --unsafe-fixes`.

    Found 1 error.
    1 fix is available with the `--fix --unsafe-fixes` option.
    ----- stderr -----
    "
    );

    Ok(())
}

#[test]
fn test_invalid_json() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("test.json"), "{,")?;

    insta::assert_snapshot!(
        run(misconfig(directory).arg(".")),
        @r"
    success: false
    exit_code: 2
    ----- stdout -----
    ----- stderr -----
    Error: Failed to parse test.json due to syntax errors: key must be a string at line 1 column 2
    "
    );

    Ok(())
}

#[test]
fn test_invalid_json_does_not_hide_other_files() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("test.json"), "{,")?;
    std::fs::write(directory.join("test.yaml"), "key: value")?;

    insta::assert_snapshot!(
        run(misconfig(directory).arg(".")),
        @r"
    success: false
    exit_code: 2
    ----- stdout -----
    test.yaml [1:11] missing_final_newline No newline at end of file.

    Found 1 error.
    1 fixable with the `--fix` option.
    ----- stderr -----
    Error: Failed to parse test.json due to syntax errors: key must be a string at line 1 column 2
    "
    );

    Ok(())
}

#[test]
fn test_quiet() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("test.yaml"), "key: value")?;

    insta::assert_snapshot!(
        run(misconfig(directory).args([".", "--quiet"])),
        @r"
    success: false
    exit_code: 1
    ----- stdout -----
    test.yaml [1:11] missing_final_newline No newline at end of file.
    ----- stderr -----
    "
    );

    Ok(())
}

#[test]
fn test_quiet_hides_no_files_warning() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    insta::assert_snapshot!(
        run(misconfig(directory).args([".", "--quiet"])),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ----- stderr -----
    "
    );

    Ok(())
}

#[test]
fn test_verbose_conflicts_with_quiet() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    let output = misconfig(directory).args([".", "-v", "-q"]).output()?;
    assert_eq!(output.status.code(), Some(2));

    Ok(())
}

#[test]
fn test_with_timing() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("test.yaml"), "key: value\n")?;

    let output = misconfig(directory).args([".", "--with-timing"]).output()?;
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    assert!(stdout.contains("All checks passed!"));
    assert!(stdout.contains("Checked files in:"));

    Ok(())
}

#[test]
fn test_select_and_ignore() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    // Trailing whitespace and a missing final newline.
    std::fs::write(directory.join("test.yaml"), "a: 1 \nb: 2")?;

    insta::assert_snapshot!(
        run(misconfig(directory).args([".", "--select", "trailing_whitespace"])),
        @r"
    success: false
    exit_code: 1
    ----- stdout -----
    test.yaml [1:5] trailing_whitespace Line has trailing whitespace.

    Found 1 error.
    1 fixable with the `--fix` option.
    ----- stderr -----
    "
    );

    insta::assert_snapshot!(
        run(misconfig(directory).args([".", "--ignore", "trailing_whitespace"])),
        @r"
    success: false
    exit_code: 1
    ----- stdout -----
    test.yaml [2:5] missing_final_newline No newline at end of file.

    Found 1 error.
    1 fixable with the `--fix` option.
    ----- stderr -----
    "
    );

    Ok(())
}

#[test]
fn test_unknown_rule_name() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("test.yaml"), "key: value\n")?;

    let output = misconfig(directory)
        .args([".", "--select", "not_a_rule"])
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    assert!(stderr.contains("Unknown rule name: `not_a_rule`"));

    Ok(())
}
