use tempfile::TempDir;

use crate::helpers::{misconfig, run};

#[test]
fn test_statistics() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    // Two trailing whitespace violations and a missing final newline.
    std::fs::write(directory.join("test.yaml"), "a: 1 \nb: 2 \nc: 3")?;

    insta::assert_snapshot!(
        run(misconfig(directory).args([".", "--statistics"])),
        @r"
    success: false
    exit_code: 1
    ----- stdout -----
        2 [*] trailing_whitespace
        1 [*] missing_final_newline

    Rules with `[*]` have an automatic fix.
    ----- stderr -----
    "
    );

    Ok(())
}

#[test]
fn test_statistics_marks_unfixable_rules() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    let long_line = format!("key: {}\n", "a".repeat(130));
    std::fs::write(directory.join("test.yaml"), long_line)?;

    insta::assert_snapshot!(
        run(misconfig(directory).args([".", "--statistics"])),
        @r"
    success: false
    exit_code: 1
    ----- stdout -----
        1 [ ] line_length

    Rules with `[*]` have an automatic fix.
    ----- stderr -----
    "
    );

    Ok(())
}

#[test]
fn test_statistics_with_file_error() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("bad.json"), "{,")?;
    std::fs::write(directory.join("test.yaml"), "a: 1 \n")?;

    insta::assert_snapshot!(
        run(misconfig(directory).args([".", "--statistics"])),
        @r"
    success: false
    exit_code: 2
    ----- stdout -----
        1 [*] trailing_whitespace

    Rules with `[*]` have an automatic fix.
    ----- stderr -----
    Error: Failed to parse bad.json due to syntax errors: key must be a string at line 1 column 2
    "
    );

    Ok(())
}

#[test]
fn test_statistics_with_only_file_errors() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("bad.json"), "{,")?;

    insta::assert_snapshot!(
        run(misconfig(directory).args([".", "--statistics"])),
        @r"
    success: false
    exit_code: 2
    ----- stdout -----
    ----- stderr -----
    Error: Failed to parse bad.json due to syntax errors: key must be a string at line 1 column 2
    "
    );

    Ok(())
}

#[test]
fn test_statistics_all_clean() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("test.yaml"), "key: value\n")?;

    insta::assert_snapshot!(
        run(misconfig(directory).args([".", "--statistics"])),
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
