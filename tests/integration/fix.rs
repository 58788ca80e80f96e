use tempfile::TempDir;

use crate::helpers::{misconfig, run};

#[test]
fn test_fix_safe() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    // Trailing whitespace and a missing final newline, both safely fixable.
    std::fs::write(directory.join("test.yaml"), "a: 1 \nb: 2")?;

    insta::assert_snapshot!(
        run(misconfig(directory).args([".", "--fix"])),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    All checks passed!
    ----- stderr -----
    "
    );

    let fixed = std::fs::read_to_string(directory.join("test.yaml"))?;
    assert_eq!(fixed, "a: 1\nb: 2\n");

    Ok(())
}

#[test]
fn test_fix_does_not_apply_unsafe_fixes() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    let contents = "a: yes\n";
    std::fs::write(directory.join("test.yaml"), contents)?;

    insta::assert_snapshot!(
        run(misconfig(directory).args([".", "--fix"])),
        @r"
    success: false
    exit_code: 1
    ----- stdout -----
    test.yaml [1:4] truthy_value Truthy value `yes` is ambiguous. Use `true`/`false`, or quote the string.

    Found 1 error.
    1 fix is available with the `--fix --unsafe-fixes` option.
    ----- stderr -----
    "
    );

    let unchanged = std::fs::read_to_string(directory.join("test.yaml"))?;
    assert_eq!(unchanged, contents);

    Ok(())
}

#[test]
fn test_fix_unsafe() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("test.yaml"), "a: yes\n")?;

    insta::assert_snapshot!(
        run(misconfig(directory).args([".", "--fix", "--unsafe-fixes"])),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    All checks passed!
    ----- stderr -----
    "
    );

    let fixed = std::fs::read_to_string(directory.join("test.yaml"))?;
    assert_eq!(fixed, "a: \"yes\"\n");

    Ok(())
}

#[test]
fn test_fix_reformats_json() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("test.json"), "{\"a\":1}")?;

    insta::assert_snapshot!(
        run(misconfig(directory).args([".", "--fix", "--unsafe-fixes"])),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    All checks passed!
    ----- stderr -----
    "
    );

    let fixed = std::fs::read_to_string(directory.join("test.json"))?;
    assert_eq!(fixed, "{\n  \"a\": 1\n}\n");

    Ok(())
}

#[test]
fn test_fix_skips_writing_unchanged_files() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    // Only a line_length violation, which has no fix.
    let path = directory.join("test.yaml");
    std::fs::write(&path, format!("key: {}\n", "a".repeat(130)))?;

    // Backdate the file so an accidental rewrite is observable.
    let past = std::time::SystemTime::now() - std::time::Duration::from_secs(3600);
    let file = std::fs::File::options().write(true).open(&path)?;
    file.set_modified(past)?;
    drop(file);

    insta::assert_snapshot!(
        run(misconfig(directory).args([".", "--fix"])),
        @r"
    success: false
    exit_code: 1
    ----- stdout -----
    test.yaml [1:121] line_length Line is longer than 120 characters.

    Found 1 error.
    Warning: 1 violation(s) have no automatic fix and must be resolved manually.
    ----- stderr -----
    "
    );

    let modified = std::fs::metadata(&path)?.modified()?;
    assert!(modified <= past + std::time::Duration::from_secs(1));

    Ok(())
}

#[test]
fn test_fix_reports_unfixable_leftovers() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    // line_length has no fix; trailing whitespace is fixed on the way.
    let long_line = format!("key: {} \n", "a".repeat(130));
    std::fs::write(directory.join("test.yaml"), long_line)?;

    insta::assert_snapshot!(
        run(misconfig(directory).args([".", "--fix"])),
        @r"
    success: false
    exit_code: 1
    ----- stdout -----
    test.yaml [1:121] line_length Line is longer than 120 characters.

    Found 1 error.
    Warning: 1 violation(s) have no automatic fix and must be resolved manually.
    ----- stderr -----
    "
    );

    let fixed = std::fs::read_to_string(directory.join("test.yaml"))?;
    assert_eq!(fixed, format!("key: {}\n", "a".repeat(130)));

    Ok(())
}
