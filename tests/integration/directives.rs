use tempfile::TempDir;

use crate::helpers::{misconfig, run};

#[test]
fn test_same_line_directive() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(directory.join("test.yaml"), "a: yes # misconfig-ignore\n")?;

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
fn test_next_line_directive_with_rule_list() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(
        directory.join("test.yaml"),
        "# misconfig-ignore: truthy_value\na: yes\n",
    )?;

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
fn test_directive_only_covers_its_line() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(
        directory.join("test.yaml"),
        "a: yes # misconfig-ignore: truthy_value\nb: yes\n",
    )?;

    insta::assert_snapshot!(
        run(misconfig(directory).arg(".")),
        @r"
    success: false
    exit_code: 1
    ----- stdout -----
    test.yaml [2:4] truthy_value Truthy value `yes` is ambiguous. Use `true`/`false`, or quote the string.

    Found 1 error.
    1 fix is available with the `--fix --unsafe-fixes` option.
    ----- stderr -----
    "
    );

    Ok(())
}

#[test]
fn test_file_directive() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(
        directory.join("test.yaml"),
        "# misconfig-ignore-file\na: yes\nb: yes\n",
    )?;

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
fn test_file_directive_with_rule_list() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    let directory = directory.path();

    std::fs::write(
        directory.join("test.yaml"),
        "# misconfig-ignore-file: truthy_value\na: yes\nb: 2 \n",
    )?;

    insta::assert_snapshot!(
        run(misconfig(directory).arg(".")),
        @r"
    success: false
    exit_code: 1
    ----- stdout -----
    test.yaml [3:5] trailing_whitespace Line has trailing whitespace.

    Found 1 error.
    1 fixable with the `--fix` option.
    ----- stderr -----
    "
    );

    Ok(())
}
