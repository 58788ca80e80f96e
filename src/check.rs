use anyhow::{Context, Result, anyhow};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub use crate::checker::Checker;
use crate::config::Config;
use crate::diagnostic::Diagnostic;
use crate::directive::SuppressionManager;
use crate::error::ParseError;
use crate::filetype::FileType;
use crate::fix::apply_fixes;
use crate::fs::relativize_path;
use crate::rule_set::Rule;
use crate::utils::{compute_lints_location, find_new_lines_from_content};

use crate::lints::colon_spacing::colon_spacing::colon_spacing;
use crate::lints::duplicate_key::duplicate_key::duplicate_key;
use crate::lints::inconsistent_indentation::inconsistent_indentation::inconsistent_indentation;
use crate::lints::line_length::line_length::line_length;
use crate::lints::missing_final_newline::missing_final_newline::missing_final_newline;
use crate::lints::pretty_formatting::pretty_formatting::pretty_formatting;
use crate::lints::tab_indentation::tab_indentation::tab_indentation;
use crate::lints::trailing_whitespace::trailing_whitespace::trailing_whitespace;
use crate::lints::truthy_value::truthy_value::truthy_value;

pub fn check(config: Config) -> Vec<(String, Result<Vec<Diagnostic>, anyhow::Error>)> {
    // Wrap config in Arc to avoid expensive clones in parallel execution
    let config = Arc::new(config);

    config
        .paths
        .par_iter()
        .map(|file| {
            let res = check_path(file, Arc::clone(&config));
            (relativize_path(file), res)
        })
        .collect()
}

pub fn check_path(path: &PathBuf, config: Arc<Config>) -> Result<Vec<Diagnostic>, anyhow::Error> {
    if config.apply_fixes || config.apply_unsafe_fixes {
        lint_fix(path, config)
    } else {
        lint_only(path, config)
    }
}

pub fn lint_only(path: &PathBuf, config: Arc<Config>) -> Result<Vec<Diagnostic>, anyhow::Error> {
    let path = relativize_path(path);
    let contents = fs::read_to_string(Path::new(&path))
        .with_context(|| format!("Failed to read file: {path}"))?;

    let checks = get_checks(&contents, Path::new(&path), &config)
        .with_context(|| format!("Failed to get checks for file: {path}"))?;

    Ok(checks)
}

pub fn lint_fix(path: &PathBuf, config: Arc<Config>) -> Result<Vec<Diagnostic>, anyhow::Error> {
    let path = relativize_path(path);

    let mut has_skipped_fixes = true;
    let mut checks: Vec<Diagnostic>;

    loop {
        let contents = fs::read_to_string(Path::new(&path))
            .with_context(|| format!("Failed to read file: {path}"))?;

        checks = get_checks(&contents, Path::new(&path), &config)
            .with_context(|| format!("Failed to get checks for file: {path}"))?;

        if !has_skipped_fixes {
            break;
        }

        let (new_has_skipped_fixes, fixed_text) =
            apply_fixes(&checks, &contents, config.apply_unsafe_fixes);
        has_skipped_fixes = new_has_skipped_fixes;

        // Nothing to apply, so leave the file (and its mtime) untouched.
        if fixed_text == contents {
            break;
        }

        fs::write(&path, fixed_text).with_context(|| format!("Failed to write file: {path}"))?;
    }

    Ok(checks)
}

// Takes the file content as a string and obtains a (possibly empty) vector of
// `Diagnostic`s.
//
// If there are diagnostics to report, this is also where their byte range is
// converted to a location (row, column), and where suppression directives
// filter them out.
pub fn get_checks(contents: &str, file: &Path, config: &Config) -> Result<Vec<Diagnostic>> {
    let filetype = config
        .filetype_override
        .or_else(|| FileType::from_path(file))
        .ok_or_else(|| {
            anyhow!(
                "Could not determine the file type of {}. Specify it with `--filetype`.",
                file.display()
            )
        })?;

    tracing::debug!("Checking {} as {filetype}", file.display());

    // For JSON, syntax errors abort the check before any rule runs.
    let json_value = match filetype {
        FileType::Json => Some(serde_json::from_str::<serde_json::Value>(contents).map_err(
            |err| ParseError {
                filename: file.to_path_buf(),
                reason: err.to_string(),
            },
        )?),
        FileType::Yaml => None,
    };

    let mut checker = Checker::new(config.rule_options.clone());
    checker.rule_set = config.rules_to_apply.clone();

    for rule in Rule::all() {
        if !checker.is_rule_enabled(*rule) || !rule.applies_to(filetype) {
            continue;
        }
        let diagnostics = match rule {
            Rule::TrailingWhitespace => trailing_whitespace(contents),
            Rule::MissingFinalNewline => missing_final_newline(contents),
            Rule::LineLength => line_length(contents, checker.rule_options.max_line_length),
            Rule::TabIndentation => tab_indentation(contents),
            Rule::InconsistentIndentation => {
                inconsistent_indentation(contents, checker.rule_options.indent_width)
            }
            Rule::DuplicateKey => duplicate_key(contents),
            Rule::TruthyValue => truthy_value(contents),
            Rule::ColonSpacing => colon_spacing(contents),
            Rule::PrettyFormatting => {
                // `json_value` is always present for JSON files at this point
                match &json_value {
                    Some(value) => pretty_formatting(contents, value),
                    None => vec![],
                }
            }
        };
        checker.report_diagnostics(diagnostics);
    }

    let diagnostics: Vec<Diagnostic> = checker
        .diagnostics
        .into_iter()
        .map(|mut diagnostic| {
            diagnostic.filename = file.to_path_buf();
            diagnostic
        })
        .collect();

    let loc_new_lines = find_new_lines_from_content(contents);
    let mut diagnostics = compute_lints_location(diagnostics, &loc_new_lines);

    // Comment directives only exist in YAML.
    if filetype == FileType::Yaml {
        let suppression = SuppressionManager::from_content(contents);
        diagnostics.retain(|diagnostic| {
            let row = diagnostic.location.map(|loc| loc.row).unwrap_or(0);
            !suppression.is_suppressed(&diagnostic.message.name, row)
        });
    }

    diagnostics.sort();

    Ok(diagnostics)
}
