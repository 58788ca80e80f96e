use std::path::PathBuf;

use anyhow::{Result, bail};

use crate::filetype::FileType;
use crate::rule_set::{Rule, RuleSet};
use crate::settings::{ResolvedRuleOptions, Settings};

/// The raw, CLI-shaped configuration of a run.
#[derive(Debug, Clone, Default)]
pub struct ArgsConfig {
    pub files: Vec<PathBuf>,
    pub fix: bool,
    pub unsafe_fixes: bool,
    pub select: String,
    pub ignore: String,
    pub filetype: Option<FileType>,
}

/// The resolved configuration of a run, after merging CLI arguments with
/// `misconfig.toml`.
#[derive(Debug, Clone)]
pub struct Config {
    pub paths: Vec<PathBuf>,
    pub rules_to_apply: RuleSet,
    pub rule_options: ResolvedRuleOptions,
    pub apply_fixes: bool,
    pub apply_unsafe_fixes: bool,
    pub filetype_override: Option<FileType>,
}

pub fn build_config(
    args: &ArgsConfig,
    settings: &Settings,
    paths: Vec<PathBuf>,
) -> Result<Config> {
    // CLI `--select` wins over the TOML `select`, which wins over the default
    // set. `--ignore` and the TOML `ignore` are both subtracted afterwards.
    let mut rules: RuleSet = if !args.select.is_empty() {
        parse_rule_names(&args.select)?.into_iter().collect()
    } else if let Some(select) = &settings.linter.select {
        parse_rule_list(select)?.into_iter().collect()
    } else {
        RuleSet::default_rules()
    };

    if let Some(ignore) = &settings.linter.ignore {
        for rule in parse_rule_list(ignore)? {
            rules.remove(&rule);
        }
    }
    if !args.ignore.is_empty() {
        for rule in parse_rule_names(&args.ignore)? {
            rules.remove(&rule);
        }
    }

    let defaults = ResolvedRuleOptions::default();
    let rule_options = ResolvedRuleOptions {
        max_line_length: settings
            .linter
            .max_line_length
            .unwrap_or(defaults.max_line_length),
        indent_width: settings.linter.indent_width.unwrap_or(defaults.indent_width),
    };

    Ok(Config {
        paths,
        rules_to_apply: rules,
        rule_options,
        apply_fixes: args.fix,
        apply_unsafe_fixes: args.unsafe_fixes,
        filetype_override: args.filetype,
    })
}

/// Parse a comma-separated list of rule names passed on the CLI.
fn parse_rule_names(names: &str) -> Result<Vec<Rule>> {
    names
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(resolve_rule_name)
        .collect()
}

fn parse_rule_list(names: &[String]) -> Result<Vec<Rule>> {
    names.iter().map(|s| resolve_rule_name(s)).collect()
}

fn resolve_rule_name(name: &str) -> Result<Rule> {
    match Rule::from_name(name) {
        Some(rule) => Ok(rule),
        None => {
            let known = Rule::all()
                .iter()
                .map(|r| r.name())
                .collect::<Vec<_>>()
                .join(", ");
            bail!("Unknown rule name: `{name}`. Known rules are: {known}.")
        }
    }
}
