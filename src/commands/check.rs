use anyhow::Result;
use colored::Colorize;
use std::env;
use std::time::Instant;

use crate::args::Args;
use crate::check;
use crate::config::{ArgsConfig, build_config};
use crate::diagnostic::Diagnostic;
use crate::discovery::discover_config_file_paths;
use crate::error::ParseError;
use crate::output_format::{
    ConciseEmitter, Emitter, GithubEmitter, JsonEmitter, OutputFormat, print_notes, print_summary,
    print_warnings,
};
use crate::settings::Settings;
use crate::statistics::print_statistics;
use crate::status::ExitStatus;
use crate::toml::parse_misconfig_toml;

pub fn check(args: &Args) -> Result<ExitStatus> {
    let start = if args.with_timing {
        Some(Instant::now())
    } else {
        None
    };

    let paths = discover_config_file_paths(&args.files)?;

    if paths.is_empty() {
        if !args.quiet {
            println!(
                "{}: {}",
                "Warning".yellow().bold(),
                "No configuration files found under the given path(s)."
                    .white()
                    .bold()
            );
        }
        return Ok(ExitStatus::Success);
    }

    // Options come from the misconfig.toml of the current directory, if any.
    let settings = parse_misconfig_toml(&env::current_dir()?)?
        .map(|options| options.into_settings())
        .unwrap_or_else(Settings::default);

    let args_config = ArgsConfig {
        files: paths.clone(),
        fix: args.fix,
        unsafe_fixes: args.unsafe_fixes,
        select: args.select.clone(),
        ignore: args.ignore.clone(),
        filetype: args.filetype,
    };

    let config = build_config(&args_config, &settings, paths)?;
    let file_results = check::check(config);

    let mut all_errors = Vec::new();
    let mut all_diagnostics = Vec::new();

    for (path, result) in file_results {
        match result {
            Ok(diagnostics) => {
                if !diagnostics.is_empty() {
                    all_diagnostics.push((path, diagnostics));
                }
            }
            Err(e) => {
                all_errors.push((path, e));
            }
        }
    }

    // Flatten all diagnostics into a single vector and sort globally
    let mut all_diagnostics_flat: Vec<&Diagnostic> = all_diagnostics
        .iter()
        .flat_map(|(_path, diagnostics)| diagnostics.iter())
        .collect();

    all_diagnostics_flat.sort();

    // Errors go to stderr even in quiet mode, so automation never loses them.
    for (_path, error) in &all_errors {
        if let Some(parse_error) = error.downcast_ref::<ParseError>() {
            eprintln!("{}: {parse_error}", "Error".red().bold());
        } else {
            eprintln!("{}: {error:#}", "Error".red().bold());
        }
    }

    if args.statistics {
        return print_statistics(&all_diagnostics_flat, !all_errors.is_empty());
    }

    let mut stdout = std::io::stdout();

    match args.output_format {
        OutputFormat::Concise => {
            ConciseEmitter.emit(&mut stdout, &all_diagnostics_flat)?;
        }
        OutputFormat::Json => {
            JsonEmitter.emit(&mut stdout, &all_diagnostics_flat)?;
        }
        OutputFormat::Github => {
            GithubEmitter.emit(&mut stdout, &all_diagnostics_flat)?;
        }
    }

    // Summaries, warnings and notes are for humans. Skip them for structured
    // formats and in quiet mode.
    let is_human_format = matches!(args.output_format, OutputFormat::Concise);

    if is_human_format && !args.quiet {
        print_summary(&all_diagnostics_flat, !all_errors.is_empty());

        let mut warnings: Vec<String> = Vec::new();
        if args.fix || args.unsafe_fixes {
            let unfixable = all_diagnostics_flat
                .iter()
                .filter(|d| !d.has_safe_fix() && !d.has_unsafe_fix())
                .count();
            if unfixable > 0 {
                warnings.push(format!(
                    "{unfixable} violation(s) have no automatic fix and must be resolved manually."
                ));
            }
        }
        print_warnings(&warnings);

        let mut notes: Vec<String> = Vec::new();
        if let Some(start) = start {
            let duration = start.elapsed();
            notes.push(format!("Checked files in: {duration:?}"));
        }
        print_notes(&notes);
    }

    if !all_errors.is_empty() {
        return Ok(ExitStatus::Error);
    }

    if all_diagnostics.is_empty() {
        return Ok(ExitStatus::Success);
    }

    Ok(ExitStatus::Failure)
}
