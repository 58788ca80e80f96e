use std::io::Write;

use clap::ValueEnum;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

use crate::diagnostic::Diagnostic;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Print diagnostics in a concise format, one per line
    #[default]
    Concise,
    /// Print diagnostics as JSON
    Json,
    /// Print diagnostics as GitHub workflow commands
    Github,
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Concise => write!(f, "concise"),
            Self::Json => write!(f, "json"),
            Self::Github => write!(f, "github"),
        }
    }
}

pub trait Emitter {
    fn emit<W: Write>(&self, writer: &mut W, diagnostics: &[&Diagnostic]) -> anyhow::Result<()>;
}

pub struct ConciseEmitter;

impl Emitter for ConciseEmitter {
    fn emit<W: Write>(&self, writer: &mut W, diagnostics: &[&Diagnostic]) -> anyhow::Result<()> {
        for diagnostic in diagnostics {
            let (row, col) = match diagnostic.location {
                Some(loc) => (loc.row, loc.column),
                None => {
                    unreachable!("Row/col locations must have been computed before emitting.")
                }
            };
            let mut message = diagnostic.message.body.clone();
            if let Some(suggestion) = &diagnostic.message.suggestion {
                message.push(' ');
                message.push_str(suggestion);
            }
            writeln!(
                writer,
                "{} [{}:{}] {} {}",
                diagnostic.filename.display().to_string().white(),
                row,
                col,
                diagnostic.message.name.red(),
                message
            )?;
        }
        Ok(())
    }
}

pub struct JsonEmitter;

impl Emitter for JsonEmitter {
    fn emit<W: Write>(&self, writer: &mut W, diagnostics: &[&Diagnostic]) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, diagnostics)?;
        writeln!(writer)?;
        Ok(())
    }
}

pub struct GithubEmitter;

impl Emitter for GithubEmitter {
    fn emit<W: Write>(&self, writer: &mut W, diagnostics: &[&Diagnostic]) -> anyhow::Result<()> {
        for diagnostic in diagnostics {
            let (row, col) = diagnostic
                .location
                .map(|loc| (loc.row, loc.column))
                .unwrap_or((1, 1));
            writeln!(
                writer,
                "::warning file={},line={},col={}::{}: {}",
                diagnostic.filename.display(),
                row,
                col,
                diagnostic.message.name,
                diagnostic.message.body
            )?;
        }
        Ok(())
    }
}

/// Print the "Found N errors." block, with hints about available fixes.
pub fn print_summary(diagnostics: &[&Diagnostic], has_errors: bool) {
    let total_diagnostics = diagnostics.len();
    let n_diagnostic_with_fixes = diagnostics.iter().filter(|d| d.has_safe_fix()).count();
    let n_diagnostic_with_unsafe_fixes = diagnostics.iter().filter(|d| d.has_unsafe_fix()).count();

    if total_diagnostics == 0 {
        if !has_errors {
            println!("All checks passed!");
        }
        return;
    }

    if total_diagnostics > 1 {
        println!("\nFound {total_diagnostics} errors.");
    } else {
        println!("\nFound 1 error.");
    }

    if n_diagnostic_with_fixes > 0 {
        let msg = if n_diagnostic_with_unsafe_fixes == 0 {
            format!("{n_diagnostic_with_fixes} fixable with the `--fix` option.")
        } else {
            let unsafe_label = if n_diagnostic_with_unsafe_fixes == 1 {
                "1 hidden fix".to_string()
            } else {
                format!("{n_diagnostic_with_unsafe_fixes} hidden fixes")
            };
            format!(
                "{n_diagnostic_with_fixes} fixable with the `--fix` option ({unsafe_label} can be enabled with the `--unsafe-fixes` option)."
            )
        };
        println!("{msg}");
    } else if n_diagnostic_with_unsafe_fixes > 0 {
        let label = if n_diagnostic_with_unsafe_fixes == 1 {
            "1 fix is".to_string()
        } else {
            format!("{n_diagnostic_with_unsafe_fixes} fixes are")
        };
        println!("{label} available with the `--fix --unsafe-fixes` option.");
    }
}

pub fn print_warnings(warnings: &[String]) {
    for warning in warnings {
        println!("{}: {}", "Warning".yellow().bold(), warning);
    }
}

pub fn print_notes(notes: &[String]) {
    if notes.is_empty() {
        return;
    }
    println!();
    for note in notes {
        println!("{note}");
    }
}
