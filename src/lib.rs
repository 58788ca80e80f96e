use crate::args::Args;
use crate::logging::LogLevel;
use crate::status::ExitStatus;

pub mod args;
pub mod check;
pub mod checker;
pub mod commands;
pub mod config;
pub mod diagnostic;
pub mod directive;
pub mod discovery;
pub mod error;
pub mod filetype;
pub mod fix;
pub mod fs;
pub mod lints;
pub mod logging;
pub mod output_format;
pub mod rule_set;
pub mod settings;
pub mod statistics;
pub mod status;
pub mod toml;
pub mod utils;


pub use output_format::{ConciseEmitter, GithubEmitter, JsonEmitter, OutputFormat};

pub fn run(args: Args) -> anyhow::Result<ExitStatus> {
    let no_color = std::env::var("NO_COLOR").is_ok();
    if no_color {
        colored::control::set_override(false);
    }

    let level = if args.verbose {
        LogLevel::Debug
    } else if args.quiet {
        LogLevel::Error
    } else {
        LogLevel::default()
    };
    logging::init_logging(level, no_color);

    commands::check::check(&args)
}
