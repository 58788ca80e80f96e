use clap::Parser;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};

use crate::filetype::FileType;
use crate::output_format::OutputFormat;

// Configures Clap v3-style help menu colors
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Clone, Debug, Parser)]
#[command(
    author,
    name = "misconfig",
    about = "misconfig: a linter for YAML and JSON configuration files"
)]
#[command(version)]
#[command(styles = STYLES)]
#[command(arg_required_else_help(true))]
pub struct Args {
    #[arg(
        required = true,
        help = "List of files or directories to check or fix, for example `misconfig .`."
    )]
    pub files: Vec<String>,
    #[arg(
        short = 't',
        long,
        value_enum,
        help = "Treat every file as this type instead of inferring it from the extension."
    )]
    pub filetype: Option<FileType>,
    #[arg(
        short,
        long,
        default_value = "false",
        help = "Automatically fix issues detected by the linter."
    )]
    pub fix: bool,
    #[arg(
        short,
        long,
        default_value = "false",
        help = "Include fixes that may not retain the original intent of the file."
    )]
    pub unsafe_fixes: bool,
    #[arg(
        short,
        long,
        default_value = "",
        help = "Names of rules to include, separated by a comma (no spaces)."
    )]
    pub select: String,
    #[arg(
        short,
        long,
        default_value = "",
        help = "Names of rules to exclude, separated by a comma (no spaces)."
    )]
    pub ignore: String,
    #[arg(
        long,
        value_enum,
        default_value_t = OutputFormat::default(),
        help = "Output serialization format for violations."
    )]
    pub output_format: OutputFormat,
    #[arg(
        long,
        default_value = "false",
        help = "Show counts for every rule with at least one violation."
    )]
    pub statistics: bool,
    #[arg(
        short,
        long,
        default_value = "false",
        help = "Show the time taken by the check."
    )]
    pub with_timing: bool,
    #[arg(
        short,
        long,
        default_value = "false",
        conflicts_with = "quiet",
        help = "Enable debug logging."
    )]
    pub verbose: bool,
    #[arg(
        short,
        long,
        default_value = "false",
        help = "Only report violations and errors, without summaries or warnings."
    )]
    pub quiet: bool,
}
