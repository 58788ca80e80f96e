use clap::Parser;
use std::process::ExitCode;

use misconfig::args::Args;

fn main() -> ExitCode {
    let args = Args::parse();

    match misconfig::run(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}
