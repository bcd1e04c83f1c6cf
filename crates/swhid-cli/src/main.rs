mod commands;

use std::process;

use anyhow::Result;
use clap::{error::ErrorKind, Parser, ValueEnum};

use commands::Commands;

#[derive(Parser)]
#[command(
    name = "swhid",
    about = "Compute and parse software artifact identifiers",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Attach a qualifier to the identifier (repeatable)
    #[arg(short = 'q', long = "qualifier", global = true, value_name = "KEY=VALUE")]
    qualifiers: Vec<String>,

    /// Output format
    #[arg(short = 'f', long = "format", global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => process::exit(0),
                _ => process::exit(2),
            }
        }
    };

    match run(cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("fatal: {e}");
            process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    commands::run(cli)
}
