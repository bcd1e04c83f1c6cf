use anyhow::Result;
use clap::Args;

use swhid_identifier::Identifier;

use super::emit;
use crate::Cli;

#[derive(Args)]
pub struct ParseArgs {
    /// The identifier to validate
    #[arg(value_name = "swhid")]
    swhid: String,
}

pub fn run(args: &ParseArgs, cli: &Cli) -> Result<i32> {
    let id = Identifier::parse(&args.swhid)?;
    emit(&id, cli)
}
