use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use swhid_identifier::Identifier;
use swhid_object::Content;

use super::emit;
use crate::Cli;

#[derive(Args)]
pub struct ContentArgs {
    /// File to hash; reads stdin when omitted
    #[arg(value_name = "file")]
    file: Option<PathBuf>,
}

pub fn run(args: &ContentArgs, cli: &Cli) -> Result<i32> {
    let data = match &args.file {
        Some(path) => std::fs::read(path)?,
        None => {
            let mut data = Vec::new();
            io::stdin().read_to_end(&mut data)?;
            data
        }
    };
    emit(&Identifier::from_content(&Content::new(data)), cli)
}
