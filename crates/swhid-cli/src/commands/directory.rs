use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use super::emit;
use crate::Cli;

#[derive(Args)]
pub struct DirectoryArgs {
    /// Root of the directory tree to hash
    #[arg(value_name = "path")]
    path: PathBuf,
}

pub fn run(args: &DirectoryArgs, cli: &Cli) -> Result<i32> {
    let id = swhid_dir::identifier_from_path(&args.path)?;
    emit(&id, cli)
}
