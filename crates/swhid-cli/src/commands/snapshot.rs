use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use git2::Repository;

use super::emit;
use crate::Cli;

#[derive(Args)]
pub struct SnapshotArgs {
    /// Path to the repository
    #[arg(value_name = "repo")]
    repo: PathBuf,
}

pub fn run(args: &SnapshotArgs, cli: &Cli) -> Result<i32> {
    let repo = Repository::discover(&args.repo)?;
    let id = swhid_git::snapshot_identifier(&repo)?;
    emit(&id, cli)
}
