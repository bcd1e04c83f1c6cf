use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use git2::Repository;

use super::emit;
use crate::Cli;

#[derive(Args)]
pub struct ReleaseArgs {
    /// Path to the repository
    #[arg(value_name = "repo")]
    repo: PathBuf,

    /// Name of the annotated tag
    #[arg(value_name = "tag")]
    tag: String,
}

pub fn run(args: &ReleaseArgs, cli: &Cli) -> Result<i32> {
    let repo = Repository::discover(&args.repo)?;
    let id = swhid_git::release_identifier(&repo, &args.tag)?;
    emit(&id, cli)
}
