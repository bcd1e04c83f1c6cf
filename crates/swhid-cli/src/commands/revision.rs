use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use git2::Repository;

use super::emit;
use crate::Cli;

#[derive(Args)]
pub struct RevisionArgs {
    /// Path to the repository
    #[arg(value_name = "repo")]
    repo: PathBuf,

    /// Refspec to resolve (default HEAD)
    #[arg(value_name = "ref")]
    refspec: Option<String>,
}

pub fn run(args: &RevisionArgs, cli: &Cli) -> Result<i32> {
    let repo = Repository::discover(&args.repo)?;
    let id = swhid_git::revision_identifier(&repo, args.refspec.as_deref())?;
    emit(&id, cli)
}
