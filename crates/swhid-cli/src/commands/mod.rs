pub mod content;
pub mod directory;
pub mod parse;
pub mod release;
pub mod revision;
pub mod snapshot;

use std::collections::BTreeMap;

use anyhow::{bail, Result};
use clap::Subcommand;

use swhid_identifier::Identifier;

use crate::{Cli, OutputFormat};

#[derive(Subcommand)]
pub enum Commands {
    /// Validate an identifier and print its canonical form
    Parse(parse::ParseArgs),
    /// Compute the cnt identifier of file content
    Content(content::ContentArgs),
    /// Compute the dir identifier of a directory tree
    Directory(directory::DirectoryArgs),
    /// Compute the rev identifier of a commit
    Revision(revision::RevisionArgs),
    /// Compute the rel identifier of an annotated tag
    Release(release::ReleaseArgs),
    /// Compute the snp identifier of a repository's references
    Snapshot(snapshot::SnapshotArgs),
}

pub fn run(cli: Cli) -> Result<i32> {
    match &cli.command {
        Commands::Parse(args) => parse::run(args, &cli),
        Commands::Content(args) => content::run(args, &cli),
        Commands::Directory(args) => directory::run(args, &cli),
        Commands::Revision(args) => revision::run(args, &cli),
        Commands::Release(args) => release::run(args, &cli),
        Commands::Snapshot(args) => snapshot::run(args, &cli),
    }
}

/// Parse the repeated `-q KEY=VALUE` flags.
fn qualifier_map(cli: &Cli) -> Result<BTreeMap<String, String>> {
    let mut map = BTreeMap::new();
    for raw in &cli.qualifiers {
        let Some((key, value)) = raw.split_once('=') else {
            bail!("invalid qualifier '{raw}': expected KEY=VALUE");
        };
        map.insert(key.to_string(), value.to_string());
    }
    Ok(map)
}

/// Print an identifier in the selected output format, with any `-q`
/// qualifiers added on top of those the identifier already carries.
pub fn emit(id: &Identifier, cli: &Cli) -> Result<i32> {
    let mut id = id.clone();
    for (key, value) in qualifier_map(cli)? {
        id = id.with_qualifier(key, value);
    }

    match cli.format {
        OutputFormat::Text => println!("{id}"),
        OutputFormat::Json => {
            let value = serde_json::json!({
                "swhid": id.to_string(),
                "object_type": id.object_type().code(),
                "hash": id.hash(),
                "qualifiers": id.qualifiers(),
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use crate::Cli;

    use super::qualifier_map;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn qualifier_flags_collect_into_map() {
        let cli = cli(&[
            "swhid",
            "content",
            "-q",
            "origin=https://example.com",
            "-q",
            "path=/src",
        ]);
        let map = qualifier_map(&cli).unwrap();
        assert_eq!(map.get("origin").map(String::as_str), Some("https://example.com"));
        assert_eq!(map.get("path").map(String::as_str), Some("/src"));
    }

    #[test]
    fn qualifier_without_equals_is_rejected() {
        let cli = cli(&["swhid", "content", "-q", "origin"]);
        assert!(qualifier_map(&cli).is_err());
    }
}
