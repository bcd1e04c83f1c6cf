//! Repository reader: extracts revision, release and snapshot metadata from
//! a git repository via libgit2 and turns it into identifiers.
//!
//! The reader hands the encoders fully-materialized values; extra headers
//! (gpgsig and friends) are recovered from the raw object so signed commits
//! and tags keep their original identity.

use bstr::BString;
use git2::{Oid, Repository};

use swhid_identifier::Identifier;
use swhid_object::{
    Attribution, Branch, BranchTarget, ObjectType, Release, ReleaseTarget, Revision, Snapshot,
};

/// Errors produced while reading a repository.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error(transparent)]
    Git(#[from] git2::Error),

    #[error("'{0}' is a lightweight tag; only annotated tags carry release metadata")]
    LightweightTag(String),

    #[error(transparent)]
    Encode(#[from] swhid_object::ObjectError),
}

/// Header keys that the typed commit fields already cover.
const COMMIT_HEADERS: [&str; 4] = ["tree", "parent", "author", "committer"];

/// Header keys that the typed tag fields already cover.
const TAG_HEADERS: [&str; 4] = ["object", "type", "tag", "tagger"];

/// The `rev` identifier of a commit, resolved from a refspec
/// (default `HEAD`). The refspec is peeled, so tags and branch names work.
pub fn revision_identifier(repo: &Repository, refspec: Option<&str>) -> Result<Identifier, RepoError> {
    let object = repo.revparse_single(refspec.unwrap_or("HEAD"))?;
    let commit = object.peel_to_commit()?;
    Ok(Identifier::from_revision(&revision_from_commit(repo, &commit)?))
}

/// Build a [`Revision`] from a resolved commit.
pub fn revision_from_commit(
    repo: &Repository,
    commit: &git2::Commit<'_>,
) -> Result<Revision, RepoError> {
    let raw = raw_object(repo, commit.id())?;
    Ok(Revision {
        directory: commit.tree_id().to_string(),
        parents: commit.parent_ids().map(|id| id.to_string()).collect(),
        author: attribution(&commit.author()),
        committer: attribution(&commit.committer()),
        message: BString::from(commit.message_raw_bytes()),
        extra_headers: parse_extra_headers(&raw, &COMMIT_HEADERS),
    })
}

/// The `rel` identifier of an annotated tag. Lightweight tags have no tag
/// object and are rejected.
pub fn release_identifier(repo: &Repository, tag_name: &str) -> Result<Identifier, RepoError> {
    let reference = repo.find_reference(&format!("refs/tags/{tag_name}"))?;
    let oid = reference
        .target()
        .ok_or_else(|| RepoError::LightweightTag(tag_name.to_string()))?;
    let tag = repo
        .find_tag(oid)
        .map_err(|_| RepoError::LightweightTag(tag_name.to_string()))?;

    let raw = raw_object(repo, tag.id())?;
    let release = Release {
        name: BString::from(tag.name_bytes()),
        target: ReleaseTarget {
            hash: tag.target_id().to_string(),
            kind: object_kind(tag.target_type()),
        },
        tagger: tag.tagger().as_ref().map(attribution),
        message: tag.message_bytes().map(BString::from).unwrap_or_default(),
        extra_headers: parse_extra_headers(&raw, &TAG_HEADERS),
    };
    Ok(Identifier::from_release(&release))
}

/// The `snp` identifier of the repository's full reference set.
///
/// Direct references resolve to their target's object kind, symbolic ones
/// become aliases, and targets that no longer exist in the object database
/// become dangling. `HEAD` is included as an alias when it is symbolic.
pub fn snapshot_identifier(repo: &Repository) -> Result<Identifier, RepoError> {
    Ok(Identifier::from_snapshot(&snapshot_from_repo(repo)?)?)
}

/// Build a [`Snapshot`] from every reference in the repository.
pub fn snapshot_from_repo(repo: &Repository) -> Result<Snapshot, RepoError> {
    let mut branches = Vec::new();

    // The reference iterator only covers refs/; HEAD is picked up here.
    if let Ok(head) = repo.find_reference("HEAD") {
        if let Some(target) = head.symbolic_target_bytes() {
            branches.push(Branch::new(
                "HEAD",
                BranchTarget::Alias(BString::from(target)),
            ));
        }
    }

    for reference in repo.references()? {
        let reference = reference?;
        let name = BString::from(reference.name_bytes());
        let target = if let Some(sym) = reference.symbolic_target_bytes() {
            BranchTarget::Alias(BString::from(sym))
        } else if let Some(oid) = reference.target() {
            match repo.find_object(oid, None) {
                Ok(object) => BranchTarget::Object {
                    kind: object_kind(object.kind()),
                    target: oid.to_string(),
                },
                Err(_) => BranchTarget::Dangling,
            }
        } else {
            BranchTarget::Dangling
        };
        branches.push(Branch::new(name, target));
    }

    Ok(Snapshot::new(branches))
}

fn object_kind(kind: Option<git2::ObjectType>) -> ObjectType {
    match kind {
        Some(git2::ObjectType::Blob) => ObjectType::Content,
        Some(git2::ObjectType::Tree) => ObjectType::Directory,
        Some(git2::ObjectType::Tag) => ObjectType::Release,
        _ => ObjectType::Revision,
    }
}

fn attribution(sig: &git2::Signature<'_>) -> Attribution {
    let mut identity = BString::from(sig.name_bytes());
    identity.extend_from_slice(b" <");
    identity.extend_from_slice(sig.email_bytes());
    identity.push(b'>');
    Attribution::new(identity, sig.when().seconds(), format_offset(sig.when().offset_minutes()))
}

/// Render a timezone offset in minutes as `+HHMM`/`-HHMM`.
fn format_offset(minutes: i32) -> String {
    let (sign, m) = if minutes < 0 { ('-', -minutes) } else { ('+', minutes) };
    format!("{}{:02}{:02}", sign, m / 60, m % 60)
}

/// The raw, unframed bytes of an object from the object database.
fn raw_object(repo: &Repository, oid: Oid) -> Result<Vec<u8>, RepoError> {
    Ok(repo.odb()?.read(oid)?.data().to_vec())
}

/// Collect the non-standard header lines of a raw commit or tag.
///
/// Headers end at the first blank line; continuation lines (leading space)
/// rejoin the previous header's value with a newline, undoing the escaping
/// the encoders apply. Lines without a space separator are ignored.
fn parse_extra_headers(raw: &[u8], standard: &[&str]) -> Vec<(BString, BString)> {
    let header_end = raw
        .windows(2)
        .position(|w| w == b"\n\n")
        .unwrap_or(raw.len());

    let mut out: Vec<(BString, BString)> = Vec::new();
    for line in raw[..header_end].split(|&b| b == b'\n') {
        if line.is_empty() {
            continue;
        }
        if line[0] == b' ' {
            if let Some((_, value)) = out.last_mut() {
                value.push(b'\n');
                value.extend_from_slice(&line[1..]);
            }
            continue;
        }
        let Some(sep) = line.iter().position(|&b| b == b' ') else {
            continue;
        };
        let key = &line[..sep];
        if standard.iter().any(|s| s.as_bytes() == key) {
            continue;
        }
        out.push((BString::from(key), BString::from(&line[sep + 1..])));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_formatting() {
        assert_eq!(format_offset(0), "+0000");
        assert_eq!(format_offset(60), "+0100");
        assert_eq!(format_offset(330), "+0530");
        assert_eq!(format_offset(-480), "-0800");
        assert_eq!(format_offset(-30), "-0030");
    }

    #[test]
    fn extra_headers_skip_standard_keys() {
        let raw = b"tree 4b825dc642cb6eb9a060e54bf8d69288fbee4904\n\
            author A <a@b> 0 +0000\n\
            committer A <a@b> 0 +0000\n\
            custom value here\n\
            \nmessage body\n";
        let headers = parse_extra_headers(raw, &COMMIT_HEADERS);
        assert_eq!(
            headers,
            vec![(BString::from("custom"), BString::from("value here"))]
        );
    }

    #[test]
    fn extra_headers_rejoin_continuation_lines() {
        let raw = b"object 4b825dc642cb6eb9a060e54bf8d69288fbee4904\n\
            type commit\n\
            tag v1\n\
            gpgsig -----BEGIN-----\n abc\n -----END-----\n\
            \nmessage\n";
        let headers = parse_extra_headers(raw, &TAG_HEADERS);
        assert_eq!(
            headers,
            vec![(
                BString::from("gpgsig"),
                BString::from("-----BEGIN-----\nabc\n-----END-----"),
            )]
        );
    }

    #[test]
    fn extra_headers_ignore_message_section() {
        let raw = b"tree 4b825dc642cb6eb9a060e54bf8d69288fbee4904\n\
            \nnot-a-header looks like one\n";
        assert!(parse_extra_headers(raw, &COMMIT_HEADERS).is_empty());
    }

    #[test]
    fn extra_headers_skip_lines_without_separator() {
        let raw = b"tree 4b825dc642cb6eb9a060e54bf8d69288fbee4904\nnoseparator\n\n";
        assert!(parse_extra_headers(raw, &COMMIT_HEADERS).is_empty());
    }
}
