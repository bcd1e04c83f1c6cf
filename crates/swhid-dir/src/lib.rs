//! Filesystem walker: builds [`Directory`] values from a disk tree.
//!
//! Regular files hash their content, symlinks hash the raw link-target
//! bytes, subdirectories recurse. `.git` entries are skipped so a checkout
//! hashes the same as an export of it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use swhid_identifier::Identifier;
use swhid_object::{Content, Directory, DirectoryEntry, EntryKind, ObjectError};

/// Errors produced while walking a directory tree.
#[derive(Debug, thiserror::Error)]
pub enum WalkError {
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Encode(#[from] ObjectError),
}

fn io_err(path: &Path, source: io::Error) -> WalkError {
    WalkError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Build a [`Directory`] from one level of the tree, recursing into
/// subdirectories.
pub fn directory_from_path(path: impl AsRef<Path>) -> Result<Directory, WalkError> {
    let path = path.as_ref();
    let meta = fs::metadata(path).map_err(|e| io_err(path, e))?;
    if !meta.is_dir() {
        return Err(WalkError::NotADirectory(path.to_path_buf()));
    }
    walk(path)
}

/// The `dir` identifier of a directory tree on disk.
pub fn identifier_from_path(path: impl AsRef<Path>) -> Result<Identifier, WalkError> {
    Ok(Identifier::from_directory(&directory_from_path(path)?)?)
}

fn walk(dir: &Path) -> Result<Directory, WalkError> {
    let mut entries = Vec::new();

    for dirent in fs::read_dir(dir).map_err(|e| io_err(dir, e))? {
        let dirent = dirent.map_err(|e| io_err(dir, e))?;
        let name = dirent.file_name();
        if name == ".git" {
            continue;
        }

        let full = dir.join(&name);
        let meta = fs::symlink_metadata(&full).map_err(|e| io_err(&full, e))?;
        let name_bytes = name.as_encoded_bytes().to_vec();

        let entry = if meta.file_type().is_symlink() {
            let target = fs::read_link(&full).map_err(|e| io_err(&full, e))?;
            let content = Content::new(target.as_os_str().as_encoded_bytes());
            DirectoryEntry::new(
                name_bytes,
                EntryKind::Symlink,
                content.compute_id().to_hex(),
            )
        } else if meta.is_dir() {
            let sub = walk(&full)?;
            DirectoryEntry::new(
                name_bytes,
                EntryKind::Directory,
                sub.compute_id()?.to_hex(),
            )
        } else {
            let data = fs::read(&full).map_err(|e| io_err(&full, e))?;
            let kind = if is_executable(&meta) {
                EntryKind::Executable
            } else {
                EntryKind::File
            };
            DirectoryEntry::new(name_bytes, kind, Content::new(data).compute_id().to_hex())
        };
        entries.push(entry);
    }

    Ok(Directory::new(entries))
}

#[cfg(unix)]
fn is_executable(meta: &fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(_meta: &fs::Metadata) -> bool {
    false
}
