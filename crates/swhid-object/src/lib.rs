//! SWHID object model: the five object kinds and their canonical
//! serialization.
//!
//! Each kind (content, directory, revision, release, snapshot) has a typed
//! metadata value with a `serialize` method producing the exact byte layout
//! that, framed with `"<kind> <length>\0"` and SHA-1 digested, yields the
//! object's identity. The layouts are bit-for-bit compatible with git's
//! blob/tree/commit/tag formats (snapshots have their own layout).

mod attribution;
mod content;
mod directory;
mod release;
mod revision;
mod snapshot;

pub use attribution::Attribution;
pub use content::Content;
pub use directory::{Directory, DirectoryEntry, EntryKind};
pub use release::{Release, ReleaseTarget};
pub use revision::Revision;
pub use snapshot::{Branch, BranchTarget, Snapshot};

use bstr::BString;

/// Errors produced by object operations.
#[derive(Debug, thiserror::Error)]
pub enum ObjectError {
    #[error("invalid object type: {0}")]
    InvalidType(String),

    #[error("invalid target for '{name}': '{target}' is not a 40-character hex digest")]
    InvalidTarget { name: BString, target: String },
}

/// The five kinds of addressable objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    Content,
    Directory,
    Revision,
    Release,
    Snapshot,
}

impl ObjectType {
    /// The three-letter code used in identifier strings.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Content => "cnt",
            Self::Directory => "dir",
            Self::Revision => "rev",
            Self::Release => "rel",
            Self::Snapshot => "snp",
        }
    }

    /// Parse from the three-letter code.
    pub fn from_code(s: &str) -> Result<Self, ObjectError> {
        match s {
            "cnt" => Ok(Self::Content),
            "dir" => Ok(Self::Directory),
            "rev" => Ok(Self::Revision),
            "rel" => Ok(Self::Release),
            "snp" => Ok(Self::Snapshot),
            _ => Err(ObjectError::InvalidType(s.to_string())),
        }
    }

    /// The git object-type name written on a release's `type` line.
    pub fn git_label(&self) -> &'static str {
        match self {
            Self::Content => "blob",
            Self::Directory => "tree",
            Self::Revision => "commit",
            Self::Release => "tag",
            Self::Snapshot => "snapshot",
        }
    }

    /// The full kind name used as a snapshot branch target label.
    pub fn branch_label(&self) -> &'static str {
        match self {
            Self::Content => "content",
            Self::Directory => "directory",
            Self::Revision => "revision",
            Self::Release => "release",
            Self::Snapshot => "snapshot",
        }
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for ObjectType {
    type Err = ObjectError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

/// Decode a 40-hex target string to raw digest bytes, or fail with
/// [`ObjectError::InvalidTarget`] naming the owning entry or branch.
pub(crate) fn decode_target(
    name: &BString,
    target: &str,
) -> Result<swhid_hash::ObjectId, ObjectError> {
    swhid_hash::ObjectId::from_hex(target).map_err(|_| ObjectError::InvalidTarget {
        name: name.clone(),
        target: target.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_roundtrip() {
        for ty in [
            ObjectType::Content,
            ObjectType::Directory,
            ObjectType::Revision,
            ObjectType::Release,
            ObjectType::Snapshot,
        ] {
            assert_eq!(ObjectType::from_code(ty.code()).unwrap(), ty);
        }
    }

    #[test]
    fn unknown_code_rejected() {
        assert!(ObjectType::from_code("ori").is_err());
        assert!(ObjectType::from_code("").is_err());
        assert!("foo".parse::<ObjectType>().is_err());
    }

    #[test]
    fn git_labels() {
        assert_eq!(ObjectType::Content.git_label(), "blob");
        assert_eq!(ObjectType::Directory.git_label(), "tree");
        assert_eq!(ObjectType::Revision.git_label(), "commit");
        assert_eq!(ObjectType::Release.git_label(), "tag");
        assert_eq!(ObjectType::Snapshot.git_label(), "snapshot");
    }

    #[test]
    fn display_uses_code() {
        assert_eq!(ObjectType::Revision.to_string(), "rev");
    }
}
