use bstr::BString;
use swhid_hash::{Hasher, ObjectId};

use crate::{decode_target, ObjectError};

/// The kind of a directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    File,
    Executable,
    Directory,
    Symlink,
    /// Reference to an external repository (a git submodule).
    Submodule,
}

impl EntryKind {
    /// The default permission string for this kind.
    pub fn default_perms(&self) -> &'static str {
        match self {
            Self::File => "100644",
            Self::Executable => "100755",
            Self::Directory => "40000",
            Self::Symlink => "120000",
            Self::Submodule => "160000",
        }
    }
}

/// One child of a directory.
///
/// `target` is the 40-hex digest of the child object; resolving it is the
/// caller's business, the encoder only decodes it to raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: BString,
    pub kind: EntryKind,
    pub target: String,
    /// Explicit permission override; the kind's default applies when unset.
    pub perms: Option<String>,
}

impl DirectoryEntry {
    pub fn new(name: impl Into<BString>, kind: EntryKind, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            target: target.into(),
            perms: None,
        }
    }

    /// The effective permission string.
    pub fn perms(&self) -> &str {
        self.perms.as_deref().unwrap_or_else(|| self.kind.default_perms())
    }

    /// The sort key: the name, with a trailing `/` for directories only.
    ///
    /// This makes a directory `foo` and a file `foo` sort differently even
    /// though one name is a prefix of the other.
    pub fn sort_key(&self) -> BString {
        let mut key = self.name.clone();
        if self.kind == EntryKind::Directory {
            key.push(b'/');
        }
        key
    }
}

/// A directory: an unordered collection of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    pub entries: Vec<DirectoryEntry>,
}

impl Directory {
    pub fn new(entries: Vec<DirectoryEntry>) -> Self {
        Self { entries }
    }

    /// Serialize to the canonical tree layout.
    ///
    /// Entries are sorted by [`DirectoryEntry::sort_key`] (byte-wise), then
    /// written as `<perms> <name>\0<20 raw target bytes>` with no separator.
    /// The result is identical for any permutation of the same entry set.
    pub fn serialize(&self) -> Result<Vec<u8>, ObjectError> {
        let mut sorted: Vec<&DirectoryEntry> = self.entries.iter().collect();
        sorted.sort_by_cached_key(|entry| entry.sort_key());

        let mut out = Vec::new();
        for entry in sorted {
            let target = decode_target(&entry.name, &entry.target)?;
            out.extend_from_slice(entry.perms().as_bytes());
            out.push(b' ');
            out.extend_from_slice(&entry.name);
            out.push(0);
            out.extend_from_slice(target.as_bytes());
        }
        Ok(out)
    }

    /// Digest under the `tree` kind label.
    pub fn compute_id(&self) -> Result<ObjectId, ObjectError> {
        Ok(Hasher::hash_object("tree", &self.serialize()?))
    }
}
