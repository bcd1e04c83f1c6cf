use bstr::BString;
use swhid_hash::{Hasher, ObjectId};

use crate::{decode_target, ObjectError, ObjectType};

/// What a snapshot branch points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchTarget {
    /// A 40-hex digest of an object of the given kind.
    Object { kind: ObjectType, target: String },
    /// Another branch, by name.
    Alias(BString),
    /// A reference that resolves to nothing.
    Dangling,
}

impl BranchTarget {
    /// The kind label written before the branch name.
    pub fn kind_label(&self) -> &'static str {
        match self {
            Self::Object { kind, .. } => kind.branch_label(),
            Self::Alias(_) => "alias",
            Self::Dangling => "dangling",
        }
    }

    /// The target identifier bytes: raw digest for objects, raw name bytes
    /// for aliases, empty for dangling.
    fn identifier_bytes(&self, branch: &BString) -> Result<Vec<u8>, ObjectError> {
        match self {
            Self::Object { target, .. } => {
                Ok(decode_target(branch, target)?.as_bytes().to_vec())
            }
            Self::Alias(name) => Ok(name.to_vec()),
            Self::Dangling => Ok(Vec::new()),
        }
    }
}

/// One named reference in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub name: BString,
    pub target: BranchTarget,
}

impl Branch {
    pub fn new(name: impl Into<BString>, target: BranchTarget) -> Self {
        Self {
            name: name.into(),
            target,
        }
    }
}

/// A snapshot: the full set of references of a repository at one point.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub branches: Vec<Branch>,
}

impl Snapshot {
    pub fn new(branches: Vec<Branch>) -> Self {
        Self { branches }
    }

    /// Serialize to the canonical snapshot layout.
    ///
    /// Branches are sorted by name (byte-wise, no trailing-slash rule), then
    /// written as `<kind-label> <name>\0<len>:<target-bytes>` with no
    /// separator. The result is identical for any permutation of the same
    /// branch set.
    pub fn serialize(&self) -> Result<Vec<u8>, ObjectError> {
        let mut sorted: Vec<&Branch> = self.branches.iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));

        let mut out = Vec::new();
        for branch in sorted {
            let target = branch.target.identifier_bytes(&branch.name)?;
            out.extend_from_slice(branch.target.kind_label().as_bytes());
            out.push(b' ');
            out.extend_from_slice(&branch.name);
            out.push(0);
            out.extend_from_slice(target.len().to_string().as_bytes());
            out.push(b':');
            out.extend_from_slice(&target);
        }
        Ok(out)
    }

    /// Digest under the `snapshot` kind label.
    pub fn compute_id(&self) -> Result<ObjectId, ObjectError> {
        Ok(Hasher::hash_object("snapshot", &self.serialize()?))
    }
}
