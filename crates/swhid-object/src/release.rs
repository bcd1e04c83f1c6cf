use bstr::BString;
use swhid_hash::{Hasher, ObjectId};

use crate::attribution::{write_escaped, Attribution};
use crate::ObjectType;

/// What a release points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseTarget {
    /// 40-hex digest of the target object.
    pub hash: String,
    pub kind: ObjectType,
}

/// A release: an annotated tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    pub name: BString,
    pub target: ReleaseTarget,
    /// The `tagger` line is omitted entirely when this is `None`.
    pub tagger: Option<Attribution>,
    pub message: BString,
    pub extra_headers: Vec<(BString, BString)>,
}

impl Release {
    /// Serialize to the canonical tag layout.
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::new();

        out.extend_from_slice(b"object ");
        out.extend_from_slice(self.target.hash.as_bytes());
        out.push(b'\n');

        out.extend_from_slice(b"type ");
        out.extend_from_slice(self.target.kind.git_label().as_bytes());
        out.push(b'\n');

        out.extend_from_slice(b"tag ");
        write_escaped(&self.name, &mut out);
        out.push(b'\n');

        if let Some(ref tagger) = self.tagger {
            tagger.write_line("tagger", &mut out);
        }

        for (key, value) in &self.extra_headers {
            out.extend_from_slice(key);
            out.push(b' ');
            write_escaped(value, &mut out);
            out.push(b'\n');
        }

        if !self.message.is_empty() {
            out.push(b'\n');
            out.extend_from_slice(&self.message);
        }

        out
    }

    /// Digest under the `tag` kind label.
    pub fn compute_id(&self) -> ObjectId {
        Hasher::hash_object("tag", &self.serialize())
    }
}
