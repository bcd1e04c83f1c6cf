use bstr::BString;
use swhid_hash::{Hasher, ObjectId};

use crate::attribution::{write_escaped, Attribution};

/// A revision: a commit pointing at a root directory.
///
/// Parent order is significant and preserved as given, never sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revision {
    /// 40-hex digest of the root directory.
    pub directory: String,
    /// 40-hex digests of the parent revisions, in order.
    pub parents: Vec<String>,
    pub author: Attribution,
    pub committer: Attribution,
    /// Free-text message, appended verbatim after a blank line.
    pub message: BString,
    /// Non-standard header lines, in order.
    pub extra_headers: Vec<(BString, BString)>,
}

impl Revision {
    /// Serialize to the canonical commit layout.
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::new();

        out.extend_from_slice(b"tree ");
        out.extend_from_slice(self.directory.as_bytes());
        out.push(b'\n');

        for parent in &self.parents {
            out.extend_from_slice(b"parent ");
            out.extend_from_slice(parent.as_bytes());
            out.push(b'\n');
        }

        self.author.write_line("author", &mut out);
        self.committer.write_line("committer", &mut out);

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

    /// Digest under the `commit` kind label.
    pub fn compute_id(&self) -> ObjectId {
        Hasher::hash_object("commit", &self.serialize())
    }
}
