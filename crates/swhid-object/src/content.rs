use swhid_hash::{Hasher, ObjectId};

/// File content: raw bytes with no interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    pub data: Vec<u8>,
}

impl Content {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self { data: data.into() }
    }

    /// The canonical body is the content itself, unchanged.
    pub fn serialize(&self) -> &[u8] {
        &self.data
    }

    /// Digest under the `blob` kind label.
    pub fn compute_id(&self) -> ObjectId {
        Hasher::hash_object("blob", &self.data)
    }
}
