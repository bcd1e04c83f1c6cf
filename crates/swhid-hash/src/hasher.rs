use digest::Digest;
use sha1::Sha1;

use crate::ObjectId;

/// Streaming SHA-1 digest computation.
///
/// Data can be fed incrementally with [`update`](Hasher::update) or through
/// the [`std::io::Write`] implementation, then finalised into an
/// [`ObjectId`]. Object digests go through [`hash_object`](Hasher::hash_object),
/// which prepends the canonical `"<kind> <length>\0"` framing header.
pub struct Hasher {
    inner: Sha1,
}

impl Hasher {
    pub fn new() -> Self {
        Self { inner: Sha1::new() }
    }

    /// Feed data into the hasher.
    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    /// Finalize and return the digest.
    pub fn finalize(self) -> ObjectId {
        let result = self.inner.finalize();
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(result.as_slice());
        ObjectId::from(bytes)
    }

    /// Convenience: digest raw data in one call.
    pub fn digest(data: &[u8]) -> ObjectId {
        let mut h = Self::new();
        h.update(data);
        h.finalize()
    }

    /// Digest an object: `"{kind} {len}\0{body}"`.
    ///
    /// This header-then-body framing is what every canonical encoder relies
    /// on; the body must be fully materialized so its length is known.
    pub fn hash_object(kind: &str, body: &[u8]) -> ObjectId {
        let header = format!("{} {}\0", kind, body.len());
        let mut h = Self::new();
        h.update(header.as_bytes());
        h.update(body);
        h.finalize()
    }
}

impl Default for Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl std::io::Write for Hasher {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
