use std::fmt;
use std::str::FromStr;

use crate::hex;
use crate::HashError;

/// Length of a digest in bytes.
pub const DIGEST_LEN: usize = 20;

/// Length of a digest in hex characters.
pub const HEX_LEN: usize = DIGEST_LEN * 2;

/// A 160-bit object digest, the identity of a canonically serialized object.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId([u8; DIGEST_LEN]);

impl ObjectId {
    /// The null digest (all zeros).
    pub const NULL: Self = Self([0u8; DIGEST_LEN]);

    /// Create an ObjectId from raw digest bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, HashError> {
        if bytes.len() != DIGEST_LEN {
            return Err(HashError::InvalidDigestLength {
                expected: DIGEST_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; DIGEST_LEN];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }

    /// Create an ObjectId from a 40-character hex string (either case).
    pub fn from_hex(hex_str: &str) -> Result<Self, HashError> {
        let mut arr = [0u8; DIGEST_LEN];
        hex::decode(hex_str, &mut arr)?;
        Ok(Self(arr))
    }

    /// Get the raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Check if this is the null (all-zeros) digest.
    pub fn is_null(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }

    /// Get the lowercase hex representation.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({})", &self.to_hex()[..8])
    }
}

impl FromStr for ObjectId {
    type Err = HashError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<[u8; DIGEST_LEN]> for ObjectId {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_BLOB: &str = "e69de29bb2d1d6434b8b29ae775ad8c2e48c5391";

    #[test]
    fn from_hex_roundtrip() {
        let oid = ObjectId::from_hex(EMPTY_BLOB).unwrap();
        assert_eq!(oid.to_hex(), EMPTY_BLOB);
        let parsed: ObjectId = EMPTY_BLOB.parse().unwrap();
        assert_eq!(parsed, oid);
    }

    #[test]
    fn from_bytes_roundtrip() {
        let oid = ObjectId::from_hex(EMPTY_BLOB).unwrap();
        let back = ObjectId::from_bytes(oid.as_bytes()).unwrap();
        assert_eq!(oid, back);
    }

    #[test]
    fn from_bytes_wrong_length() {
        let err = ObjectId::from_bytes(&[0; 10]).unwrap_err();
        assert!(matches!(
            err,
            HashError::InvalidDigestLength { expected: 20, actual: 10 }
        ));
    }

    #[test]
    fn from_hex_wrong_length() {
        assert!(ObjectId::from_hex("abcd").is_err());
    }

    #[test]
    fn from_hex_bad_char() {
        let err =
            ObjectId::from_hex("zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz").unwrap_err();
        assert!(matches!(err, HashError::InvalidHex { .. }));
    }

    #[test]
    fn null_digest() {
        assert!(ObjectId::NULL.is_null());
        assert!(!ObjectId::from_hex(EMPTY_BLOB).unwrap().is_null());
    }

    #[test]
    fn debug_shows_short_hex() {
        let oid = ObjectId::from_hex(EMPTY_BLOB).unwrap();
        assert_eq!(format!("{:?}", oid), "ObjectId(e69de29b)");
    }

    #[test]
    fn ordering_follows_bytes() {
        let a = ObjectId::from_hex("0000000000000000000000000000000000000001").unwrap();
        let b = ObjectId::from_hex("0000000000000000000000000000000000000002").unwrap();
        assert!(a < b);
    }
}
