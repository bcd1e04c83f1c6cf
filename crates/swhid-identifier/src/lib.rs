//! The SWHID identifier grammar.
//!
//! An [`Identifier`] is the textual handle
//! `swh:1:<type>:<40-hex-hash>[;key=value;...]`. Construction validates the
//! object type and digest; formatting renders qualifiers in canonical key
//! order; parsing accepts any qualifier order and normalizes it.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use swhid_hash::{hex, ObjectId, HEX_LEN};
use swhid_object::{Content, Directory, ObjectError, ObjectType, Release, Revision, Snapshot};

pub mod qualifiers;

use qualifiers::{decode_value, format_qualifiers};

/// The fixed identifier scheme.
pub const SCHEME: &str = "swh";

/// The fixed schema version, compared as a literal string when parsing.
pub const VERSION: &str = "1";

/// Errors produced by identifier construction and parsing.
#[derive(Debug, thiserror::Error)]
pub enum IdentifierError {
    #[error("empty identifier")]
    Empty,

    #[error("malformed identifier '{0}': expected scheme:version:type:hash")]
    InvalidFormat(String),

    #[error("invalid scheme '{0}': expected 'swh'")]
    InvalidScheme(String),

    #[error("invalid version '{0}': expected '1'")]
    InvalidVersion(String),

    #[error("invalid object type '{0}'")]
    InvalidObjectType(String),

    #[error("invalid hash '{0}': expected 40 lowercase hex characters")]
    InvalidHash(String),
}

/// A validated SWHID.
///
/// Immutable after construction; the `with_*` methods return new values.
/// Equality compares the core fields and the qualifier map as an unordered
/// set of pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    object_type: ObjectType,
    hash: String,
    qualifiers: BTreeMap<String, String>,
}

impl Identifier {
    /// Build an identifier from an object type and a 40-lowercase-hex digest.
    pub fn new(object_type: ObjectType, hash: impl Into<String>) -> Result<Self, IdentifierError> {
        let hash = hash.into();
        if hash.len() != HEX_LEN || !hex::is_lower_hex(&hash) {
            return Err(IdentifierError::InvalidHash(hash));
        }
        Ok(Self {
            object_type,
            hash,
            qualifiers: BTreeMap::new(),
        })
    }

    /// Build an identifier from an already-computed digest.
    pub fn from_object_id(object_type: ObjectType, id: &ObjectId) -> Self {
        Self {
            object_type,
            hash: id.to_hex(),
            qualifiers: BTreeMap::new(),
        }
    }

    /// The `cnt` identifier of a content object.
    pub fn from_content(content: &Content) -> Self {
        Self::from_object_id(ObjectType::Content, &content.compute_id())
    }

    /// The `dir` identifier of a directory object.
    pub fn from_directory(directory: &Directory) -> Result<Self, ObjectError> {
        Ok(Self::from_object_id(
            ObjectType::Directory,
            &directory.compute_id()?,
        ))
    }

    /// The `rev` identifier of a revision object.
    pub fn from_revision(revision: &Revision) -> Self {
        Self::from_object_id(ObjectType::Revision, &revision.compute_id())
    }

    /// The `rel` identifier of a release object.
    pub fn from_release(release: &Release) -> Self {
        Self::from_object_id(ObjectType::Release, &release.compute_id())
    }

    /// The `snp` identifier of a snapshot object.
    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Self, ObjectError> {
        Ok(Self::from_object_id(
            ObjectType::Snapshot,
            &snapshot.compute_id()?,
        ))
    }

    pub fn object_type(&self) -> ObjectType {
        self.object_type
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn qualifiers(&self) -> &BTreeMap<String, String> {
        &self.qualifiers
    }

    /// Look up one qualifier value.
    pub fn qualifier(&self, key: &str) -> Option<&str> {
        self.qualifiers.get(key).map(String::as_str)
    }

    /// A copy with the qualifier set replaced wholesale.
    pub fn with_qualifiers(&self, qualifiers: BTreeMap<String, String>) -> Self {
        Self {
            object_type: self.object_type,
            hash: self.hash.clone(),
            qualifiers,
        }
    }

    /// A copy with one qualifier added or overwritten.
    pub fn with_qualifier(&self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut qualifiers = self.qualifiers.clone();
        qualifiers.insert(key.into(), value.into());
        Self {
            object_type: self.object_type,
            hash: self.hash.clone(),
            qualifiers,
        }
    }

    /// Parse an identifier string.
    ///
    /// Qualifier segments without `=` are skipped; values that fail to
    /// percent-decode are kept raw.
    pub fn parse(input: &str) -> Result<Self, IdentifierError> {
        if input.is_empty() {
            return Err(IdentifierError::Empty);
        }

        let (core, rest) = match input.split_once(';') {
            Some((core, rest)) => (core, Some(rest)),
            None => (input, None),
        };

        let fields: Vec<&str> = core.split(':').collect();
        let [scheme, version, type_code, hash] = fields[..] else {
            return Err(IdentifierError::InvalidFormat(core.to_string()));
        };

        if scheme != SCHEME {
            return Err(IdentifierError::InvalidScheme(scheme.to_string()));
        }
        if version != VERSION {
            return Err(IdentifierError::InvalidVersion(version.to_string()));
        }
        let object_type = ObjectType::from_code(type_code)
            .map_err(|_| IdentifierError::InvalidObjectType(type_code.to_string()))?;

        let mut id = Self::new(object_type, hash)?;
        if let Some(rest) = rest {
            for segment in rest.split(';') {
                if let Some((key, value)) = segment.split_once('=') {
                    id.qualifiers.insert(key.to_string(), decode_value(value));
                }
            }
        }
        Ok(id)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}:{}", SCHEME, VERSION, self.object_type, self.hash)?;
        if !self.qualifiers.is_empty() {
            write!(f, ";{}", format_qualifiers(&self.qualifiers))?;
        }
        Ok(())
    }
}

impl FromStr for Identifier {
    type Err = IdentifierError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
