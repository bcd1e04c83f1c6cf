//! Hash oracle and object identity for SWHID computation.
//!
//! This crate provides the `ObjectId` digest type, lowercase hex
//! encoding/decoding, and the `Hasher` that frames every object body with
//! the git-style `"<kind> <length>\0"` header before digesting it.

mod error;
pub mod hasher;
pub mod hex;
mod oid;

pub use error::HashError;
pub use hasher::Hasher;
pub use oid::{ObjectId, DIGEST_LEN, HEX_LEN};
