//! Input hashing.
//!
//! First step in the pipeline: input string in, 16-byte [`Digest`] out.
//! The hash is MD5. It only needs to spread similar inputs over
//! dissimilar images, so collision resistance against an attacker is
//! not a concern.

use crate::types::Digest;

/// Hash the UTF-8 bytes of `input`.
#[must_use = "returns the digest"]
pub fn hash(input: &str) -> Digest {
    hash_bytes(input.as_bytes())
}

/// Hash an arbitrary byte sequence.
#[must_use = "returns the digest"]
pub fn hash_bytes(bytes: &[u8]) -> Digest {
    Digest::new(md5::compute(bytes).0)
}
