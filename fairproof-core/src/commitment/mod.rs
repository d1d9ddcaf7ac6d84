pub mod json;
pub mod scheme;

pub use scheme::{canonical_json, CommitmentFormat};

use crate::error::Result;
use crate::hash::{digest_hex, digest_hex_async};
use crate::state::CanonicalState;
use serde::{Deserialize, Serialize};

/// Outcome of comparing a recomputed commitment with the published one.
/// A mismatch is a valid result, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verification {
    pub matches: bool,
    pub computed_hash: String,
    pub expected_hash: String,
}

/// `"0x" + sha256(canonical_json(state))`, lowercase.
pub fn commitment_hash(state: &CanonicalState, format: CommitmentFormat) -> Result<String> {
    let json = canonical_json(state, format)?;
    Ok(format!("0x{}", digest_hex(&json)))
}

pub async fn commitment_hash_async(state: &CanonicalState, format: CommitmentFormat) -> Result<String> {
    let json = canonical_json(state, format)?;
    Ok(format!("0x{}", digest_hex_async(json).await?))
}

/// Plain string equality after lowercasing both sides. This is an integrity
/// check, not a secret comparison.
pub fn hashes_match(computed: &str, expected: &str) -> bool {
    computed.to_lowercase() == expected.to_lowercase()
}

pub fn compare(computed_hash: String, expected_hash: &str) -> Verification {
    let expected_hash = expected_hash.to_lowercase();
    Verification {
        matches: hashes_match(&computed_hash, &expected_hash),
        computed_hash: computed_hash.to_lowercase(),
        expected_hash,
    }
}

pub fn verify(state: &CanonicalState, expected_hash: &str, format: CommitmentFormat) -> Result<Verification> {
    let computed = commitment_hash(state, format)?;
    Ok(compare(computed, expected_hash))
}
