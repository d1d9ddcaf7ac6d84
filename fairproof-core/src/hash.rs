use crate::error::{Result, VerifyError};
use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of the UTF-8 bytes of `text`.
pub fn digest_hex(text: &str) -> String {
    hex::encode(digest(text))
}

fn digest(text: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hasher.finalize().into()
}

/// Same as [`digest_hex`] but run on the blocking pool. The caller awaits the
/// digest before using it; a task that never completes is an environment
/// failure.
pub async fn digest_hex_async(text: String) -> Result<String> {
    tokio::task::spawn_blocking(move || digest_hex(&text))
        .await
        .map_err(|e| VerifyError::environment(format!("Digest task failed: {}", e)))
}

/// First 32 bits of the digest as a big-endian integer. Equivalent to parsing
/// the first 8 hex characters of [`digest_hex`].
pub fn draw_u32(text: &str) -> u32 {
    let bytes = digest(text);
    u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}
