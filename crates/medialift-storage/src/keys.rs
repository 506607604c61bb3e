//! Object key generation.
//!
//! Key format: `{epoch_millis}-{base36_token}.{ext}`. Uniqueness is
//! probabilistic (timestamp plus random token); there is no coordination
//! round-trip with the store, and the non-overwriting upload turns the
//! residual collision into a reported failure.
//!
//! The extension comes from the original filename, not from the encoding
//! the pipeline actually uploads: stored bytes are typically JPEG while the
//! key may say `.png`. Deployed stores already address objects by such
//! keys, so the mismatch is kept rather than fixed.

use rand::Rng;

const TOKEN_LEN: usize = 11;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const FALLBACK_EXT: &str = "bin";

/// Generate an object key for an uploaded file.
pub fn generate_object_key(original_filename: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    object_key_with(original_filename, millis, &random_token(TOKEN_LEN))
}

/// Build a key from an explicit timestamp and token. Seam for deterministic
/// tests; `generate_object_key` is the production entry point.
pub fn object_key_with(original_filename: &str, epoch_millis: i64, token: &str) -> String {
    format!(
        "{}-{}.{}",
        epoch_millis,
        token,
        extension_of(original_filename)
    )
}

fn extension_of(filename: &str) -> String {
    std::path::Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty() && e.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|e| e.to_lowercase())
        .unwrap_or_else(|| FALLBACK_EXT.to_string())
}

fn random_token(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect()
}
