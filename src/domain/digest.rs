use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of `bytes`, the form Homebrew's `sha256` stanza expects.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let digest = hasher.finalize();
    digest.iter().map(|byte| format!("{:02x}", byte)).collect()
}
