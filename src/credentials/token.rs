//! Opaque session token generation.

use crate::credentials::entropy::{EntropySource, OsEntropy};

/// Token byte length before hex encoding (32 bytes = 64 hex chars).
pub const TOKEN_BYTES: usize = 32;

/// Generate a random session token (hex-encoded).
///
/// 256 bits of CSPRNG output; collision resistance is statistical only.
/// The session store owns expiry and any uniqueness enforcement — the
/// token itself carries no structure.
pub fn generate_token() -> String {
    generate_token_with(&OsEntropy)
}

/// Token generation against a caller-supplied entropy source.
pub fn generate_token_with(entropy: &dyn EntropySource) -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    entropy.fill(&mut bytes);
    hex::encode(bytes)
}

// ── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_64_lowercase_hex_chars() {
        let token = generate_token();
        assert_eq!(token.len(), TOKEN_BYTES * 2);
        assert!(token.bytes().all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase()));
    }

    #[test]
    fn tokens_differ_across_calls() {
        assert_ne!(generate_token(), generate_token());
    }
}
