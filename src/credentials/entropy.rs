//! Injected randomness source for credential derivation.
//!
//! Salt and token generation go through a capability trait instead of
//! reaching for the global CSPRNG directly, so tests can pin exact salt
//! bytes and assert full derived records against known-answer output.

use rand::RngCore;

/// Source of cryptographically secure random bytes.
///
/// Implementations must be safe to share across threads; every call fills
/// only the buffer it is handed.
pub trait EntropySource: Send + Sync {
    /// Fill `buf` entirely with random bytes.
    fn fill(&self, buf: &mut [u8]);
}

/// Operating-system CSPRNG (`getrandom` / `/dev/urandom` equivalent).
///
/// Entropy failure is unrecoverable for this component, so the underlying
/// source's panic-on-failure behavior is the intended response.
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&self, buf: &mut [u8]) {
        rand::rngs::OsRng.fill_bytes(buf);
    }
}

// ── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os_entropy_fills_whole_buffer() {
        // 64 zero bytes staying zero after two independent fills would be
        // a 2^-1024 event; treat it as a broken source.
        let mut a = [0u8; 64];
        let mut b = [0u8; 64];
        OsEntropy.fill(&mut a);
        OsEntropy.fill(&mut b);
        assert_ne!(a, [0u8; 64]);
        assert_ne!(a, b);
    }
}
