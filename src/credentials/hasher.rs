//! Password-to-record derivation and verification.
//!
//! A stored credential is a single `salt:hash` string: 16 salt bytes and a
//! 32-byte PBKDF2-HMAC-SHA256 key, both lowercase hex. The string is the
//! only interchange contract this crate owns — the account store persists
//! it opaquely and hands it back for verification.

use crate::credentials::entropy::{EntropySource, OsEntropy};

/// Salt byte length (32 hex chars in the stored record).
pub const SALT_BYTES: usize = 16;

/// Derived key byte length (64 hex chars in the stored record).
pub const KEY_BYTES: usize = 32;

/// PBKDF2 iteration count. A compatibility constant: every record already
/// persisted by the admin backend was derived with exactly this count, so
/// changing it (or [`KEY_BYTES`]) orphans stored credentials unless a
/// re-hash migration is designed in first.
pub const KDF_ITERATIONS: u32 = 100_000;

/// Derives and verifies `salt:hash` credential records.
///
/// Stateless apart from the injected entropy source; safe to share across
/// threads and cheap to construct per call site.
pub struct CredentialHasher {
    entropy: Box<dyn EntropySource>,
}

impl Default for CredentialHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialHasher {
    /// Hasher backed by the OS CSPRNG.
    pub fn new() -> Self {
        Self::with_entropy(Box::new(OsEntropy))
    }

    /// Hasher with a caller-supplied entropy source (tests pin salts
    /// through this).
    pub fn with_entropy(entropy: Box<dyn EntropySource>) -> Self {
        Self { entropy }
    }

    /// Derive a storable credential record from a plaintext password.
    ///
    /// The salt is fresh on every call, so two derivations of the same
    /// password never match — callers compare via [`verify`], not string
    /// equality.
    ///
    /// [`verify`]: CredentialHasher::verify
    pub fn derive(&self, password: &str) -> String {
        let mut salt = [0u8; SALT_BYTES];
        self.entropy.fill(&mut salt);
        let key = derive_key(password, &salt, KDF_ITERATIONS);
        format!("{}:{}", hex::encode(salt), hex::encode(key))
    }

    /// Check a plaintext password against a stored record.
    ///
    /// Returns `false` for a wrong password and for every malformed input
    /// (missing colon, empty parts, non-hex salt) alike — the caller is
    /// told nothing beyond pass/fail, by design. Never panics on garbage.
    pub fn verify(&self, password: &str, stored: &str) -> bool {
        let Some((salt_hex, hash_hex)) = stored.split_once(':') else {
            return false;
        };
        if salt_hex.is_empty() || hash_hex.is_empty() {
            return false;
        }
        // Stored salt length is taken as-is rather than enforced: records
        // from prior deployments must keep verifying.
        let Ok(salt) = hex::decode(salt_hex) else {
            return false;
        };
        let derived = hex::encode(derive_key(password, &salt, KDF_ITERATIONS));
        constant_time_eq(derived.as_bytes(), hash_hex.as_bytes())
    }
}

/// PBKDF2-HMAC-SHA256 key stretching.
fn derive_key(password: &str, salt: &[u8], iterations: u32) -> [u8; KEY_BYTES] {
    let mut key = [0u8; KEY_BYTES];
    pbkdf2::pbkdf2_hmac::<sha2::Sha256>(password.as_bytes(), salt, iterations, &mut key);
    key
}

/// Constant-time byte comparison to prevent timing attacks.
///
/// The length check is the only early exit; both inputs are fixed-length
/// hex by the time this runs, so length is not secret-dependent.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

// ── Tests ───────────────────────────────────────────────────────────
