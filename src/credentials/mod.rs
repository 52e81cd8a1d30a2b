//! Credential hashing for the evaluation-admin backend.
//!
//! Provides:
//! - Password record derivation (PBKDF2-HMAC-SHA256, 100k rounds + per-record salt)
//! - Password verification against stored `salt:hash` records (constant-time)
//! - Opaque session token generation (32 random bytes, hex)
//!
//! ## Design Decisions
//! - The `salt:hash` hex string is the only artifact this crate produces or
//!   consumes; persisting it, mapping tokens to accounts, and password
//!   policy all belong to the surrounding account store.
//! - Verification reports every failure — wrong password, truncated record,
//!   non-hex garbage — uniformly as `false`, so callers cannot distinguish
//!   a corrupt record from a mismatch.
//! - Randomness enters through the [`EntropySource`] capability rather than
//!   an ambient global, so tests can substitute a deterministic source.

pub mod entropy;
pub mod hasher;
pub mod token;

pub use entropy::{EntropySource, OsEntropy};
pub use hasher::{CredentialHasher, KDF_ITERATIONS, KEY_BYTES, SALT_BYTES};
pub use token::{generate_token, TOKEN_BYTES};
