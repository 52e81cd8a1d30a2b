//! # credhash
//!
//! Credential-hashing component of the school-evaluation admin backend.
//! Three operations, one interchange contract:
//!
//! ```
//! use credhash::CredentialHasher;
//!
//! let hasher = CredentialHasher::new();
//! let record = hasher.derive("correct horse");          // "salt:hash", hex
//! assert!(hasher.verify("correct horse", &record));
//! assert!(!hasher.verify("wrong horse", &record));
//!
//! let session = credhash::generate_token();             // 64 hex chars
//! assert_eq!(session.len(), 64);
//! ```
//!
//! All operations are pure and safe to call concurrently; the only shared
//! resource is the process CSPRNG.

pub mod credentials;

pub use credentials::{
    generate_token, CredentialHasher, EntropySource, OsEntropy, KDF_ITERATIONS, KEY_BYTES,
    SALT_BYTES, TOKEN_BYTES,
};
