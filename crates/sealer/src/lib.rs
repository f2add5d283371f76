//! AES-GCM sealing of strings into self-describing base64 blobs.
//!
//! ```text
//! encrypt: key ─▶ AES ─▶ GCM ─▶ seal(fresh nonce, plaintext) ─▶ base64(nonce || sealed)
//! decrypt: key ─▶ AES ─▶ GCM ─▶ base64 decode ─▶ split nonce ─▶ open ─▶ plaintext
//! ```
//!
//! The key length picks the AES variant (16, 24 or 32 bytes). The nonce is
//! 12 bytes, drawn fresh from the OS CSPRNG for every encryption, and travels
//! at the front of the blob. Associated data is always empty.
//!
//! This crate does no logging and no key management; keys are supplied by
//! the caller on every call.
//!
//! ```no_run
//! let key = b"AES256Key-32Characters1234567890";
//! let blob = sealer::encrypt("secret", key)?;
//! assert_eq!(sealer::decrypt(&blob, key)?, "secret");
//! # Ok::<(), sealer::SealError>(())
//! ```

pub mod crypto;
pub mod key;
pub mod pipeline;

pub use common::{SealError, SealedBlob, NONCE_LEN, TAG_LEN};
pub use key::{AesVariant, SymmetricKey};
pub use pipeline::Sealer;

/// Encrypt `plaintext` under `key` with the production collaborators.
///
/// # Errors
///
/// See [`Sealer::encrypt_bytes`].
pub fn encrypt(plaintext: &str, key: &[u8]) -> Result<String, SealError> {
    Sealer::new().encrypt(plaintext, key)
}

/// Decrypt a blob produced by [`encrypt`].
///
/// # Errors
///
/// See [`Sealer::decrypt`].
pub fn decrypt(encrypted: &str, key: &[u8]) -> Result<String, SealError> {
    Sealer::new().decrypt(encrypted, key)
}
