//! Error taxonomy for the seal/open pipeline.

use thiserror::Error;

/// Every way an encrypt or decrypt call can fail.
///
/// All variants are terminal for the call. None of them is worth retrying:
/// a failed authentication stays failed no matter how often it is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SealError {
    /// The key is not 16, 24 or 32 bytes long.
    #[error("invalid key size: expected 16, 24 or 32 bytes, got {0}")]
    InvalidKeySize(usize),

    /// The block cipher could not be wrapped in GCM mode.
    #[error("cipher construction failed: {0}")]
    CipherConstructionFailed(String),

    /// The random source errored or returned fewer bytes than requested.
    #[error("random source exhausted: {0}")]
    RandomSourceExhausted(String),

    /// The transport text is not valid standard base64.
    #[error("malformed encoding: {0}")]
    MalformedEncoding(String),

    /// The decoded blob is too short to contain a nonce.
    #[error("truncated ciphertext: {len} bytes is shorter than the {nonce_size}-byte nonce")]
    TruncatedCiphertext { len: usize, nonce_size: usize },

    /// The authentication tag did not verify (wrong key or tampered blob).
    #[error("authentication failed")]
    AuthenticationFailed,

    /// A nonce of the wrong length was handed to seal or open.
    #[error("invalid nonce length: expected {expected} bytes, got {actual}")]
    InvalidNonceLength { expected: usize, actual: usize },

    /// The AEAD refused to seal the plaintext (exceeds the GCM length limit).
    #[error("seal failed")]
    SealFailed,

    /// The opened plaintext is not valid UTF-8 text.
    #[error("plaintext is not valid UTF-8")]
    InvalidUtf8,
}

impl SealError {
    /// Stable machine-readable code, safe to put in log fields.
    pub fn code(&self) -> &'static str {
        match self {
            SealError::InvalidKeySize(_) => "invalid_key_size",
            SealError::CipherConstructionFailed(_) => "cipher_construction_failed",
            SealError::RandomSourceExhausted(_) => "random_source_exhausted",
            SealError::MalformedEncoding(_) => "malformed_encoding",
            SealError::TruncatedCiphertext { .. } => "truncated_ciphertext",
            SealError::AuthenticationFailed => "authentication_failed",
            SealError::InvalidNonceLength { .. } => "invalid_nonce_length",
            SealError::SealFailed => "seal_failed",
            SealError::InvalidUtf8 => "invalid_utf8",
        }
    }
}
