//! Ciphertext blob layout.
//!
//! ```text
//! nonce (nonce_size bytes) || sealed payload (ciphertext + 16-byte tag)
//! ```
//!
//! The nonce size is not stored in the blob. Both ends derive it from the AEAD
//! construction, which for GCM is fixed at [`NONCE_LEN`].

use crate::error::SealError;

/// Byte length of a standard GCM nonce (96 bits).
pub const NONCE_LEN: usize = 12;

/// Byte length of the GCM authentication tag appended by seal.
pub const TAG_LEN: usize = 16;

/// A decoded blob split into its nonce and sealed payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedBlob {
    /// Raw nonce bytes.
    pub nonce: Vec<u8>,
    /// Ciphertext followed by the authentication tag.
    pub sealed: Vec<u8>,
}

impl SealedBlob {
    /// Concatenate nonce and sealed payload into the on-wire byte layout.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.nonce.len() + self.sealed.len());
        out.extend_from_slice(&self.nonce);
        out.extend_from_slice(&self.sealed);
        out
    }

    /// Split a decoded blob at `nonce_size`.
    ///
    /// # Errors
    ///
    /// Returns [`SealError::TruncatedCiphertext`] if `bytes` is shorter than
    /// `nonce_size`.
    pub fn from_bytes(bytes: &[u8], nonce_size: usize) -> Result<Self, SealError> {
        if bytes.len() < nonce_size {
            return Err(SealError::TruncatedCiphertext {
                len: bytes.len(),
                nonce_size,
            });
        }
        let (nonce, sealed) = bytes.split_at(nonce_size);
        Ok(Self {
            nonce: nonce.to_vec(),
            sealed: sealed.to_vec(),
        })
    }
}
