//! Fresh per-call nonces from the OS CSPRNG.

use aes_gcm::aead::{rand_core::RngCore, OsRng};
use common::SealError;

/// Source of random nonces.
#[cfg_attr(test, mockall::automock)]
pub trait NonceSource: Send + Sync {
    /// Return `size` bytes of cryptographically secure randomness.
    fn fresh_nonce(&self, size: usize) -> Result<Vec<u8>, SealError>;
}

/// Nonce source reading from the operating system's CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsNonceSource;

impl NonceSource for OsNonceSource {
    fn fresh_nonce(&self, size: usize) -> Result<Vec<u8>, SealError> {
        let mut nonce = vec![0u8; size];
        OsRng
            .try_fill_bytes(&mut nonce)
            .map_err(|e| SealError::RandomSourceExhausted(e.to_string()))?;
        Ok(nonce)
    }
}
