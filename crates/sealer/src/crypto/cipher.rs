//! AES block cipher construction and GCM mode wrapping.
//!
//! Building an AEAD is two fallible steps, [`CipherFactory::new_cipher`] then
//! [`CipherFactory::new_gcm`], so that each can be failed independently by a
//! test double.
//!
//! **Never reuse a nonce with the same key.** GCM nonce reuse is catastrophic:
//! it breaks both confidentiality and authentication.

use std::fmt;

use aes_gcm::{
    aead::{consts::U12, generic_array::typenum::Unsigned, Aead, AeadCore, Nonce, Payload},
    aes::{
        cipher::{BlockSizeUser, KeyInit},
        Aes128, Aes192, Aes256,
    },
    Aes128Gcm, Aes256Gcm, AesGcm,
};
use common::{SealError, TAG_LEN};

use crate::key::AesVariant;

/// Block size GCM is defined over (128 bits).
pub const GCM_BLOCK_SIZE: usize = 16;

type Aes192Gcm = AesGcm<Aes192, U12>;

/// Keyed AES block cipher, not yet bound to a mode of operation.
pub enum BlockCipher {
    Aes128(Aes128),
    Aes192(Aes192),
    Aes256(Aes256),
}

impl BlockCipher {
    /// Key the AES variant matching `key.len()`.
    ///
    /// # Errors
    ///
    /// Returns [`SealError::InvalidKeySize`] unless `key` is 16, 24 or 32 bytes.
    pub fn new(key: &[u8]) -> Result<Self, SealError> {
        let invalid = |_| SealError::InvalidKeySize(key.len());
        match AesVariant::for_key_len(key.len())? {
            AesVariant::Aes128 => Aes128::new_from_slice(key).map(Self::Aes128).map_err(invalid),
            AesVariant::Aes192 => Aes192::new_from_slice(key).map(Self::Aes192).map_err(invalid),
            AesVariant::Aes256 => Aes256::new_from_slice(key).map(Self::Aes256).map_err(invalid),
        }
    }

    pub fn variant(&self) -> AesVariant {
        match self {
            BlockCipher::Aes128(_) => AesVariant::Aes128,
            BlockCipher::Aes192(_) => AesVariant::Aes192,
            BlockCipher::Aes256(_) => AesVariant::Aes256,
        }
    }

    /// Block size in bytes as reported by the cipher.
    pub fn block_size(&self) -> usize {
        match self {
            BlockCipher::Aes128(_) => Aes128::block_size(),
            BlockCipher::Aes192(_) => Aes192::block_size(),
            BlockCipher::Aes256(_) => Aes256::block_size(),
        }
    }
}

impl fmt::Debug for BlockCipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BlockCipher").field(&self.variant()).finish()
    }
}

/// An AEAD instance bound to one key.
#[cfg_attr(test, mockall::automock)]
pub trait AeadHandle: Send {
    /// Nonce length this AEAD requires.
    fn nonce_size(&self) -> usize;

    /// Bytes seal adds on top of the plaintext (the tag).
    fn overhead(&self) -> usize;

    /// Encrypt and authenticate `plaintext`, returning ciphertext followed by the tag.
    fn seal(&self, nonce: &[u8], plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>, SealError>;

    /// Verify and decrypt `sealed`. Nothing is returned unless the tag verifies.
    fn open(&self, nonce: &[u8], sealed: &[u8], aad: &[u8]) -> Result<Vec<u8>, SealError>;
}

/// Turns key bytes into an [`AeadHandle`].
#[cfg_attr(test, mockall::automock)]
pub trait CipherFactory: Send + Sync {
    /// Key a block cipher.
    fn new_cipher(&self, key: &[u8]) -> Result<BlockCipher, SealError>;

    /// Wrap a keyed block cipher in GCM mode.
    fn new_gcm(&self, cipher: BlockCipher) -> Result<Box<dyn AeadHandle>, SealError>;
}

/// Production factory backed by the RustCrypto `aes-gcm` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct AesGcmFactory;

impl CipherFactory for AesGcmFactory {
    fn new_cipher(&self, key: &[u8]) -> Result<BlockCipher, SealError> {
        BlockCipher::new(key)
    }

    fn new_gcm(&self, cipher: BlockCipher) -> Result<Box<dyn AeadHandle>, SealError> {
        if cipher.block_size() != GCM_BLOCK_SIZE {
            return Err(SealError::CipherConstructionFailed(format!(
                "{} reports a {}-byte block; GCM needs {GCM_BLOCK_SIZE}",
                cipher.variant(),
                cipher.block_size(),
            )));
        }
        Ok(match cipher {
            BlockCipher::Aes128(c) => Box::new(GcmHandle::new(Aes128Gcm::from(c))),
            BlockCipher::Aes192(c) => Box::new(GcmHandle::new(Aes192Gcm::from(c))),
            BlockCipher::Aes256(c) => Box::new(GcmHandle::new(Aes256Gcm::from(c))),
        })
    }
}

struct GcmHandle<A> {
    aead: A,
}

impl<A: Aead> GcmHandle<A> {
    fn new(aead: A) -> Self {
        Self { aead }
    }

    fn checked_nonce<'a>(&self, nonce: &'a [u8]) -> Result<&'a Nonce<A>, SealError> {
        let expected = <A as AeadCore>::NonceSize::USIZE;
        if nonce.len() != expected {
            return Err(SealError::InvalidNonceLength {
                expected,
                actual: nonce.len(),
            });
        }
        Ok(Nonce::<A>::from_slice(nonce))
    }
}

impl<A: Aead + Send> AeadHandle for GcmHandle<A> {
    fn nonce_size(&self) -> usize {
        <A as AeadCore>::NonceSize::USIZE
    }

    fn overhead(&self) -> usize {
        TAG_LEN
    }

    fn seal(&self, nonce: &[u8], plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>, SealError> {
        let nonce = self.checked_nonce(nonce)?;
        self.aead
            .encrypt(nonce, Payload { msg: plaintext, aad })
            .map_err(|_| SealError::SealFailed)
    }

    fn open(&self, nonce: &[u8], sealed: &[u8], aad: &[u8]) -> Result<Vec<u8>, SealError> {
        let nonce = self.checked_nonce(nonce)?;
        self.aead
            .decrypt(nonce, Payload { msg: sealed, aad })
            .map_err(|_| SealError::AuthenticationFailed)
    }
}
