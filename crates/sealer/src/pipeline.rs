//! Encrypt and decrypt operations.
//!
//! [`Sealer`] composes a [`CipherFactory`], a [`NonceSource`] and a
//! [`TransportCodec`]. Both operations are single-pass: they either return the
//! full result or the error of the first step that failed.

use common::{SealError, SealedBlob};

use crate::crypto::{
    AeadHandle, AesGcmFactory, Base64Codec, CipherFactory, NonceSource, OsNonceSource,
    TransportCodec,
};
use crate::key::AesVariant;

/// Associated data bound into every seal/open. Always empty.
const NO_AAD: &[u8] = &[];

/// AES-GCM seal/open pipeline over pluggable collaborators.
///
/// Holds no mutable state, so one instance can serve any number of threads.
#[derive(Debug, Clone)]
pub struct Sealer<F = AesGcmFactory, N = OsNonceSource, C = Base64Codec> {
    factory: F,
    nonces: N,
    codec: C,
}

impl Sealer {
    /// Pipeline backed by `aes-gcm`, the OS CSPRNG and standard base64.
    pub fn new() -> Self {
        Self::with_parts(AesGcmFactory, OsNonceSource, Base64Codec)
    }
}

impl Default for Sealer {
    fn default() -> Self {
        Self::new()
    }
}

impl<F, N, C> Sealer<F, N, C>
where
    F: CipherFactory,
    N: NonceSource,
    C: TransportCodec,
{
    pub fn with_parts(factory: F, nonces: N, codec: C) -> Self {
        Self {
            factory,
            nonces,
            codec,
        }
    }

    /// Build the AEAD for `key`.
    ///
    /// The key length is checked before the factory is consulted.
    ///
    /// # Errors
    ///
    /// [`SealError::InvalidKeySize`], or whatever the factory reports.
    pub fn build_aead(&self, key: &[u8]) -> Result<Box<dyn AeadHandle>, SealError> {
        AesVariant::for_key_len(key.len())?;
        let cipher = self.factory.new_cipher(key)?;
        self.factory.new_gcm(cipher)
    }

    /// Seal `plaintext` under `key` and return `base64(nonce || ciphertext || tag)`.
    ///
    /// A fresh nonce is drawn for every call, so sealing the same plaintext
    /// twice yields different output.
    ///
    /// # Errors
    ///
    /// Returns the first failing step's error. A nonce shorter than the AEAD
    /// requires is reported as [`SealError::RandomSourceExhausted`].
    pub fn encrypt_bytes(&self, plaintext: &[u8], key: &[u8]) -> Result<String, SealError> {
        let aead = self.build_aead(key)?;

        let nonce_size = aead.nonce_size();
        let nonce = self.nonces.fresh_nonce(nonce_size)?;
        if nonce.len() != nonce_size {
            return Err(SealError::RandomSourceExhausted(format!(
                "short read: got {} of {nonce_size} nonce bytes",
                nonce.len()
            )));
        }

        let sealed = aead.seal(&nonce, plaintext, NO_AAD)?;
        let blob = SealedBlob { nonce, sealed };
        Ok(self.codec.encode(&blob.to_bytes()))
    }

    /// Text variant of [`Sealer::encrypt_bytes`].
    pub fn encrypt(&self, plaintext: &str, key: &[u8]) -> Result<String, SealError> {
        self.encrypt_bytes(plaintext.as_bytes(), key)
    }

    /// Open a blob produced by [`Sealer::encrypt_bytes`] (or any AES-GCM
    /// implementation using the same layout).
    ///
    /// # Errors
    ///
    /// - [`SealError::InvalidKeySize`] / factory errors for a bad key.
    /// - [`SealError::MalformedEncoding`] if `encrypted` is not base64.
    /// - [`SealError::TruncatedCiphertext`] if the blob is shorter than a nonce.
    /// - [`SealError::AuthenticationFailed`] on a wrong key or tampered blob.
    pub fn decrypt_bytes(&self, encrypted: &str, key: &[u8]) -> Result<Vec<u8>, SealError> {
        let aead = self.build_aead(key)?;
        let bytes = self.codec.decode(encrypted)?;
        let blob = SealedBlob::from_bytes(&bytes, aead.nonce_size())?;
        aead.open(&blob.nonce, &blob.sealed, NO_AAD)
    }

    /// Text variant of [`Sealer::decrypt_bytes`].
    ///
    /// # Errors
    ///
    /// Everything [`Sealer::decrypt_bytes`] returns, plus
    /// [`SealError::InvalidUtf8`] when the opened bytes are not text.
    pub fn decrypt(&self, encrypted: &str, key: &[u8]) -> Result<String, SealError> {
        let plaintext = self.decrypt_bytes(encrypted, key)?;
        String::from_utf8(plaintext).map_err(|_| SealError::InvalidUtf8)
    }
}
