//! Collaborators of the seal/open pipeline.
//!
//! Each collaborator is a trait with one production implementation, so tests
//! can substitute a double that fails at any single stage.
//!
//! # Ciphertext format
//!
//! ```text
//! base64-standard(nonce (12 bytes) || ciphertext || tag (16 bytes))
//! ```
//!
//! Associated data is always empty.

pub mod cipher;
pub mod codec;
pub mod nonce;

pub use cipher::{AeadHandle, AesGcmFactory, BlockCipher, CipherFactory, GCM_BLOCK_SIZE};
pub use codec::{Base64Codec, TransportCodec};
pub use nonce::{NonceSource, OsNonceSource};
