//! Error taxonomy and ciphertext wire format shared across the sealer crates.

pub mod blob;
pub mod error;

pub use blob::{SealedBlob, NONCE_LEN, TAG_LEN};
pub use error::SealError;
