//! Text transport encoding for sealed blobs.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use common::SealError;

/// Converts raw bytes to printable text and back.
#[cfg_attr(test, mockall::automock)]
pub trait TransportCodec: Send + Sync {
    fn encode(&self, bytes: &[u8]) -> String;

    fn decode(&self, text: &str) -> Result<Vec<u8>, SealError>;
}

/// Standard-alphabet base64 with `=` padding and no line wrapping.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64Codec;

impl TransportCodec for Base64Codec {
    fn encode(&self, bytes: &[u8]) -> String {
        STANDARD.encode(bytes)
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>, SealError> {
        STANDARD
            .decode(text)
            .map_err(|e| SealError::MalformedEncoding(e.to_string()))
    }
}
