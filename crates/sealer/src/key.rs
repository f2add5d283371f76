//! AES key sizes and an owned, redacted key buffer.

use std::fmt;

use common::SealError;

/// AES variant, selected by key length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AesVariant {
    Aes128,
    Aes192,
    Aes256,
}

impl AesVariant {
    /// Map a key length in bytes to its AES variant.
    ///
    /// # Errors
    ///
    /// Returns [`SealError::InvalidKeySize`] for anything but 16, 24 or 32.
    pub fn for_key_len(len: usize) -> Result<Self, SealError> {
        match len {
            16 => Ok(AesVariant::Aes128),
            24 => Ok(AesVariant::Aes192),
            32 => Ok(AesVariant::Aes256),
            other => Err(SealError::InvalidKeySize(other)),
        }
    }

    /// Key length in bytes.
    pub fn key_len(self) -> usize {
        match self {
            AesVariant::Aes128 => 16,
            AesVariant::Aes192 => 24,
            AesVariant::Aes256 => 32,
        }
    }
}

impl fmt::Display for AesVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AesVariant::Aes128 => "AES-128",
            AesVariant::Aes192 => "AES-192",
            AesVariant::Aes256 => "AES-256",
        };
        f.write_str(name)
    }
}

/// Owned key material of a valid AES length.
///
/// The seal/open operations take plain `&[u8]` keys; this type is for callers
/// that need to hold a key for a while. The bytes are overwritten with zeroes
/// when the value is dropped.
#[derive(Clone)]
pub struct SymmetricKey {
    bytes: Box<[u8]>,
    variant: AesVariant,
}

impl SymmetricKey {
    /// Copy `key` into a new buffer after checking its length.
    ///
    /// # Errors
    ///
    /// Returns [`SealError::InvalidKeySize`] if `key` is not 16, 24 or 32 bytes.
    pub fn new(key: &[u8]) -> Result<Self, SealError> {
        let variant = AesVariant::for_key_len(key.len())?;
        Ok(Self {
            bytes: key.into(),
            variant,
        })
    }

    pub fn variant(&self) -> AesVariant {
        self.variant
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl AsRef<[u8]> for SymmetricKey {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl Drop for SymmetricKey {
    fn drop(&mut self) {
        self.bytes.iter_mut().for_each(|b| *b = 0);
    }
}

impl fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print key material.
        write!(f, "SymmetricKey({}, [REDACTED])", self.variant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_follows_key_length() {
        assert_eq!(AesVariant::for_key_len(16).unwrap(), AesVariant::Aes128);
        assert_eq!(AesVariant::for_key_len(24).unwrap(), AesVariant::Aes192);
        assert_eq!(AesVariant::for_key_len(32).unwrap(), AesVariant::Aes256);
        for variant in [AesVariant::Aes128, AesVariant::Aes192, AesVariant::Aes256] {
            assert_eq!(AesVariant::for_key_len(variant.key_len()).unwrap(), variant);
        }
    }

    #[test]
    fn other_lengths_rejected() {
        for len in [0, 1, 10, 15, 17, 31, 33, 64] {
            assert_eq!(
                AesVariant::for_key_len(len),
                Err(SealError::InvalidKeySize(len))
            );
        }
    }

    #[test]
    fn key_keeps_bytes() {
        let key = SymmetricKey::new(b"AES256Key-32Characters1234567890").unwrap();
        assert_eq!(key.variant(), AesVariant::Aes256);
        assert_eq!(key.as_bytes(), b"AES256Key-32Characters1234567890");
        assert_eq!(key.as_ref(), key.as_bytes());
    }

    #[test]
    fn key_rejects_bad_length() {
        assert_eq!(
            SymmetricKey::new(b"0123456789").unwrap_err(),
            SealError::InvalidKeySize(10)
        );
    }

    #[test]
    fn key_redacted_in_debug() {
        let key = SymmetricKey::new(&[0x41; 16]).unwrap();
        let debug = format!("{key:?}");
        assert!(debug.contains("REDACTED"));
        assert!(debug.contains("AES-128"));
        assert!(!debug.contains("65"));
        assert!(!debug.contains("AAAA"));
    }
}
