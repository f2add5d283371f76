//! The two demo flows: seal-then-open, and open a single blob.

use anyhow::Result;
use sealer::{SealError, Sealer};
use tracing::{error, info};

use crate::config::Config;

/// Output of [`round_trip`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundTrip {
    pub ciphertext: String,
    pub decrypted: String,
}

/// Encrypt the configured plaintext, then decrypt the result.
///
/// # Errors
///
/// Returns an error if the key is invalid or either step fails.
pub fn round_trip(sealer: &Sealer, cfg: &Config) -> Result<RoundTrip> {
    let key = cfg.symmetric_key()?;

    let ciphertext = sealer
        .encrypt(&cfg.plaintext, key.as_ref())
        .map_err(|e| failed("encrypt", e))?;
    info!(
        variant = %key.variant(),
        plaintext_len = cfg.plaintext.len(),
        ciphertext_len = ciphertext.len(),
        "sealed plaintext"
    );

    let decrypted = sealer
        .decrypt(&ciphertext, key.as_ref())
        .map_err(|e| failed("decrypt", e))?;
    info!(plaintext_len = decrypted.len(), "opened ciphertext");

    Ok(RoundTrip {
        ciphertext,
        decrypted,
    })
}

/// Decrypt the configured ciphertext.
///
/// # Errors
///
/// Returns an error if the key is invalid or the blob does not open.
pub fn open(sealer: &Sealer, cfg: &Config) -> Result<String> {
    let key = cfg.symmetric_key()?;
    let decrypted = sealer
        .decrypt(&cfg.ciphertext, key.as_ref())
        .map_err(|e| failed("decrypt", e))?;
    info!(
        variant = %key.variant(),
        ciphertext_len = cfg.ciphertext.len(),
        plaintext_len = decrypted.len(),
        "opened ciphertext"
    );
    Ok(decrypted)
}

fn failed(op: &'static str, e: SealError) -> anyhow::Error {
    error!(op, code = e.code(), "{op} failed");
    anyhow::Error::new(e).context(format!("{op} failed"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEMO_CIPHERTEXT;

    #[test]
    fn round_trip_returns_plaintext() {
        let out = round_trip(&Sealer::new(), &Config::default()).unwrap();
        assert_eq!(out.decrypted, "secret");
        assert_ne!(out.ciphertext, "secret");
    }

    #[test]
    fn round_trip_with_aes128_key() {
        let cfg = Config {
            key: "AES128Key-16Char".into(),
            plaintext: "hello, gcm".into(),
            ..Config::default()
        };
        let out = round_trip(&Sealer::new(), &cfg).unwrap();
        assert_eq!(out.decrypted, "hello, gcm");
    }

    #[test]
    fn open_demo_constant() {
        assert_eq!(open(&Sealer::new(), &Config::default()).unwrap(), "secret");
    }

    #[test]
    fn open_with_wrong_key_reports_authentication_failure() {
        let cfg = Config {
            key: "AES256Key-32Characters0987654321".into(),
            ciphertext: DEMO_CIPHERTEXT.into(),
            ..Config::default()
        };
        let err = open(&Sealer::new(), &cfg).unwrap_err();
        assert_eq!(err.to_string(), "decrypt failed");
        assert_eq!(err.root_cause().to_string(), "authentication failed");
    }

    #[test]
    fn open_with_garbage_reports_malformed_encoding() {
        let cfg = Config {
            ciphertext: "%%% not base64 %%%".into(),
            ..Config::default()
        };
        let err = open(&Sealer::new(), &cfg).unwrap_err();
        assert!(err.root_cause().to_string().starts_with("malformed encoding"));
    }

    #[test]
    fn invalid_key_never_reaches_the_sealer() {
        let cfg = Config {
            key: "0123456789".into(),
            ..Config::default()
        };
        let err = round_trip(&Sealer::new(), &cfg).unwrap_err();
        assert!(format!("{err:#}").contains("invalid key size"));
    }
}
