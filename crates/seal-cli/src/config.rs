//! Configuration loading and validation for the demo binaries.
//!
//! Values are read from `SEAL_`-prefixed environment variables. Every field
//! has a demo default, so both binaries run with no environment at all.

use std::fmt;

use anyhow::{Context, Result};
use sealer::SymmetricKey;
use serde::Deserialize;

/// Demo key. Real callers must supply their own through `SEAL_KEY`.
pub const DEMO_KEY: &str = "AES256Key-32Characters1234567890";

/// `"secret"` sealed under [`DEMO_KEY`].
pub const DEMO_CIPHERTEXT: &str = "AQIDBAUGBwgJCgsMvP+CPNtfFDBwHXVbpaKTUA4fwCs8Tw==";

/// Validated demo configuration.
#[derive(Clone, Deserialize)]
pub struct Config {
    /// AES key as text; its byte length must be 16, 24 or 32.
    #[serde(default = "default_key")]
    pub key: String,

    /// Plaintext sealed and reopened by `seal-demo`.
    #[serde(default = "default_plaintext")]
    pub plaintext: String,

    /// Base64 blob opened by `open-demo`.
    #[serde(default = "default_ciphertext")]
    pub ciphertext: String,

    /// Tracing log level (e.g. `"info"`, `"debug"`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_key() -> String {
    DEMO_KEY.into()
}
fn default_plaintext() -> String {
    "secret".into()
}
fn default_ciphertext() -> String {
    DEMO_CIPHERTEXT.into()
}
fn default_log_level() -> String {
    "info".into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            key: default_key(),
            plaintext: default_plaintext(),
            ciphertext: default_ciphertext(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load and validate configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or fails validation.
    pub fn from_env() -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::with_prefix("SEAL"))
            .build()
            .context("failed to build configuration from environment")?;

        let c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise configuration")?;

        c.validate()?;
        Ok(c)
    }

    /// The configured key, checked for a valid AES length.
    pub fn symmetric_key(&self) -> Result<SymmetricKey> {
        SymmetricKey::new(self.key.as_bytes()).context("SEAL_KEY is not a valid AES key")
    }

    fn validate(&self) -> Result<()> {
        self.symmetric_key()?;
        if self.ciphertext.trim().is_empty() {
            anyhow::bail!("SEAL_CIPHERTEXT must not be empty");
        }
        Ok(())
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("key", &"[REDACTED]")
            .field("plaintext_len", &self.plaintext.len())
            .field("ciphertext", &self.ciphertext)
            .field("log_level", &self.log_level)
            .finish()
    }
}
