//! `seal-demo` — encrypt a plaintext, then decrypt it again.
//!
//! Startup sequence:
//! 1. Load and validate [`Config`] from `SEAL_*` environment variables.
//! 2. Initialise structured JSON logging.
//! 3. Seal the configured plaintext, open the result, print both steps.

use anyhow::Result;
use seal_cli::{demo, telemetry, Config};
use sealer::Sealer;

fn main() -> Result<()> {
    // -----------------------------------------------------------------------
    // 1. Configuration
    // -----------------------------------------------------------------------
    let cfg = Config::from_env().map_err(|e| {
        // Telemetry is not yet up; write to stderr directly.
        eprintln!("ERROR: configuration invalid: {e:#}");
        e
    })?;

    // -----------------------------------------------------------------------
    // 2. Telemetry
    // -----------------------------------------------------------------------
    telemetry::init(&cfg.log_level)?;

    // -----------------------------------------------------------------------
    // 3. Round trip
    // -----------------------------------------------------------------------
    let out = demo::round_trip(&Sealer::new(), &cfg)?;
    println!("Encrypt: {} -> {}", cfg.plaintext, out.ciphertext);
    println!("Decrypt: {} -> {}", out.ciphertext, out.decrypted);

    Ok(())
}
