//! `open-demo` — decrypt a single ciphertext blob.
//!
//! Opens `SEAL_CIPHERTEXT` (default: a constant sealing `"secret"` under the
//! demo key) and prints the plaintext.

use anyhow::Result;
use seal_cli::{demo, telemetry, Config};
use sealer::Sealer;

fn main() -> Result<()> {
    let cfg = Config::from_env().map_err(|e| {
        eprintln!("ERROR: configuration invalid: {e:#}");
        e
    })?;

    telemetry::init(&cfg.log_level)?;

    let decrypted = demo::open(&Sealer::new(), &cfg)?;
    println!("Decrypt: {} -> {}", cfg.ciphertext, decrypted);

    Ok(())
}
