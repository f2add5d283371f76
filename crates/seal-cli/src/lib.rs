//! Configuration, telemetry and demo flows shared by the `seal-demo` and
//! `open-demo` binaries.

pub mod config;
pub mod demo;
pub mod telemetry;

pub use config::Config;
