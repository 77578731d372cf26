//! Logging utilities.
//!
//! Centralizes logger initialization so binaries and demos configure
//! diagnostics the same way. Only the `log` facade leaks into the rest of
//! the crate.

mod init;

pub use init::{LogConfig, init_logging};
