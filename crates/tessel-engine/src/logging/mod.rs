//! Logging utilities.
//!
//! The library itself only talks to the `log` facade; hosts call `init_logging`
//! early in `main` to get the `env_logger` backend.

mod init;

pub use init::{init_logging, LoggingConfig};
