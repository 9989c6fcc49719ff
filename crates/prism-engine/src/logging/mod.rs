//! Logging setup.
//!
//! The engine and the demo log through the `log` facade; this module installs
//! `env_logger` as the backend exactly once.

mod init;

pub use init::{init_logging, LoggingConfig};
