//! Command implementations for the CLI
//!
//! - test: Test configuration validity
//! - log: Send one request through the loggers

pub mod log;
