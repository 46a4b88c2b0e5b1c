//! Logging setup.
//!
//! The library itself only talks to the `log` facade. Binaries that want
//! output call [`init_logging`] once at startup.

mod init;

pub use init::{init_logging, LoggingConfig};
