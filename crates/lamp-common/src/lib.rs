//! # lamp-common
//!
//! Configuration model for the lamp command toolkit.
//!
//! Lamp commands share a single configuration file shipped with the
//! integration package, located through the `LAMP_HOME` environment
//! variable. This crate loads that file into an immutable [`LampConfig`]
//! value that the command layer passes down to the client factory; nothing
//! here keeps global state.
//!
//! ## Example
//!
//! ```no_run
//! use lamp_common::LampConfig;
//!
//! # fn example() -> lamp_common::Result<()> {
//! let config = LampConfig::load()?;
//! if config.proxy.enabled {
//!     println!("outbound calls go through {}:{}", config.proxy.host, config.proxy.port);
//! }
//! # Ok(())
//! # }
//! ```

/// Configuration types and ini-file loading.
pub mod config;
/// Error types for configuration loading.
pub mod error;
/// Locating the lamp installation and its configuration file.
pub mod paths;

pub use config::{LampConfig, ProxySettings};
pub use error::{ConfigError, Result};
