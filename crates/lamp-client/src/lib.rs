//! # lamp-client
//!
//! Client construction and result formatting for the lamp command toolkit.
//!
//! Lamp commands talk to four OpsGenie API surfaces: alerts, heartbeats,
//! integrations, and escalation policies. This crate turns a loaded
//! [`lamp_common::LampConfig`] into capability-specific client handles,
//! wiring in the configured outbound proxy, and renders API responses as
//! JSON or YAML for console display. No network I/O happens here; requests,
//! retries, and response parsing belong to the consumer issuing calls
//! through a handle.
//!
//! ## Example
//!
//! ```no_run
//! use lamp_client::{ApiClient, ClientFactory, to_json};
//! use lamp_common::LampConfig;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let factory = ClientFactory::new(LampConfig::load()?);
//!
//! // An explicit key (e.g. from a command-line flag) wins over the
//! // configured one.
//! let api_key = factory.resolve_api_key(None);
//! let alert = factory.alert_client(api_key)?;
//! println!("alert API at {}", alert.endpoint());
//!
//! let response = serde_json::json!({ "status": "successful" });
//! println!("{}", to_json(&response, true)?);
//! # Ok(())
//! # }
//! ```

use url::Url;

/// Capability kinds and the handles produced by the factory.
pub mod client;
/// Error types surfaced to the command layer.
pub mod error;
/// The client factory.
pub mod factory;
/// Rendering API responses for console display.
pub mod output;
/// Outbound proxy configuration derived from lamp settings.
pub mod proxy;

pub use client::{
    AlertClient, ApiHandle, ClientKind, DEFAULT_API_URL, HeartbeatClient, IntegrationClient,
    PolicyClient,
};
pub use error::{ClientError, Result};
pub use factory::ClientFactory;
pub use output::{OutputFormat, to_json, to_yaml};
pub use proxy::ProxyConfiguration;

/// Uniform surface over the four capability handles.
///
/// The command layer wires flags and display logic against this trait;
/// the capability-specific types keep call sites honest about which API
/// they talk to.
pub trait ApiClient {
    /// The generic handle backing this client.
    fn handle(&self) -> &ApiHandle;

    /// Capability kind this handle is bound to.
    fn kind(&self) -> ClientKind {
        self.handle().kind()
    }

    /// Resolved API key the handle was constructed with.
    fn api_key(&self) -> &str {
        self.handle().api_key()
    }

    /// Proxy configuration attached at construction, if any.
    fn proxy(&self) -> Option<&ProxyConfiguration> {
        self.handle().proxy()
    }

    /// Root endpoint of the capability's API.
    fn endpoint(&self) -> &Url {
        self.handle().endpoint()
    }
}
