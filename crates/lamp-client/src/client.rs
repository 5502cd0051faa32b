//! Capability kinds and the API handles produced by the factory.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::ApiClient;
use crate::proxy::ProxyConfiguration;

/// Default OpsGenie API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.opsgenie.com";

/// The four API surfaces exposed by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientKind {
    /// Alert lifecycle: create, acknowledge, close, notes.
    Alert,
    /// Heartbeat monitoring pings.
    Heartbeat,
    /// Integration enable/disable.
    Integration,
    /// Alert and notification policy enable/disable.
    Policy,
}

impl ClientKind {
    /// All capability kinds, in a stable order.
    pub const ALL: [Self; 4] = [Self::Alert, Self::Heartbeat, Self::Integration, Self::Policy];

    /// Root path of the capability's v1 JSON API.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Alert => "/v1/json/alert",
            Self::Heartbeat => "/v1/json/heartbeat",
            Self::Integration => "/v1/json/integration",
            Self::Policy => "/v1/json/policy",
        }
    }
}

impl fmt::Display for ClientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alert => write!(f, "alert"),
            Self::Heartbeat => write!(f, "heartbeat"),
            Self::Integration => write!(f, "integration"),
            Self::Policy => write!(f, "policy"),
        }
    }
}

/// Generic client object backing all four capability handles.
///
/// Holds the transport, the fully-resolved API key, and the proxy
/// configuration it was built with. Construction performs no network I/O;
/// the service is first contacted when the consumer issues a request.
#[derive(Debug, Clone)]
pub struct ApiHandle {
    kind: ClientKind,
    http: reqwest::Client,
    api_key: SecretString,
    endpoint: Url,
    proxy: Option<ProxyConfiguration>,
}

impl ApiHandle {
    pub(crate) const fn new(
        kind: ClientKind,
        http: reqwest::Client,
        api_key: SecretString,
        endpoint: Url,
        proxy: Option<ProxyConfiguration>,
    ) -> Self {
        Self {
            kind,
            http,
            api_key,
            endpoint,
            proxy,
        }
    }

    /// Capability kind this handle is bound to.
    #[must_use]
    pub const fn kind(&self) -> ClientKind {
        self.kind
    }

    /// Resolved API key, exposed for request signing by the consumer.
    #[must_use]
    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// Root endpoint of the capability's API.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Proxy configuration attached at construction, if any.
    #[must_use]
    pub const fn proxy(&self) -> Option<&ProxyConfiguration> {
        self.proxy.as_ref()
    }

    /// Underlying HTTP transport.
    #[must_use]
    pub const fn http(&self) -> &reqwest::Client {
        &self.http
    }
}

/// Handle for the Alert API.
#[derive(Debug, Clone)]
pub struct AlertClient(pub(crate) ApiHandle);

/// Handle for the Heartbeat API.
#[derive(Debug, Clone)]
pub struct HeartbeatClient(pub(crate) ApiHandle);

/// Handle for the Integration API.
#[derive(Debug, Clone)]
pub struct IntegrationClient(pub(crate) ApiHandle);

/// Handle for the Policy API.
#[derive(Debug, Clone)]
pub struct PolicyClient(pub(crate) ApiHandle);

impl ApiClient for AlertClient {
    fn handle(&self) -> &ApiHandle {
        &self.0
    }
}

impl ApiClient for HeartbeatClient {
    fn handle(&self) -> &ApiHandle {
        &self.0
    }
}

impl ApiClient for IntegrationClient {
    fn handle(&self) -> &ApiHandle {
        &self.0
    }
}

impl ApiClient for PolicyClient {
    fn handle(&self) -> &ApiHandle {
        &self.0
    }
}
