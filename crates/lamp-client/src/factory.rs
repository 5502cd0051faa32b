//! Construction of capability-specific API clients.

use lamp_common::LampConfig;
use log::debug;
use secrecy::SecretString;
use url::Url;

use crate::client::{
    AlertClient, ApiHandle, ClientKind, DEFAULT_API_URL, HeartbeatClient, IntegrationClient,
    PolicyClient,
};
use crate::error::{ClientError, Result};
use crate::proxy::ProxyConfiguration;

/// Builds capability-specific API clients from lamp configuration.
///
/// The factory owns an immutable [`LampConfig`] snapshot taken at startup;
/// every construction reads from it and derives a fresh
/// [`ProxyConfiguration`] when proxy use is enabled.
#[derive(Debug, Clone)]
pub struct ClientFactory {
    config: LampConfig,
    base_url: String,
}

impl ClientFactory {
    /// Creates a factory over the given configuration.
    #[must_use]
    pub fn new(config: LampConfig) -> Self {
        Self {
            config,
            base_url: DEFAULT_API_URL.to_string(),
        }
    }

    /// Overrides the API base URL.
    ///
    /// Useful for pointing commands at a test endpoint.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Resolves the API key for a command invocation.
    ///
    /// An explicitly supplied key (typically the `apiKey` command-line
    /// flag) wins over the configured one; there are no other precedence
    /// tiers.
    #[must_use]
    pub fn resolve_api_key(&self, explicit: Option<&str>) -> SecretString {
        explicit.map_or_else(
            || self.config.api_key.clone(),
            |key| SecretString::new(key.into()),
        )
    }

    /// Creates a handle for the Alert API.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::ClientCreationFailed`] when the underlying
    /// transport cannot be assembled.
    pub fn alert_client(&self, api_key: SecretString) -> Result<AlertClient> {
        Ok(AlertClient(self.build(ClientKind::Alert, api_key)?))
    }

    /// Creates a handle for the Heartbeat API.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::ClientCreationFailed`] when the underlying
    /// transport cannot be assembled.
    pub fn heartbeat_client(&self, api_key: SecretString) -> Result<HeartbeatClient> {
        Ok(HeartbeatClient(self.build(ClientKind::Heartbeat, api_key)?))
    }

    /// Creates a handle for the Integration API.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::ClientCreationFailed`] when the underlying
    /// transport cannot be assembled.
    pub fn integration_client(&self, api_key: SecretString) -> Result<IntegrationClient> {
        Ok(IntegrationClient(
            self.build(ClientKind::Integration, api_key)?,
        ))
    }

    /// Creates a handle for the Policy API.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::ClientCreationFailed`] when the underlying
    /// transport cannot be assembled.
    pub fn policy_client(&self, api_key: SecretString) -> Result<PolicyClient> {
        Ok(PolicyClient(self.build(ClientKind::Policy, api_key)?))
    }

    /// Shared construction path for all four capabilities.
    ///
    /// The proxy configuration is attached only when proxy use is enabled;
    /// any assembly failure collapses into `ClientCreationFailed` for the
    /// requested kind, with the cause logged at debug level.
    fn build(&self, kind: ClientKind, api_key: SecretString) -> Result<ApiHandle> {
        let endpoint = Url::parse(&self.base_url)
            .and_then(|base| base.join(kind.path()))
            .map_err(|err| {
                debug!("invalid API base url for the {kind} client: {err}");
                ClientError::ClientCreationFailed(kind)
            })?;

        let proxy = self
            .config
            .proxy
            .enabled
            .then(|| ProxyConfiguration::from_settings(&self.config.proxy));

        let mut builder = reqwest::Client::builder();
        if let Some(config) = &proxy {
            let address = config.url().map_err(|err| {
                debug!("invalid proxy address for the {kind} client: {err}");
                ClientError::ClientCreationFailed(kind)
            })?;

            let mut forward = reqwest::Proxy::all(address).map_err(|err| {
                debug!("can not install the proxy for the {kind} client: {err}");
                ClientError::ClientCreationFailed(kind)
            })?;
            if let (Some(username), Some(password)) =
                (config.username.as_deref(), config.password.as_deref())
            {
                forward = forward.basic_auth(username, password);
            }
            builder = builder.proxy(forward);
        }

        let http = builder.build().map_err(|err| {
            debug!("can not build the transport for the {kind} client: {err}");
            ClientError::ClientCreationFailed(kind)
        })?;

        debug!("created the {kind} client for {endpoint}");
        Ok(ApiHandle::new(kind, http, api_key, endpoint, proxy))
    }
}
