//! Outbound proxy configuration derived from lamp settings.

use lamp_common::ProxySettings;
use url::Url;

/// Connection-forwarding parameters applied to a handle's outbound calls.
///
/// A fresh value is derived from [`ProxySettings`] on every client
/// construction; it has no identity of its own beyond the handle holding
/// it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfiguration {
    /// Proxy host name or address.
    pub host: String,
    /// Proxy port.
    pub port: u16,
    /// Username for proxy authentication.
    pub username: Option<String>,
    /// Password for proxy authentication.
    pub password: Option<String>,
    /// Whether to reach the proxy over TLS.
    pub secured: bool,
}

impl ProxyConfiguration {
    /// Derives the effective proxy configuration from the config file's
    /// proxy block.
    ///
    /// Host, port, and the secured flag are always copied. Credentials are
    /// attached only when both username and password are non-empty; a lone
    /// username or password is dropped, matching the behavior packaged
    /// integrations have relied on.
    #[must_use]
    pub fn from_settings(settings: &ProxySettings) -> Self {
        let (username, password) = if !settings.username.is_empty() && !settings.password.is_empty()
        {
            (
                Some(settings.username.clone()),
                Some(settings.password.clone()),
            )
        } else {
            (None, None)
        };

        Self {
            host: settings.host.clone(),
            port: settings.port,
            username,
            password,
            secured: settings.secured,
        }
    }

    /// Whether credentials will be sent to the proxy.
    #[must_use]
    pub const fn has_credentials(&self) -> bool {
        self.username.is_some() && self.password.is_some()
    }

    /// Proxy address as a URL, `https` when the secured flag is set.
    ///
    /// # Errors
    ///
    /// Fails when the host does not form a valid URL authority.
    pub fn url(&self) -> Result<Url, url::ParseError> {
        let scheme = if self.secured { "https" } else { "http" };
        Url::parse(&format!("{scheme}://{}:{}", self.host, self.port))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]

    use super::*;

    fn settings(username: &str, password: &str) -> ProxySettings {
        ProxySettings {
            enabled: true,
            username: username.to_string(),
            password: password.to_string(),
            host: "proxy.internal".to_string(),
            port: 3128,
            secured: false,
        }
    }

    #[test]
    fn test_host_port_secured_always_copied() {
        let proxy = ProxyConfiguration::from_settings(&ProxySettings {
            secured: true,
            ..settings("", "")
        });

        assert_eq!(proxy.host, "proxy.internal");
        assert_eq!(proxy.port, 3128);
        assert!(proxy.secured);
        assert!(!proxy.has_credentials());
    }

    #[test]
    fn test_both_credentials_attached() {
        let proxy = ProxyConfiguration::from_settings(&settings("u", "p"));

        assert_eq!(proxy.username.as_deref(), Some("u"));
        assert_eq!(proxy.password.as_deref(), Some("p"));
        assert!(proxy.has_credentials());
    }

    #[test]
    fn test_lone_username_dropped() {
        let proxy = ProxyConfiguration::from_settings(&settings("u", ""));

        assert_eq!(proxy.username, None);
        assert_eq!(proxy.password, None);
    }

    #[test]
    fn test_lone_password_dropped() {
        let proxy = ProxyConfiguration::from_settings(&settings("", "p"));

        assert_eq!(proxy.username, None);
        assert_eq!(proxy.password, None);
    }

    #[test]
    fn test_url_scheme_follows_secured_flag() {
        let plain = ProxyConfiguration::from_settings(&settings("", ""));
        assert_eq!(plain.url().unwrap().as_str(), "http://proxy.internal:3128/");

        let secured = ProxyConfiguration::from_settings(&ProxySettings {
            secured: true,
            ..settings("", "")
        });
        assert_eq!(secured.url().unwrap().scheme(), "https");
    }

    #[test]
    fn test_empty_host_is_invalid() {
        let proxy = ProxyConfiguration::from_settings(&ProxySettings {
            host: String::new(),
            ..settings("", "")
        });
        assert!(proxy.url().is_err());
    }
}
