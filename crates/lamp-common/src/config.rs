//! Lamp configuration parsed from the integration's ini-style file.
//!
//! ## Example configuration
//!
//! ```ini
//! [Lamp]
//! ApiKey = 52a4cf31-85e6-4a58-9b5b-1430e7e2d2b5
//!
//! [Proxy]
//! Enabled = true
//! Username = lamp
//! Password = hunter2
//! Host = proxy.internal
//! Port = 3128
//! Secured = false
//! ```
//!
//! Absent sections and keys fall back to empty/false/zero values, matching
//! what packaged integrations ship with when the proxy block is left out.

use std::path::Path;

use ini::{Ini, Properties};
use log::debug;
use secrecy::SecretString;

use crate::error::{ConfigError, Result};
use crate::paths;

/// Configuration for a lamp invocation, immutable after load.
///
/// The API key is stored with the `secrecy` crate so it never shows up in
/// debug output or logs.
#[derive(Debug, Clone)]
pub struct LampConfig {
    /// API key used when the caller does not supply one explicitly.
    ///
    /// May be empty; this layer does not validate it, the service rejects
    /// unauthenticated requests on first use.
    pub api_key: SecretString,
    /// Outbound proxy settings.
    pub proxy: ProxySettings,
}

/// Proxy block of the configuration file.
///
/// Plain field-for-field view of the `[Proxy]` section; the client crate
/// derives the effective proxy configuration from it per construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProxySettings {
    /// Whether outbound calls go through the proxy at all.
    pub enabled: bool,
    /// Proxy username, empty when unauthenticated.
    pub username: String,
    /// Proxy password, empty when unauthenticated.
    pub password: String,
    /// Proxy host name or address.
    pub host: String,
    /// Proxy port.
    pub port: u16,
    /// Whether to reach the proxy over TLS.
    pub secured: bool,
}

impl LampConfig {
    /// Loads configuration from `${LAMP_HOME}/conf/opsgenie-integration.conf`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `LAMP_HOME` is unset or empty
    /// - The file cannot be read or is not valid ini
    /// - A proxy value does not parse as its expected type
    pub fn load() -> Result<Self> {
        let path = paths::conf_file_path()?;
        debug!("loading lamp configuration from {}", path.display());
        Self::from_file(&path)
    }

    /// Loads configuration from an explicit file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = Ini::load_from_file(path)?;
        Self::from_ini(&file)
    }

    fn from_ini(file: &Ini) -> Result<Self> {
        let lamp = file.section(Some("Lamp"));
        let proxy = file.section(Some("Proxy"));

        Ok(Self {
            api_key: SecretString::new(get_str(lamp, "ApiKey").into()),
            proxy: ProxySettings {
                enabled: get_bool(proxy, "Proxy", "Enabled")?,
                username: get_str(proxy, "Username"),
                password: get_str(proxy, "Password"),
                host: get_str(proxy, "Host"),
                port: get_port(proxy, "Proxy", "Port")?,
                secured: get_bool(proxy, "Proxy", "Secured")?,
            },
        })
    }
}

fn get_str(section: Option<&Properties>, key: &str) -> String {
    section
        .and_then(|props| props.get(key))
        .unwrap_or("")
        .to_string()
}

fn get_bool(
    section: Option<&Properties>,
    section_name: &'static str,
    key: &'static str,
) -> Result<bool> {
    match section.and_then(|props| props.get(key)) {
        None => Ok(false),
        Some(raw) => match raw.trim() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            other => Err(ConfigError::InvalidValue {
                section: section_name,
                key,
                value: other.to_string(),
            }),
        },
    }
}

fn get_port(
    section: Option<&Properties>,
    section_name: &'static str,
    key: &'static str,
) -> Result<u16> {
    match section.and_then(|props| props.get(key)) {
        None => Ok(0),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
            section: section_name,
            key,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]

    use std::fs;

    use secrecy::ExposeSecret;

    use super::*;

    fn sample_conf() -> &'static str {
        r"
[Lamp]
ApiKey = 52a4cf31-85e6-4a58-9b5b-1430e7e2d2b5

[Proxy]
Enabled = true
Username = lamp
Password = hunter2
Host = proxy.internal
Port = 3128
Secured = false
"
    }

    fn parse(contents: &str) -> Result<LampConfig> {
        let file = Ini::load_from_str(contents).unwrap();
        LampConfig::from_ini(&file)
    }

    #[test]
    fn test_parse_full_config() {
        let config = parse(sample_conf()).unwrap();

        assert_eq!(
            config.api_key.expose_secret(),
            "52a4cf31-85e6-4a58-9b5b-1430e7e2d2b5"
        );
        assert!(config.proxy.enabled);
        assert_eq!(config.proxy.username, "lamp");
        assert_eq!(config.proxy.password, "hunter2");
        assert_eq!(config.proxy.host, "proxy.internal");
        assert_eq!(config.proxy.port, 3128);
        assert!(!config.proxy.secured);
    }

    #[test]
    fn test_absent_proxy_section_defaults() {
        let config = parse("[Lamp]\nApiKey = key\n").unwrap();

        assert_eq!(config.proxy, ProxySettings::default());
        assert!(!config.proxy.enabled);
        assert_eq!(config.proxy.port, 0);
    }

    #[test]
    fn test_absent_api_key_is_empty() {
        let config = parse("[Proxy]\nEnabled = false\n").unwrap();
        assert_eq!(config.api_key.expose_secret(), "");
    }

    #[test]
    fn test_numeric_bools_accepted() {
        let config = parse("[Proxy]\nEnabled = 1\nSecured = 0\n").unwrap();
        assert!(config.proxy.enabled);
        assert!(!config.proxy.secured);
    }

    #[test]
    fn test_invalid_bool_rejected() {
        let result = parse("[Proxy]\nEnabled = maybe\n");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                section: "Proxy",
                key: "Enabled",
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_port_rejected() {
        let result = parse("[Proxy]\nPort = eight\n");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                section: "Proxy",
                key: "Port",
                ..
            })
        ));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("opsgenie-integration.conf");
        fs::write(&path, sample_conf()).unwrap();

        let config = LampConfig::from_file(&path).unwrap();
        assert_eq!(config.proxy.host, "proxy.internal");
    }

    #[test]
    fn test_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let result = LampConfig::from_file(&dir.path().join("nope.conf"));
        assert!(matches!(result, Err(ConfigError::Ini(_))));
    }
}
