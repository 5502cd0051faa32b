//! Locating the lamp installation and its configuration file.
//!
//! The installation root comes from the `LAMP_HOME` environment variable,
//! set by the integration install scripts. The configuration file lives at
//! a fixed path below it.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Configuration file location, relative to `LAMP_HOME`.
pub const CONF_FILE: &str = "conf/opsgenie-integration.conf";

/// Returns the lamp installation root from `LAMP_HOME`.
///
/// # Errors
///
/// Returns [`ConfigError::HomeNotSet`] if the variable is unset or empty.
pub fn lamp_home() -> Result<PathBuf> {
    home_from(env::var_os("LAMP_HOME"))
}

/// Returns the full path of the integration configuration file.
///
/// # Errors
///
/// Returns [`ConfigError::HomeNotSet`] if `LAMP_HOME` is unset or empty.
pub fn conf_file_path() -> Result<PathBuf> {
    Ok(lamp_home()?.join(CONF_FILE))
}

fn home_from(value: Option<OsString>) -> Result<PathBuf> {
    value
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
        .ok_or(ConfigError::HomeNotSet)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn test_home_from_value() {
        let home = home_from(Some(OsString::from("/opt/lamp"))).unwrap();
        assert_eq!(home, PathBuf::from("/opt/lamp"));
    }

    #[test]
    fn test_home_missing() {
        assert!(matches!(home_from(None), Err(ConfigError::HomeNotSet)));
    }

    #[test]
    fn test_home_empty_counts_as_missing() {
        let result = home_from(Some(OsString::new()));
        assert!(matches!(result, Err(ConfigError::HomeNotSet)));
    }

    #[test]
    fn test_conf_file_location() {
        let path = home_from(Some(OsString::from("/opt/lamp")))
            .unwrap()
            .join(CONF_FILE);
        assert_eq!(
            path,
            PathBuf::from("/opt/lamp/conf/opsgenie-integration.conf")
        );
    }
}
