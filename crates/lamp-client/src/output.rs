//! Rendering API responses for console display.
//!
//! Commands default to JSON and switch to YAML when the `output-format`
//! flag says so; the `pretty` flag selects an indented JSON layout.

use std::fmt;

use log::debug;
use serde::Serialize;

use crate::error::{ClientError, Result};

/// Console output encodings supported by the commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON, the default.
    Json,
    /// YAML.
    Yaml,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "JSON"),
            Self::Yaml => write!(f, "YAML"),
        }
    }
}

/// Encodes a response object as JSON.
///
/// With `pretty` set, the object is laid out with four-space indentation;
/// otherwise the encoding is compact.
///
/// # Errors
///
/// Returns [`ClientError::SerializationFailed`] when encoding fails; no
/// partial output is produced.
pub fn to_json<T: Serialize>(data: &T, pretty: bool) -> Result<String> {
    let encoded = if pretty {
        pretty_json(data)
    } else {
        serde_json::to_string(data)
    };

    encoded.map_err(|err| {
        debug!("JSON encoding failed: {err}");
        ClientError::SerializationFailed(OutputFormat::Json)
    })
}

/// Encodes a response object as YAML.
///
/// # Errors
///
/// Returns [`ClientError::SerializationFailed`] when encoding fails; no
/// partial output is produced.
pub fn to_yaml<T: Serialize>(data: &T) -> Result<String> {
    serde_yaml::to_string(data).map_err(|err| {
        debug!("YAML encoding failed: {err}");
        ClientError::SerializationFailed(OutputFormat::Yaml)
    })
}

fn pretty_json<T: Serialize>(data: &T) -> serde_json::Result<String> {
    use serde::ser::Error as _;

    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    data.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(serde_json::Error::custom)
}
