//! Error types surfaced to the command layer.

use thiserror::Error;

use crate::client::ClientKind;
use crate::output::OutputFormat;

/// Errors a lamp command can hit after configuration is loaded.
///
/// Both variants are non-retryable; the command layer is expected to
/// display the message and exit non-zero. The underlying cause is
/// deliberately not carried — commands show a fixed message per capability
/// or format — but it is logged at debug level where it occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The transport for a capability handle could not be assembled.
    #[error("can not create the {0} client")]
    ClientCreationFailed(ClientKind),

    /// A response object could not be encoded in the requested format.
    #[error("can not serialize the response into {0} format")]
    SerializationFailed(OutputFormat),
}

/// Result type alias using [`ClientError`].
pub type Result<T> = std::result::Result<T, ClientError>;
