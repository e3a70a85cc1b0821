//! Error types for the EasyBroker client.

use serde_json::Value;
use thiserror::Error;

/// Maximum page size accepted by the listings endpoint.
pub const MAX_LIMIT: u32 = 50;

/// Failures surfaced by [`EasyBrokerClient`](crate::easybroker::EasyBrokerClient).
#[derive(Debug, Error)]
pub enum ClientError {
    /// The client was constructed without a credential.
    #[error("No API key provided")]
    MissingApiKey,

    /// A listing request asked for more than [`MAX_LIMIT`] items per page.
    #[error("Limit cannot be greater than {max} (got {limit})", max = MAX_LIMIT)]
    LimitExceeded { limit: u32 },

    /// The API answered with a non-success status. `payload` is the response body as sent.
    #[error("API request failed with status {status}: {payload}")]
    Remote { status: u16, payload: Value },

    /// Connection or protocol failure from the HTTP layer.
    #[error("Transport error: {0}")]
    Transport(#[from] wreq::Error),

    /// The response body was not the JSON shape expected.
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// Returns the remote error payload, if this is a [`ClientError::Remote`].
    pub fn payload(&self) -> Option<&Value> {
        match self {
            ClientError::Remote { payload, .. } => Some(payload),
            _ => None,
        }
    }

    /// Returns the HTTP status of a remote failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, ClientError>;
