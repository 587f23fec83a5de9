//! Error types for UUID client operations.

use thiserror::Error;

/// Errors that can occur while building a client or fetching an identifier.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Client could not be constructed (missing transport, bad base URL).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Request could not be built from the derived URL.
    #[error("Request error: {0}")]
    Request(String),

    /// Network-level failure (DNS, connection refused, timeout, etc.).
    #[error("Transport error: {0}")]
    Transport(String),

    /// Response body could not be read to the end.
    #[error("Failed to read response body: {0}")]
    BodyRead(String),

    /// Service answered with a zero-length body.
    #[error("Response body empty (status {status})")]
    EmptyResponse { status: u16 },
}
