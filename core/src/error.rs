//! Error types for the employee API client.
//!
//! # Design
//! Non-2xx responses keep the raw status code and body for diagnostics, but
//! no variant ever reaches the user directly: the store collapses every
//! mutation failure into one generic notice and routes the detail to the
//! `log` facade instead.

use thiserror::Error;

/// Errors produced while building, executing, or parsing an API call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The request never completed at the network level.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}
