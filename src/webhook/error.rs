//! Error types for webhook delivery.

use thiserror::Error;

use crate::message::MessageError;

/// Error type for HTTP transport operations.
///
/// Describes what went wrong on the wire. Nothing is retried internally;
/// the caller decides whether to try again.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed before a response arrived.
    ///
    /// This includes DNS resolution failures and connection refused.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    ///
    /// Only occurs when the transport was configured with a timeout.
    #[error("Request timed out")]
    Timeout,

    /// The request could not be built from the given parts.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The transport itself could not be initialized.
    ///
    /// Raised at construction time, before any request exists.
    #[error("Failed to initialize HTTP client: {0}")]
    Init(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error type for [`WebhookClient`](super::WebhookClient) operations.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The webhook URL or token is missing or malformed.
    #[error("Invalid webhook configuration: {reason}")]
    Config {
        /// What was wrong with the configuration
        reason: String,
    },

    /// The message could not be turned into a request body.
    #[error("Failed to format message: {0}")]
    Message(#[from] MessageError),

    /// The request could not be sent or its response could not be read.
    #[error("Failed to send request: {0}")]
    Transport(#[from] HttpError),

    /// The webhook answered with a status other than 200 OK.
    #[error("HTTP request failed: status: {status}: url={url}")]
    Remote {
        /// Status code returned by the webhook
        status: http::StatusCode,
        /// Endpoint the request was sent to
        url: url::Url,
    },

    /// The send was cancelled before the round trip completed.
    #[error("Send cancelled")]
    Cancelled,
}

impl WebhookError {
    pub(crate) fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}
