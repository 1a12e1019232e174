//! Webhook layer for posting messages to zoom.us.
//!
//! This module provides:
//! - Transport-neutral request/response types ([`HttpRequest`], [`HttpResponse`])
//! - The transport seam ([`HttpClient`]) and its reqwest implementation ([`ReqwestClient`])
//! - The webhook client itself ([`WebhookClient`])

mod client;
mod error;
mod http;
mod sender;

#[cfg(test)]
mod http_tests;
#[cfg(test)]
mod test_fixtures;

pub use client::ReqwestClient;
pub use error::{HttpError, WebhookError};
pub use http::{HttpClient, HttpRequest, HttpResponse};
pub use sender::{WebhookClient, ZOOM_TOKEN_HEADER};
