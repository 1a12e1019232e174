//! zoomus: zoom.us incoming webhook client
//!
//! A library for formatting short messages as HTML-decorated JSON
//! and posting them to a zoom.us chat webhook.

pub mod config;
pub mod message;
pub mod webhook;

pub use config::WebhookConfig;
pub use message::{Action, Message, MessageError};
pub use webhook::{WebhookClient, WebhookError};
