//! Message types and the HTML payload formatter.
//!
//! A zoom.us chat webhook renders the posted fields as HTML. Each text field
//! is wrapped in a label paragraph, and an optional action becomes a button.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for payload formatting.
#[derive(Debug, Error)]
pub enum MessageError {
    /// The action is neither empty nor one of the recognized values.
    #[error("Invalid action '{0}': expected \"send\" or \"copy\"")]
    InvalidAction(String),

    /// The formatted payload could not be serialized to JSON.
    #[error("Failed to serialize message: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A message to be posted to a zoom.us room.
///
/// All fields are plain text. They are decorated with HTML by
/// [`format_payload`] right before sending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Shown at the top of the message.
    pub title: String,

    /// Shown in the middle of the message.
    pub summary: String,

    /// Main message text.
    pub body: String,

    /// Either empty, `"send"` or `"copy"`.
    ///
    /// A non-empty action renders a button of the same name under the message.
    pub action: String,
}

impl Message {
    /// Creates a message without an action.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        summary: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            body: body.into(),
            action: String::new(),
        }
    }

    /// Sets the action button.
    #[must_use]
    pub fn with_action(mut self, action: Action) -> Self {
        self.action = action.as_str().to_string();
        self
    }

    /// Parses the action field.
    ///
    /// Returns `Ok(None)` when no action is set.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::InvalidAction`] for unrecognized values.
    pub fn parsed_action(&self) -> Result<Option<Action>, MessageError> {
        if self.action.is_empty() {
            return Ok(None);
        }
        self.action.parse().map(Some)
    }
}

/// Interactive button rendered under a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Button invoking the client-side `sendMsg` handler.
    Send,
    /// Button invoking the client-side `copyMsg` handler.
    Copy,
}

impl Action {
    /// Returns the wire name of the action.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Send => "send",
            Self::Copy => "copy",
        }
    }

    /// Renders the button markup for this action.
    #[must_use]
    pub fn render(self) -> String {
        let name = self.as_str();
        match self {
            Self::Send => format!("<p><button onclick=\"sendMsg('1', {name})\">send</button></p>"),
            Self::Copy => format!("<p><button onclick=\"copyMsg('1', {name})\">copy</button></p>"),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = MessageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "send" => Ok(Self::Send),
            "copy" => Ok(Self::Copy),
            other => Err(MessageError::InvalidAction(other.to_string())),
        }
    }
}

/// Wraps a text value in the label paragraph used for every text field.
#[must_use]
pub fn label(value: &str) -> String {
    format!("<p><label>{value}</label></p>")
}

/// Wire representation of a message after HTML decoration.
#[derive(Serialize)]
struct Payload {
    title: String,
    summary: String,
    body: String,
    action: String,
}

impl TryFrom<&Message> for Payload {
    type Error = MessageError;

    fn try_from(msg: &Message) -> Result<Self, Self::Error> {
        let action = msg
            .parsed_action()?
            .map(Action::render)
            .unwrap_or_default();

        Ok(Self {
            title: label(&msg.title),
            summary: label(&msg.summary),
            body: label(&msg.body),
            action,
        })
    }
}

/// Formats a message into the JSON body posted to the webhook.
///
/// Text fields are wrapped with [`label`]; the action, if any, is replaced
/// by its button markup. Values are inserted verbatim without HTML escaping.
///
/// # Errors
///
/// Returns [`MessageError::InvalidAction`] if the action is set to an
/// unrecognized value.
pub fn format_payload(msg: &Message) -> Result<Vec<u8>, MessageError> {
    let payload = Payload::try_from(msg)?;
    Ok(serde_json::to_vec(&payload)?)
}

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;
