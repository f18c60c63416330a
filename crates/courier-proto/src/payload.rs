use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tag::Tag;

/// A routed text message.
///
/// Field names are fixed by the wire format: the JSON body is
/// `{"Message": …, "To": …, "From": …}`, in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Message text.
    #[serde(rename = "Message")]
    pub text: String,
    /// Recipient.
    #[serde(rename = "To")]
    pub to: String,
    /// Sender.
    #[serde(rename = "From")]
    pub from: String,
}

impl Message {
    /// Create a message addressed from `from` to `to`.
    pub fn new(text: impl Into<String>, to: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            to: to.into(),
            from: from.into(),
        }
    }
}

impl fmt::Display for Message {
    /// Renders the message as its JSON body text. Display cannot fail,
    /// so a serialization error renders as the empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => f.write_str(&json),
            Err(_) => Ok(()),
        }
    }
}

/// An error report carried as a raw string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorText(String);

impl ErrorText {
    /// Wrap an error string.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The error text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the error text.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<&str> for ErrorText {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl From<String> for ErrorText {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl fmt::Display for ErrorText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A wire payload.
///
/// Closed over exactly three variants; the dispatcher matches it
/// exhaustively and each variant carries its own [`Tag`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Liveness ping; zero-length body.
    Heartbeat,
    /// Routed text message.
    Message(Message),
    /// Error report.
    Error(ErrorText),
}

impl Payload {
    /// The wire tag bound to this variant.
    pub fn tag(&self) -> Tag {
        match self {
            Payload::Heartbeat => Tag::Heartbeat,
            Payload::Message(_) => Tag::Message,
            Payload::Error(_) => Tag::Error,
        }
    }

    /// Raw byte rendering of the payload content, before any wire
    /// encoding: JSON for messages, the raw string for errors, empty
    /// for heartbeats.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Payload::Heartbeat => Vec::new(),
            Payload::Message(message) => serde_json::to_vec(message).unwrap_or_default(),
            Payload::Error(error) => error.as_str().as_bytes().to_vec(),
        }
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Heartbeat => Ok(()),
            Payload::Message(message) => fmt::Display::fmt(message, f),
            Payload::Error(error) => fmt::Display::fmt(error, f),
        }
    }
}

impl From<Message> for Payload {
    fn from(message: Message) -> Self {
        Payload::Message(message)
    }
}

impl From<ErrorText> for Payload {
    fn from(error: ErrorText) -> Self {
        Payload::Error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_display_uses_wire_field_names() {
        let message = Message::new("Hello, world", "John Doe", "Jane Doe");
        assert_eq!(
            message.to_string(),
            r#"{"Message":"Hello, world","To":"John Doe","From":"Jane Doe"}"#
        );
    }

    #[test]
    fn message_json_round_trips() {
        let message = Message::new("hi", "a", "b");
        let parsed: Message = serde_json::from_str(&message.to_string()).unwrap();
        assert_eq!(parsed, message);
    }

    #[test]
    fn heartbeat_renders_empty() {
        assert_eq!(Payload::Heartbeat.to_string(), "");
        assert!(Payload::Heartbeat.to_bytes().is_empty());
    }

    #[test]
    fn error_text_renders_raw() {
        let payload = Payload::Error(ErrorText::new("Something went wrong"));
        assert_eq!(payload.to_string(), "Something went wrong");
        assert_eq!(payload.to_bytes(), b"Something went wrong");
    }

    #[test]
    fn variants_carry_their_own_tags() {
        assert_eq!(Payload::Heartbeat.tag(), Tag::Heartbeat);
        assert_eq!(Payload::Message(Message::default()).tag(), Tag::Message);
        assert_eq!(Payload::Error(ErrorText::default()).tag(), Tag::Error);
    }

    #[test]
    fn payload_bytes_match_display() {
        let message = Payload::Message(Message::new("x", "y", "z"));
        assert_eq!(message.to_bytes(), message.to_string().into_bytes());
    }
}
