//! Request aggregates for the send operations.

use super::email::{Destination, Message, RawMessage};

/// Request for `SendEmail`.
///
/// `None` and empty lists are left out of the request entirely.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SendEmailRequest {
    /// Sender address.
    pub source: Option<String>,
    /// Recipients.
    pub destination: Destination,
    /// Subject and body.
    pub message: Message,
    /// Reply-To addresses.
    pub reply_to_addresses: Vec<String>,
    /// Address that receives bounces.
    pub return_path: Option<String>,
}

impl SendEmailRequest {
    /// Create a request with sender, recipients and message.
    pub fn new(source: impl Into<String>, destination: Destination, message: Message) -> Self {
        Self {
            source: Some(source.into()),
            destination,
            message,
            ..Default::default()
        }
    }
}

/// Request for `SendRawEmail`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SendRawEmailRequest {
    /// Sender address; taken from the MIME headers when `None`.
    pub source: Option<String>,
    /// Envelope recipients; taken from the MIME headers when empty.
    pub destinations: Vec<String>,
    /// The MIME message.
    pub raw_message: RawMessage,
}

impl SendRawEmailRequest {
    /// Create a request carrying only the raw message.
    pub fn new(raw_message: RawMessage) -> Self {
        Self {
            raw_message,
            ..Default::default()
        }
    }

    /// Set the sender address.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Add an envelope recipient.
    pub fn add_destination(mut self, address: impl Into<String>) -> Self {
        self.destinations.push(address.into());
        self
    }
}
