//! Email message types.

/// A piece of text with an optional character set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Content {
    /// The text itself.
    pub data: String,
    /// Character set of `data`; omitted from the request when `None`.
    pub charset: Option<String>,
}

impl Content {
    /// Create content without a charset.
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            charset: None,
        }
    }

    /// Create UTF-8 content.
    pub fn utf8(data: impl Into<String>) -> Self {
        Self::new(data).with_charset("UTF-8")
    }

    /// Set the charset.
    pub fn with_charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = Some(charset.into());
        self
    }
}

/// Message body; either part may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Body {
    /// Plain text part.
    pub text: Option<Content>,
    /// HTML part.
    pub html: Option<Content>,
}

/// A formatted message: subject plus body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Message {
    /// Subject line.
    pub subject: Option<Content>,
    /// Body parts.
    pub body: Body,
}

impl Message {
    /// A UTF-8 plain text message.
    ///
    /// # Example
    ///
    /// ```
    /// use integrations_aws_ses_query::types::Message;
    ///
    /// let message = Message::text("Hello", "Plain body");
    /// assert_eq!(message.subject.unwrap().charset.as_deref(), Some("UTF-8"));
    /// assert!(message.body.html.is_none());
    /// ```
    pub fn text(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            subject: Some(Content::utf8(subject)),
            body: Body {
                text: Some(Content::utf8(body)),
                html: None,
            },
        }
    }

    /// A UTF-8 HTML message.
    pub fn html(subject: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            subject: Some(Content::utf8(subject)),
            body: Body {
                text: None,
                html: Some(Content::utf8(html)),
            },
        }
    }

    /// Add or replace the plain text part.
    pub fn with_text(mut self, text: Content) -> Self {
        self.body.text = Some(text);
        self
    }

    /// Add or replace the HTML part.
    pub fn with_html(mut self, html: Content) -> Self {
        self.body.html = Some(html);
        self
    }
}

/// Email recipients. Empty lists are not sent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Destination {
    /// "To" recipients.
    pub to_addresses: Vec<String>,
    /// "CC" recipients.
    pub cc_addresses: Vec<String>,
    /// "BCC" recipients.
    pub bcc_addresses: Vec<String>,
}

impl Destination {
    /// Create an empty destination.
    pub fn new() -> Self {
        Self::default()
    }

    /// A destination with a single "To" recipient.
    pub fn to(address: impl Into<String>) -> Self {
        Self::new().add_to(address)
    }

    /// Add a "To" recipient.
    pub fn add_to(mut self, address: impl Into<String>) -> Self {
        self.to_addresses.push(address.into());
        self
    }

    /// Add a "CC" recipient.
    pub fn add_cc(mut self, address: impl Into<String>) -> Self {
        self.cc_addresses.push(address.into());
        self
    }

    /// Add a "BCC" recipient.
    pub fn add_bcc(mut self, address: impl Into<String>) -> Self {
        self.bcc_addresses.push(address.into());
        self
    }

    /// Total number of recipients.
    pub fn recipient_count(&self) -> usize {
        self.to_addresses.len() + self.cc_addresses.len() + self.bcc_addresses.len()
    }

    /// Whether there are no recipients at all.
    pub fn is_empty(&self) -> bool {
        self.recipient_count() == 0
    }
}

/// A complete MIME message, headers included.
///
/// The bytes are base64-encoded when the request is built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawMessage {
    /// Raw MIME bytes.
    pub data: Vec<u8>,
}

impl RawMessage {
    /// Wrap raw MIME bytes.
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self { data: data.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_destination() {
        let destination = Destination::to("user@example.com");
        assert_eq!(destination.to_addresses, vec!["user@example.com"]);
        assert!(destination.cc_addresses.is_empty());
        assert_eq!(destination.recipient_count(), 1);
    }

    #[test]
    fn test_destination_counts_all_lists() {
        let destination = Destination::new()
            .add_to("a@example.com")
            .add_cc("b@example.com")
            .add_bcc("c@example.com")
            .add_bcc("d@example.com");
        assert_eq!(destination.recipient_count(), 4);
        assert!(!destination.is_empty());
        assert!(Destination::new().is_empty());
    }

    #[test]
    fn test_text_message() {
        let message = Message::text("Subject", "Body");
        assert_eq!(message.subject, Some(Content::utf8("Subject")));
        assert_eq!(message.body.text, Some(Content::utf8("Body")));
        assert!(message.body.html.is_none());
    }

    #[test]
    fn test_html_message_with_text_alternative() {
        let message = Message::html("Subject", "<p>Hi</p>").with_text(Content::new("Hi"));
        assert_eq!(message.body.html.unwrap().data, "<p>Hi</p>");
        let text = message.body.text.unwrap();
        assert_eq!(text.data, "Hi");
        assert!(text.charset.is_none());
    }
}
