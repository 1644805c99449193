//! Builder for `SendEmail` requests.

use crate::builders::BuilderError;
use crate::types::{Body, Content, Destination, Message, SendEmailRequest};

const DEFAULT_CHARSET: &str = "UTF-8";

/// Builder for [`SendEmailRequest`].
///
/// Subject and body parts are tagged with the builder's charset, `UTF-8`
/// unless changed with [`charset`](Self::charset).
///
/// # Examples
///
/// ```rust
/// use integrations_aws_ses_query::builders::EmailBuilder;
///
/// let request = EmailBuilder::new()
///     .from("sender@example.com")
///     .to("recipient1@example.com")
///     .to("recipient2@example.com")
///     .cc("cc@example.com")
///     .reply_to("replyto@example.com")
///     .subject("Meeting Invitation")
///     .html("<p>You're invited to our meeting</p>")
///     .build()?;
///
/// assert_eq!(request.destination.recipient_count(), 3);
/// # Ok::<(), integrations_aws_ses_query::builders::BuilderError>(())
/// ```
#[derive(Debug, Default)]
pub struct EmailBuilder {
    from: Option<String>,
    destination: Destination,
    subject: Option<String>,
    text_body: Option<String>,
    html_body: Option<String>,
    charset: Option<String>,
    reply_to: Vec<String>,
    return_path: Option<String>,
}

impl EmailBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sender address.
    pub fn from(mut self, address: impl Into<String>) -> Self {
        self.from = Some(address.into());
        self
    }

    /// Add a "To" recipient.
    pub fn to(mut self, address: impl Into<String>) -> Self {
        self.destination = self.destination.add_to(address);
        self
    }

    /// Add a "CC" recipient.
    pub fn cc(mut self, address: impl Into<String>) -> Self {
        self.destination = self.destination.add_cc(address);
        self
    }

    /// Add a "BCC" recipient.
    pub fn bcc(mut self, address: impl Into<String>) -> Self {
        self.destination = self.destination.add_bcc(address);
        self
    }

    /// Add a Reply-To address.
    pub fn reply_to(mut self, address: impl Into<String>) -> Self {
        self.reply_to.push(address.into());
        self
    }

    /// Set the bounce address.
    pub fn return_path(mut self, address: impl Into<String>) -> Self {
        self.return_path = Some(address.into());
        self
    }

    /// Set the subject line.
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the plain text body.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text_body = Some(text.into());
        self
    }

    /// Set the HTML body.
    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.html_body = Some(html.into());
        self
    }

    /// Override the charset of subject and body.
    pub fn charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = Some(charset.into());
        self
    }

    /// Build the request.
    ///
    /// # Errors
    ///
    /// - `MissingField` when the sender, recipients, subject or both body
    ///   parts are missing
    /// - `InvalidValue` when the sender is blank
    pub fn build(self) -> Result<SendEmailRequest, BuilderError> {
        let from = self.from.ok_or_else(|| BuilderError::missing_field("from"))?;
        if from.trim().is_empty() {
            return Err(BuilderError::invalid_value("from", "must not be empty"));
        }

        if self.destination.is_empty() {
            return Err(BuilderError::missing_field("recipients"));
        }

        let subject = self
            .subject
            .ok_or_else(|| BuilderError::missing_field("subject"))?;

        if self.text_body.is_none() && self.html_body.is_none() {
            return Err(BuilderError::missing_field("body (text or html)"));
        }

        let charset = self.charset.unwrap_or_else(|| DEFAULT_CHARSET.to_string());
        let content = |data: String| Content::new(data).with_charset(charset.clone());

        Ok(SendEmailRequest {
            source: Some(from),
            destination: self.destination,
            message: Message {
                subject: Some(content(subject)),
                body: Body {
                    text: self.text_body.map(content),
                    html: self.html_body.map(content),
                },
            },
            reply_to_addresses: self.reply_to,
            return_path: self.return_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_simple_email() {
        let request = EmailBuilder::new()
            .from("sender@example.com")
            .to("recipient@example.com")
            .subject("Test Subject")
            .text("Test body")
            .build()
            .unwrap();

        assert_eq!(request.source.as_deref(), Some("sender@example.com"));
        assert_eq!(request.destination.to_addresses, vec!["recipient@example.com"]);
        let subject = request.message.subject.unwrap();
        assert_eq!(subject.data, "Test Subject");
        assert_eq!(subject.charset.as_deref(), Some("UTF-8"));
        assert!(request.message.body.html.is_none());
        assert!(request.return_path.is_none());
    }

    #[test]
    fn test_custom_charset_applies_to_all_parts() {
        let request = EmailBuilder::new()
            .from("sender@example.com")
            .bcc("hidden@example.com")
            .subject("Subject")
            .text("text")
            .html("<p>html</p>")
            .charset("ISO-8859-1")
            .return_path("bounce@example.com")
            .build()
            .unwrap();

        let body = request.message.body;
        assert_eq!(body.text.unwrap().charset.as_deref(), Some("ISO-8859-1"));
        assert_eq!(body.html.unwrap().charset.as_deref(), Some("ISO-8859-1"));
        assert_eq!(request.return_path.as_deref(), Some("bounce@example.com"));
    }

    #[test]
    fn test_missing_from() {
        let result = EmailBuilder::new()
            .to("recipient@example.com")
            .subject("Test")
            .text("Body")
            .build();
        assert_eq!(result.unwrap_err(), BuilderError::missing_field("from"));
    }

    #[test]
    fn test_blank_from() {
        let result = EmailBuilder::new()
            .from("  ")
            .to("recipient@example.com")
            .subject("Test")
            .text("Body")
            .build();
        assert!(matches!(result, Err(BuilderError::InvalidValue { .. })));
    }

    #[test]
    fn test_missing_recipients() {
        let result = EmailBuilder::new()
            .from("sender@example.com")
            .subject("Test")
            .text("Body")
            .build();
        assert_eq!(result.unwrap_err(), BuilderError::missing_field("recipients"));
    }

    #[test]
    fn test_missing_body() {
        let result = EmailBuilder::new()
            .from("sender@example.com")
            .to("recipient@example.com")
            .subject("Test")
            .build();
        assert_eq!(
            result.unwrap_err(),
            BuilderError::missing_field("body (text or html)")
        );
    }
}
