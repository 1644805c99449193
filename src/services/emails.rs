//! Email sending operations.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::sync::Arc;

use super::{invoke, SesService};
use crate::error::SesResult;
use crate::http::SesHttpClient;
use crate::params::Parameters;
use crate::types::{
    Content, SendEmailRequest, SendEmailResponse, SendRawEmailRequest, SendRawEmailResponse,
};
use crate::xml;

/// Service for email sending operations.
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use integrations_aws_ses_query::services::EmailService;
/// use integrations_aws_ses_query::types::{Destination, Message, SendEmailRequest};
/// # use integrations_aws_ses_query::http::SesHttpClient;
/// # use integrations_aws_ses_query::config::SesConfig;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// # let config = SesConfig::builder()
/// #     .region("us-east-1")
/// #     .credentials("key", "secret")
/// #     .build()?;
/// let service = EmailService::new(Arc::new(SesHttpClient::new(config)?));
///
/// let request = SendEmailRequest::new(
///     "sender@example.com",
///     Destination::to("recipient@example.com"),
///     Message::text("Hello", "Sent through the query API."),
/// );
/// let response = service.send_email(&request).await?;
/// println!("Message ID: {}", response.message_id);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct EmailService {
    http_client: Arc<SesHttpClient>,
}

impl EmailService {
    /// Create a new email service.
    pub fn new(http_client: Arc<SesHttpClient>) -> Self {
        Self { http_client }
    }

    /// Send a formatted email.
    pub async fn send_email(&self, request: &SendEmailRequest) -> SesResult<SendEmailResponse> {
        invoke(
            self,
            "SendEmail",
            send_email_parameters(request),
            xml::decode_send_email,
        )
        .await
    }

    /// Send a complete MIME message.
    pub async fn send_raw_email(
        &self,
        request: &SendRawEmailRequest,
    ) -> SesResult<SendRawEmailResponse> {
        invoke(
            self,
            "SendRawEmail",
            send_raw_email_parameters(request),
            xml::decode_send_raw_email,
        )
        .await
    }
}

impl SesService for EmailService {
    fn http_client(&self) -> &SesHttpClient {
        &self.http_client
    }
}

fn insert_content(parameters: &mut Parameters, prefix: &str, content: Option<&Content>) {
    if let Some(content) = content {
        parameters
            .insert(format!("{}.Data", prefix), content.data.as_str())
            .insert_opt(format!("{}.Charset", prefix), content.charset.as_deref());
    }
}

pub(crate) fn send_email_parameters(request: &SendEmailRequest) -> Parameters {
    let mut parameters = Parameters::new();
    let destination = &request.destination;
    let message = &request.message;

    parameters
        .insert_list(
            "Destination.ToAddresses.member",
            &destination.to_addresses,
        )
        .insert_list(
            "Destination.CcAddresses.member",
            &destination.cc_addresses,
        )
        .insert_list(
            "Destination.BccAddresses.member",
            &destination.bcc_addresses,
        )
        .insert_list("ReplyToAddresses.member", &request.reply_to_addresses)
        .insert_opt("ReturnPath", request.return_path.as_deref())
        .insert_opt("Source", request.source.as_deref());

    insert_content(&mut parameters, "Message.Subject", message.subject.as_ref());
    insert_content(&mut parameters, "Message.Body.Text", message.body.text.as_ref());
    insert_content(&mut parameters, "Message.Body.Html", message.body.html.as_ref());

    parameters
}

pub(crate) fn send_raw_email_parameters(request: &SendRawEmailRequest) -> Parameters {
    let mut parameters = Parameters::new();
    parameters
        .insert_list("Destinations.member", &request.destinations)
        .insert("RawMessage.Data", STANDARD.encode(&request.raw_message.data))
        .insert_opt("Source", request.source.as_deref());
    parameters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SesConfig;
    use crate::mocks::{MockResponse, MockTransport, TestFixtures};
    use crate::params::{encode, ParamValue};
    use crate::types::{Destination, Message, RawMessage};

    fn service(transport: Arc<MockTransport>) -> EmailService {
        let config = SesConfig::builder()
            .region("us-west-2")
            .credentials("AKID", "secret")
            .build()
            .unwrap();
        EmailService::new(Arc::new(SesHttpClient::with_transport(config, transport)))
    }

    #[test]
    fn test_send_email_parameters() {
        let request = SendEmailRequest {
            source: Some("sender@example.com".to_string()),
            destination: Destination::new()
                .add_to("a@example.com")
                .add_to("b@example.com")
                .add_bcc("c@example.com"),
            message: Message::html("Subject", "<p>Hi</p>"),
            reply_to_addresses: vec!["reply@example.com".to_string()],
            return_path: None,
        };

        let parameters = send_email_parameters(&request);
        assert_eq!(
            parameters.get("Destination.ToAddresses.member"),
            Some(&ParamValue::List(vec![
                "a@example.com".to_string(),
                "b@example.com".to_string()
            ]))
        );
        assert!(!parameters.contains_key("Destination.CcAddresses.member"));
        assert!(parameters.contains_key("Destination.BccAddresses.member"));
        assert!(!parameters.contains_key("ReturnPath"));
        assert!(!parameters.contains_key("Message.Body.Text.Data"));
        assert_eq!(
            parameters.get("Message.Body.Html.Charset"),
            Some(&ParamValue::Scalar("UTF-8".to_string()))
        );

        let body = encode("SendEmail", &parameters);
        assert!(body.starts_with("Action=SendEmail&"));
        assert!(body.contains("Destination.ToAddresses.member.1=a%40example.com"));
        assert!(body.contains("Destination.ToAddresses.member.2=b%40example.com"));
        assert!(body.contains("Destination.BccAddresses.member.1=c%40example.com"));
        assert!(body.contains("ReplyToAddresses.member.1=reply%40example.com"));
        assert!(body.contains("Message.Subject.Data=Subject"));
        assert!(body.contains("Source=sender%40example.com"));
    }

    #[test]
    fn test_content_without_charset() {
        let request = SendEmailRequest::new(
            "sender@example.com",
            Destination::to("a@example.com"),
            Message::default().with_text(Content::new("plain")),
        );

        let parameters = send_email_parameters(&request);
        assert!(parameters.contains_key("Message.Body.Text.Data"));
        assert!(!parameters.contains_key("Message.Body.Text.Charset"));
        assert!(!parameters.contains_key("Message.Subject.Data"));
    }

    #[test]
    fn test_explicit_empty_return_path_is_sent() {
        let mut request = SendEmailRequest::new(
            "sender@example.com",
            Destination::to("a@example.com"),
            Message::text("s", "b"),
        );
        request.return_path = Some(String::new());

        let body = encode("SendEmail", &send_email_parameters(&request));
        assert!(body.contains("&ReturnPath=&"));
    }

    #[test]
    fn test_send_raw_email_parameters() {
        let request = SendRawEmailRequest::new(RawMessage::new("Subject: Hi\r\n\r\nBody"))
            .with_source("sender@example.com")
            .add_destination("a@example.com");

        let parameters = send_raw_email_parameters(&request);
        assert_eq!(
            parameters.get("RawMessage.Data"),
            Some(&ParamValue::Scalar(STANDARD.encode("Subject: Hi\r\n\r\nBody")))
        );
        assert_eq!(
            parameters.get("Destinations.member"),
            Some(&ParamValue::List(vec!["a@example.com".to_string()]))
        );
        assert!(parameters.contains_key("Source"));
    }

    #[test]
    fn test_send_raw_email_minimal_parameters() {
        let request = SendRawEmailRequest::new(RawMessage::new(b"raw".to_vec()));
        let parameters = send_raw_email_parameters(&request);
        assert_eq!(parameters.len(), 1);
        assert!(parameters.contains_key("RawMessage.Data"));
    }

    #[tokio::test]
    async fn test_send_email() {
        let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::ok(
            TestFixtures::send_email_xml("msg-1"),
        )]));
        let service = service(transport.clone());

        let request = SendEmailRequest::new(
            "sender@example.com",
            Destination::to("a@example.com"),
            Message::text("Subject", "Body"),
        );
        let response = service.send_email(&request).await.unwrap();
        assert_eq!(response.message_id, "msg-1");
        assert_eq!(response.request_id, "d5964849-c866-11e0-9beb-01a62d68c57f");

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.url, "https://email.us-west-2.amazonaws.com/");
        assert!(sent.header("X-Amzn-Authorization").is_some());
    }

    #[tokio::test]
    async fn test_send_raw_email_rejected() {
        let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::error(
            400,
            TestFixtures::error_xml("Sender", "MessageRejected", "Email address is not verified."),
        )]));
        let service = service(transport);

        let request = SendRawEmailRequest::new(RawMessage::new("raw"));
        let err = service.send_raw_email(&request).await.unwrap_err();
        assert_eq!(err.error_code(), Some("MessageRejected"));
        assert!(!err.is_retryable());
    }
}
