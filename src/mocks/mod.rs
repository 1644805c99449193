//! Test doubles and canned SES responses.
//!
//! Exposed publicly so integration tests and downstream crates can drive a
//! [`SesClient`](crate::SesClient) without a network.

mod transport;

pub use transport::{MockResponse, MockTransport};

/// Canned XML bodies for the SES query API.
pub struct TestFixtures;

impl TestFixtures {
    /// `ListIdentitiesResponse` with two identities.
    pub fn list_identities_xml() -> &'static str {
        r#"<ListIdentitiesResponse xmlns="http://ses.amazonaws.com/doc/2010-12-01/">
  <ListIdentitiesResult>
    <Identities>
      <member>example.com</member>
      <member>user@example.com</member>
    </Identities>
  </ListIdentitiesResult>
  <ResponseMetadata>
    <RequestId>cacecf23-9bf1-11e1-9279-0100e8cf109a</RequestId>
  </ResponseMetadata>
</ListIdentitiesResponse>"#
    }

    /// `VerifyEmailIdentityResponse`.
    pub fn verify_email_identity_xml() -> &'static str {
        r#"<VerifyEmailIdentityResponse xmlns="http://ses.amazonaws.com/doc/2010-12-01/">
  <VerifyEmailIdentityResult/>
  <ResponseMetadata>
    <RequestId>47e0ef1a-9bf2-11e1-9279-0100e8cf109a</RequestId>
  </ResponseMetadata>
</VerifyEmailIdentityResponse>"#
    }

    /// `VerifyDomainIdentityResponse` carrying a token.
    pub fn verify_domain_identity_xml() -> &'static str {
        r#"<VerifyDomainIdentityResponse xmlns="http://ses.amazonaws.com/doc/2010-12-01/">
  <VerifyDomainIdentityResult>
    <VerificationToken>QTKknzFg2J4ygwa+XvHAxUl1hyHoY0gVfZdfjIedHZ0=</VerificationToken>
  </VerifyDomainIdentityResult>
  <ResponseMetadata>
    <RequestId>94f6368e-9bf2-11e1-8ee7-c98a0037a2b6</RequestId>
  </ResponseMetadata>
</VerifyDomainIdentityResponse>"#
    }

    /// `DeleteIdentityResponse`.
    pub fn delete_identity_xml() -> &'static str {
        r#"<DeleteIdentityResponse xmlns="http://ses.amazonaws.com/doc/2010-12-01/">
  <DeleteIdentityResult/>
  <ResponseMetadata>
    <RequestId>d96bd874-9bf2-11e1-8ee7-c98a0037a2b6</RequestId>
  </ResponseMetadata>
</DeleteIdentityResponse>"#
    }

    /// `GetIdentityVerificationAttributesResponse` for a domain and an address.
    pub fn verification_attributes_xml() -> &'static str {
        r#"<GetIdentityVerificationAttributesResponse xmlns="http://ses.amazonaws.com/doc/2010-12-01/">
  <GetIdentityVerificationAttributesResult>
    <VerificationAttributes>
      <entry>
        <key>example.com</key>
        <value>
          <VerificationStatus>Pending</VerificationStatus>
          <VerificationToken>QTKknzFg2J4ygwa+XvHAxUl1hyHoY0gVfZdfjIedHZ0=</VerificationToken>
        </value>
      </entry>
      <entry>
        <key>user@example.com</key>
        <value>
          <VerificationStatus>Success</VerificationStatus>
        </value>
      </entry>
    </VerificationAttributes>
  </GetIdentityVerificationAttributesResult>
  <ResponseMetadata>
    <RequestId>1d0c29f1-9bf3-11e1-8ee7-c98a0037a2b6</RequestId>
  </ResponseMetadata>
</GetIdentityVerificationAttributesResponse>"#
    }

    /// `SendEmailResponse` with the given message id.
    pub fn send_email_xml(message_id: &str) -> String {
        format!(
            r#"<SendEmailResponse xmlns="http://ses.amazonaws.com/doc/2010-12-01/">
  <SendEmailResult>
    <MessageId>{}</MessageId>
  </SendEmailResult>
  <ResponseMetadata>
    <RequestId>d5964849-c866-11e0-9beb-01a62d68c57f</RequestId>
  </ResponseMetadata>
</SendEmailResponse>"#,
            message_id
        )
    }

    /// `SendRawEmailResponse` with the given message id.
    pub fn send_raw_email_xml(message_id: &str) -> String {
        format!(
            r#"<SendRawEmailResponse xmlns="http://ses.amazonaws.com/doc/2010-12-01/">
  <SendRawEmailResult>
    <MessageId>{}</MessageId>
  </SendRawEmailResult>
  <ResponseMetadata>
    <RequestId>e0abcdfa-c866-11e0-b6d0-273d09173b49</RequestId>
  </ResponseMetadata>
</SendRawEmailResponse>"#,
            message_id
        )
    }

    /// `ErrorResponse` envelope.
    pub fn error_xml(error_type: &str, code: &str, message: &str) -> String {
        format!(
            r#"<ErrorResponse xmlns="http://ses.amazonaws.com/doc/2010-12-01/">
  <Error>
    <Type>{}</Type>
    <Code>{}</Code>
    <Message>{}</Message>
  </Error>
  <RequestId>error-request-id</RequestId>
</ErrorResponse>"#,
            error_type, code, message
        )
    }
}
