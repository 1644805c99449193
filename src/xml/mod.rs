//! XML decoding for SES query API responses.
//!
//! Every operation answers with a `<{Action}Response>` document carrying an
//! optional `<{Action}Result>` and a `<ResponseMetadata>` block. Failures use
//! a shared `<ErrorResponse>` envelope. Decoders check the root element with
//! a streaming reader, then deserialize the document with `quick_xml::de`.
//! Unknown elements are ignored and missing ones decode to empty values.

use std::collections::HashMap;

use quick_xml::events::Event;
use quick_xml::Reader;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{SesError, SesResult};
use crate::types::*;

/// Root element of the error envelope.
pub const ERROR_ROOT: &str = "ErrorResponse";

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct ResponseMetadata {
    request_id: String,
}

/// Result element of operations that return nothing but metadata.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct EmptyResult {
    response_metadata: ResponseMetadata,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct VerifyEmailIdentityEnvelope {
    verify_email_identity_result: EmptyResult,
    response_metadata: ResponseMetadata,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct VerifyDomainIdentityResult {
    verification_token: String,
    response_metadata: ResponseMetadata,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct VerifyDomainIdentityEnvelope {
    verify_domain_identity_result: VerifyDomainIdentityResult,
    response_metadata: ResponseMetadata,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Members {
    member: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct ListIdentitiesResult {
    identities: Members,
    next_token: Option<String>,
    response_metadata: ResponseMetadata,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct ListIdentitiesEnvelope {
    list_identities_result: ListIdentitiesResult,
    response_metadata: ResponseMetadata,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct DeleteIdentityEnvelope {
    delete_identity_result: EmptyResult,
    response_metadata: ResponseMetadata,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct AttributesValue {
    verification_status: String,
    verification_token: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AttributesEntry {
    key: String,
    value: AttributesValue,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AttributesEntries {
    entry: Vec<AttributesEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct GetIdentityVerificationAttributesResult {
    verification_attributes: AttributesEntries,
    response_metadata: ResponseMetadata,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct GetIdentityVerificationAttributesEnvelope {
    get_identity_verification_attributes_result: GetIdentityVerificationAttributesResult,
    response_metadata: ResponseMetadata,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct MessageIdResult {
    message_id: String,
    response_metadata: ResponseMetadata,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct SendEmailEnvelope {
    send_email_result: MessageIdResult,
    response_metadata: ResponseMetadata,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct SendRawEmailEnvelope {
    send_raw_email_result: MessageIdResult,
    response_metadata: ResponseMetadata,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct ErrorDetail {
    #[serde(rename = "Type")]
    error_type: String,
    code: String,
    message: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct ErrorEnvelope {
    error: ErrorDetail,
    request_id: String,
}

fn malformed(message: impl Into<String>) -> SesError {
    SesError::MalformedResponse {
        message: message.into(),
    }
}

fn body_str(body: &[u8]) -> SesResult<&str> {
    std::str::from_utf8(body).map_err(|e| malformed(format!("response is not UTF-8: {}", e)))
}

fn text(value: String) -> String {
    value.trim().to_string()
}

/// Metadata is normally a sibling of the result element, but some
/// responses nest it inside the result. The sibling wins when both exist.
fn request_id(sibling: ResponseMetadata, nested: ResponseMetadata) -> String {
    let sibling = text(sibling.request_id);
    if sibling.is_empty() {
        text(nested.request_id)
    } else {
        sibling
    }
}

/// Return the local name of the document's root element.
///
/// The XML declaration, comments, processing instructions and a doctype
/// may precede the root.
pub fn root_element_name(xml: &str) -> SesResult<String> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                return Ok(String::from_utf8_lossy(e.local_name().as_ref()).into_owned());
            }
            Ok(Event::Decl(_))
            | Ok(Event::Comment(_))
            | Ok(Event::PI(_))
            | Ok(Event::DocType(_))
            | Ok(Event::Text(_)) => {}
            Ok(Event::Eof) => return Err(malformed("response has no root element")),
            Ok(other) => {
                return Err(malformed(format!(
                    "unexpected content before root element: {:?}",
                    other
                )))
            }
            Err(e) => return Err(e.into()),
        }
    }
}

fn decode_envelope<T: DeserializeOwned>(body: &[u8], expected_root: &str) -> SesResult<T> {
    let xml = body_str(body)?;
    let root = root_element_name(xml)?;
    if root != expected_root {
        return Err(malformed(format!(
            "expected <{}> but found <{}>",
            expected_root, root
        )));
    }
    Ok(quick_xml::de::from_str(xml)?)
}

/// Decode a `VerifyEmailIdentityResponse`.
pub fn decode_verify_email_identity(body: &[u8]) -> SesResult<VerifyEmailIdentityResponse> {
    let envelope: VerifyEmailIdentityEnvelope =
        decode_envelope(body, "VerifyEmailIdentityResponse")?;
    Ok(VerifyEmailIdentityResponse {
        request_id: request_id(
            envelope.response_metadata,
            envelope.verify_email_identity_result.response_metadata,
        ),
    })
}

/// Decode a `VerifyDomainIdentityResponse`.
pub fn decode_verify_domain_identity(body: &[u8]) -> SesResult<VerifyDomainIdentityResponse> {
    let envelope: VerifyDomainIdentityEnvelope =
        decode_envelope(body, "VerifyDomainIdentityResponse")?;
    let result = envelope.verify_domain_identity_result;
    Ok(VerifyDomainIdentityResponse {
        verification_token: text(result.verification_token),
        request_id: request_id(envelope.response_metadata, result.response_metadata),
    })
}

/// Decode a `ListIdentitiesResponse`, keeping the identities in document order.
pub fn decode_list_identities(body: &[u8]) -> SesResult<ListIdentitiesResponse> {
    let envelope: ListIdentitiesEnvelope = decode_envelope(body, "ListIdentitiesResponse")?;
    let result = envelope.list_identities_result;
    Ok(ListIdentitiesResponse {
        identities: result.identities.member.into_iter().map(text).collect(),
        next_token: result.next_token.map(text).filter(|t| !t.is_empty()),
        request_id: request_id(envelope.response_metadata, result.response_metadata),
    })
}

/// Decode a `DeleteIdentityResponse`.
pub fn decode_delete_identity(body: &[u8]) -> SesResult<DeleteIdentityResponse> {
    let envelope: DeleteIdentityEnvelope = decode_envelope(body, "DeleteIdentityResponse")?;
    Ok(DeleteIdentityResponse {
        request_id: request_id(
            envelope.response_metadata,
            envelope.delete_identity_result.response_metadata,
        ),
    })
}

/// Decode a `GetIdentityVerificationAttributesResponse`.
///
/// The `<entry>` list is folded into a map keyed by identity; a repeated
/// key keeps the value of its last entry.
pub fn decode_get_identity_verification_attributes(
    body: &[u8],
) -> SesResult<GetIdentityVerificationAttributesResponse> {
    let envelope: GetIdentityVerificationAttributesEnvelope =
        decode_envelope(body, "GetIdentityVerificationAttributesResponse")?;
    let result = envelope.get_identity_verification_attributes_result;

    let mut verification_attributes = HashMap::new();
    for entry in result.verification_attributes.entry {
        verification_attributes.insert(
            text(entry.key),
            VerificationAttributes {
                verification_status: text(entry.value.verification_status),
                verification_token: text(entry.value.verification_token),
            },
        );
    }

    Ok(GetIdentityVerificationAttributesResponse {
        verification_attributes,
        request_id: request_id(envelope.response_metadata, result.response_metadata),
    })
}

/// Decode a `SendEmailResponse`.
pub fn decode_send_email(body: &[u8]) -> SesResult<SendEmailResponse> {
    let envelope: SendEmailEnvelope = decode_envelope(body, "SendEmailResponse")?;
    let result = envelope.send_email_result;
    Ok(SendEmailResponse {
        message_id: text(result.message_id),
        request_id: request_id(envelope.response_metadata, result.response_metadata),
    })
}

/// Decode a `SendRawEmailResponse`.
pub fn decode_send_raw_email(body: &[u8]) -> SesResult<SendRawEmailResponse> {
    let envelope: SendRawEmailEnvelope = decode_envelope(body, "SendRawEmailResponse")?;
    let result = envelope.send_raw_email_result;
    Ok(SendRawEmailResponse {
        message_id: text(result.message_id),
        request_id: request_id(envelope.response_metadata, result.response_metadata),
    })
}

/// Decode an `ErrorResponse` envelope. Every field is trimmed.
pub fn decode_error(body: &[u8]) -> SesResult<ErrorResponse> {
    let envelope: ErrorEnvelope = decode_envelope(body, ERROR_ROOT)?;
    Ok(ErrorResponse {
        error_type: text(envelope.error.error_type),
        code: text(envelope.error.code),
        message: text(envelope.error.message),
        request_id: text(envelope.request_id),
    })
}

/// Decode a response body that arrived with the given HTTP status.
///
/// An `<ErrorResponse>` root always becomes [`SesError::Api`]. Otherwise
/// `decoder` runs; when it fails on a non-2xx status the body is retried as
/// an error envelope before the decoding failure is returned.
pub fn decode_response<T, F>(body: &[u8], status: u16, decoder: F) -> SesResult<T>
where
    F: FnOnce(&[u8]) -> SesResult<T>,
{
    let is_error_root = body_str(body)
        .and_then(root_element_name)
        .map(|root| root == ERROR_ROOT)
        .unwrap_or(false);
    if is_error_root {
        return Err(decode_error(body)?.into_error(status));
    }

    match decoder(body) {
        Ok(value) => Ok(value),
        Err(err) if !(200..300).contains(&status) => match decode_error(body) {
            Ok(error) => Err(error.into_error(status)),
            Err(_) => Err(match err {
                SesError::MalformedResponse { message } => {
                    malformed(format!("HTTP {}: {}", status, message))
                }
                other => other,
            }),
        },
        Err(err) => Err(err),
    }
}
