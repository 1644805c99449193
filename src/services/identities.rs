//! Identity operations: verification, listing, deletion and status lookup.

use std::sync::Arc;

use super::{invoke, SesService};
use crate::error::SesResult;
use crate::http::SesHttpClient;
use crate::params::Parameters;
use crate::types::{
    DeleteIdentityResponse, GetIdentityVerificationAttributesResponse, IdentityType,
    ListIdentitiesResponse, VerifyDomainIdentityResponse, VerifyEmailIdentityResponse,
};
use crate::xml;

/// Service for identity operations.
#[derive(Debug, Clone)]
pub struct IdentityService {
    http_client: Arc<SesHttpClient>,
}

impl IdentityService {
    /// Create a new identity service.
    pub fn new(http_client: Arc<SesHttpClient>) -> Self {
        Self { http_client }
    }

    /// Start verification of an email address.
    ///
    /// SES mails a confirmation link to the address.
    pub async fn verify_email_identity(
        &self,
        email_address: &str,
    ) -> SesResult<VerifyEmailIdentityResponse> {
        let mut parameters = Parameters::new();
        parameters.insert("EmailAddress", email_address);

        invoke(
            self,
            "VerifyEmailIdentity",
            parameters,
            xml::decode_verify_email_identity,
        )
        .await
    }

    /// Start verification of a domain.
    ///
    /// Publish the returned token as a TXT record under `_amazonses.<domain>`.
    pub async fn verify_domain_identity(
        &self,
        domain: &str,
    ) -> SesResult<VerifyDomainIdentityResponse> {
        let mut parameters = Parameters::new();
        parameters.insert("Domain", domain);

        invoke(
            self,
            "VerifyDomainIdentity",
            parameters,
            xml::decode_verify_domain_identity,
        )
        .await
    }

    /// List identities, optionally filtered by kind and paginated.
    ///
    /// # Arguments
    ///
    /// * `identity_type` - Kind filter; [`IdentityType::Any`] sends none
    /// * `max_items` - Page size; `None` uses the service default
    /// * `next_token` - Token from a previous page
    pub async fn list_identities(
        &self,
        identity_type: IdentityType,
        max_items: Option<u32>,
        next_token: Option<&str>,
    ) -> SesResult<ListIdentitiesResponse> {
        let parameters = list_identities_parameters(identity_type, max_items, next_token);
        invoke(self, "ListIdentities", parameters, xml::decode_list_identities).await
    }

    /// Delete an identity (address or domain).
    pub async fn delete_identity(&self, identity: &str) -> SesResult<DeleteIdentityResponse> {
        let mut parameters = Parameters::new();
        parameters.insert("Identity", identity);

        invoke(self, "DeleteIdentity", parameters, xml::decode_delete_identity).await
    }

    /// Fetch verification status and token for each identity.
    pub async fn get_identity_verification_attributes(
        &self,
        identities: &[String],
    ) -> SesResult<GetIdentityVerificationAttributesResponse> {
        let mut parameters = Parameters::new();
        parameters.insert_list("Identities.member", identities);

        invoke(
            self,
            "GetIdentityVerificationAttributes",
            parameters,
            xml::decode_get_identity_verification_attributes,
        )
        .await
    }
}

impl SesService for IdentityService {
    fn http_client(&self) -> &SesHttpClient {
        &self.http_client
    }
}

pub(crate) fn list_identities_parameters(
    identity_type: IdentityType,
    max_items: Option<u32>,
    next_token: Option<&str>,
) -> Parameters {
    let mut parameters = Parameters::new();
    parameters
        .insert_opt("IdentityType", identity_type.as_param())
        .insert_opt("MaxItems", max_items)
        .insert_opt("NextToken", next_token);
    parameters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SesConfig;
    use crate::mocks::{MockResponse, MockTransport, TestFixtures};
    use crate::params::ParamValue;

    fn service(transport: Arc<MockTransport>) -> IdentityService {
        let config = SesConfig::builder()
            .region("us-east-1")
            .credentials("AKID", "secret")
            .build()
            .unwrap();
        IdentityService::new(Arc::new(SesHttpClient::with_transport(config, transport)))
    }

    #[test]
    fn test_list_parameters_omit_defaults() {
        let parameters = list_identities_parameters(IdentityType::Any, None, None);
        assert!(parameters.is_empty());
    }

    #[test]
    fn test_list_parameters_all_set() {
        let parameters = list_identities_parameters(IdentityType::Domain, Some(10), Some("tok"));
        assert_eq!(
            parameters.get("IdentityType"),
            Some(&ParamValue::Scalar("Domain".to_string()))
        );
        assert_eq!(parameters.get("MaxItems"), Some(&ParamValue::Integer(10)));
        assert_eq!(
            parameters.get("NextToken"),
            Some(&ParamValue::Scalar("tok".to_string()))
        );
    }

    #[tokio::test]
    async fn test_list_identities() {
        let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::ok(
            TestFixtures::list_identities_xml(),
        )]));
        let service = service(transport.clone());

        let response = service
            .list_identities(IdentityType::EmailAddress, None, None)
            .await
            .unwrap();
        assert_eq!(response.identities, vec!["example.com", "user@example.com"]);

        let request = transport.last_request().unwrap();
        assert_eq!(
            request.body_string(),
            "Action=ListIdentities&IdentityType=EmailAddress"
        );
    }

    #[tokio::test]
    async fn test_get_verification_attributes_encodes_members() {
        let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::ok(
            TestFixtures::verification_attributes_xml(),
        )]));
        let service = service(transport.clone());

        let identities = vec!["example.com".to_string(), "user@example.com".to_string()];
        let response = service
            .get_identity_verification_attributes(&identities)
            .await
            .unwrap();
        assert_eq!(response.verification_attributes.len(), 2);
        assert!(response.verification_attributes["user@example.com"].is_verified());

        let body = transport.last_request().unwrap().body_string();
        assert_eq!(
            body,
            "Action=GetIdentityVerificationAttributes\
             &Identities.member.1=example.com\
             &Identities.member.2=user%40example.com"
        );
    }

    #[tokio::test]
    async fn test_delete_identity_error() {
        let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::error(
            400,
            TestFixtures::error_xml("Sender", "InvalidParameterValue", "Bad identity"),
        )]));
        let service = service(transport);

        let err = service.delete_identity("nope").await.unwrap_err();
        assert_eq!(err.error_code(), Some("InvalidParameterValue"));
        assert_eq!(err.request_id(), Some("error-request-id"));
    }
}
