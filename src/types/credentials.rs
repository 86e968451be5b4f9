//! Source credential types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Source types a credential connects to.
pub mod credential_source_type {
    /// Box.
    pub const BOX: &str = "box";
    /// Salesforce.
    pub const SALESFORCE: &str = "salesforce";
    /// SharePoint Online or on-premises.
    pub const SHAREPOINT: &str = "sharepoint";
    /// Web crawl.
    pub const WEB_CRAWL: &str = "web_crawl";
    /// IBM Cloud Object Storage.
    pub const CLOUD_OBJECT_STORAGE: &str = "cloud_object_storage";
}

/// Authentication methods of a credential.
pub mod credential_type {
    /// OAuth 2.0 (Box).
    pub const OAUTH2: &str = "oauth2";
    /// SAML (SharePoint Online).
    pub const SAML: &str = "saml";
    /// Username and password.
    pub const USERNAME_PASSWORD: &str = "username_password";
    /// No authentication.
    pub const NOAUTH: &str = "noauth";
    /// Basic authentication.
    pub const BASIC: &str = "basic";
    /// NTLM v1 (SharePoint on-premises).
    pub const NTLM_V1: &str = "ntlm_v1";
    /// AWS4 HMAC (Cloud Object Storage).
    pub const AWS4_HMAC: &str = "aws4_hmac";
}

/// A stored source credential.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Credentials {
    /// Credential ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,
    /// Source type, see [`credential_source_type`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
    /// Authentication details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_details: Option<CredentialDetails>,
    /// Authentication status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusDetails>,
}

/// Authentication details of a credential.
///
/// Which fields apply depends on the source type and `credential_type`.
/// Secret fields are write-only and never returned by the service.
#[derive(Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CredentialDetails {
    /// Authentication method, see [`credential_type`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_type: Option<String>,
    /// Box client ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    /// Box enterprise ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_id: Option<String>,
    /// Source URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Username.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// SharePoint organization URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_url: Option<String>,
    /// SharePoint site collection path.
    #[serde(rename = "site_collection.path", skip_serializing_if = "Option::is_none")]
    pub site_collection_path: Option<String>,
    /// Box client secret.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    /// Box public key ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key_id: Option<String>,
    /// Box private key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
    /// Box private key passphrase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passphrase: Option<String>,
    /// Password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Gateway used to reach an on-premises source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_id: Option<String>,
    /// SharePoint version, e.g. `2016`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_version: Option<String>,
    /// SharePoint web application URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_application_url: Option<String>,
    /// NTLM domain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Cloud Object Storage endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Cloud Object Storage access key ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_key_id: Option<String>,
    /// Cloud Object Storage secret access key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_access_key: Option<String>,
}

impl std::fmt::Debug for CredentialDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn redacted(value: &Option<String>) -> Option<&'static str> {
            value.as_ref().map(|_| "[REDACTED]")
        }

        f.debug_struct("CredentialDetails")
            .field("credential_type", &self.credential_type)
            .field("client_id", &self.client_id)
            .field("enterprise_id", &self.enterprise_id)
            .field("url", &self.url)
            .field("username", &self.username)
            .field("organization_url", &self.organization_url)
            .field("site_collection_path", &self.site_collection_path)
            .field("client_secret", &redacted(&self.client_secret))
            .field("public_key_id", &self.public_key_id)
            .field("private_key", &redacted(&self.private_key))
            .field("passphrase", &redacted(&self.passphrase))
            .field("password", &redacted(&self.password))
            .field("gateway_id", &self.gateway_id)
            .field("source_version", &self.source_version)
            .field("web_application_url", &self.web_application_url)
            .field("domain", &self.domain)
            .field("endpoint", &self.endpoint)
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &redacted(&self.secret_access_key))
            .finish()
    }
}

/// Authentication status of a credential.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StatusDetails {
    /// Whether the source accepted the credential.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authenticated: Option<bool>,
    /// Reason authentication failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// Response of list_credentials.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CredentialsList {
    /// Credentials.
    pub credentials: Option<Vec<Credentials>>,
}

/// Response of delete_credentials.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeleteCredentials {
    /// Deleted credential.
    pub credential_id: Option<String>,
    /// `deleted`.
    pub status: Option<String>,
}

/// Options for list_credentials.
#[derive(Debug, Clone, Default)]
pub struct ListCredentialsOptions {
    /// Environment ID.
    pub environment_id: String,
    /// Custom headers.
    pub headers: HashMap<String, String>,
}

impl ListCredentialsOptions {
    /// Creates options for the given environment.
    pub fn new(environment_id: impl Into<String>) -> Self {
        Self {
            environment_id: environment_id.into(),
            ..Default::default()
        }
    }
}

/// Options for create_credentials.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateCredentialsOptions {
    /// Environment ID.
    #[serde(skip)]
    pub environment_id: String,
    /// Source type, see [`credential_source_type`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
    /// Authentication details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_details: Option<CredentialDetails>,
    /// Authentication status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusDetails>,
    /// Custom headers.
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl CreateCredentialsOptions {
    /// Creates options for the given environment.
    pub fn new(environment_id: impl Into<String>) -> Self {
        Self {
            environment_id: environment_id.into(),
            ..Default::default()
        }
    }

    /// Sets the source type.
    pub fn with_source_type(mut self, source_type: impl Into<String>) -> Self {
        self.source_type = Some(source_type.into());
        self
    }

    /// Sets the authentication details.
    pub fn with_credential_details(mut self, details: CredentialDetails) -> Self {
        self.credential_details = Some(details);
        self
    }
}

/// Options naming a credential.
///
/// Used by get_credentials and delete_credentials.
#[derive(Debug, Clone, Default)]
pub struct CredentialOptions {
    /// Environment ID.
    pub environment_id: String,
    /// Credential ID.
    pub credential_id: String,
    /// Custom headers.
    pub headers: HashMap<String, String>,
}

impl CredentialOptions {
    /// Creates options for the given credential.
    pub fn new(environment_id: impl Into<String>, credential_id: impl Into<String>) -> Self {
        Self {
            environment_id: environment_id.into(),
            credential_id: credential_id.into(),
            ..Default::default()
        }
    }
}

/// Options for get_credentials.
pub type GetCredentialsOptions = CredentialOptions;
/// Options for delete_credentials.
pub type DeleteCredentialsOptions = CredentialOptions;

/// Options for update_credentials.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateCredentialsOptions {
    /// Environment ID.
    #[serde(skip)]
    pub environment_id: String,
    /// Credential ID.
    #[serde(skip)]
    pub credential_id: String,
    /// Source type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
    /// Authentication details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_details: Option<CredentialDetails>,
    /// Authentication status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusDetails>,
    /// Custom headers.
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl UpdateCredentialsOptions {
    /// Creates options for the given credential.
    pub fn new(environment_id: impl Into<String>, credential_id: impl Into<String>) -> Self {
        Self {
            environment_id: environment_id.into(),
            credential_id: credential_id.into(),
            ..Default::default()
        }
    }

    /// Sets the source type.
    pub fn with_source_type(mut self, source_type: impl Into<String>) -> Self {
        self.source_type = Some(source_type.into());
        self
    }

    /// Sets the authentication details.
    pub fn with_credential_details(mut self, details: CredentialDetails) -> Self {
        self.credential_details = Some(details);
        self
    }
}

impl_with_header!(
    ListCredentialsOptions,
    CreateCredentialsOptions,
    CredentialOptions,
    UpdateCredentialsOptions,
);
