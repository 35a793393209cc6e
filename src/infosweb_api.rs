//! Client for the Infosweb user management API.
//!
//! [`InfoswebApiClient`] obtains OAuth2 client-credentials tokens and activates
//! or deactivates user accounts. Every call is a single request; nothing is
//! retried or cached.
//!
//! ```no_run
//! use infosweb::configuration::ClientSettings;
//! use infosweb::infosweb_api::InfoswebApiClient;
//!
//! # async fn run() -> Result<(), infosweb::infosweb_api::ApiError> {
//! let settings = ClientSettings::new("http://localhost:8081".parse().unwrap())
//!     .with_credentials("my-client", "my-secret");
//! let client = InfoswebApiClient::new(settings)?;
//! let token = client.request_token().await?;
//! client.activate_user("jdoe", Some(&token.access_token)).await?;
//! client.deactivate_user("jdoe", Some(&token.access_token)).await?;
//! # Ok(())
//! # }
//! ```

use crate::auth::AuthClient;
use crate::configuration::{ClientSettings, ConfigurationError};
use crate::http_utils::{HttpClient, HttpRequestConfig};
use crate::model::{
    OperationResult, ResponsePayload, TokenResponse, UserOperation, UserOperationRequest,
};
use tracing::{debug, warn};

/// Error emitted by the Infosweb API client
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Settings were missing or invalid; no request was sent
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
    /// The request did not complete (connection, DNS, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The server answered with a non-200 status, or with an unusable token body
    #[error("Infosweb API returned status {status}: {payload}")]
    Api {
        status: u16,
        payload: ResponsePayload,
    },
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn payload(&self) -> Option<&ResponsePayload> {
        match self {
            ApiError::Api { payload, .. } => Some(payload),
            _ => None,
        }
    }
}

pub struct InfoswebApiClient {
    http: HttpClient,
    settings: ClientSettings,
}

impl InfoswebApiClient {
    pub fn new(settings: ClientSettings) -> Result<Self, ApiError> {
        let http = HttpClient::new(HttpRequestConfig::from_settings(&settings))?;
        Ok(Self { http, settings })
    }

    /// Request a bearer token using the client credentials flow.
    ///
    /// Fails with [`ApiError::Configuration`] before any request is sent when
    /// the client ID or secret is missing.
    pub async fn request_token(&self) -> Result<TokenResponse, ApiError> {
        let credentials = self.settings.credentials()?;
        AuthClient::new(self.http.clone(), credentials)
            .request_token()
            .await
    }

    /// Activate a user by `nombre_usuario`.
    ///
    /// Without an access token a new one is requested first.
    pub async fn activate_user(
        &self,
        username: &str,
        access_token: Option<&str>,
    ) -> Result<OperationResult, ApiError> {
        self.execute_user_operation(UserOperation::Activate, username, access_token)
            .await
    }

    /// Deactivate a user by `nombre_usuario`.
    ///
    /// Without an access token a new one is requested first.
    pub async fn deactivate_user(
        &self,
        username: &str,
        access_token: Option<&str>,
    ) -> Result<OperationResult, ApiError> {
        self.execute_user_operation(UserOperation::Deactivate, username, access_token)
            .await
    }

    pub async fn execute_user_operation(
        &self,
        operation: UserOperation,
        username: &str,
        access_token: Option<&str>,
    ) -> Result<OperationResult, ApiError> {
        let token = match access_token.filter(|token| !token.is_empty()) {
            Some(token) => token.to_string(),
            None => {
                debug!("No access token supplied, requesting one");
                self.request_token().await?.access_token
            }
        };

        debug!("Requesting {} of user {}", operation, username);
        let body = UserOperationRequest {
            nombre_usuario: username,
        };
        let response = self
            .http
            .post_json_with_bearer(operation.path(), &body, &token)
            .await?;

        if response.is_ok() {
            Ok(OperationResult {
                operation,
                username: username.to_string(),
                payload: response.payload,
            })
        } else {
            warn!(
                "Failed to {} user {}: status {}: {}",
                operation, username, response.status, response.payload
            );
            Err(response.into_api_error())
        }
    }
}
