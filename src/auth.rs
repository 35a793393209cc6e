use crate::configuration::ConfigurationError;
use crate::http_utils::HttpClient;
use crate::infosweb_api::ApiError;
use crate::model::{ResponsePayload, TokenResponse};
use std::fmt;
use tracing::{debug, warn};

pub const TOKEN_PATH: &str = "/Banesco/integracion/oauth/token";

const GRANT_TYPE_CLIENT_CREDENTIALS: &str = "client_credentials";

/// OAuth2 client credentials. Both parts are guaranteed non-empty.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
}

impl Credentials {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Result<Self, ConfigurationError> {
        let client_id = client_id.into();
        let client_secret = client_secret.into();

        if client_id.is_empty() {
            return Err(ConfigurationError::MissingRequiredPropertyValue {
                name: "client-id",
                env: crate::configuration::ENV_CLIENT_ID,
            });
        }
        if client_secret.is_empty() {
            return Err(ConfigurationError::MissingRequiredPropertyValue {
                name: "client-secret",
                env: crate::configuration::ENV_CLIENT_SECRET,
            });
        }

        Ok(Self {
            client_id,
            client_secret,
        })
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub(crate) fn client_secret(&self) -> &str {
        &self.client_secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"****")
            .finish()
    }
}

/// Performs the client-credentials exchange against the token endpoint.
pub struct AuthClient {
    http: HttpClient,
    credentials: Credentials,
}

impl AuthClient {
    pub fn new(http: HttpClient, credentials: Credentials) -> Self {
        Self { http, credentials }
    }

    pub async fn request_token(&self) -> Result<TokenResponse, ApiError> {
        debug!(
            "Requesting access token from {} for client {}",
            self.http.endpoint(TOKEN_PATH),
            self.credentials.client_id()
        );

        let params = [("grant_type", GRANT_TYPE_CLIENT_CREDENTIALS)];
        let response = self
            .http
            .post_form_with_basic_auth(TOKEN_PATH, &params, &self.credentials)
            .await?;

        debug!("Token response status: {}", response.status);

        if !response.is_ok() {
            warn!(
                "Token request failed with status {}: {}",
                response.status, response.payload
            );
            return Err(response.into_api_error());
        }

        parse_token_payload(response.payload)
    }
}

/// A 200 body without a string `access_token` is reported as an API error with status 200.
fn parse_token_payload(payload: ResponsePayload) -> Result<TokenResponse, ApiError> {
    match payload.as_json().map(TokenResponse::from_json) {
        Some(Some(token)) => {
            debug!("Received {} token", token.token_type);
            return Ok(token);
        }
        Some(None) => debug!("Token response has no string access_token"),
        None => debug!("Token response is not JSON"),
    }

    Err(ApiError::Api {
        status: reqwest::StatusCode::OK.as_u16(),
        payload,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_credentials_reject_empty_values() {
        assert!(matches!(
            Credentials::new("", "secret"),
            Err(ConfigurationError::MissingRequiredPropertyValue {
                name: "client-id",
                ..
            })
        ));
        assert!(matches!(
            Credentials::new("id", ""),
            Err(ConfigurationError::MissingRequiredPropertyValue {
                name: "client-secret",
                ..
            })
        ));
    }

    #[test]
    fn test_credentials_debug_masks_secret() {
        let credentials = Credentials::new("my-client", "s3cr3t").unwrap();
        let debug = format!("{:?}", credentials);
        assert!(debug.contains("my-client"));
        assert!(!debug.contains("s3cr3t"));
    }

    #[test]
    fn test_parse_token_payload_defaults_token_type() {
        let token = parse_token_payload(ResponsePayload::Json(json!({
            "access_token": "abc",
            "expires_in": 3600
        })))
        .unwrap();

        assert_eq!(token.access_token, "abc");
        assert_eq!(token.token_type, "Bearer");
        assert_eq!(token.expires_in, Some(3600));
        assert_eq!(token.scope, None);
    }

    #[test]
    fn test_parse_token_payload_without_access_token() {
        let body = json!({"token_type": "Bearer"});
        match parse_token_payload(ResponsePayload::Json(body.clone())) {
            Err(ApiError::Api { status, payload }) => {
                assert_eq!(status, 200);
                assert_eq!(payload, ResponsePayload::Json(body));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_parse_token_payload_with_text_body() {
        match parse_token_payload(ResponsePayload::Text("OK".to_string())) {
            Err(ApiError::Api { status, payload }) => {
                assert_eq!(status, 200);
                assert_eq!(payload, ResponsePayload::Text("OK".to_string()));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_parse_token_payload_with_string_expires_in() {
        let token = parse_token_payload(ResponsePayload::Json(json!({
            "access_token": "abc",
            "token_type": null,
            "expires_in": "3599"
        })))
        .unwrap();

        assert_eq!(token.token_type, "Bearer");
        assert_eq!(token.expires_in, Some(3599));
    }

    #[test]
    fn test_parse_token_payload_with_non_string_token() {
        let result = parse_token_payload(ResponsePayload::Json(json!({"access_token": 42})));
        assert!(matches!(result, Err(ApiError::Api { status: 200, .. })));
    }
}
