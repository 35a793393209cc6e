//! HTTP utilities for the Infosweb CLI client.
//!
//! This module wraps the `reqwest` client shared by the token and user
//! endpoints: it applies the timeout and user agent, joins endpoint paths onto
//! the base URL and decodes response bodies on a best-effort basis.

use crate::auth::Credentials;
use crate::configuration::ClientSettings;
use crate::infosweb_api::ApiError;
use crate::model::ResponsePayload;
use reqwest::{header, Client, StatusCode};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace};
use url::Url;

pub const USER_AGENT: &str = concat!("infosweb-cli/", env!("CARGO_PKG_VERSION"));

/// Configuration for HTTP requests with common settings
#[derive(Debug, Clone)]
pub struct HttpRequestConfig {
    /// Base URL for the API
    pub base_url: Url,
    /// Timeout applied to every request
    pub timeout: Duration,
}

impl HttpRequestConfig {
    pub fn from_settings(settings: &ClientSettings) -> Self {
        Self {
            base_url: settings.base_url().clone(),
            timeout: settings.timeout(),
        }
    }
}

/// Status and decoded body of a completed request.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub payload: ResponsePayload,
}

impl RawResponse {
    /// Only 200 counts as success for this API.
    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::OK
    }

    pub fn into_api_error(self) -> ApiError {
        ApiError::Api {
            status: self.status.as_u16(),
            payload: self.payload,
        }
    }
}

/// HTTP client wrapper with common request handling logic
#[derive(Clone)]
pub struct HttpClient {
    client: Arc<Client>,
    config: HttpRequestConfig,
}

impl HttpClient {
    pub fn new(config: HttpRequestConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            config,
        })
    }

    /// Append `path` to the base URL, keeping any path prefix the base URL carries.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}{}",
            self.config.base_url.as_str().trim_end_matches('/'),
            path
        )
    }

    /// POST a form-encoded body using HTTP Basic authentication
    pub async fn post_form_with_basic_auth<F>(
        &self,
        path: &str,
        form: &F,
        credentials: &Credentials,
    ) -> Result<RawResponse, ApiError>
    where
        F: Serialize + ?Sized,
    {
        let url = self.endpoint(path);
        self.execute_request(|client| {
            client
                .post(&url)
                .header(
                    header::CONTENT_TYPE,
                    mime::APPLICATION_WWW_FORM_URLENCODED.as_ref(),
                )
                .basic_auth(credentials.client_id(), Some(credentials.client_secret()))
                .form(form)
        })
        .await
    }

    /// POST a JSON body using a bearer token
    pub async fn post_json_with_bearer<B>(
        &self,
        path: &str,
        body: &B,
        token: &str,
    ) -> Result<RawResponse, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(path);
        self.execute_request(|client| client.post(&url).bearer_auth(token).json(body))
            .await
    }

    /// Send the request and read the whole body. Any status is returned to the caller.
    async fn execute_request<F>(&self, request_builder: F) -> Result<RawResponse, ApiError>
    where
        F: FnOnce(&Client) -> reqwest::RequestBuilder,
    {
        let request = request_builder(&self.client).build()?;
        debug!("{} {}", request.method(), request.url());

        let response = self.client.execute(request).await?;
        let status = response.status();
        let body = response.text().await?;
        trace!("Raw response body ({}): {}", status, body);

        Ok(RawResponse {
            status,
            payload: ResponsePayload::from_body(body),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(base_url: &str) -> HttpClient {
        HttpClient::new(HttpRequestConfig {
            base_url: Url::parse(base_url).unwrap(),
            timeout: Duration::from_secs(1),
        })
        .unwrap()
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let client = client_for("http://129.80.151.82:8081/");
        assert_eq!(
            client.endpoint("/Banesco/integracion/oauth/token"),
            "http://129.80.151.82:8081/Banesco/integracion/oauth/token"
        );
    }

    #[test]
    fn test_endpoint_keeps_path_prefix() {
        let client = client_for("https://gateway.example/infosweb/");
        assert_eq!(
            client.endpoint("/Banesco/integracion/oauth/token"),
            "https://gateway.example/infosweb/Banesco/integracion/oauth/token"
        );
    }

    #[test]
    fn test_only_200_is_ok() {
        let response = |status| RawResponse {
            status,
            payload: ResponsePayload::Text(String::new()),
        };
        assert!(response(StatusCode::OK).is_ok());
        assert!(!response(StatusCode::CREATED).is_ok());
        assert!(!response(StatusCode::NO_CONTENT).is_ok());
        assert!(!response(StatusCode::UNAUTHORIZED).is_ok());
    }

    #[test]
    fn test_into_api_error_keeps_status_and_payload() {
        let error = RawResponse {
            status: StatusCode::NOT_FOUND,
            payload: ResponsePayload::Text("missing".to_string()),
        }
        .into_api_error();

        match error {
            ApiError::Api { status, payload } => {
                assert_eq!(status, 404);
                assert_eq!(payload, ResponsePayload::Text("missing".to_string()));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
