//! Data models for the Infosweb API.

use crate::format::{to_csv, to_json, Formattable, FormattingError, OutputFormat};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const ACTIVATE_PATH: &str = "/Banesco/integracion/api/v1/usuarios/activar";
pub const DEACTIVATE_PATH: &str = "/Banesco/integracion/api/v1/usuarios/desactivar";

/// A response body, kept as JSON when it parses and as raw text otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponsePayload {
    Json(serde_json::Value),
    Text(String),
}

impl ResponsePayload {
    pub fn from_body(body: String) -> Self {
        match serde_json::from_str::<serde_json::Value>(&body) {
            Ok(value) => ResponsePayload::Json(value),
            Err(_) => ResponsePayload::Text(body),
        }
    }

    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            ResponsePayload::Json(value) => Some(value),
            ResponsePayload::Text(_) => None,
        }
    }
}

impl fmt::Display for ResponsePayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponsePayload::Json(value) => write!(f, "{}", value),
            ResponsePayload::Text(text) => write!(f, "{}", text),
        }
    }
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

/// Payload returned by the OAuth token endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// Lifetime in seconds as reported by the server. Not enforced by this client.
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub scope: Option<String>,
}

impl TokenResponse {
    /// Read a token endpoint body. Only a string `access_token` is required;
    /// optional fields of an unexpected type fall back to their defaults.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        let access_token = value.get("access_token")?.as_str()?.to_string();

        let token_type = value
            .get("token_type")
            .and_then(serde_json::Value::as_str)
            .map(str::to_owned)
            .unwrap_or_else(default_token_type);

        // some servers send the lifetime as a numeric string
        let expires_in = value.get("expires_in").and_then(|v| match v {
            serde_json::Value::Number(n) => n.as_u64(),
            serde_json::Value::String(s) => s.trim().parse().ok(),
            _ => None,
        });

        let scope = value
            .get("scope")
            .and_then(serde_json::Value::as_str)
            .map(str::to_owned);

        Some(Self {
            access_token,
            token_type,
            expires_in,
            scope,
        })
    }
}

impl Formattable for TokenResponse {
    fn format(&self, f: &OutputFormat) -> Result<String, FormattingError> {
        match f {
            OutputFormat::Json(options) => to_json(self, options),
            OutputFormat::Csv(options) => to_csv(
                &["ACCESS_TOKEN", "TOKEN_TYPE", "EXPIRES_IN", "SCOPE"],
                vec![vec![
                    self.access_token.clone(),
                    self.token_type.clone(),
                    self.expires_in.map(|e| e.to_string()).unwrap_or_default(),
                    self.scope.clone().unwrap_or_default(),
                ]],
                options.with_headers,
            ),
        }
    }
}

/// The user account operations exposed by the API.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    strum::Display,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum UserOperation {
    Activate,
    Deactivate,
}

impl UserOperation {
    /// Lowercase name, also used as the subcommand name.
    pub fn name(&self) -> &'static str {
        self.into()
    }

    pub fn path(&self) -> &'static str {
        match self {
            UserOperation::Activate => ACTIVATE_PATH,
            UserOperation::Deactivate => DEACTIVATE_PATH,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            UserOperation::Activate => "Activate a user",
            UserOperation::Deactivate => "Deactivate a user",
        }
    }
}

/// Request body for both user operations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserOperationRequest<'a> {
    pub nombre_usuario: &'a str,
}

/// Outcome of a successful activate or deactivate call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationResult {
    pub operation: UserOperation,
    pub username: String,
    pub payload: ResponsePayload,
}

impl Formattable for OperationResult {
    fn format(&self, f: &OutputFormat) -> Result<String, FormattingError> {
        match f {
            // JSON output is the server's response body as-is
            OutputFormat::Json(options) => to_json(&self.payload, options),
            OutputFormat::Csv(options) => to_csv(
                &["USERNAME", "OPERATION", "RESPONSE"],
                vec![vec![
                    self.username.clone(),
                    self.operation.to_string(),
                    self.payload.to_string(),
                ]],
                options.with_headers,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::OutputFormatOptions;
    use serde_json::json;
    use strum::IntoEnumIterator;

    #[test]
    fn test_payload_from_json_body() {
        let payload = ResponsePayload::from_body(r#"{"estado":"activo"}"#.to_string());
        assert_eq!(payload, ResponsePayload::Json(json!({"estado": "activo"})));
        assert_eq!(payload.to_string(), r#"{"estado":"activo"}"#);
    }

    #[test]
    fn test_payload_from_text_body() {
        let payload = ResponsePayload::from_body("Usuario activado".to_string());
        assert_eq!(payload, ResponsePayload::Text("Usuario activado".to_string()));
        assert!(payload.as_json().is_none());
        assert_eq!(payload.to_string(), "Usuario activado");
    }

    #[test]
    fn test_payload_from_empty_body() {
        assert_eq!(
            ResponsePayload::from_body(String::new()),
            ResponsePayload::Text(String::new())
        );
    }

    #[test]
    fn test_operation_paths_and_names() {
        let names: Vec<String> = UserOperation::iter().map(|op| op.to_string()).collect();
        assert_eq!(names, vec!["activate", "deactivate"]);
        assert_eq!(UserOperation::Activate.path(), ACTIVATE_PATH);
        assert_eq!(UserOperation::Deactivate.path(), DEACTIVATE_PATH);
        assert_eq!(UserOperation::Deactivate.name(), "deactivate");
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(UserOperationRequest {
            nombre_usuario: "jdoe",
        })
        .unwrap();
        assert_eq!(body, json!({"nombre_usuario": "jdoe"}));
    }

    #[test]
    fn test_token_from_json_requires_string_access_token() {
        assert!(TokenResponse::from_json(&json!({"token_type": "Bearer"})).is_none());
        assert!(TokenResponse::from_json(&json!({"access_token": 42})).is_none());
        assert!(TokenResponse::from_json(&json!(["access_token"])).is_none());
        assert!(TokenResponse::from_json(&json!("abc")).is_none());
    }

    #[test]
    fn test_token_from_json_tolerates_odd_optional_fields() {
        let token = TokenResponse::from_json(&json!({
            "access_token": "abc",
            "token_type": null,
            "expires_in": "3599",
            "scope": ["a", "b"]
        }))
        .unwrap();

        assert_eq!(token.access_token, "abc");
        assert_eq!(token.token_type, "Bearer");
        assert_eq!(token.expires_in, Some(3599));
        assert_eq!(token.scope, None);

        let token = TokenResponse::from_json(&json!({
            "access_token": "abc",
            "token_type": 7,
            "expires_in": -5,
            "scope": "usuarios"
        }))
        .unwrap();
        assert_eq!(token.token_type, "Bearer");
        assert_eq!(token.expires_in, None);
        assert_eq!(token.scope.as_deref(), Some("usuarios"));
    }

    #[test]
    fn test_token_json_includes_all_fields() {
        let token = TokenResponse {
            access_token: "abc".to_string(),
            token_type: "Bearer".to_string(),
            expires_in: None,
            scope: Some("usuarios".to_string()),
        };

        let output = token.format(&OutputFormat::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            value,
            json!({
                "access_token": "abc",
                "token_type": "Bearer",
                "expires_in": null,
                "scope": "usuarios"
            })
        );
    }

    #[test]
    fn test_token_csv_with_headers() {
        let token = TokenResponse {
            access_token: "abc".to_string(),
            token_type: "Bearer".to_string(),
            expires_in: Some(300),
            scope: None,
        };
        let format = OutputFormat::Csv(OutputFormatOptions {
            with_headers: true,
            pretty: false,
        });

        let output = token.format(&format).unwrap();
        assert_eq!(output, "ACCESS_TOKEN,TOKEN_TYPE,EXPIRES_IN,SCOPE\nabc,Bearer,300,\n");
    }

    #[test]
    fn test_operation_result_json_is_the_body() {
        let result = OperationResult {
            operation: UserOperation::Activate,
            username: "jdoe".to_string(),
            payload: ResponsePayload::Json(json!({"mensaje": "ok"})),
        };

        let output = result.format(&OutputFormat::default()).unwrap();
        assert_eq!(output, r#"{"mensaje":"ok"}"#);
    }

    #[test]
    fn test_operation_result_csv_without_headers() {
        let result = OperationResult {
            operation: UserOperation::Deactivate,
            username: "jdoe".to_string(),
            payload: ResponsePayload::Text("done".to_string()),
        };
        let format = OutputFormat::Csv(OutputFormatOptions::default());

        let output = result.format(&format).unwrap();
        assert_eq!(output, "jdoe,deactivate,done\n");
    }
}
