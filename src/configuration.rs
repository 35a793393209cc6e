//! Configuration management for the Infosweb CLI client.
//!
//! Every setting is resolved from up to four layers, in order: an explicit
//! argument, an environment variable, the optional YAML configuration file and a
//! built-in default. The first non-empty value wins.

use crate::auth::Credentials;
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::{fmt, fs, path::PathBuf, time::Duration};
use tracing::debug;
use url::Url;

pub const DEFAULT_APPLICATION_ID: &str = "infosweb";
pub const DEFAULT_CONFIGURATION_FILE_NAME: &str = "config.yml";
pub const DEFAULT_BASE_URL: &str = "http://129.80.151.82:8081";
pub const DEFAULT_TIMEOUT_SECONDS: f64 = 10.0;

pub const ENV_BASE_URL: &str = "INFOSWEB_BASE_URL";
pub const ENV_CLIENT_ID: &str = "INFOSWEB_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "INFOSWEB_CLIENT_SECRET";
pub const ENV_TIMEOUT: &str = "INFOSWEB_TIMEOUT";
pub const ENV_CONFIG_DIR: &str = "INFOSWEB_CONFIG_DIR";

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("failed to resolve the configuration directory")]
    FailedToFindConfigurationDirectory,
    #[error("failed to load configuration data from {path:?}, because of: {cause}")]
    FailedToLoadData {
        path: PathBuf,
        cause: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("missing value for {name}; set it with --{name}, the {env} environment variable or the configuration file")]
    MissingRequiredPropertyValue {
        name: &'static str,
        env: &'static str,
    },
    #[error("invalid base URL {value:?}: {reason}")]
    InvalidBaseUrl { value: String, reason: String },
    #[error("invalid timeout {value:?}: expected a positive number of seconds")]
    InvalidTimeout { value: String },
}

/// Contents of the optional `config.yml` file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    base_url: Option<Url>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    client_secret: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    timeout: Option<f64>,
}

impl Configuration {
    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    pub fn client_secret(&self) -> Option<&str> {
        self.client_secret.as_deref()
    }

    pub fn timeout(&self) -> Option<f64> {
        self.timeout
    }

    pub fn get_default_configuration_file_path() -> Result<PathBuf, ConfigurationError> {
        // INFOSWEB_CONFIG_DIR takes precedence over the platform directory
        if let Some(config_dir_str) = std::env::var_os(ENV_CONFIG_DIR) {
            let mut config_path = PathBuf::from(config_dir_str);
            config_path.push(DEFAULT_CONFIGURATION_FILE_NAME);
            return Ok(config_path);
        }

        match config_dir() {
            Some(mut path) => {
                path.push(DEFAULT_APPLICATION_ID);
                path.push(DEFAULT_CONFIGURATION_FILE_NAME);
                Ok(path)
            }
            None => Err(ConfigurationError::FailedToFindConfigurationDirectory),
        }
    }

    /// Load the default configuration file. A missing file yields an empty configuration.
    pub fn load_default() -> Result<Configuration, ConfigurationError> {
        let path = Configuration::get_default_configuration_file_path()?;
        if !path.exists() {
            debug!("No configuration file at {}, using defaults", path.display());
            return Ok(Configuration::default());
        }

        debug!("Loading configuration from {}...", path.display());
        Configuration::load_from_file(path)
    }

    pub fn load_from_file(path: PathBuf) -> Result<Configuration, ConfigurationError> {
        let contents = fs::read_to_string(&path).map_err(|e| ConfigurationError::FailedToLoadData {
            path: path.clone(),
            cause: Box::new(e),
        })?;

        // an empty file deserializes to unit, not to a mapping
        if contents.trim().is_empty() {
            return Ok(Configuration::default());
        }

        serde_yaml::from_str(&contents).map_err(|e| ConfigurationError::FailedToLoadData {
            path,
            cause: Box::new(e),
        })
    }
}

/// Explicit values supplied by the caller, usually from command-line flags.
#[derive(Clone, Default)]
pub struct SettingsOverrides {
    pub base_url: Option<Url>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub timeout: Option<f64>,
}

impl SettingsOverrides {
    /// Whether these values and the process environment supply every setting.
    pub fn cover_all_settings(&self) -> bool {
        self.cover_all_settings_with(|name| std::env::var(name).ok())
    }

    /// Whether these values and `env` supply every setting, leaving nothing for
    /// the configuration file or the defaults to contribute.
    pub fn cover_all_settings_with<F>(&self, env: F) -> bool
    where
        F: Fn(&str) -> Option<String>,
    {
        let has_string = |value: &Option<String>, name: &str| {
            value.as_deref().is_some_and(|v| !v.is_empty()) || non_empty(env(name)).is_some()
        };

        (self.base_url.is_some() || non_empty(env(ENV_BASE_URL)).is_some())
            && (self.timeout.is_some() || non_empty(env(ENV_TIMEOUT)).is_some())
            && has_string(&self.client_id, ENV_CLIENT_ID)
            && has_string(&self.client_secret, ENV_CLIENT_SECRET)
    }
}

impl fmt::Debug for SettingsOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsOverrides")
            .field("base_url", &self.base_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret.as_ref().map(|_| "****"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// The layer a resolved setting came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SettingSource {
    Argument,
    Environment,
    ConfigurationFile,
    Default,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<T> {
    pub value: T,
    pub source: SettingSource,
}

impl<T> Resolved<T> {
    fn new(value: T, source: SettingSource) -> Self {
        Self { value, source }
    }
}

/// Fully resolved connection settings for the API client.
#[derive(Clone)]
pub struct ClientSettings {
    base_url: Resolved<Url>,
    timeout: Resolved<Duration>,
    client_id: Option<Resolved<String>>,
    client_secret: Option<Resolved<String>>,
}

impl fmt::Debug for ClientSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientSettings")
            .field("base_url", &self.base_url.value.as_str())
            .field("timeout", &self.timeout.value)
            .field("client_id", &self.client_id())
            .field("client_secret", &self.client_secret.as_ref().map(|_| "****"))
            .finish()
    }
}

impl ClientSettings {
    /// Settings for an embedding program: the given base URL, the default timeout and no credentials.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url: Resolved::new(base_url, SettingSource::Argument),
            timeout: Resolved::new(
                Duration::from_secs_f64(DEFAULT_TIMEOUT_SECONDS),
                SettingSource::Default,
            ),
            client_id: None,
            client_secret: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Resolved::new(timeout, SettingSource::Argument);
        self
    }

    /// Empty values are treated as absent.
    pub fn with_credentials(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        self.client_id = non_empty(Some(client_id.into()))
            .map(|value| Resolved::new(value, SettingSource::Argument));
        self.client_secret = non_empty(Some(client_secret.into()))
            .map(|value| Resolved::new(value, SettingSource::Argument));
        self
    }

    /// Resolve settings against the process environment.
    pub fn resolve(
        overrides: &SettingsOverrides,
        configuration: &Configuration,
    ) -> Result<Self, ConfigurationError> {
        Self::resolve_with(overrides, configuration, |name| std::env::var(name).ok())
    }

    /// Resolve settings using `env` to look up environment variables.
    pub fn resolve_with<F>(
        overrides: &SettingsOverrides,
        configuration: &Configuration,
        env: F,
    ) -> Result<Self, ConfigurationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = if let Some(url) = &overrides.base_url {
            Resolved::new(url.clone(), SettingSource::Argument)
        } else if let Some(raw) = non_empty(env(ENV_BASE_URL)) {
            Resolved::new(parse_base_url(&raw)?, SettingSource::Environment)
        } else if let Some(url) = configuration.base_url() {
            Resolved::new(url.clone(), SettingSource::ConfigurationFile)
        } else {
            Resolved::new(parse_base_url(DEFAULT_BASE_URL)?, SettingSource::Default)
        };
        check_base_url(&base_url.value)?;

        let timeout = if let Some(seconds) = overrides.timeout {
            Resolved::new(timeout_from_seconds(seconds)?, SettingSource::Argument)
        } else if let Some(raw) = non_empty(env(ENV_TIMEOUT)) {
            let seconds = raw
                .trim()
                .parse::<f64>()
                .map_err(|_| ConfigurationError::InvalidTimeout { value: raw.clone() })?;
            Resolved::new(timeout_from_seconds(seconds)?, SettingSource::Environment)
        } else if let Some(seconds) = configuration.timeout() {
            Resolved::new(
                timeout_from_seconds(seconds)?,
                SettingSource::ConfigurationFile,
            )
        } else {
            Resolved::new(
                timeout_from_seconds(DEFAULT_TIMEOUT_SECONDS)?,
                SettingSource::Default,
            )
        };

        let client_id = first_non_empty([
            (overrides.client_id.clone(), SettingSource::Argument),
            (env(ENV_CLIENT_ID), SettingSource::Environment),
            (
                configuration.client_id().map(str::to_owned),
                SettingSource::ConfigurationFile,
            ),
        ]);
        let client_secret = first_non_empty([
            (overrides.client_secret.clone(), SettingSource::Argument),
            (env(ENV_CLIENT_SECRET), SettingSource::Environment),
            (
                configuration.client_secret().map(str::to_owned),
                SettingSource::ConfigurationFile,
            ),
        ]);

        Ok(Self {
            base_url,
            timeout,
            client_id,
            client_secret,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url.value
    }

    pub fn base_url_source(&self) -> SettingSource {
        self.base_url.source
    }

    pub fn timeout(&self) -> Duration {
        self.timeout.value
    }

    pub fn timeout_source(&self) -> SettingSource {
        self.timeout.source
    }

    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_ref().map(|r| r.value.as_str())
    }

    pub fn client_id_source(&self) -> Option<SettingSource> {
        self.client_id.as_ref().map(|r| r.source)
    }

    pub fn has_client_secret(&self) -> bool {
        self.client_secret.is_some()
    }

    pub fn client_secret_source(&self) -> Option<SettingSource> {
        self.client_secret.as_ref().map(|r| r.source)
    }

    /// Credentials for the token endpoint, failing if either half is missing.
    pub fn credentials(&self) -> Result<Credentials, ConfigurationError> {
        let client_id = self.client_id.as_ref().ok_or(
            ConfigurationError::MissingRequiredPropertyValue {
                name: "client-id",
                env: ENV_CLIENT_ID,
            },
        )?;
        let client_secret = self.client_secret.as_ref().ok_or(
            ConfigurationError::MissingRequiredPropertyValue {
                name: "client-secret",
                env: ENV_CLIENT_SECRET,
            },
        )?;

        Credentials::new(client_id.value.clone(), client_secret.value.clone())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn first_non_empty<const N: usize>(
    layers: [(Option<String>, SettingSource); N],
) -> Option<Resolved<String>> {
    layers
        .into_iter()
        .find_map(|(value, source)| non_empty(value).map(|value| Resolved::new(value, source)))
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigurationError> {
    let url = Url::parse(raw.trim()).map_err(|e| ConfigurationError::InvalidBaseUrl {
        value: raw.to_string(),
        reason: e.to_string(),
    })?;
    check_base_url(&url)?;
    Ok(url)
}

fn check_base_url(url: &Url) -> Result<(), ConfigurationError> {
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigurationError::InvalidBaseUrl {
            value: url.to_string(),
            reason: format!("unsupported scheme {:?}, expected http or https", other),
        }),
    }
}

fn timeout_from_seconds(seconds: f64) -> Result<Duration, ConfigurationError> {
    if !seconds.is_finite() || seconds <= 0.0 {
        return Err(ConfigurationError::InvalidTimeout {
            value: seconds.to_string(),
        });
    }

    Duration::try_from_secs_f64(seconds).map_err(|_| ConfigurationError::InvalidTimeout {
        value: seconds.to_string(),
    })
}
