use thiserror::Error;

use crate::{exit_codes::InfoswebExitCode, infosweb_api::ApiError};

/// Error types that can occur during CLI command execution
#[derive(Debug, Error)]
pub enum CliError {
    /// Error when an unsupported or undefined subcommand is encountered
    #[error("Undefined or unsupported subcommand: {0}")]
    UnsupportedSubcommand(String),
    /// Error related to configuration loading or resolution
    #[error("Configuration error: {0}")]
    ConfigurationError(#[from] crate::configuration::ConfigurationError),
    /// Error related to data formatting
    #[error("Formatting error: {0}")]
    FormattingError(#[from] crate::format::FormattingError),
    /// Error when a required command-line argument is missing
    #[error("Missing required argument: {0}")]
    MissingRequiredArgument(String),
    #[error(transparent)]
    ApiError(#[from] ApiError),
}

impl CliError {
    /// Get the appropriate exit code for this error
    ///
    /// Configuration problems map to 3, transport failures to 2 and API
    /// responses to 1, whether they surface directly or through the client.
    pub fn exit_code(&self) -> InfoswebExitCode {
        match self {
            CliError::UnsupportedSubcommand(_) => InfoswebExitCode::UsageError,
            CliError::MissingRequiredArgument(_) => InfoswebExitCode::UsageError,
            CliError::ConfigurationError(_) => InfoswebExitCode::ConfigError,
            CliError::FormattingError(_) => InfoswebExitCode::SoftwareError,
            CliError::ApiError(ApiError::Configuration(_)) => InfoswebExitCode::ConfigError,
            CliError::ApiError(ApiError::Transport(_)) => InfoswebExitCode::TransportError,
            CliError::ApiError(ApiError::Api { .. }) => InfoswebExitCode::ApiError,
        }
    }
}
