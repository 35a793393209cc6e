//! Shared command parameters for all CLI commands.
//!
//! This module defines common parameters that are used across multiple command modules.
//! It provides a centralized place to define parameter names and common argument configurations.

use crate::format::OutputFormat;
use clap::{Arg, ArgAction};
use url::Url;

pub const APPLICATION_NAME: &str = "infosweb";

// Commands
pub const COMMAND_TOKEN: &str = "token";
pub const COMMAND_CONFIG: &str = "config";
pub const COMMAND_PATH: &str = "path";
pub const COMMAND_SHOW: &str = "show";

// Global connection parameters
pub const PARAMETER_BASE_URL: &str = "base-url";
pub const PARAMETER_CLIENT_ID: &str = "client-id";
pub const PARAMETER_CLIENT_SECRET: &str = "client-secret";
pub const PARAMETER_TIMEOUT: &str = "timeout";
pub const PARAMETER_VERBOSE: &str = "verbose";

// Command parameters
pub const PARAMETER_RAW: &str = "raw";
pub const PARAMETER_ACCESS_TOKEN: &str = "access-token";
pub const PARAMETER_USERNAME: &str = "username";

// Output parameters
pub const PARAMETER_FORMAT: &str = "format";
pub const PARAMETER_COMPACT: &str = "compact";
pub const PARAMETER_HEADERS: &str = "headers";

pub fn verbose_parameter() -> Arg {
    Arg::new(PARAMETER_VERBOSE)
        .short('v')
        .long(PARAMETER_VERBOSE)
        .action(ArgAction::SetTrue)
        .global(true)
        .help("Enable verbose output for debugging")
}

pub fn base_url_parameter() -> Arg {
    Arg::new(PARAMETER_BASE_URL)
        .long(PARAMETER_BASE_URL)
        .num_args(1)
        .global(true)
        .value_parser(clap::value_parser!(Url))
        .help("Base URL for the Infosweb API (overrides INFOSWEB_BASE_URL)")
}

pub fn client_id_parameter() -> Arg {
    Arg::new(PARAMETER_CLIENT_ID)
        .long(PARAMETER_CLIENT_ID)
        .num_args(1)
        .global(true)
        .help("Client ID for the OAuth token endpoint (overrides INFOSWEB_CLIENT_ID)")
}

pub fn client_secret_parameter() -> Arg {
    Arg::new(PARAMETER_CLIENT_SECRET)
        .long(PARAMETER_CLIENT_SECRET)
        .num_args(1)
        .global(true)
        .help("Client secret for the OAuth token endpoint (overrides INFOSWEB_CLIENT_SECRET)")
}

pub fn timeout_parameter() -> Arg {
    Arg::new(PARAMETER_TIMEOUT)
        .long(PARAMETER_TIMEOUT)
        .num_args(1)
        .global(true)
        .allow_negative_numbers(true)
        .value_parser(clap::value_parser!(f64))
        .help("HTTP timeout in seconds [default: 10]")
}

pub fn raw_parameter() -> Arg {
    Arg::new(PARAMETER_RAW)
        .long(PARAMETER_RAW)
        .action(ArgAction::SetTrue)
        .help("Only print the access token value instead of the full response")
}

pub fn access_token_parameter() -> Arg {
    Arg::new(PARAMETER_ACCESS_TOKEN)
        .long(PARAMETER_ACCESS_TOKEN)
        .num_args(1)
        .help("Existing bearer token to reuse (skips requesting a fresh one)")
}

pub fn username_parameter() -> Arg {
    Arg::new(PARAMETER_USERNAME)
        .required(true)
        .num_args(1)
        .help("`nombre_usuario` to process")
}

/// Create the format parameter.
pub fn format_parameter() -> Arg {
    Arg::new(PARAMETER_FORMAT)
        .short('f')
        .long(PARAMETER_FORMAT)
        .num_args(1)
        .required(false)
        .env("INFOSWEB_FORMAT")
        .default_value("json")
        .help("Output data format")
        .value_parser(OutputFormat::names())
}

/// This parameter flag is used across multiple commands for output formatting.
/// JSON output is indented by default; this flag prints it on one line.
pub fn format_compact_parameter() -> Arg {
    Arg::new(PARAMETER_COMPACT)
        .long(PARAMETER_COMPACT)
        .action(ArgAction::SetTrue)
        .required(false)
        .help("Print JSON output on a single line")
}

/// This parameter flag is used across multiple commands for output formatting.
pub fn format_with_headers_parameter() -> Arg {
    Arg::new(PARAMETER_HEADERS)
        .long(PARAMETER_HEADERS)
        .action(ArgAction::SetTrue)
        .required(false)
        .help("Format the output with headers")
}
