//! CLI command definitions and argument parsing.
//!
//! This module defines all the CLI commands and their arguments using the clap crate.
//! Connection parameters are global so they can follow any subcommand.

use clap::{ArgMatches, Command};

pub mod config;
pub mod params;
pub mod token;
pub mod user;

pub use params::{
    APPLICATION_NAME, COMMAND_CONFIG, COMMAND_PATH, COMMAND_SHOW, COMMAND_TOKEN,
    PARAMETER_ACCESS_TOKEN, PARAMETER_BASE_URL, PARAMETER_CLIENT_ID, PARAMETER_CLIENT_SECRET,
    PARAMETER_COMPACT, PARAMETER_FORMAT, PARAMETER_HEADERS, PARAMETER_RAW, PARAMETER_TIMEOUT,
    PARAMETER_USERNAME, PARAMETER_VERBOSE,
};

/// Build the full command tree.
pub fn cli_command() -> Command {
    Command::new(APPLICATION_NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .propagate_version(true)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(params::verbose_parameter())
        .arg(params::base_url_parameter())
        .arg(params::client_id_parameter())
        .arg(params::client_secret_parameter())
        .arg(params::timeout_parameter())
        .subcommand(token::token_command())
        .subcommands(user::user_commands())
        .subcommand(config::config_command())
}

/// Parse the process arguments, exiting with usage information on error.
pub fn create_cli_commands() -> ArgMatches {
    cli_command().get_matches()
}
