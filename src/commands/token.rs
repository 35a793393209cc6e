//! Token command definition.

use crate::commands::params::{
    format_parameter, format_compact_parameter, format_with_headers_parameter, raw_parameter,
    COMMAND_TOKEN,
};
use clap::Command;

/// Create the token command.
pub fn token_command() -> Command {
    Command::new(COMMAND_TOKEN)
        .about("Retrieve an access token using the client credentials flow")
        .arg(raw_parameter())
        .arg(format_parameter())
        .arg(format_compact_parameter())
        .arg(format_with_headers_parameter())
}
