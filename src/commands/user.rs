//! User command definitions.
//!
//! One subcommand is generated per [`UserOperation`].

use crate::commands::params::{
    access_token_parameter, format_parameter, format_compact_parameter,
    format_with_headers_parameter, username_parameter,
};
use crate::model::UserOperation;
use clap::Command;
use strum::IntoEnumIterator;

pub fn user_command(operation: UserOperation) -> Command {
    Command::new(operation.name())
        .about(operation.description())
        .arg(username_parameter())
        .arg(access_token_parameter())
        .arg(format_parameter())
        .arg(format_compact_parameter())
        .arg(format_with_headers_parameter())
}

/// Commands for every user operation
pub fn user_commands() -> Vec<Command> {
    UserOperation::iter().map(user_command).collect()
}
