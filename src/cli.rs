//! Dispatch from parsed command-line arguments to actions.

use crate::actions;
use crate::commands::params::{COMMAND_CONFIG, COMMAND_PATH, COMMAND_SHOW, COMMAND_TOKEN};
use crate::error::CliError;
use crate::model::UserOperation;
use clap::ArgMatches;
use strum::IntoEnumIterator;

fn extract_subcommand_name(matches: &ArgMatches) -> String {
    matches
        .subcommand()
        .map(|(name, _)| name.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

pub async fn execute_command(matches: &ArgMatches) -> Result<(), CliError> {
    match matches.subcommand() {
        Some((COMMAND_TOKEN, sub_matches)) => actions::token::print_token(sub_matches).await,
        Some((COMMAND_CONFIG, sub_matches)) => match sub_matches.subcommand() {
            Some((COMMAND_PATH, _)) => actions::config::print_configuration_path(),
            Some((COMMAND_SHOW, sub_matches)) => actions::config::show_configuration(sub_matches),
            _ => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
                sub_matches,
            ))),
        },
        Some((name, sub_matches)) => {
            match UserOperation::iter().find(|operation| operation.name() == name) {
                Some(operation) => {
                    actions::users::execute_user_operation(operation, sub_matches).await
                }
                None => Err(CliError::UnsupportedSubcommand(name.to_string())),
            }
        }
        None => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
            matches,
        ))),
    }
}
