//! User action implementations.

use crate::actions::{api_client, output_format, print_output};
use crate::commands::params::{PARAMETER_ACCESS_TOKEN, PARAMETER_USERNAME};
use crate::error::CliError;
use crate::format::Formattable;
use crate::model::UserOperation;
use clap::ArgMatches;

/// Activate or deactivate the user named on the command line and print the response.
pub async fn execute_user_operation(
    operation: UserOperation,
    matches: &ArgMatches,
) -> Result<(), CliError> {
    let username = matches
        .get_one::<String>(PARAMETER_USERNAME)
        .ok_or_else(|| CliError::MissingRequiredArgument(PARAMETER_USERNAME.to_string()))?;
    let access_token = matches
        .get_one::<String>(PARAMETER_ACCESS_TOKEN)
        .map(String::as_str);

    // checked before the client is built so a bad --format never costs a request
    let format = output_format(matches)?;
    let client = api_client(matches)?;
    let result = client
        .execute_user_operation(operation, username, access_token)
        .await?;

    print_output(&result.format(&format)?);
    Ok(())
}
