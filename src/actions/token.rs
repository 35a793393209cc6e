use crate::actions::{api_client, output_format, print_output};
use crate::commands::params::PARAMETER_RAW;
use crate::error::CliError;
use crate::format::Formattable;
use clap::ArgMatches;

/// Request a token and print it, or only its value with `--raw`.
pub async fn print_token(matches: &ArgMatches) -> Result<(), CliError> {
    let format = output_format(matches)?;
    let client = api_client(matches)?;
    let token = client.request_token().await?;

    if matches.get_flag(PARAMETER_RAW) {
        println!("{}", token.access_token);
    } else {
        print_output(&token.format(&format)?);
    }

    Ok(())
}
