//! Command implementations.
//!
//! Each action reads its arguments from the parsed [`ArgMatches`], talks to the
//! API through [`InfoswebApiClient`] and prints the result to stdout.

use crate::commands::params::{
    PARAMETER_BASE_URL, PARAMETER_CLIENT_ID, PARAMETER_CLIENT_SECRET, PARAMETER_COMPACT,
    PARAMETER_FORMAT, PARAMETER_HEADERS, PARAMETER_TIMEOUT,
};
use crate::configuration::{ClientSettings, Configuration, SettingsOverrides};
use crate::error::CliError;
use crate::format::{OutputFormat, OutputFormatOptions};
use crate::infosweb_api::InfoswebApiClient;
use clap::ArgMatches;
use tracing::{debug, warn};
use url::Url;

pub mod config;
pub mod token;
pub mod users;

/// Collect the explicit connection settings given on the command line.
pub fn settings_overrides(matches: &ArgMatches) -> SettingsOverrides {
    SettingsOverrides {
        base_url: matches.get_one::<Url>(PARAMETER_BASE_URL).cloned(),
        client_id: matches.get_one::<String>(PARAMETER_CLIENT_ID).cloned(),
        client_secret: matches.get_one::<String>(PARAMETER_CLIENT_SECRET).cloned(),
        timeout: matches.get_one::<f64>(PARAMETER_TIMEOUT).copied(),
    }
}

/// Resolve settings from arguments, environment, configuration file and defaults.
///
/// An unreadable configuration file is only an error when it could still
/// supply a setting.
pub fn resolve_settings(matches: &ArgMatches) -> Result<ClientSettings, CliError> {
    let overrides = settings_overrides(matches);
    let configuration = match Configuration::load_default() {
        Ok(configuration) => configuration,
        Err(e) if overrides.cover_all_settings() => {
            warn!("Ignoring configuration file: {}", e);
            Configuration::default()
        }
        Err(e) => return Err(e.into()),
    };
    let settings = ClientSettings::resolve(&overrides, &configuration)?;
    debug!("Resolved settings: {:?}", settings);
    Ok(settings)
}

pub fn api_client(matches: &ArgMatches) -> Result<InfoswebApiClient, CliError> {
    Ok(InfoswebApiClient::new(resolve_settings(matches)?)?)
}

pub fn output_format(matches: &ArgMatches) -> Result<OutputFormat, CliError> {
    let format_str = matches
        .get_one::<String>(PARAMETER_FORMAT)
        .map(String::as_str)
        .unwrap_or(crate::format::JSON);

    let options = OutputFormatOptions {
        with_headers: matches.get_flag(PARAMETER_HEADERS),
        pretty: !matches.get_flag(PARAMETER_COMPACT),
    };

    Ok(OutputFormat::from_string_with_options(format_str, options)?)
}

/// Print command output followed by exactly one newline.
pub fn print_output(output: &str) {
    print!("{}", terminate_line(output));
}

fn terminate_line(output: &str) -> String {
    if output.ends_with('\n') {
        output.to_string()
    } else {
        format!("{}\n", output)
    }
}
