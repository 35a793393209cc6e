use crate::actions::{output_format, print_output, resolve_settings};
use crate::configuration::{ClientSettings, Configuration, SettingSource};
use crate::error::CliError;
use crate::format::{to_csv, to_json, Formattable, FormattingError, OutputFormat};
use clap::ArgMatches;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SettingReport {
    pub name: &'static str,
    pub value: Option<String>,
    pub source: Option<SettingSource>,
}

/// Resolved settings as shown by `config show`. The secret is masked.
#[derive(Debug, Clone, Serialize)]
pub struct SettingsReport {
    pub settings: Vec<SettingReport>,
}

impl From<&ClientSettings> for SettingsReport {
    fn from(settings: &ClientSettings) -> Self {
        Self {
            settings: vec![
                SettingReport {
                    name: "base_url",
                    value: Some(settings.base_url().to_string()),
                    source: Some(settings.base_url_source()),
                },
                SettingReport {
                    name: "timeout",
                    value: Some(settings.timeout().as_secs_f64().to_string()),
                    source: Some(settings.timeout_source()),
                },
                SettingReport {
                    name: "client_id",
                    value: settings.client_id().map(str::to_owned),
                    source: settings.client_id_source(),
                },
                SettingReport {
                    name: "client_secret",
                    value: settings.has_client_secret().then(|| "****".to_string()),
                    source: settings.client_secret_source(),
                },
            ],
        }
    }
}

impl Formattable for SettingsReport {
    fn format(&self, f: &OutputFormat) -> Result<String, FormattingError> {
        match f {
            OutputFormat::Json(options) => to_json(self, options),
            OutputFormat::Csv(options) => to_csv(
                &["NAME", "VALUE", "SOURCE"],
                self.settings
                    .iter()
                    .map(|s| {
                        vec![
                            s.name.to_string(),
                            s.value.clone().unwrap_or_default(),
                            s.source.map(|source| source.to_string()).unwrap_or_default(),
                        ]
                    })
                    .collect(),
                options.with_headers,
            ),
        }
    }
}

pub fn print_configuration_path() -> Result<(), CliError> {
    let path = Configuration::get_default_configuration_file_path()?;
    println!("{}", path.display());
    Ok(())
}

pub fn show_configuration(matches: &ArgMatches) -> Result<(), CliError> {
    let format = output_format(matches)?;
    let settings = resolve_settings(matches)?;
    print_output(&SettingsReport::from(&settings).format(&format)?);
    Ok(())
}
