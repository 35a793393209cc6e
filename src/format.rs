//! Formatting utilities for the Infosweb CLI client.
//!
//! This module renders command output as JSON or CSV.

use serde::Serialize;
use std::str::FromStr;

pub const JSON: &str = "json";
pub const CSV: &str = "csv";

/// Error types that can occur during formatting operations
#[derive(Debug, thiserror::Error)]
pub enum FormattingError {
    /// Error when an unsupported output format is requested
    #[error("invalid output format {0}")]
    UnsupportedOutputFormat(String),
    /// Error specific to CSV operations
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    /// Error when converting bytes to UTF-8 string
    #[error("UTF-8 conversion error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),
    #[error("JSON serialization error: {0}")]
    JsonSerializationError(#[from] serde_json::Error),
    #[error("CSV writer into inner error: {0}")]
    CsvIntoInnerError(#[from] csv::IntoInnerError<csv::Writer<Vec<u8>>>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputFormatOptions {
    pub with_headers: bool,
    pub pretty: bool,
}

/// Enum representing the supported output formats
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON (JavaScript Object Notation) format
    Json(OutputFormatOptions),
    /// CSV (Comma-Separated Values) format
    Csv(OutputFormatOptions),
}

impl OutputFormat {
    /// Returns a vector of all supported format names as strings
    pub fn names() -> Vec<&'static str> {
        vec![JSON, CSV]
    }

    pub fn from_string_with_options(
        format_str: &str,
        options: OutputFormatOptions,
    ) -> Result<OutputFormat, FormattingError> {
        match format_str.to_lowercase().as_str() {
            JSON => Ok(OutputFormat::Json(options)),
            CSV => Ok(OutputFormat::Csv(options)),
            other => Err(FormattingError::UnsupportedOutputFormat(other.to_string())),
        }
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Json(OutputFormatOptions::default())
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            OutputFormat::Json(_) => write!(f, "{}", JSON),
            OutputFormat::Csv(_) => write!(f, "{}", CSV),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = FormattingError;

    fn from_str(format_str: &str) -> Result<OutputFormat, FormattingError> {
        Self::from_string_with_options(format_str, OutputFormatOptions::default())
    }
}

pub trait Formattable {
    fn format(&self, f: &OutputFormat) -> Result<String, FormattingError>;
}

pub fn to_json<T: Serialize + ?Sized>(
    value: &T,
    options: &OutputFormatOptions,
) -> Result<String, FormattingError> {
    if options.pretty {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(serde_json::to_string(value)?)
    }
}

pub fn to_csv(
    header: &[&str],
    records: Vec<Vec<String>>,
    with_headers: bool,
) -> Result<String, FormattingError> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    if with_headers {
        wtr.write_record(header)?;
    }
    for record in records {
        wtr.write_record(&record)?;
    }

    let data = wtr.into_inner()?;
    Ok(String::from_utf8(data)?)
}
