use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading and parsing trip input data.
#[derive(Debug, Error)]
pub enum ParseError {
    // IO-related.
    #[error("error reading file")]
    Read(#[source] std::io::Error),

    // Parsing-related.
    #[error("invalid CSV format")]
    InvalidCsv(#[from] csv::Error),
    #[error("invalid CSV content: {details}")]
    InvalidCsvContent { details: String },
    #[error("invalid {ron_type} (invalid RON format)")]
    InvalidRon {
        ron_type: &'static str,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("invalid ISO date: {date}")]
    InvalidIsoDate { date: String },
    #[error("invalid time zone: {zone}")]
    InvalidTimeZone { zone: String },
    #[error("invalid ISO currency code: {code}")]
    InvalidIsoCurrencyCode { code: String },
    #[error("invalid amount: '{value}'")]
    InvalidAmount { value: String },
    #[error("invalid exchange rate: '{value}'")]
    InvalidExchangeRate { value: String },
}

/// Errors raised while assembling, rendering, or writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("error rendering report: {details}")]
    Render { details: String },
    #[error("error writing report file '{path}'")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
