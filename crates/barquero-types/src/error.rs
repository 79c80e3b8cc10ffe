//! Error types for barquero.

use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for barquero operations.
pub type Result<T, E = BarqueroError> = std::result::Result<T, E>;

/// Errors that can occur during data download and export.
#[derive(Error, Debug)]
pub enum BarqueroError {
    /// A CLI date string did not parse as `YYYY-MM-DD`.
    #[error("Invalid date format: {input}. Use YYYY-MM-DD format.")]
    InvalidDateFormat {
        /// The offending date string.
        input: String,
    },

    /// Invalid date range.
    #[error(transparent)]
    DateRange(#[from] DateRangeError),

    /// Asset not present in the routing table.
    #[error("Unknown asset: {0}")]
    UnknownAsset(String),

    /// Transport or API-level failure from a data provider.
    #[error("{provider} error for {symbol}: {message}")]
    Provider {
        /// The provider that failed.
        provider: &'static str,
        /// The symbol that was requested.
        symbol: String,
        /// The underlying error message.
        message: String,
    },

    /// A provider returned zero rows for the requested range.
    #[error("No data returned for {symbol}")]
    EmptyResult {
        /// The symbol that had no data.
        symbol: String,
    },

    /// Failed to write an output file.
    #[error("Failed to write {path}: {message}")]
    Export {
        /// The output path that could not be written.
        path: PathBuf,
        /// The underlying error message.
        message: String,
    },
}

/// Error for invalid date ranges.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    /// Start date is after end date.
    #[error("Invalid date range: {start} > {end}")]
    InvalidRange {
        /// The start date.
        start: NaiveDate,
        /// The end date.
        end: NaiveDate,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_format_message() {
        let err = BarqueroError::InvalidDateFormat {
            input: "01/02/2025".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid date format: 01/02/2025. Use YYYY-MM-DD format."
        );
    }

    #[test]
    fn test_provider_message() {
        let err = BarqueroError::Provider {
            provider: "binance",
            symbol: "BTCUSDT".to_string(),
            message: "connection refused".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "binance error for BTCUSDT: connection refused"
        );
    }

    #[test]
    fn test_empty_result_message() {
        let err = BarqueroError::EmptyResult {
            symbol: "GC=F".to_string(),
        };
        assert_eq!(err.to_string(), "No data returned for GC=F");
    }
}
