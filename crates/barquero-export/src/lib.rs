//! Output formatters for the barquero daily OHLCV downloader.
//!
//! This crate provides the export layer:
//!
//! - [`OutputFormat`] - Format identifier with file extensions
//! - [`Formatter`] - The formatter trait
//! - [`CsvFormatter`] - Delimited text with the fixed six-column header
//! - [`JsonFormatter`] - JSON array and NDJSON styles
//! - [`export_candles`] - Overwriting path-level export

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/barquero-data/barquero/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;
mod writer;

pub use csv::CsvFormatter;
pub use formatter::{FormatError, Formatter, OutputFormat};
pub use json::{JsonFormatter, JsonStyle};
pub use writer::export_candles;
