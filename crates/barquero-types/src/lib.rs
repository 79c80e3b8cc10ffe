//! Core types for the barquero daily OHLCV downloader.
//!
//! This crate provides the fundamental data structures used throughout
//! barquero:
//!
//! - [`Candle`] - A normalized daily OHLCV record
//! - [`Asset`] - The closed set of supported assets
//! - [`DateRange`] - Date range for data retrieval, with epoch accessors
//! - [`parse_date`] - Strict `YYYY-MM-DD` CLI date validation
//! - [`BarqueroError`] - The shared error taxonomy

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/barquero-data/barquero/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod asset;
mod candle;
mod date_range;
mod error;

pub use asset::Asset;
pub use candle::Candle;
pub use date_range::{DateRange, parse_date};
pub use error::{BarqueroError, DateRangeError, Result};
