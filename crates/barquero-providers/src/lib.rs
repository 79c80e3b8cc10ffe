//! Provider adapters for the barquero daily OHLCV downloader.
//!
//! This crate provides the data acquisition layer:
//!
//! - [`ClientConfig`] - HTTP client settings shared by the adapters
//! - [`DailySource`] - The one-method provider abstraction
//! - [`BinanceKlines`] - Exchange klines adapter (crypto pairs)
//! - [`YahooChart`] - Market-data feed adapter (commodity proxy)

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/barquero-data/barquero/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod binance;
mod client;
mod source;
pub mod yahoo;

pub use binance::{BinanceKlines, KlineParseError, parse_klines};
pub use client::ClientConfig;
pub use source::DailySource;
pub use yahoo::YahooChart;
