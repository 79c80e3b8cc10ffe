//! Batch orchestration for the barquero daily OHLCV downloader.
//!
//! This crate drives the per-asset download-and-export loop:
//!
//! - [`RoutingTable`] - Explicit asset-to-provider mapping
//! - [`BatchRunner`] - Sequential runner with per-asset failure isolation
//! - [`BatchReport`] - Success/failure tally that decides the exit status
//! - [`BatchEvent`] - Progress events for the CLI to print

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/barquero-data/barquero/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod report;
mod routing;
mod runner;

pub use report::{AssetOutcome, BatchReport, Outcome};
pub use routing::{ProviderKind, Route, RoutingTable};
pub use runner::{BatchEvent, BatchRunner};
