//! Library facade for the barquero daily OHLCV downloader.
//!
//! This is a facade crate that re-exports functionality from the barquero
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use barquero_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::default();
//!     let runner = BatchRunner::new(
//!         RoutingTable::default(),
//!         Box::new(BinanceKlines::new(&config)?),
//!         Box::new(YahooChart::new(&config)?),
//!         ".",
//!         OutputFormat::Csv,
//!     );
//!
//!     let range = DateRange::new(parse_date("2025-01-01")?, parse_date("2025-01-31")?)?;
//!     let report = runner.run(Asset::all(), range, |_| {}).await;
//!     println!("{}", report.summary());
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/barquero-data/barquero/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use barquero_types::*;

// Re-export provider adapters
pub use barquero_providers::{BinanceKlines, ClientConfig, DailySource, YahooChart};

// Re-export formatters
pub use barquero_export::{
    CsvFormatter, FormatError, Formatter, JsonFormatter, OutputFormat, export_candles,
};

// Re-export batch orchestration
pub use barquero_batch::{
    AssetOutcome, BatchEvent, BatchReport, BatchRunner, Outcome, ProviderKind, Route, RoutingTable,
};

/// Prelude module for convenient imports.
///
/// ```
/// use barquero_lib::prelude::*;
/// ```
pub mod prelude {
    pub use barquero_types::{
        Asset, BarqueroError, Candle, DateRange, DateRangeError, Result, parse_date,
    };

    pub use barquero_providers::{BinanceKlines, ClientConfig, DailySource, YahooChart};

    pub use barquero_export::{CsvFormatter, Formatter, JsonFormatter, OutputFormat};

    pub use barquero_batch::{BatchEvent, BatchReport, BatchRunner, Route, RoutingTable};
}
