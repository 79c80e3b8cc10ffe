//! Sequential batch runner.

use std::path::PathBuf;

use barquero_export::{OutputFormat, export_candles};
use barquero_providers::DailySource;
use barquero_types::{Asset, BarqueroError, DateRange, Result};

use crate::{AssetOutcome, BatchReport, Outcome, ProviderKind, RoutingTable};

/// Progress events emitted while a batch runs, for the CLI to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchEvent {
    /// A provider fetch is about to start.
    FetchStarted {
        /// The asset being fetched.
        asset: Asset,
        /// The serving provider's name.
        provider: &'static str,
        /// The provider-specific symbol.
        symbol: String,
    },
    /// A fetch completed with a non-empty series.
    Fetched {
        /// The asset that was fetched.
        asset: Asset,
        /// Number of records in the series.
        records: usize,
    },
    /// The series was written to disk.
    Exported {
        /// The asset that was exported.
        asset: Asset,
        /// The output artifact path.
        path: PathBuf,
    },
    /// The asset failed at some stage.
    Failed {
        /// The asset that failed.
        asset: Asset,
        /// The error message.
        message: String,
    },
}

/// Drives per-asset download and export over a routing table.
///
/// Assets are processed strictly one at a time, in request order. A
/// failure at any stage marks that asset failed and the loop moves on;
/// the runner itself never errors, it only reports a tally.
pub struct BatchRunner {
    routing: RoutingTable,
    exchange: Box<dyn DailySource>,
    market_data: Box<dyn DailySource>,
    output_dir: PathBuf,
    format: OutputFormat,
}

impl std::fmt::Debug for BatchRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatchRunner")
            .field("routing", &self.routing)
            .field("output_dir", &self.output_dir)
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}

impl BatchRunner {
    /// Creates a new runner.
    pub fn new(
        routing: RoutingTable,
        exchange: Box<dyn DailySource>,
        market_data: Box<dyn DailySource>,
        output_dir: impl Into<PathBuf>,
        format: OutputFormat,
    ) -> Self {
        Self {
            routing,
            exchange,
            market_data,
            output_dir: output_dir.into(),
            format,
        }
    }

    /// Returns the output artifact path for an asset.
    #[must_use]
    pub fn output_path(&self, asset: Asset) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", asset.output_stem(), self.format.extension()))
    }

    /// Runs the batch over `assets` in order, emitting progress events.
    pub async fn run<F>(&self, assets: &[Asset], range: DateRange, mut on_event: F) -> BatchReport
    where
        F: FnMut(&BatchEvent),
    {
        let mut report = BatchReport::default();

        for &asset in assets {
            match self.run_asset(asset, range, &mut on_event).await {
                Ok((records, path)) => {
                    report.push(AssetOutcome {
                        asset,
                        outcome: Outcome::Success { records, path },
                    });
                }
                Err(error) => {
                    on_event(&BatchEvent::Failed {
                        asset,
                        message: error.to_string(),
                    });
                    report.push(AssetOutcome {
                        asset,
                        outcome: Outcome::Failed(error),
                    });
                }
            }
        }

        report
    }

    /// Fetches and exports one asset.
    async fn run_asset<F>(
        &self,
        asset: Asset,
        range: DateRange,
        on_event: &mut F,
    ) -> Result<(usize, PathBuf)>
    where
        F: FnMut(&BatchEvent),
    {
        let route = self.routing.route(asset)?;
        let source = self.source_for(route.kind);

        on_event(&BatchEvent::FetchStarted {
            asset,
            provider: source.provider(),
            symbol: route.symbol.clone(),
        });

        let candles = source.fetch_daily(&route.symbol, range).await?;

        // A zero-row series is a failure, never a valid empty artifact;
        // nothing is written for this asset.
        if candles.is_empty() {
            return Err(BarqueroError::EmptyResult {
                symbol: route.symbol.clone(),
            });
        }

        on_event(&BatchEvent::Fetched {
            asset,
            records: candles.len(),
        });

        let path = self.output_path(asset);
        export_candles(&candles, &path, self.format)?;

        on_event(&BatchEvent::Exported {
            asset,
            path: path.clone(),
        });

        Ok((candles.len(), path))
    }

    fn source_for(&self, kind: ProviderKind) -> &dyn DailySource {
        match kind {
            ProviderKind::Exchange => self.exchange.as_ref(),
            ProviderKind::MarketData => self.market_data.as_ref(),
        }
    }
}
