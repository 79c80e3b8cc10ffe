//! Display utilities and argument enums for the barquero CLI.

use barquero_lib::prelude::*;
use clap::ValueEnum;
use indicatif::ProgressBar;

/// Asset selector for the CLI.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum AssetArg {
    Btcusdt,
    Ethusdt,
    Xauusd,
}

impl From<AssetArg> for Asset {
    fn from(arg: AssetArg) -> Self {
        match arg {
            AssetArg::Btcusdt => Self::BtcUsdt,
            AssetArg::Ethusdt => Self::EthUsdt,
            AssetArg::Xauusd => Self::XauUsd,
        }
    }
}

/// Output format for downloaded data.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Csv,
    Tsv,
    Json,
    Ndjson,
}

impl From<Format> for OutputFormat {
    fn from(arg: Format) -> Self {
        match arg {
            Format::Csv => Self::Csv,
            Format::Tsv => Self::Tsv,
            Format::Json => Self::Json,
            Format::Ndjson => Self::Ndjson,
        }
    }
}

/// Prints one batch event above the progress bar.
pub(crate) fn print_event(progress: &ProgressBar, event: &BatchEvent, quiet: bool) {
    if !quiet {
        match event {
            BatchEvent::FetchStarted {
                asset,
                provider,
                symbol,
            } => {
                progress.println(format!("Fetching {symbol} ({asset}) from {provider}..."));
            }
            BatchEvent::Fetched { asset, records } => {
                progress.println(format!("Downloaded {records} records for {asset}"));
            }
            BatchEvent::Exported { path, .. } => {
                progress.println(format!("Data saved to {}", path.display()));
            }
            BatchEvent::Failed { asset, message } => {
                progress.println(format!("Failed to download {asset}: {message}"));
            }
        }
    }

    // The bar advances once per finished asset, success or not.
    if matches!(
        event,
        BatchEvent::Exported { .. } | BatchEvent::Failed { .. }
    ) {
        progress.inc(1);
    }
}
