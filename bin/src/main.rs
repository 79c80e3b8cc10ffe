//! barquero CLI - daily OHLCV downloader for a fixed set of assets.

use anyhow::{Context, Result, bail};
use barquero_lib::prelude::*;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

mod display;

use display::{AssetArg, Format, print_event};

#[derive(Parser)]
#[command(name = "barquero")]
#[command(about = "Download daily OHLCV data for btcusdt, ethusdt, and xauusd", long_about = None)]
#[command(version)]
struct Cli {
    /// Asset to download (repeatable). Omit to download all assets.
    #[arg(short, long = "asset", value_enum)]
    asset: Vec<AssetArg>,

    /// Start date (YYYY-MM-DD)
    #[arg(short, long, default_value = "2025-01-01")]
    start: String,

    /// End date (YYYY-MM-DD). Defaults to today.
    #[arg(short, long)]
    end: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: Format,

    /// Output directory. Files named <asset>_ohlcv_2025.<format>
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Quiet mode (suppress progress output)
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Both date boundaries must validate before any provider is contacted.
    let start = parse_date(&cli.start)?;
    let end = match cli.end.as_deref() {
        Some(s) => parse_date(s)?,
        None => chrono::Utc::now().date_naive(),
    };
    let range = DateRange::new(start, end)?;

    let assets: Vec<Asset> = if cli.asset.is_empty() {
        Asset::all().to_vec()
    } else {
        cli.asset.iter().map(|&a| Asset::from(a)).collect()
    };

    let format = OutputFormat::from(cli.format);

    std::fs::create_dir_all(&cli.output_dir)
        .with_context(|| format!("Failed to create {}", cli.output_dir.display()))?;

    let config = ClientConfig::default();
    let runner = BatchRunner::new(
        RoutingTable::default(),
        Box::new(BinanceKlines::new(&config).context("Failed to create exchange client")?),
        Box::new(YahooChart::new(&config).context("Failed to create market-data client")?),
        cli.output_dir,
        format,
    );

    if !cli.quiet {
        let rule = "=".repeat(60);
        println!("{rule}");
        println!("barquero OHLCV downloader");
        println!("Period: {range}");
        println!(
            "Assets: {}",
            assets
                .iter()
                .map(Asset::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!("{rule}");
    }

    let progress = if cli.quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(assets.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} assets")
                .expect("Invalid progress template")
                .progress_chars("=>-"),
        );
        pb
    };

    let report = runner
        .run(&assets, range, |event| {
            print_event(&progress, event, cli.quiet);
        })
        .await;

    progress.finish_and_clear();

    if !cli.quiet {
        println!("Download complete: {}", report.summary());
    }

    if !report.all_succeeded() {
        let failed = report.total() - report.success_count();
        bail!("{} out of {} downloads failed", failed, report.total());
    }

    Ok(())
}
