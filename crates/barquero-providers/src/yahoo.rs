//! Yahoo Finance chart adapter.
//!
//! Talks to the `/v8/finance/chart/{ticker}` endpoint for daily bars and
//! normalizes the columnar response into [`Candle`]s.

use async_trait::async_trait;
use barquero_types::{BarqueroError, Candle, DateRange, Result};
use chrono::DateTime;
use serde::Deserialize;

use crate::{ClientConfig, DailySource, client::build_client};

/// Base URL for the Yahoo Finance query API.
pub const BASE_URL: &str = "https://query1.finance.yahoo.com";

/// Provider name used in errors and progress messages.
const PROVIDER: &str = "yahoo";

/// Daily bar interval.
const INTERVAL: &str = "1d";

/// Daily OHLCV source backed by the Yahoo Finance chart endpoint.
#[derive(Debug, Clone)]
pub struct YahooChart {
    client: reqwest::Client,
    base_url: String,
}

impl YahooChart {
    /// Creates a new adapter with the given client configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: &ClientConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_client(config)?,
            base_url: BASE_URL.to_string(),
        })
    }

    /// Overrides the API base URL (mirrors, tests).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl DailySource for YahooChart {
    fn provider(&self) -> &'static str {
        PROVIDER
    }

    async fn fetch_daily(&self, symbol: &str, range: DateRange) -> Result<Vec<Candle>> {
        let url = format!("{}/v8/finance/chart/{}", self.base_url, symbol);
        // period2 is exclusive upstream, unlike the exchange adapter's end
        // bound. Passed through as-is to match the provider's convention.
        let response = self
            .client
            .get(&url)
            .query(&[("interval", INTERVAL)])
            .query(&[
                ("period1", range.start_epoch_secs()),
                ("period2", range.end_epoch_secs()),
            ])
            .send()
            .await
            .map_err(|e| provider_error(symbol, e))?
            .error_for_status()
            .map_err(|e| provider_error(symbol, e))?;

        let envelope: ChartEnvelope = response
            .json()
            .await
            .map_err(|e| provider_error(symbol, e))?;

        candles_from_envelope(envelope, symbol)
    }
}

/// Normalizes a chart envelope into candles.
///
/// Zero rows is [`BarqueroError::EmptyResult`], distinct from a transport
/// error; an error object in the envelope is a provider error.
fn candles_from_envelope(envelope: ChartEnvelope, symbol: &str) -> Result<Vec<Candle>> {
    if let Some(err) = envelope.chart.error {
        return Err(provider_error(symbol, err));
    }

    let result = envelope
        .chart
        .result
        .unwrap_or_default()
        .into_iter()
        .next()
        .ok_or_else(|| empty_result(symbol))?;

    let candles = candles_from_result(&result);
    if candles.is_empty() {
        return Err(empty_result(symbol));
    }
    Ok(candles)
}

/// Builds candles from one chart result block.
///
/// Timestamps are epoch seconds in UTC; the exchange's GMT offset is
/// applied before dropping the zone so the exported open time matches the
/// provider's local session date with no offset attached.
fn candles_from_result(result: &ChartResult) -> Vec<Candle> {
    let timestamps = result.timestamp.as_deref().unwrap_or_default();
    let quote = result.indicators.quote.first();
    let gmtoffset = result.meta.as_ref().and_then(|m| m.gmtoffset).unwrap_or(0);

    timestamps
        .iter()
        .enumerate()
        .filter_map(|(index, &ts)| {
            let open_time = DateTime::from_timestamp(ts + gmtoffset, 0)?.naive_utc();
            Some(Candle::new(
                open_time,
                value_at(quote.and_then(|q| q.open.as_ref()), index),
                value_at(quote.and_then(|q| q.high.as_ref()), index),
                value_at(quote.and_then(|q| q.low.as_ref()), index),
                value_at(quote.and_then(|q| q.close.as_ref()), index),
                value_at(quote.and_then(|q| q.volume.as_ref()), index),
            ))
        })
        .collect()
}

/// Picks one value out of a columnar series; absent columns and JSON nulls
/// both collapse to `None`.
fn value_at(series: Option<&Vec<Option<f64>>>, index: usize) -> Option<f64> {
    series.and_then(|values| values.get(index).copied().flatten())
}

fn provider_error(symbol: &str, err: impl std::fmt::Display) -> BarqueroError {
    BarqueroError::Provider {
        provider: PROVIDER,
        symbol: symbol.to_string(),
        message: err.to_string(),
    }
}

fn empty_result(symbol: &str) -> BarqueroError {
    BarqueroError::EmptyResult {
        symbol: symbol.to_string(),
    }
}

/// Top-level chart response envelope.
#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    description: String,
}

impl std::fmt::Display for ChartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.description)
    }
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    meta: Option<ChartMeta>,
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct ChartMeta {
    gmtoffset: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<QuoteBlock>,
}

#[derive(Debug, Default, Deserialize)]
struct QuoteBlock {
    open: Option<Vec<Option<f64>>>,
    high: Option<Vec<Option<f64>>>,
    low: Option<Vec<Option<f64>>>,
    close: Option<Vec<Option<f64>>>,
    volume: Option<Vec<Option<f64>>>,
}
