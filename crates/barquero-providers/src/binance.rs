//! Binance klines adapter.
//!
//! Talks to the public (unauthenticated) `/api/v3/klines` endpoint and
//! normalizes the fixed 12-field kline tuples into [`Candle`]s.

use async_trait::async_trait;
use barquero_types::{BarqueroError, Candle, DateRange, Result};
use chrono::DateTime;
use serde_json::Value;
use thiserror::Error;

use crate::{ClientConfig, DailySource, client::build_client};

/// Base URL for the Binance spot REST API.
pub const BASE_URL: &str = "https://api.binance.com";

/// Provider name used in errors and progress messages.
const PROVIDER: &str = "binance";

/// Daily candle interval.
const INTERVAL: &str = "1d";

/// Maximum klines per request; full pages trigger another page.
const PAGE_LIMIT: usize = 1000;

/// One day in milliseconds, the open-time step between daily klines.
const DAY_MS: i64 = 86_400_000;

/// Errors that can occur while normalizing kline rows.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KlineParseError {
    /// A kline row had a missing or non-numeric open time.
    #[error("kline {index} has a missing or non-numeric open time")]
    BadOpenTime {
        /// Index of the offending row.
        index: usize,
    },

    /// A kline row had an open time outside the representable range.
    #[error("kline {index} open time {value} is out of range")]
    OpenTimeOutOfRange {
        /// Index of the offending row.
        index: usize,
        /// The raw epoch-millisecond value.
        value: i64,
    },
}

/// Daily OHLCV source backed by Binance historical klines.
#[derive(Debug, Clone)]
pub struct BinanceKlines {
    client: reqwest::Client,
    base_url: String,
}

impl BinanceKlines {
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

    /// Fetches one page of raw kline rows.
    async fn fetch_page(
        &self,
        symbol: &str,
        start_ms: i64,
        end_ms: i64,
    ) -> Result<Vec<Vec<Value>>> {
        let url = format!("{}/api/v3/klines", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("symbol", symbol), ("interval", INTERVAL)])
            .query(&[("startTime", start_ms), ("endTime", end_ms)])
            .query(&[("limit", PAGE_LIMIT as i64)])
            .send()
            .await
            .map_err(|e| provider_error(symbol, e))?
            .error_for_status()
            .map_err(|e| provider_error(symbol, e))?;

        response.json().await.map_err(|e| provider_error(symbol, e))
    }
}

#[async_trait]
impl DailySource for BinanceKlines {
    fn provider(&self) -> &'static str {
        PROVIDER
    }

    async fn fetch_daily(&self, symbol: &str, range: DateRange) -> Result<Vec<Candle>> {
        let symbol = symbol.to_uppercase();
        let end_ms = range.end_epoch_ms();
        let mut cursor = range.start_epoch_ms();
        let mut candles = Vec::new();

        // Both bounds are inclusive on this endpoint. A full page means
        // more data may follow; advance past the last open time and ask
        // again, like the upstream client libraries do.
        loop {
            let rows = self.fetch_page(&symbol, cursor, end_ms).await?;
            let page_len = rows.len();
            candles.extend(parse_klines(&rows).map_err(|e| provider_error(&symbol, e))?);

            if page_len < PAGE_LIMIT {
                break;
            }
            let Some(last) = candles.last() else { break };
            let next = last.open_time.and_utc().timestamp_millis() + DAY_MS;
            if next <= cursor || next > end_ms {
                break;
            }
            cursor = next;
        }

        Ok(candles)
    }
}

/// Normalizes raw kline rows into candles.
///
/// Each row is a 12-element tuple: open time, open, high, low, close,
/// volume, close time, quote volume, trade count, taker-buy-base,
/// taker-buy-quote, and an unused placeholder. Only the first six fields
/// are kept. Prices and volume are coerced leniently (non-numeric becomes
/// `None`); the open time must be a valid epoch-millisecond number.
///
/// # Errors
///
/// Returns an error if a row's open time is missing or not a timestamp.
pub fn parse_klines(rows: &[Vec<Value>]) -> Result<Vec<Candle>, KlineParseError> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            let open_ms = row
                .first()
                .and_then(Value::as_i64)
                .ok_or(KlineParseError::BadOpenTime { index })?;
            let open_time = DateTime::from_timestamp_millis(open_ms)
                .ok_or(KlineParseError::OpenTimeOutOfRange {
                    index,
                    value: open_ms,
                })?
                .naive_utc();

            Ok(Candle::new(
                open_time,
                coerce_f64(row.get(1)),
                coerce_f64(row.get(2)),
                coerce_f64(row.get(3)),
                coerce_f64(row.get(4)),
                coerce_f64(row.get(5)),
            ))
        })
        .collect()
}

/// Lenient numeric coercion: numbers and numeric strings become `Some`,
/// everything else becomes `None`.
fn coerce_f64(value: Option<&Value>) -> Option<f64> {
    match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    }
}

fn provider_error(symbol: &str, err: impl std::fmt::Display) -> BarqueroError {
    BarqueroError::Provider {
        provider: PROVIDER,
        symbol: symbol.to_string(),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::{NaiveDate, Timelike};
    use serde_json::json;

    fn kline_row(open_ms: i64, open: &str) -> Vec<Value> {
        vec![
            json!(open_ms),
            json!(open),
            json!("94588.11"),
            json!("92888.22"),
            json!("94591.79"),
            json!("12332.54"),
            json!(open_ms + DAY_MS - 1),
            json!("1159183161.92"),
            json!(3_182_161),
            json!("6166.27"),
            json!("579591580.96"),
            json!("0"),
        ]
    }

    #[test]
    fn test_parse_klines() {
        // 2025-01-01T00:00:00Z
        let rows = vec![kline_row(1_735_689_600_000, "93576.00")];
        let candles = parse_klines(&rows).unwrap();

        assert_eq!(candles.len(), 1);
        let candle = &candles[0];
        assert_eq!(
            candle.open_time.date(),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
        );
        assert_eq!(candle.open_time.hour(), 0);
        assert_relative_eq!(candle.open.unwrap(), 93576.0);
        assert_relative_eq!(candle.high.unwrap(), 94588.11);
        assert_relative_eq!(candle.volume.unwrap(), 12332.54);
    }

    #[test]
    fn test_parse_klines_preserves_order() {
        let rows = vec![
            kline_row(1_735_689_600_000, "1"),
            kline_row(1_735_776_000_000, "2"),
            kline_row(1_735_862_400_000, "3"),
        ];
        let candles = parse_klines(&rows).unwrap();

        let days: Vec<u32> = candles
            .iter()
            .map(|c| chrono::Datelike::day(&c.open_time.date()))
            .collect();
        assert_eq!(days, vec![1, 2, 3]);
    }

    #[test]
    fn test_lenient_coercion_to_none() {
        let mut row = kline_row(1_735_689_600_000, "93576.00");
        row[2] = json!("not-a-number");
        row[5] = Value::Null;
        let candles = parse_klines(&[row]).unwrap();

        assert!(candles[0].open.is_some());
        assert!(candles[0].high.is_none());
        assert!(candles[0].volume.is_none());
    }

    #[test]
    fn test_numeric_number_fields_accepted() {
        let mut row = kline_row(1_735_689_600_000, "93576.00");
        row[1] = json!(93576.5);
        let candles = parse_klines(&[row]).unwrap();
        assert_relative_eq!(candles[0].open.unwrap(), 93576.5);
    }

    #[test]
    fn test_bad_open_time_is_an_error() {
        let mut row = kline_row(1_735_689_600_000, "93576.00");
        row[0] = json!("garbage");
        let err = parse_klines(&[row]).unwrap_err();
        assert_eq!(err, KlineParseError::BadOpenTime { index: 0 });
    }

    #[test]
    fn test_short_row_prices_become_none() {
        let row = vec![json!(1_735_689_600_000_i64), json!("93576.00")];
        let candles = parse_klines(&[row]).unwrap();

        assert!(candles[0].open.is_some());
        assert!(candles[0].high.is_none());
        assert!(candles[0].close.is_none());
    }

    #[tokio::test]
    async fn test_adapter_creation() {
        let adapter = BinanceKlines::new(&ClientConfig::default());
        assert!(adapter.is_ok());
    }

    #[test]
    fn test_base_url_override() {
        let adapter = BinanceKlines {
            client: reqwest::Client::new(),
            base_url: BASE_URL.to_string(),
        }
        .with_base_url("http://localhost:9000");
        assert_eq!(adapter.base_url, "http://localhost:9000");
    }
}
