//! The provider abstraction.

use async_trait::async_trait;
use barquero_types::{Candle, DateRange, Result};

/// A source of daily OHLCV history.
///
/// Each provider adapter implements this trait with one method, so the
/// batch runner (and tests) can swap in alternative sources without a
/// network.
#[async_trait]
pub trait DailySource: Send + Sync {
    /// The provider name used in error and progress messages.
    fn provider(&self) -> &'static str;

    /// Fetches the daily series for `symbol` over `range`, normalized to
    /// the fixed candle schema.
    ///
    /// # Errors
    ///
    /// Returns [`barquero_types::BarqueroError::Provider`] on transport or
    /// API failures and [`barquero_types::BarqueroError::EmptyResult`] when
    /// the provider reports no rows for the range.
    async fn fetch_daily(&self, symbol: &str, range: DateRange) -> Result<Vec<Candle>>;
}
