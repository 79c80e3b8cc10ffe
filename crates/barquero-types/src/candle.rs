//! Daily OHLCV candle representation.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single daily OHLCV candle after provider normalization.
///
/// Price and volume fields are optional: upstream APIs occasionally return
/// non-numeric or null values (placeholder fields, halted sessions), and
/// those are coerced to `None` rather than rejected. `None` serializes to
/// an empty delimited field and JSON `null`.
///
/// The open time is naive on purpose: both providers are normalized to a
/// timezone-stripped timestamp so exported files agree on one format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Period start (naive, timezone-stripped).
    pub open_time: NaiveDateTime,
    /// Opening price.
    pub open: Option<f64>,
    /// Highest price during the period.
    pub high: Option<f64>,
    /// Lowest price during the period.
    pub low: Option<f64>,
    /// Closing price.
    pub close: Option<f64>,
    /// Traded volume.
    pub volume: Option<f64>,
}

impl Candle {
    /// Creates a new candle.
    #[must_use]
    pub const fn new(
        open_time: NaiveDateTime,
        open: Option<f64>,
        high: Option<f64>,
        low: Option<f64>,
        close: Option<f64>,
        volume: Option<f64>,
    ) -> Self {
        Self {
            open_time,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Returns true if every price and volume field is present.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.open.is_some()
            && self.high.is_some()
            && self.low.is_some()
            && self.close.is_some()
            && self.volume.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn open_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_complete_candle() {
        let candle = Candle::new(
            open_time(),
            Some(93576.0),
            Some(94588.11),
            Some(92888.22),
            Some(94591.79),
            Some(12332.5),
        );
        assert!(candle.is_complete());
    }

    #[test]
    fn test_incomplete_candle() {
        let candle = Candle::new(open_time(), Some(1.0), None, Some(0.9), Some(0.95), None);
        assert!(!candle.is_complete());
    }
}
