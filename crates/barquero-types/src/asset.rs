//! The closed set of supported assets.

use serde::{Deserialize, Serialize};

use crate::BarqueroError;

/// A downloadable asset.
///
/// The set is closed: two crypto pairs served by the exchange klines
/// provider and one commodity proxy served by the market-data feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Asset {
    /// Bitcoin vs Tether.
    BtcUsdt,
    /// Ether vs Tether.
    EthUsdt,
    /// Gold vs US Dollar (tracked via the gold futures contract).
    XauUsd,
}

impl Asset {
    /// All supported assets in canonical download order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::BtcUsdt, Self::EthUsdt, Self::XauUsd]
    }

    /// Returns the asset identifier as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BtcUsdt => "btcusdt",
            Self::EthUsdt => "ethusdt",
            Self::XauUsd => "xauusd",
        }
    }

    /// Returns the fixed output file stem for this asset.
    ///
    /// The full artifact name is `{stem}.{extension}`, e.g.
    /// `btcusdt_ohlcv_2025.csv`.
    #[must_use]
    pub fn output_stem(&self) -> String {
        format!("{}_ohlcv_2025", self.as_str())
    }

    /// Returns true if this asset is a crypto pair.
    #[must_use]
    pub const fn is_crypto(&self) -> bool {
        matches!(self, Self::BtcUsdt | Self::EthUsdt)
    }

    /// Returns true if this asset is a commodity proxy.
    #[must_use]
    pub const fn is_commodity(&self) -> bool {
        matches!(self, Self::XauUsd)
    }
}

impl std::fmt::Display for Asset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Asset {
    type Err = BarqueroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "btcusdt" => Ok(Self::BtcUsdt),
            "ethusdt" => Ok(Self::EthUsdt),
            "xauusd" => Ok(Self::XauUsd),
            _ => Err(BarqueroError::UnknownAsset(s.to_string())),
        }
    }
}
