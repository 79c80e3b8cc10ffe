//! Asset-to-provider routing.

use std::collections::HashMap;

use barquero_types::{Asset, BarqueroError, Result};

/// Which provider serves an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    /// The exchange klines provider.
    Exchange,
    /// The market-data feed provider.
    MarketData,
}

/// One routing entry: the serving provider and its symbol for the asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// The provider that serves this asset.
    pub kind: ProviderKind,
    /// The provider-specific symbol to request.
    pub symbol: String,
}

impl Route {
    /// Creates a new route.
    pub fn new(kind: ProviderKind, symbol: impl Into<String>) -> Self {
        Self {
            kind,
            symbol: symbol.into(),
        }
    }
}

/// Maps each asset to the provider and symbol that serve it.
///
/// The table is passed into the batch runner at construction so tests can
/// substitute alternate mappings; nothing here is global state.
#[derive(Debug, Clone)]
pub struct RoutingTable {
    routes: HashMap<Asset, Route>,
}

impl Default for RoutingTable {
    /// The canonical mapping: the two crypto pairs go to the exchange,
    /// the gold proxy to the market-data feed via its futures ticker.
    fn default() -> Self {
        Self::empty()
            .with_route(Asset::BtcUsdt, Route::new(ProviderKind::Exchange, "BTCUSDT"))
            .with_route(Asset::EthUsdt, Route::new(ProviderKind::Exchange, "ETHUSDT"))
            .with_route(Asset::XauUsd, Route::new(ProviderKind::MarketData, "GC=F"))
    }
}

impl RoutingTable {
    /// Creates an empty routing table.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    /// Adds or replaces a route.
    #[must_use]
    pub fn with_route(mut self, asset: Asset, route: Route) -> Self {
        self.routes.insert(asset, route);
        self
    }

    /// Looks up the route for an asset.
    ///
    /// # Errors
    ///
    /// Returns [`BarqueroError::UnknownAsset`] if the asset has no route.
    pub fn route(&self, asset: Asset) -> Result<&Route> {
        self.routes
            .get(&asset)
            .ok_or_else(|| BarqueroError::UnknownAsset(asset.to_string()))
    }

    /// Returns the number of routed assets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns true if the table has no routes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_covers_all_assets() {
        let table = RoutingTable::default();
        assert_eq!(table.len(), Asset::all().len());
        for &asset in Asset::all() {
            assert!(table.route(asset).is_ok());
        }
    }

    #[test]
    fn test_default_routes() {
        let table = RoutingTable::default();

        let btc = table.route(Asset::BtcUsdt).unwrap();
        assert_eq!(btc.kind, ProviderKind::Exchange);
        assert_eq!(btc.symbol, "BTCUSDT");

        let gold = table.route(Asset::XauUsd).unwrap();
        assert_eq!(gold.kind, ProviderKind::MarketData);
        assert_eq!(gold.symbol, "GC=F");
    }

    #[test]
    fn test_missing_route() {
        let table = RoutingTable::empty();
        let err = table.route(Asset::BtcUsdt).unwrap_err();
        assert!(matches!(err, BarqueroError::UnknownAsset(ref s) if s == "btcusdt"));
    }

    #[test]
    fn test_alternate_mapping() {
        let table = RoutingTable::default().with_route(
            Asset::BtcUsdt,
            Route::new(ProviderKind::MarketData, "BTC-USD"),
        );

        let btc = table.route(Asset::BtcUsdt).unwrap();
        assert_eq!(btc.kind, ProviderKind::MarketData);
        assert_eq!(btc.symbol, "BTC-USD");
    }
}
