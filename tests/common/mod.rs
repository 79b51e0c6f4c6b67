//! Shared test utilities: fixtures and price builders.

#![allow(dead_code)]

use perpwatch::models::{AssetContext, AssetMeta, NormalizedPrice};
use rust_decimal::Decimal;

/// Live Hyperliquid info endpoint.
pub const HYPERLIQUID_INFO_URL: &str = "https://api.hyperliquid.xyz/info";

/// Recorded `metaAndAssetCtxs` response with six assets.
pub const META_AND_ASSET_CTXS_JSON: &str = include_str!("../fixtures/meta_and_asset_ctxs.json");

pub fn meta(name: &str) -> AssetMeta {
    AssetMeta {
        name: name.to_string(),
        sz_decimals: 2,
        max_leverage: 10,
        only_isolated: false,
        is_delisted: false,
    }
}

pub fn context(mark: &str, prev_day: &str) -> AssetContext {
    AssetContext {
        mark_price: mark.to_string(),
        prev_day_price: prev_day.to_string(),
        day_volume: "0.0".to_string(),
        funding: "0.0000125".to_string(),
        open_interest: "0.0".to_string(),
        mid_price: None,
        impact_prices: None,
        oracle_price: mark.to_string(),
        premium: None,
    }
}

/// A normalized price with flags derived the same way the normalizer does.
pub fn price(symbol: &str) -> NormalizedPrice {
    NormalizedPrice {
        symbol: symbol.to_string(),
        raw_price: "1.0".to_string(),
        display_price: "1.0000".to_string(),
        absolute_change_24h: Decimal::ZERO,
        percent_change_24h: "+0.00%".to_string(),
        is_btc: symbol == "BTC",
        is_sol: symbol == "SOL",
        is_hype: symbol == "HYPE",
        max_leverage: 10,
        funding: "0.0".to_string(),
        open_interest: "0.0".to_string(),
    }
}

pub fn symbols(prices: &[NormalizedPrice]) -> Vec<&str> {
    prices.iter().map(|p| p.symbol.as_str()).collect()
}
