//! Perp universe metadata and per-asset market context.

use serde::Deserialize;

/// First element of the `metaAndAssetCtxs` response.
#[derive(Debug, Clone, Deserialize)]
pub struct Universe {
    pub universe: Vec<AssetMeta>,
}

/// Static metadata for one perpetual contract.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetMeta {
    /// Unique asset symbol (e.g. "BTC").
    pub name: String,
    /// Number of decimals allowed in order sizes.
    pub sz_decimals: u32,
    pub max_leverage: u32,
    #[serde(default)]
    pub only_isolated: bool,
    #[serde(default)]
    pub is_delisted: bool,
}

/// Live market state for one perpetual, aligned by index with [`AssetMeta`].
///
/// Numeric fields are kept as the decimal strings the feed sends; parsing
/// happens during normalization so one bad value cannot fail the response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssetContext {
    #[serde(rename = "markPx")]
    pub mark_price: String,
    #[serde(rename = "prevDayPx")]
    pub prev_day_price: String,
    /// 24h notional volume.
    #[serde(rename = "dayNtlVlm")]
    pub day_volume: String,
    pub funding: String,
    #[serde(rename = "openInterest")]
    pub open_interest: String,
    /// `null` when the book is empty on one side.
    #[serde(rename = "midPx", default)]
    pub mid_price: Option<String>,
    #[serde(rename = "impactPxs", default)]
    pub impact_prices: Option<Vec<String>>,
    #[serde(rename = "oraclePx")]
    pub oracle_price: String,
    #[serde(default)]
    pub premium: Option<String>,
}
