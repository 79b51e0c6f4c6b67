//! Wire and view models for the Hyperliquid `metaAndAssetCtxs` feed.

pub mod asset;
pub mod price;

use serde::Serialize;

pub use asset::{AssetContext, AssetMeta, Universe};
pub use price::{ChangeSign, NormalizedPrice, PriceRow};

/// Body of the `POST /info` request: `{"type": "metaAndAssetCtxs"}`.
#[derive(Debug, Serialize)]
pub struct InfoRequest {
    #[serde(rename = "type")]
    pub tpe: &'static str,
}

impl InfoRequest {
    pub fn meta_and_asset_ctxs() -> Self {
        Self {
            tpe: "metaAndAssetCtxs",
        }
    }
}

/// The full response: universe metadata followed by the parallel context list.
pub type MetaAndAssetCtxs = (Universe, Vec<AssetContext>);
