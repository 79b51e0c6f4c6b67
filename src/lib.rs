//! Hyperliquid perpetual-futures price pipeline.
//!
//! Fetches the `metaAndAssetCtxs` snapshot, normalizes it into display-ready
//! prices, and ranks them for a featured list (BTC, SOL, HYPE) or a
//! free-text search.

pub mod config;
pub mod error;
pub mod feed;
pub mod models;
pub mod normalize;
pub mod rank;

pub use error::{PerpwatchError, Result};
