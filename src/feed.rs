//! HTTP access to the Hyperliquid info endpoint.
//!
//! [`fetch`] issues a single `metaAndAssetCtxs` request. [`PriceFeed`] wraps
//! it with normalization and drops results that a newer refresh has
//! superseded.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, info};

use crate::config::AppConfig;
use crate::models::{AssetContext, AssetMeta, InfoRequest, MetaAndAssetCtxs, NormalizedPrice};
use crate::normalize::normalize;
use crate::{PerpwatchError, Result};

/// Fetches universe metadata and the parallel asset context list.
///
/// One attempt, no retry.
///
/// # Errors
///
/// Returns [`PerpwatchError::Http`] on transport failure or a non-2xx
/// status, and [`PerpwatchError::Json`] if the body is not a two-element
/// `[{universe: [...]}, [...]]` array.
pub async fn fetch(
    client: &reqwest::Client,
    url: &str,
) -> Result<(Vec<AssetMeta>, Vec<AssetContext>)> {
    debug!(url, "Requesting metaAndAssetCtxs");

    let response = client
        .post(url)
        .json(&InfoRequest::meta_and_asset_ctxs())
        .send()
        .await?
        .error_for_status()?;

    let body = response.bytes().await?;
    let (universe, contexts): MetaAndAssetCtxs = serde_json::from_slice(&body)?;

    info!(
        assets = universe.universe.len(),
        contexts = contexts.len(),
        "Fetched perp universe"
    );
    Ok((universe.universe, contexts))
}

/// Fetch-and-normalize with stale-result discard.
///
/// Each [`refresh`](PriceFeed::refresh) takes a ticket when it starts. When
/// it completes, its result is only returned if no later refresh has been
/// started in the meantime.
#[derive(Debug)]
pub struct PriceFeed {
    client: reqwest::Client,
    config: AppConfig,
    latest_ticket: AtomicU64,
}

impl PriceFeed {
    /// Builds a feed with an HTTP client honouring the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns [`PerpwatchError::Http`] if the HTTP client cannot be built.
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self::with_client(client, config))
    }

    /// Builds a feed around an existing client.
    pub fn with_client(client: reqwest::Client, config: AppConfig) -> Self {
        Self {
            client,
            config,
            latest_ticket: AtomicU64::new(0),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Fetches and normalizes the current prices.
    ///
    /// Returns `Ok(None)` when a newer refresh was started while this one
    /// was in flight, whether this one succeeded or failed.
    ///
    /// # Errors
    ///
    /// Propagates any [`fetch`] error of the most recent refresh.
    pub async fn refresh(&self) -> Result<Option<Vec<NormalizedPrice>>> {
        let ticket = self.begin();
        let fetched = fetch(&self.client, &self.config.info_url).await;

        if !self.is_current(ticket) {
            debug!(ticket, failed = fetched.is_err(), "Discarding superseded refresh");
            return Ok(None);
        }

        let (meta, contexts) = fetched?;
        Ok(Some(normalize(&meta, &contexts)))
    }

    /// Takes the next ticket. Tickets are strictly increasing.
    pub fn begin(&self) -> u64 {
        self.latest_ticket.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `ticket` belongs to the most recently started refresh.
    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest_ticket.load(Ordering::SeqCst) == ticket
    }
}

/// Turns a fetch failure into the single notification line the presenter
/// shows, leaving an empty list behind.
pub fn notify_failure(error: &PerpwatchError) -> String {
    format!("Failed to fetch prices: {error}")
}
