//! Featured set, search, and the view the presenter draws.
//!
//! [`featured`] and [`search`] are independent queries over the same
//! normalized list. [`view`] is the caller contract that picks between them
//! based on the search text.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::models::NormalizedPrice;

/// Maximum number of non-matching assets listed under search results.
pub const REMAINING_LIMIT: usize = 20;

/// Featured assets in canonical order: BTC, SOL, HYPE.
pub fn featured(prices: &[NormalizedPrice]) -> Vec<NormalizedPrice> {
    let mut out: Vec<NormalizedPrice> = prices
        .iter()
        .filter(|price| price.is_featured())
        .cloned()
        .collect();
    out.sort_by(featured_order);
    out
}

/// BTC before everything, SOL before HYPE, then symbol order.
pub fn featured_order(a: &NormalizedPrice, b: &NormalizedPrice) -> Ordering {
    featured_rank(a)
        .cmp(&featured_rank(b))
        .then_with(|| a.symbol.cmp(&b.symbol))
}

fn featured_rank(price: &NormalizedPrice) -> u8 {
    if price.is_btc {
        0
    } else if price.is_sol {
        1
    } else if price.is_hype {
        2
    } else {
        3
    }
}

/// Case-insensitive substring match on the symbol, in feed order.
///
/// An empty query matches everything; [`view`] never passes one.
pub fn search(prices: &[NormalizedPrice], query: &str) -> Vec<NormalizedPrice> {
    let needle = query.to_lowercase();
    prices
        .iter()
        .filter(|price| price.symbol.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Everything not in `matches`, in feed order, capped at [`REMAINING_LIMIT`].
pub fn remaining(prices: &[NormalizedPrice], matches: &[NormalizedPrice]) -> Vec<NormalizedPrice> {
    let matched: HashSet<&str> = matches.iter().map(|price| price.symbol.as_str()).collect();
    prices
        .iter()
        .filter(|price| !matched.contains(price.symbol.as_str()))
        .take(REMAINING_LIMIT)
        .cloned()
        .collect()
}

/// What the presenter shows for the current search text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceView {
    /// Featured assets, or search matches when a query is active.
    pub items: Vec<NormalizedPrice>,
    /// Non-matching assets; always empty without a query.
    pub remaining: Vec<NormalizedPrice>,
}

/// Builds the view for `query`.
///
/// An empty query shows the featured set; anything else, whitespace
/// included, shows the [`search`] matches followed by up to
/// [`REMAINING_LIMIT`] other assets.
pub fn view(prices: &[NormalizedPrice], query: &str) -> PriceView {
    if query.is_empty() {
        return PriceView {
            items: featured(prices),
            remaining: Vec::new(),
        };
    }

    let items = search(prices, query);
    let remaining = remaining(prices, &items);
    PriceView { items, remaining }
}
