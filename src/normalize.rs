//! Turns the raw feed payload into display-ready [`NormalizedPrice`] values.
//!
//! Metadata and contexts are joined by position: index `i` of the universe
//! pairs with index `i` of the context list. Only the overlapping prefix is
//! used; metadata without a context is dropped, never defaulted.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, warn};

use crate::models::{AssetContext, AssetMeta, NormalizedPrice};
use crate::{PerpwatchError, Result};

/// Shown in place of a price or percent that could not be computed.
pub const PLACEHOLDER: &str = "--";

const BTC: &str = "BTC";
const SOL: &str = "SOL";
const HYPE: &str = "HYPE";

/// Pairs each asset with the context at the same index.
///
/// The result is as long as the shorter input.
pub fn align<'a>(
    meta: &'a [AssetMeta],
    ctx: &'a [AssetContext],
) -> Vec<(&'a AssetMeta, &'a AssetContext)> {
    meta.iter()
        .enumerate()
        .filter_map(|(i, asset)| ctx.get(i).map(|context| (asset, context)))
        .collect()
}

/// Normalizes one fetch worth of metadata and contexts.
///
/// Pure apart from logging: inputs are untouched and identical inputs give
/// identical output.
pub fn normalize(meta: &[AssetMeta], ctx: &[AssetContext]) -> Vec<NormalizedPrice> {
    let pairs = align(meta, ctx);

    let dropped = meta.len() - pairs.len();
    if dropped > 0 {
        debug!(
            dropped,
            contexts = ctx.len(),
            "Dropped assets without a matching context"
        );
    }

    pairs
        .into_iter()
        .map(|(asset, context)| normalize_one(asset, context))
        .collect()
}

fn normalize_one(asset: &AssetMeta, context: &AssetContext) -> NormalizedPrice {
    let symbol = asset.name.clone();

    let (display_price, absolute_change_24h, percent_change_24h) = match price_change(context) {
        Ok(change) => (
            format_price(change.mark),
            change.absolute,
            format_percent(change.percent),
        ),
        Err(e) => {
            warn!(symbol = %symbol, error = %e, "Unusable price in asset context");
            (PLACEHOLDER.to_string(), Decimal::ZERO, PLACEHOLDER.to_string())
        }
    };

    NormalizedPrice {
        is_btc: symbol == BTC,
        is_sol: symbol == SOL,
        is_hype: symbol == HYPE,
        symbol,
        raw_price: context.mark_price.clone(),
        display_price,
        absolute_change_24h,
        percent_change_24h,
        max_leverage: asset.max_leverage,
        funding: context.funding.clone(),
        open_interest: context.open_interest.clone(),
    }
}

/// Mark price and its 24h move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceChange {
    pub mark: Decimal,
    pub absolute: Decimal,
    /// Zero whenever the previous day price is not positive.
    pub percent: Decimal,
}

/// Computes the 24h change of one context.
///
/// # Errors
///
/// Returns [`PerpwatchError::Format`] if `markPx` or `prevDayPx` is not a
/// decimal, or the arithmetic overflows.
pub fn price_change(context: &AssetContext) -> Result<PriceChange> {
    let mark = parse_decimal("markPx", &context.mark_price)?;
    let prev = parse_decimal("prevDayPx", &context.prev_day_price)?;

    let absolute = mark
        .checked_sub(prev)
        .ok_or_else(|| PerpwatchError::Format("24h change overflows".to_string()))?;

    let percent = if prev > Decimal::ZERO {
        absolute
            .checked_div(prev)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .ok_or_else(|| PerpwatchError::Format("24h percent change overflows".to_string()))?
    } else {
        Decimal::ZERO
    };

    Ok(PriceChange {
        mark,
        absolute,
        percent,
    })
}

/// Parses a decimal string field from the feed.
///
/// # Errors
///
/// Returns [`PerpwatchError::Format`] naming the field and the bad value.
pub fn parse_decimal(field: &str, value: &str) -> Result<Decimal> {
    Decimal::from_str(value.trim())
        .map_err(|e| PerpwatchError::Format(format!("{field} {value:?}: {e}")))
}

/// Formats a price with en-US grouping and magnitude-tiered precision.
///
/// | magnitude     | fraction digits |
/// |---------------|-----------------|
/// | >= 1000       | 2               |
/// | >= 1, < 1000  | 4               |
/// | < 1           | 6 to 8          |
///
/// The tier is chosen from the unrounded value, so `999.99999` renders as
/// `"1,000.0000"`.
pub fn format_price(price: Decimal) -> String {
    let magnitude = price.abs();
    let (min_fraction, max_fraction) = if magnitude >= Decimal::ONE_THOUSAND {
        (2, 2)
    } else if magnitude >= Decimal::ONE {
        (4, 4)
    } else {
        (6, 8)
    };
    format_grouped(price, min_fraction, max_fraction)
}

/// Formats a percent as `+1.23%` / `-1.23%`. Zero is `+0.00%`.
pub fn format_percent(percent: Decimal) -> String {
    let sign = if is_negative(percent) { '-' } else { '+' };
    let mut magnitude = percent
        .abs()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    magnitude.rescale(2);
    format!("{sign}{magnitude}%")
}

fn format_grouped(value: Decimal, min_fraction: u32, max_fraction: u32) -> String {
    let mut rounded = value
        .abs()
        .round_dp_with_strategy(max_fraction, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(max_fraction);

    let digits = rounded.to_string();
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

    let mut fraction = fraction.to_string();
    while fraction.len() > min_fraction as usize && fraction.ends_with('0') {
        fraction.pop();
    }

    let mut out = String::with_capacity(digits.len() + integer.len() / 3 + 1);
    if is_negative(value) && !rounded.is_zero() {
        out.push('-');
    }
    out.push_str(&group_thousands(integer));
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(&fraction);
    }
    out
}

fn group_thousands(integer: &str) -> String {
    let len = integer.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn is_negative(value: Decimal) -> bool {
    value.is_sign_negative() && !value.is_zero()
}
