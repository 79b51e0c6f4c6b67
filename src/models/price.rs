//! Derived price views handed to the presenter.

use rust_decimal::Decimal;

/// One asset after normalization. Recreated on every fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedPrice {
    pub symbol: String,
    /// Mark price exactly as the feed sent it.
    pub raw_price: String,
    /// Tiered, thousands-grouped mark price (e.g. "97,312.50").
    pub display_price: String,
    /// `markPx - prevDayPx`; zero when either side is unparseable.
    pub absolute_change_24h: Decimal,
    /// Signed two-decimal percent (e.g. "+1.25%", "-0.40%").
    pub percent_change_24h: String,
    pub is_btc: bool,
    pub is_sol: bool,
    pub is_hype: bool,
    pub max_leverage: u32,
    /// Passed through from the feed unmodified.
    pub funding: String,
    /// Passed through from the feed unmodified.
    pub open_interest: String,
}

impl NormalizedPrice {
    /// Whether this asset belongs to the fixed featured set.
    pub fn is_featured(&self) -> bool {
        self.is_btc || self.is_sol || self.is_hype
    }
}

/// Direction of the 24h move. Zero counts as positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeSign {
    Positive,
    Negative,
}

impl ChangeSign {
    pub fn of(change: Decimal) -> Self {
        if change.is_sign_negative() && !change.is_zero() {
            ChangeSign::Negative
        } else {
            ChangeSign::Positive
        }
    }
}

/// A single list row as drawn by the presenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceRow {
    pub symbol: String,
    pub display_price: String,
    pub percent_change_24h: String,
    pub change_sign: ChangeSign,
}

impl From<&NormalizedPrice> for PriceRow {
    fn from(price: &NormalizedPrice) -> Self {
        Self {
            symbol: price.symbol.clone(),
            display_price: price.display_price.clone(),
            percent_change_24h: price.percent_change_24h.clone(),
            change_sign: ChangeSign::of(price.absolute_change_24h),
        }
    }
}
