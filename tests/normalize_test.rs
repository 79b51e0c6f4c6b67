//! Normalization tests: positional join, derived change fields, formatting.

mod common;

use rust_decimal_macros::dec;

use perpwatch::models::MetaAndAssetCtxs;
use perpwatch::normalize::{PLACEHOLDER, align, normalize, price_change};

use common::{META_AND_ASSET_CTXS_JSON, context, meta, symbols};

#[test]
fn test_fixture_normalizes() {
    let (universe, contexts): MetaAndAssetCtxs =
        serde_json::from_str(META_AND_ASSET_CTXS_JSON).expect("Failed to deserialize response");

    let prices = normalize(&universe.universe, &contexts);
    assert_eq!(
        symbols(&prices),
        vec!["BTC", "ETH", "SOL", "kPEPE", "HYPE", "MATIC"]
    );

    let btc = &prices[0];
    assert_eq!(btc.raw_price, "97312.5");
    assert_eq!(btc.display_price, "97,312.50");
    assert_eq!(btc.absolute_change_24h, dec!(2312.5));
    assert_eq!(btc.percent_change_24h, "+2.43%");
    assert!(btc.is_btc && !btc.is_sol && !btc.is_hype);
    assert_eq!(btc.max_leverage, 40);
    assert_eq!(btc.funding, "0.0000125");
    assert_eq!(btc.open_interest, "12345.6789");

    let eth = &prices[1];
    assert_eq!(eth.display_price, "3,050.25");
    assert_eq!(eth.absolute_change_24h, dec!(-50.25));
    assert_eq!(eth.percent_change_24h, "-1.62%");
    assert!(!eth.is_featured());

    let sol = &prices[2];
    assert_eq!(sol.display_price, "151.2340");
    assert_eq!(sol.percent_change_24h, "+0.82%");
    assert!(sol.is_sol);

    let pepe = &prices[3];
    assert_eq!(pepe.display_price, "0.012345");
    assert_eq!(pepe.absolute_change_24h, dec!(-0.000155));
    assert_eq!(pepe.percent_change_24h, "-1.24%");

    let hype = &prices[4];
    assert_eq!(hype.display_price, "25.5000");
    assert_eq!(hype.percent_change_24h, "+0.00%");
    assert!(hype.is_hype);

    let matic = &prices[5];
    assert_eq!(matic.display_price, "0.377600");
    assert_eq!(matic.percent_change_24h, "+0.00%");
}

#[test]
fn test_metadata_beyond_contexts_is_dropped() {
    let metas = vec![meta("A"), meta("B"), meta("C"), meta("D"), meta("E")];
    let contexts = vec![context("1", "1"), context("2", "2"), context("3", "3")];

    assert_eq!(align(&metas, &contexts).len(), 3);

    let prices = normalize(&metas, &contexts);
    assert_eq!(symbols(&prices), vec!["A", "B", "C"]);
    assert_eq!(prices[2].raw_price, "3");
}

#[test]
fn test_contexts_beyond_metadata_are_ignored() {
    let metas = vec![meta("A")];
    let contexts = vec![context("1", "1"), context("2", "2")];

    let prices = normalize(&metas, &contexts);
    assert_eq!(symbols(&prices), vec!["A"]);
    assert_eq!(prices[0].raw_price, "1");
}

#[test]
fn test_empty_inputs() {
    assert!(normalize(&[], &[]).is_empty());
    assert!(normalize(&[meta("BTC")], &[]).is_empty());
}

#[test]
fn test_zero_previous_day_price_gives_zero_percent() {
    let prices = normalize(&[meta("NEW")], &[context("12.5", "0")]);
    assert_eq!(prices[0].percent_change_24h, "+0.00%");
    assert_eq!(prices[0].absolute_change_24h, dec!(12.5));

    let change = price_change(&context("12.5", "-3")).unwrap();
    assert_eq!(change.percent, dec!(0));
}

#[test]
fn test_percent_sign_follows_price_move() {
    let cases = [
        ("101", "100", '+'),
        ("99", "100", '-'),
        ("100", "100", '+'),
        ("0.0000999", "0.0001", '-'),
        ("50000", "49999.99", '+'),
        ("99.9999", "100", '-'),
    ];

    for (mark, prev, sign) in cases {
        let prices = normalize(&[meta("X")], &[context(mark, prev)]);
        assert!(
            prices[0].percent_change_24h.starts_with(sign),
            "{mark} vs {prev} gave {}",
            prices[0].percent_change_24h
        );
        assert!(prices[0].percent_change_24h.ends_with('%'));
    }
}

#[test]
fn test_unparseable_price_uses_placeholder() {
    let metas = vec![meta("GOOD"), meta("BAD"), meta("WORSE")];
    let contexts = vec![
        context("2.5", "2"),
        context("not-a-number", "2"),
        context("1.0", ""),
    ];

    let prices = normalize(&metas, &contexts);
    assert_eq!(prices.len(), 3);

    assert_eq!(prices[0].display_price, "2.5000");
    assert_eq!(prices[0].percent_change_24h, "+25.00%");

    for bad in &prices[1..] {
        assert_eq!(bad.display_price, PLACEHOLDER);
        assert_eq!(bad.percent_change_24h, PLACEHOLDER);
        assert_eq!(bad.absolute_change_24h, dec!(0));
    }
    assert_eq!(prices[1].raw_price, "not-a-number");
}

#[test]
fn test_featured_flags_are_exact_matches() {
    let metas = vec![meta("btc"), meta("WBTC"), meta("SOL"), meta("HYPE "), meta("HYPE")];
    let contexts = vec![context("1", "1"); 5];

    let prices = normalize(&metas, &contexts);
    let flags: Vec<(bool, bool, bool)> = prices
        .iter()
        .map(|p| (p.is_btc, p.is_sol, p.is_hype))
        .collect();

    assert_eq!(
        flags,
        vec![
            (false, false, false),
            (false, false, false),
            (false, true, false),
            (false, false, false),
            (false, false, true),
        ]
    );
}

#[test]
fn test_normalize_is_deterministic_and_leaves_inputs_alone() {
    let metas = vec![meta("BTC"), meta("SOL")];
    let contexts = vec![context("50000", "48000"), context("150", "160")];
    let metas_before = metas.clone();
    let contexts_before = contexts.clone();

    let first = normalize(&metas, &contexts);
    let second = normalize(&metas, &contexts);

    assert_eq!(first, second);
    assert_eq!(metas, metas_before);
    assert_eq!(contexts, contexts_before);
}
