use perpwatch::PerpwatchError;
use perpwatch::config::fetch_config;
use perpwatch::feed::{PriceFeed, notify_failure};
use perpwatch::models::{ChangeSign, PriceRow};
use perpwatch::rank::view;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), PerpwatchError> {
    // Initialize tracing subscriber for logging output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = fetch_config()?;
    let query = std::env::args().nth(1).unwrap_or_default();

    let feed = PriceFeed::new(config)?;
    let prices = match feed.refresh().await {
        Ok(prices) => prices.unwrap_or_default(),
        Err(e) => {
            warn!(error = %e, "Price refresh failed");
            println!("{}", notify_failure(&e));
            Vec::new()
        }
    };

    let current = view(&prices, &query);

    for price in &current.items {
        let row = PriceRow::from(price);
        let marker = match row.change_sign {
            ChangeSign::Positive => '▲',
            ChangeSign::Negative => '▼',
        };
        println!(
            "{:<10} ${:>16} {} {:>9}  {}",
            row.symbol,
            row.display_price,
            marker,
            row.percent_change_24h,
            feed.config().trade_url(&row.symbol)
        );
    }

    if !current.remaining.is_empty() {
        println!("\nOther assets:");
        for price in &current.remaining {
            println!("{:<10} ${:>16}", price.symbol, price.display_price);
        }
    }

    Ok(())
}
