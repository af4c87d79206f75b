//! Example: Fetch data for the key owner using keys from the environment.
//!
//! Set `TORN_API_KEY_LIMITED` (or put it in `.env`), then run with:
//! cargo run --example user_data

use torn_api_client::config::Config;
use torn_api_client::rest::{ApiRequest, TornClient};
use torn_api_client::types::AccessLevel;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    tracing_subscriber::fmt()
        .with_max_level(config.log_level().as_level_filter())
        .init();

    let client = TornClient::from_config(&config, AccessLevel::Limited)?;

    let basic = client.get_user_basic(None).await?;
    println!(
        "{} [{}], level {}: {}",
        basic.name, basic.player_id, basic.level, basic.status.description
    );

    let bars = client.get_user_bars(None).await?;
    println!(
        "Energy {}/{}, nerve {}/{}",
        bars.energy.current, bars.energy.maximum, bars.nerve.current, bars.nerve.maximum
    );

    let money = client.get_user_money(None).await?;
    println!(
        "Cash on hand: ${}, points: {}",
        money.money_onhand, money.points
    );

    // Any selection is reachable through the generic request.
    let request = ApiRequest::new("user", "")
        .selection("attacks")
        .param("limit", "5");
    match client.request(&request).await {
        Some(json) => println!("Recent attacks: {}", json),
        None => println!("Attacks unavailable, see the log"),
    }

    // Repeating a request within the cache TTL does not call the API again.
    let _ = client.get_user_basic(None).await?;
    println!(
        "Requests in the current window: {}",
        client.rate_limiter().in_window().await
    );

    Ok(())
}
