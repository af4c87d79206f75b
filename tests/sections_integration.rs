use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use torn_api_client::TornError;
use torn_api_client::rest::TornClient;

fn build_client(server: &MockServer) -> TornClient {
    TornClient::builder()
        .base_url(server.uri())
        .api_key("test_key")
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_get_user_basic() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/1"))
        .and(query_param("selections", "basic"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "gender": "Male",
            "level": 15,
            "name": "Chedburn",
            "player_id": 1,
            "status": {
                "color": "green",
                "description": "Okay",
                "details": "",
                "state": "Okay",
                "until": 0
            }
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let basic = client.get_user_basic(Some(1)).await.unwrap();

    assert_eq!(basic.name, "Chedburn");
    assert!(basic.status.is_okay());
    assert!(basic.status.details.is_none());
}

#[tokio::test]
async fn test_get_user_bars_for_key_owner() {
    let server = MockServer::start().await;
    let bar = json!({"current": 50, "maximum": 100, "increment": 5, "interval": 300, "ticktime": 12, "fulltime": 2700});

    Mock::given(method("GET"))
        .and(path("/user/"))
        .and(query_param("selections", "bars"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "server_time": 1_700_000_000,
            "energy": bar,
            "happy": bar,
            "life": bar,
            "nerve": bar,
            "chain": {"current": 12, "maximum": 25, "timeout": 240, "modifier": 1.0, "cooldown": 0}
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let bars = client.get_user_bars(None).await.unwrap();

    assert_eq!(bars.energy.current, 50);
    assert_eq!(bars.chain.unwrap().current, 12);
}

#[tokio::test]
async fn test_get_user_money() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/"))
        .and(query_param("selections", "money"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "cayman_bank": 0,
            "city_bank": {"amount": 5_000_000, "time_left": 86_400},
            "company_funds": 120_000,
            "daily_networth": 98_765_432,
            "money_onhand": 1234,
            "points": 40,
            "vault_amount": 0
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let money = client.get_user_money(None).await.unwrap();

    assert_eq!(money.city_bank.amount, 5_000_000);
    assert_eq!(money.money_onhand, 1234);
}

#[tokio::test]
async fn test_get_user_ammo_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/"))
        .and(query_param("selections", "ammo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ammo": null})))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let ammo = client.get_user_ammo(None).await.unwrap();

    assert!(ammo.is_empty());
}

#[tokio::test]
async fn test_get_item_market_and_bazaar() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/market/206"))
        .and(query_param("selections", "itemmarket"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "itemmarket": [
                {"cost": 830_000, "quantity": 1},
                {"cost": 835_000, "quantity": 4}
            ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/market/206"))
        .and(query_param("selections", "bazaar"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"bazaar": null})))
        .mount(&server)
        .await;

    let client = build_client(&server);

    let listings = client.get_item_market(206).await.unwrap();
    assert_eq!(listings.len(), 2);
    assert_eq!(listings[1].quantity, 4);

    let bazaar = client.get_bazaar(206).await.unwrap();
    assert!(bazaar.is_empty());
}

#[tokio::test]
async fn test_get_points_market() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/market/"))
        .and(query_param("selections", "pointsmarket"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pointsmarket": {
                "1001": {"cost": 45_000, "quantity": 10, "total_cost": 450_000}
            }
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let market = client.get_points_market().await.unwrap();

    assert_eq!(market["1001"].total_cost, 450_000);
}

#[tokio::test]
async fn test_get_bank_rates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/torn/"))
        .and(query_param("selections", "bank"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "bank": {"1w": "0.6", "2w": "0.7", "1m": "0.8", "2m": "0.9", "3m": "1.1"}
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let rates = client.get_bank_rates().await.unwrap();

    assert_eq!(rates.two_weeks, 0.7);
    assert_eq!(rates.three_months, 1.1);
}

#[tokio::test]
async fn test_get_property_rented() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/property/3000"))
        .and(query_param("selections", "property"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "property": {
                "owner_id": 10,
                "property_type": 12,
                "happy": 2625,
                "upkeep": 50_000,
                "upgrades": [],
                "staff": [],
                "users_living": "20",
                "rented": {"user_id": 20, "days_left": 7, "cost_per_day": 400_000, "total_cost": 2_800_000}
            }
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let property = client.get_property(3000).await.unwrap();

    let rented = property.rented.unwrap();
    assert_eq!(rented.user_id, 20);
    assert_eq!(rented.days_left, 7);
}

#[tokio::test]
async fn test_get_lookup_and_timestamp() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/faction/"))
        .and(query_param("selections", "lookup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "selections": ["basic", "chain", "lookup", "timestamp"]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/faction/"))
        .and(query_param("selections", "timestamp"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"timestamp": 1_700_000_000})))
        .mount(&server)
        .await;

    let client = build_client(&server);

    let lookup = client.get_lookup("faction").await.unwrap();
    assert!(lookup.selections.iter().any(|s| s == "chain"));

    let timestamp = client.get_timestamp("faction", "").await.unwrap();
    assert_eq!(timestamp.timestamp.unix_timestamp(), 1_700_000_000);
}

#[tokio::test]
async fn test_typed_selection_surfaces_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": {"code": 16, "error": "Access level of this key is not high enough"}
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);

    match client.get_user_money(None).await {
        Err(TornError::Api(error)) => assert!(error.is_access_denied()),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_typed_selection_rejects_unexpected_shape() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/torn/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"bank": "closed"})))
        .mount(&server)
        .await;

    let client = build_client(&server);

    assert!(matches!(
        client.get_bank_rates().await,
        Err(TornError::Json(_))
    ));
}
