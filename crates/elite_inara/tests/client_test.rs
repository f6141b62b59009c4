//! Wire-level client tests against a local mock HTTP server.

use elite_config::InaraConfig;
use elite_error::InaraErrorKind;
use elite_inara::{InaraApi, InaraClient};
use elite_models::Event;
use mockito::{Matcher, Server, ServerGuard};
use serde_json::{Value, json};
use std::sync::Arc;

const PATH: &str = "/inapi/v1/";

fn client(server: &ServerGuard) -> InaraClient {
    let config = InaraConfig {
        api_key: "test-key".to_string(),
        base_url: format!("{}{}", server.url(), PATH),
        retry_delay: 0.0,
        ..InaraConfig::default()
    };
    InaraClient::new(Arc::new(config)).unwrap()
}

fn success(event_data: Value) -> String {
    json!({
        "header": {"eventStatus": 200, "eventData": {"userID": 1, "userName": "tester"}},
        "events": [{"eventStatus": 200, "eventData": event_data}]
    })
    .to_string()
}

fn profile_payload() -> Value {
    let rank = json!({"rankName": "Elite", "rankValue": 8, "rankProgress": 0.0});
    json!({
        "userID": 42,
        "userName": "tester",
        "commanderName": "CMDR Test",
        "commanderRanksPilot": {
            "combat": rank, "trade": rank, "explore": rank, "soldier": rank,
            "exobiologist": rank, "cqc": rank, "federation": rank, "empire": rank
        },
        "commanderCredits": {"balance": 1000000, "loan": 0},
        "preferredAllegianceName": "Federation",
        "profileCreated": "2020-01-01T00:00:00Z",
        "profileLastUpdate": "2024-01-01T00:00:00Z"
    })
}

fn ship(game_id: i64, current: bool) -> Value {
    json!({
        "shipType": "Anaconda",
        "shipGameID": game_id,
        "isCurrentShip": current,
        "shipValue": 150000000,
        "shipHullValue": 140000000,
        "shipModulesValue": 10000000,
        "shipRebuyCost": 7500000,
        "shipLastUpdate": "2024-01-01T00:00:00Z"
    })
}

#[tokio::test]
async fn test_profile_is_fetched_once_then_served_from_cache() -> anyhow::Result<()> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", PATH)
        .match_header("content-type", "application/json")
        .match_header("user-agent", "EliteStatusCheck/1.1.0")
        .match_body(Matcher::PartialJson(json!({
            "header": {
                "appName": "EliteStatusCheck",
                "APIkey": "test-key",
                "commanderName": "CMDR Test"
            }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(success(profile_payload()))
        .expect(1)
        .create_async()
        .await;

    let client = client(&server);
    let first = client.get_commander_profile(Some("CMDR Test")).await?;
    let second = client.get_commander_profile(Some("CMDR Test")).await?;

    let profile = first.expect("profile should be populated");
    assert_eq!(profile.commander_name, "CMDR Test");
    assert_eq!(profile.commander_credits.balance, 1000000);
    assert_eq!(second, Some(profile));
    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_rate_limited_market_is_not_cached() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", PATH)
        .with_status(429)
        .with_body("Too Many Requests")
        .expect(2)
        .create_async()
        .await;

    let client = client(&server);
    for _ in 0..2 {
        let err = client.get_station_market(12345).await.unwrap_err();
        assert!(matches!(err.kind, InaraErrorKind::RateLimited(_)));
    }
    assert!(client.cache().is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_http_401_is_authentication_without_retry() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", PATH)
        .with_status(401)
        .with_body("bad key")
        .expect(1)
        .create_async()
        .await;

    let err = client(&server)
        .get_commander_ships(Some("CMDR Test"))
        .await
        .unwrap_err();
    assert_eq!(
        err.kind,
        InaraErrorKind::Authentication {
            status: Some(401),
            message: "bad key".to_string(),
        }
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_server_error_is_api_error() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", PATH)
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let err = client(&server).get_system_stations("Sol").await.unwrap_err();
    assert_eq!(err.kind.status(), Some(500));
    assert!(matches!(err.kind, InaraErrorKind::Api { .. }));
}

#[tokio::test]
async fn test_error_shape_and_event_statuses_map_to_kinds() {
    let cases = [
        (
            json!({"header": {"eventStatus": 400, "eventStatusText": "Invalid API key"}}),
            Some(400),
            true,
        ),
        (
            json!({"header": {"eventStatus": 500, "eventStatusText": "Internal"}}),
            Some(500),
            false,
        ),
        (
            json!({"header": {"eventStatus": 200}, "events": [{"eventStatus": 202, "eventStatusText": "Invalid key"}]}),
            Some(202),
            true,
        ),
        (
            json!({"header": {"eventStatus": 200}, "events": [{"eventStatus": 404, "eventStatusText": "Not found"}]}),
            Some(404),
            false,
        ),
    ];

    for (body, status, is_auth) in cases {
        let mut server = Server::new_async().await;
        server
            .mock("POST", PATH)
            .with_status(200)
            .with_body(body.to_string())
            .create_async()
            .await;

        let err = client(&server)
            .get_commander_profile(Some("CMDR Test"))
            .await
            .unwrap_err();
        assert_eq!(err.kind.status(), status, "{body}");
        assert_eq!(
            matches!(err.kind, InaraErrorKind::Authentication { .. }),
            is_auth,
            "{body}"
        );
    }
}

#[tokio::test]
async fn test_informational_event_status_is_accepted() -> anyhow::Result<()> {
    let mut server = Server::new_async().await;
    server
        .mock("POST", PATH)
        .with_status(200)
        .with_body(
            json!({"header": {}, "events": [{"eventStatus": 150, "eventData": {"factions": []}}]})
                .to_string(),
        )
        .create_async()
        .await;

    let factions = client(&server).get_system_factions("Sol").await?;
    assert!(factions.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_factions_request_names_the_system() -> anyhow::Result<()> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", PATH)
        .match_body(Matcher::Regex(
            r#""eventData":\{"systemName":"Sol"\}"#.to_string(),
        ))
        .with_status(200)
        .with_body(success(json!({"factions": [{
            "factionName": "Federal Congress",
            "factionGovernment": "Democracy",
            "factionAllegiance": "Federation",
            "factionState": "None",
            "factionInfluence": 0.45,
            "isControllingFaction": true
        }]})))
        .create_async()
        .await;

    let factions = client(&server).get_system_factions("Sol").await?;
    assert_eq!(factions.len(), 1);
    assert_eq!(factions[0].faction_name, "Federal Congress");
    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_current_ship_is_the_flagged_one() -> anyhow::Result<()> {
    let mut server = Server::new_async().await;
    server
        .mock("POST", PATH)
        .with_status(200)
        .with_body(success(json!({"ships": [ship(1, false), ship(2, true)]})))
        .create_async()
        .await;

    let client = client(&server);
    let ships = client.get_commander_ships(Some("CMDR Test")).await?;
    assert_eq!(ships.len(), 2);

    let current = client.get_current_ship(Some("CMDR Test")).await?;
    assert_eq!(current.map(|ship| ship.ship_game_id), Some(2));
    Ok(())
}

#[tokio::test]
async fn test_malformed_payload_degrades_to_empty() -> anyhow::Result<()> {
    let mut server = Server::new_async().await;
    server
        .mock("POST", PATH)
        .with_status(200)
        .with_body(success(json!({"ships": [{"shipType": "Sidewinder"}]})))
        .create_async()
        .await;

    let client = client(&server);
    assert!(client.get_commander_ships(Some("CMDR Test")).await?.is_empty());
    assert!(client.get_commander_profile(Some("CMDR Test")).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_clear_cache_forces_a_fresh_round_trip() -> anyhow::Result<()> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", PATH)
        .with_status(200)
        .with_body(success(json!({"stations": []})))
        .expect(2)
        .create_async()
        .await;

    let client = client(&server);
    client.get_system_stations("Sol").await?;
    client.get_system_stations("Sol").await?;
    InaraApi::clear_cache(&client);
    client.get_system_stations("Sol").await?;

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_empty_request_is_rejected_before_io() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", PATH)
        .expect(0)
        .create_async()
        .await;

    let err = client(&server)
        .send(Vec::<Event>::new(), None)
        .await
        .unwrap_err();
    assert!(matches!(err.kind, InaraErrorKind::Api { status: None, .. }));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unvalidated_config_is_rejected_at_construction() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", PATH)
        .expect(0)
        .create_async()
        .await;
    let base_url = format!("{}{}", server.url(), PATH);

    let cases = [
        (
            InaraConfig {
                api_key: "  ".to_string(),
                base_url: base_url.clone(),
                ..InaraConfig::default()
            },
            "api_key",
        ),
        (
            InaraConfig {
                api_key: "test-key".to_string(),
                base_url: base_url.clone(),
                timeout: 0,
                retry_delay: 0.0,
                ..InaraConfig::default()
            },
            "timeout",
        ),
        (
            InaraConfig {
                api_key: "test-key".to_string(),
                base_url,
                rate_limit_requests: 0,
                ..InaraConfig::default()
            },
            "rate_limit_requests",
        ),
    ];

    for (config, setting) in cases {
        let Err(err) = InaraClient::new(Arc::new(config)) else {
            panic!("{setting} should have been rejected");
        };
        match &err.kind {
            InaraErrorKind::Configuration(config_err) => {
                assert_eq!(config_err.setting, Some(setting));
            }
            other => panic!("expected configuration error for {setting}, got {other:?}"),
        }
        assert!(!elite_error::RetryableError::is_retryable(&err));
    }
    mock.assert_async().await;
}
