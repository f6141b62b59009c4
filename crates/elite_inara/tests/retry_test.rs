//! Retry, rate limit and cache timing through a scripted transport on
//! paused tokio time.

use async_trait::async_trait;
use elite_config::InaraConfig;
use elite_error::{InaraError, InaraErrorKind, InaraResult};
use elite_inara::{HttpTransport, InaraApi, InaraClient, RawResponse};
use elite_models::Request;
use serde_json::json;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::Instant;

/// Replays canned replies, then repeats the last one.
#[derive(Clone)]
struct ScriptedTransport {
    replies: Arc<Mutex<VecDeque<InaraResult<RawResponse>>>>,
    last: Arc<Mutex<Option<InaraResult<RawResponse>>>>,
    calls: Arc<Mutex<Vec<Instant>>>,
}

impl ScriptedTransport {
    fn new(replies: Vec<InaraResult<RawResponse>>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(replies.into())),
            last: Arc::new(Mutex::new(None)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn calls(&self) -> Vec<Instant> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn post(&self, _url: &str, _request: &Request) -> InaraResult<RawResponse> {
        self.calls.lock().unwrap().push(Instant::now());
        let next = self.replies.lock().unwrap().pop_front();
        let mut last = self.last.lock().unwrap();
        if let Some(reply) = next {
            *last = Some(reply);
        }
        last.clone().expect("script must not be empty")
    }
}

fn transport_failure() -> InaraResult<RawResponse> {
    Err(InaraError::new(InaraErrorKind::Transport(
        "connection refused".to_string(),
    )))
}

fn stations_ok() -> InaraResult<RawResponse> {
    Ok(RawResponse::new(
        200,
        json!({"events": [{"eventStatus": 200, "eventData": {"stations": []}}]}).to_string(),
    ))
}

fn config() -> InaraConfig {
    InaraConfig {
        api_key: "test-key".to_string(),
        ..InaraConfig::default()
    }
}

fn client(config: InaraConfig, transport: &ScriptedTransport) -> InaraClient<ScriptedTransport> {
    InaraClient::with_transport(Arc::new(config), transport.clone()).unwrap()
}

fn gaps(calls: &[Instant]) -> Vec<Duration> {
    calls.windows(2).map(|pair| pair[1] - pair[0]).collect()
}

#[tokio::test(start_paused = true)]
async fn test_persistent_transport_failure_makes_four_attempts() {
    let transport = ScriptedTransport::new(vec![transport_failure()]);
    let client = client(config(), &transport);

    let err = client.get_system_stations("Sol").await.unwrap_err();

    match &err.kind {
        InaraErrorKind::Api { status: None, message } => {
            assert!(message.contains("after 3 retries"), "{message}");
            assert!(message.contains("connection refused"), "{message}");
        }
        other => panic!("expected API error, got {other:?}"),
    }
    let calls = transport.calls();
    assert_eq!(calls.len(), 4);
    assert_eq!(
        gaps(&calls),
        [
            Duration::from_secs(1),
            Duration::from_secs(2),
            Duration::from_secs(4)
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_recovers_on_fourth_attempt() -> anyhow::Result<()> {
    let transport = ScriptedTransport::new(vec![
        transport_failure(),
        transport_failure(),
        transport_failure(),
        stations_ok(),
    ]);
    let client = client(config(), &transport);

    let stations = client.get_system_stations("Sol").await?;

    assert!(stations.is_empty());
    assert_eq!(transport.calls().len(), 4);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_zero_retries_fails_on_first_transport_error() {
    let transport = ScriptedTransport::new(vec![transport_failure()]);
    let client = client(
        InaraConfig {
            max_retries: 0,
            ..config()
        },
        &transport,
    );

    let err = client.get_system_stations("Sol").await.unwrap_err();
    assert!(matches!(err.kind, InaraErrorKind::Api { .. }));
    assert_eq!(transport.calls().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_remote_errors_are_not_retried() {
    let transport = ScriptedTransport::new(vec![Ok(RawResponse::new(503, "unavailable"))]);
    let client = client(config(), &transport);

    let err = client.get_system_stations("Sol").await.unwrap_err();
    assert_eq!(err.kind.status(), Some(503));
    assert_eq!(transport.calls().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_cached_answer_expires_after_ttl() -> anyhow::Result<()> {
    let transport = ScriptedTransport::new(vec![stations_ok()]);
    let client = client(
        InaraConfig {
            cache_ttl: 10,
            ..config()
        },
        &transport,
    );

    client.get_system_stations("Sol").await?;
    tokio::time::advance(Duration::from_secs(9)).await;
    client.get_system_stations("Sol").await?;
    assert_eq!(transport.calls().len(), 1);

    tokio::time::advance(Duration::from_secs(2)).await;
    client.get_system_stations("Sol").await?;
    assert_eq!(transport.calls().len(), 2);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_cache_disabled_always_hits_the_network() -> anyhow::Result<()> {
    let transport = ScriptedTransport::new(vec![stations_ok()]);
    let client = client(
        InaraConfig {
            cache_enabled: false,
            ..config()
        },
        &transport,
    );

    client.get_system_stations("Sol").await?;
    client.get_system_stations("Sol").await?;
    assert_eq!(transport.calls().len(), 2);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_spent_budget_delays_the_next_request() -> anyhow::Result<()> {
    let transport = ScriptedTransport::new(vec![stations_ok()]);
    let client = client(
        InaraConfig {
            rate_limit_requests: 2,
            rate_limit_window: 60,
            ..config()
        },
        &transport,
    );

    client.get_system_stations("Sol").await?;
    tokio::time::advance(Duration::from_secs(15)).await;
    client.get_system_stations("Achenar").await?;
    client.get_system_stations("Shinrarta Dezhra").await?;

    let calls = transport.calls();
    assert_eq!(
        gaps(&calls),
        [Duration::from_secs(15), Duration::from_secs(45)]
    );
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_cache_hits_do_not_spend_budget() -> anyhow::Result<()> {
    let transport = ScriptedTransport::new(vec![stations_ok()]);
    let client = client(
        InaraConfig {
            rate_limit_requests: 1,
            ..config()
        },
        &transport,
    );

    let start = Instant::now();
    for _ in 0..5 {
        client.get_system_stations("Sol").await?;
    }
    assert_eq!(start.elapsed(), Duration::ZERO);
    assert_eq!(client.limiter().in_window().await, 1);
    Ok(())
}
