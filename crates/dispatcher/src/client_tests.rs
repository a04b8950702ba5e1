use super::*;
use crate::capability::{FakePlatformProvider, FakeSessionProvider};
use serde_json::json;
use telemetry_adapters::{FakeLogger, FakeStorage, FakeTransport, Storage, StorageCall};
use telemetry_core::{DispatcherConfigBuilder, FakeClock, Platform, PlatformInfo};

type TestClient = Client<
    FakeTransport,
    FakeStorage,
    FakeLogger,
    FakeClock,
    FakePlatformProvider,
    FakeSessionProvider,
>;

fn base_config() -> DispatcherConfigBuilder {
    DispatcherConfigBuilder::new()
        .api_key("secret")
        .endpoint("https://collector.example.com/v1/events")
}

#[allow(clippy::type_complexity)]
fn harness(
    config: DispatcherConfigBuilder,
) -> (
    Arc<TestClient>,
    FakeTransport,
    FakeStorage,
    FakeLogger,
    FakeClock,
    FakeSessionProvider,
) {
    let transport = FakeTransport::new();
    let storage = FakeStorage::new();
    let logger = FakeLogger::new();
    let clock = FakeClock::at(1_700_000_000_000);
    let platform = FakePlatformProvider::new(Some(Platform::Server));
    let session = FakeSessionProvider::new("session-123");
    let client = Client::new(
        config,
        transport.clone(),
        storage.clone(),
        logger.clone(),
        clock.clone(),
        platform,
        session.clone(),
    )
    .unwrap();
    (client, transport, storage, logger, clock, session)
}

#[tokio::test]
async fn new_rejects_invalid_configuration() {
    let config = DispatcherConfigBuilder::new().endpoint("https://example.com/");
    let result = Client::new(
        config,
        FakeTransport::new(),
        FakeStorage::new(),
        FakeLogger::new(),
        FakeClock::new(),
        FakePlatformProvider::new(None),
        FakeSessionProvider::new("s"),
    );
    assert!(matches!(result, Err(ClientError::Config(_))));
}

#[tokio::test]
async fn track_auto_initializes_and_enriches_the_event() {
    let (client, transport, storage, _logger, clock, _session) = harness(base_config());
    storage.save(&[]).await.unwrap();

    client
        .track("signup", Some(json!({"plan": "pro"})), None)
        .await
        .unwrap();
    client.flush().await;

    assert!(client.is_initialized());
    let sent = &transport.calls()[0].events[0];
    assert_eq!(sent.name, "signup");
    assert_eq!(sent.payload, Some(json!({"plan": "pro"})));
    assert_eq!(sent.issued_at, clock.now_ms());
    assert_eq!(sent.session_id, Some("session-123".to_string()));
    assert_eq!(sent.platform, Some(Platform::Server));
}

#[tokio::test]
async fn track_merges_store_metadata_with_per_call_metadata() {
    let (client, transport, _storage, _logger, _clock, _session) = harness(base_config());
    client.set_metadata("app_version", json!("1.2.3"));

    let mut per_call = std::collections::HashMap::new();
    per_call.insert("app_version".to_string(), json!("override"));
    per_call.insert("button".to_string(), json!("checkout"));
    client.track("click", None, Some(per_call)).await.unwrap();
    client.flush().await;

    let metadata = transport.calls()[0].events[0].metadata.clone().unwrap();
    assert_eq!(metadata["app_version"], json!("override"));
    assert_eq!(metadata["button"], json!("checkout"));
}

#[tokio::test]
async fn track_rejects_an_empty_event_name() {
    let (client, _transport, _storage, _logger, _clock, _session) = harness(base_config());
    let err = client.track("", None, None).await.unwrap_err();
    assert!(matches!(err, ClientError::Event(_)));
}

#[tokio::test]
async fn multiple_init_calls_on_an_initialized_client_are_no_ops() {
    let (client, _transport, storage, _logger, _clock, _session) = harness(base_config());
    client.init().await;
    client.init().await;
    client.init().await;

    let load_calls = storage
        .calls()
        .into_iter()
        .filter(|c| matches!(c, StorageCall::Load))
        .count();
    assert_eq!(load_calls, 1);
}

#[tokio::test]
async fn dispose_clears_metadata_session_and_rejects_further_tracking() {
    let (client, transport, _storage, logger, _clock, session) = harness(base_config());
    client.set_metadata("k", json!("v"));
    client.init().await;

    client.dispose();

    assert!(client.get_metadata().is_empty());
    assert_eq!(session.current(), None);
    assert!(client.is_disposed());

    client.track("after-dispose", None, None).await.unwrap();
    assert_eq!(transport.call_count(), 0);
    assert!(logger
        .calls_at_level("warn")
        .iter()
        .any(|c| c.message == "Cannot enqueue event: Dispatcher has been disposed"));
}

#[tokio::test]
async fn multiple_dispose_calls_are_equivalent_to_one() {
    let (client, _transport, _storage, _logger, _clock, _session) = harness(base_config());
    client.init().await;
    client.dispose();
    client.dispose();
    assert!(client.is_disposed());
}

#[tokio::test]
async fn init_after_dispose_reopens_the_client_for_tracking() {
    let (client, transport, _storage, _logger, _clock, _session) = harness(base_config());
    client.init().await;
    client.dispose();

    client.init().await;
    assert!(!client.is_disposed());
    client.track("re-init", None, None).await.unwrap();
    client.flush().await;
    assert_eq!(transport.calls()[0].events[0].name, "re-init");
}

#[tokio::test]
async fn platform_info_round_trips_through_the_wire_envelope() {
    let transport = FakeTransport::new();
    let storage = FakeStorage::new();
    let logger = FakeLogger::new();
    let platform = FakePlatformProvider::new(Some(Platform::Native {
        device: PlatformInfo::new("Pixel", "8"),
        os: PlatformInfo::new("Android", "15"),
    }));
    let client = Client::new(
        base_config(),
        transport.clone(),
        storage,
        logger,
        FakeClock::new(),
        platform,
        FakeSessionProvider::new("s"),
    )
    .unwrap();

    client.track("app_open", None, None).await.unwrap();
    client.flush().await;

    let sent = &transport.calls()[0].events[0];
    assert_eq!(
        sent.platform,
        Some(Platform::Native {
            device: PlatformInfo::new("Pixel", "8"),
            os: PlatformInfo::new("Android", "15"),
        })
    );
}
