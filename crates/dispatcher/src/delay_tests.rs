use super::*;
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn resolves_after_the_requested_duration() {
    let signal = CancelSignal::new();
    let start = tokio::time::Instant::now();
    cancellable_delay(Duration::from_millis(1000), &signal)
        .await
        .unwrap();
    assert!(start.elapsed() >= Duration::from_millis(1000));
}

#[tokio::test]
async fn fails_immediately_if_already_fired() {
    let signal = CancelSignal::new();
    signal.fire();
    let result = cancellable_delay(Duration::from_millis(1000), &signal).await;
    assert_eq!(result, Err(DelayError::Aborted));
}

#[tokio::test(start_paused = true)]
async fn fails_if_signalled_mid_sleep() {
    let signal = CancelSignal::new();
    let signal_clone = signal.clone();
    let handle =
        tokio::spawn(
            async move { cancellable_delay(Duration::from_secs(10), &signal_clone).await },
        );

    tokio::time::advance(Duration::from_millis(100)).await;
    signal.fire();

    let result = handle.await.unwrap();
    assert_eq!(result, Err(DelayError::Aborted));
}

#[test]
fn signal_never_unfires_on_its_own() {
    let signal = CancelSignal::new();
    signal.fire();
    signal.fire();
    assert!(signal.is_fired());
}

#[test]
fn reset_allows_a_fired_signal_to_be_reused() {
    let signal = CancelSignal::new();
    signal.fire();
    signal.reset();
    assert!(!signal.is_fired());
}
