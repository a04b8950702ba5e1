use super::*;

#[test]
fn classifies_2xx_as_success() {
    assert_eq!(SendOutcome::from_status(200), SendOutcome::Success);
    assert_eq!(SendOutcome::from_status(299), SendOutcome::Success);
}

#[test]
fn classifies_4xx_as_permanent_client() {
    assert_eq!(
        SendOutcome::from_status(400),
        SendOutcome::PermanentClient(400)
    );
    assert_eq!(
        SendOutcome::from_status(499),
        SendOutcome::PermanentClient(499)
    );
}

#[test]
fn classifies_5xx_as_transient() {
    assert_eq!(SendOutcome::from_status(500), SendOutcome::Transient(500));
    assert_eq!(SendOutcome::from_status(599), SendOutcome::Transient(599));
}

#[test]
fn classifies_other_statuses_as_unexpected() {
    assert_eq!(SendOutcome::from_status(100), SendOutcome::Unexpected(100));
    assert_eq!(SendOutcome::from_status(302), SendOutcome::Unexpected(302));
    assert_eq!(SendOutcome::from_status(0), SendOutcome::Unexpected(0));
}

#[test]
fn only_transient_and_network_are_retryable() {
    assert!(SendOutcome::Transient(500).is_retryable());
    assert!(SendOutcome::NetworkError.is_retryable());
    assert!(!SendOutcome::Success.is_retryable());
    assert!(!SendOutcome::PermanentClient(400).is_retryable());
    assert!(!SendOutcome::Unexpected(302).is_retryable());
}

#[test]
fn backoff_falls_within_the_documented_window() {
    for attempt in 0..5 {
        let delay = backoff(attempt);
        let lower = 1000u64 * (1u64 << attempt);
        let upper = lower + 1000;
        assert!(
            delay.as_millis() as u64 >= lower,
            "attempt {attempt}: {delay:?}"
        );
        assert!(
            delay.as_millis() as u64 <= upper,
            "attempt {attempt}: {delay:?}"
        );
    }
}

#[test]
fn backoff_jitter_is_independent_per_call() {
    let a = backoff(0);
    let b = backoff(0);
    // Vanishingly unlikely to collide across a reasonable number of tries;
    // retry until we see a difference to keep this test non-flaky.
    let distinct = (0..20).any(|_| backoff(0) != a || backoff(0) != b);
    assert!(distinct || a != b);
}
