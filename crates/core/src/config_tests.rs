use super::*;

fn valid_builder() -> DispatcherConfigBuilder {
    DispatcherConfigBuilder::new()
        .api_key("secret")
        .endpoint("https://collector.example.com/v1/events")
}

#[test]
fn builds_with_defaults() {
    let config = valid_builder().build().unwrap();
    assert_eq!(config.api_key_header, DEFAULT_API_KEY_HEADER);
    assert_eq!(config.flush_interval_ms, DEFAULT_FLUSH_INTERVAL_MS);
    assert_eq!(config.max_batch_size, DEFAULT_MAX_BATCH_SIZE);
    assert_eq!(config.max_retries, DEFAULT_MAX_RETRIES);
    assert_eq!(config.max_buffer_size, BufferLimit::Unbounded);
}

#[test]
fn rejects_empty_api_key() {
    let err = DispatcherConfigBuilder::new()
        .endpoint("https://example.com")
        .build()
        .unwrap_err();
    assert_eq!(err, ConfigError::EmptyApiKey);
}

#[test]
fn rejects_empty_endpoint() {
    let err = DispatcherConfigBuilder::new()
        .api_key("secret")
        .build()
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEndpoint(_)));
}

#[test]
fn rejects_non_absolute_endpoint() {
    let err = valid_builder()
        .endpoint("/relative/path")
        .build()
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEndpoint(_)));
}

#[test]
fn rejects_zero_flush_interval() {
    let err = valid_builder().flush_interval_ms(0).build().unwrap_err();
    assert_eq!(err, ConfigError::NonPositiveFlushInterval);
}

#[test]
fn rejects_zero_max_batch_size() {
    let err = valid_builder().max_batch_size(0).build().unwrap_err();
    assert_eq!(err, ConfigError::NonPositiveMaxBatchSize);
}

#[test]
fn rejects_zero_max_buffer_size() {
    let err = valid_builder()
        .max_buffer_size(BufferLimit::Bounded(0))
        .build()
        .unwrap_err();
    assert_eq!(err, ConfigError::NonPositiveMaxBufferSize);
}

#[test]
fn rejects_buffer_smaller_than_batch() {
    let err = valid_builder()
        .max_batch_size(10)
        .max_buffer_size(BufferLimit::Bounded(5))
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        ConfigError::BufferSmallerThanBatch {
            buffer: 5,
            batch: 10
        }
    );
}

#[test]
fn allows_buffer_equal_to_batch() {
    let config = valid_builder()
        .max_batch_size(10)
        .max_buffer_size(BufferLimit::Bounded(10))
        .build()
        .unwrap();
    assert_eq!(config.max_buffer_size, BufferLimit::Bounded(10));
}

#[test]
fn max_retries_zero_is_allowed() {
    let config = valid_builder().max_retries(0).build().unwrap();
    assert_eq!(config.max_retries, 0);
}
