// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dispatcher configuration: validated once at construction time.

use thiserror::Error;

pub const DEFAULT_API_KEY_HEADER: &str = "X-API-Key";
pub const DEFAULT_FLUSH_INTERVAL_MS: u64 = 5000;
pub const DEFAULT_MAX_BATCH_SIZE: usize = 10;
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Cap on queued + persisted events, or no cap at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferLimit {
    Unbounded,
    Bounded(usize),
}

impl BufferLimit {
    pub fn is_unbounded(self) -> bool {
        matches!(self, BufferLimit::Unbounded)
    }
}

/// Errors surfaced from [`DispatcherConfig::build`], identifying the
/// offending field.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("api_key must not be empty")]
    EmptyApiKey,
    #[error("api_key_header must not be empty")]
    EmptyApiKeyHeader,
    #[error("endpoint must be a non-empty absolute URL: {0}")]
    InvalidEndpoint(String),
    #[error("flush_interval_ms must be positive")]
    NonPositiveFlushInterval,
    #[error("max_batch_size must be positive")]
    NonPositiveMaxBatchSize,
    #[error("max_buffer_size must be positive")]
    NonPositiveMaxBufferSize,
    #[error("max_buffer_size ({buffer}) must be >= max_batch_size ({batch})")]
    BufferSmallerThanBatch { buffer: usize, batch: usize },
}

/// Validated, immutable dispatcher configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatcherConfig {
    pub api_key: String,
    pub api_key_header: String,
    pub endpoint: String,
    pub flush_interval_ms: u64,
    pub max_batch_size: usize,
    pub max_retries: u32,
    pub max_buffer_size: BufferLimit,
}

/// Builder mirroring the host-supplied option surface (spec §6.4); every
/// field has the documented default except `api_key` and `endpoint`.
#[derive(Debug, Clone)]
pub struct DispatcherConfigBuilder {
    api_key: Option<String>,
    api_key_header: String,
    endpoint: Option<String>,
    flush_interval_ms: u64,
    max_batch_size: usize,
    max_retries: u32,
    max_buffer_size: BufferLimit,
}

impl Default for DispatcherConfigBuilder {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_header: DEFAULT_API_KEY_HEADER.to_string(),
            endpoint: None,
            flush_interval_ms: DEFAULT_FLUSH_INTERVAL_MS,
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
            max_retries: DEFAULT_MAX_RETRIES,
            max_buffer_size: BufferLimit::Unbounded,
        }
    }
}

impl DispatcherConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn api_key_header(mut self, header: impl Into<String>) -> Self {
        self.api_key_header = header.into();
        self
    }

    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn flush_interval_ms(mut self, ms: u64) -> Self {
        self.flush_interval_ms = ms;
        self
    }

    pub fn max_batch_size(mut self, size: usize) -> Self {
        self.max_batch_size = size;
        self
    }

    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    pub fn max_buffer_size(mut self, limit: BufferLimit) -> Self {
        self.max_buffer_size = limit;
        self
    }

    pub fn build(self) -> Result<DispatcherConfig, ConfigError> {
        let api_key = self.api_key.unwrap_or_default();
        if api_key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        if self.api_key_header.is_empty() {
            return Err(ConfigError::EmptyApiKeyHeader);
        }
        let endpoint = self.endpoint.unwrap_or_default();
        if endpoint.is_empty() {
            return Err(ConfigError::InvalidEndpoint(endpoint));
        }
        let parsed = url::Url::parse(&endpoint)
            .map_err(|_| ConfigError::InvalidEndpoint(endpoint.clone()))?;
        if parsed.cannot_be_a_base() {
            return Err(ConfigError::InvalidEndpoint(endpoint));
        }
        if self.flush_interval_ms == 0 {
            return Err(ConfigError::NonPositiveFlushInterval);
        }
        if self.max_batch_size == 0 {
            return Err(ConfigError::NonPositiveMaxBatchSize);
        }
        if let BufferLimit::Bounded(buffer) = self.max_buffer_size {
            if buffer == 0 {
                return Err(ConfigError::NonPositiveMaxBufferSize);
            }
            if buffer < self.max_batch_size {
                return Err(ConfigError::BufferSmallerThanBatch {
                    buffer,
                    batch: self.max_batch_size,
                });
            }
        }

        Ok(DispatcherConfig {
            api_key,
            api_key_header: self.api_key_header,
            endpoint,
            flush_interval_ms: self.flush_interval_ms,
            max_batch_size: self.max_batch_size,
            max_retries: self.max_retries,
            max_buffer_size: self.max_buffer_size,
        })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
