// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Outcome classification and backoff for the per-batch retry loop.

use std::time::Duration;

const BACKOFF_BASE_MS: u64 = 1000;
const BACKOFF_JITTER_MS: u64 = 1000;

/// Result of one `Transport::send` attempt, as a sum type rather than an
/// exception so the retry loop can match exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    Success,
    PermanentClient(u16),
    Transient(u16),
    /// 1xx/3xx/other unrecognized status — treated as a permanent drop.
    Unexpected(u16),
    NetworkError,
}

impl SendOutcome {
    pub fn from_status(status: u16) -> Self {
        match status {
            200..=299 => SendOutcome::Success,
            400..=499 => SendOutcome::PermanentClient(status),
            500..=599 => SendOutcome::Transient(status),
            other => SendOutcome::Unexpected(other),
        }
    }

    pub fn is_retryable(self) -> bool {
        matches!(self, SendOutcome::Transient(_) | SendOutcome::NetworkError)
    }
}

/// `base * 2^attempt + jitter`, jitter drawn independently on every call.
pub fn backoff(attempt: u32) -> Duration {
    use rand::Rng;
    let exp = BACKOFF_BASE_MS.saturating_mul(1u64 << attempt.min(32));
    let jitter = rand::rng().random_range(0..BACKOFF_JITTER_MS);
    Duration::from_millis(exp + jitter)
}

#[cfg(test)]
#[path = "retry_tests.rs"]
mod tests;
