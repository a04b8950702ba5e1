// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the dispatcher and client facade.

use telemetry_core::{ConfigError, EventError};
use thiserror::Error;

/// Errors surfaced by [`crate::Client`].
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid event: {0}")]
    Event(#[from] EventError),
    /// Reserved for a strict-init lifecycle variant; this crate implements
    /// auto-init (see `DESIGN.md`), so `track` never returns this today.
    #[error("client has not been initialized")]
    NotInitialized,
}
