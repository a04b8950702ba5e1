// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! The reliable dispatch pipeline: a FIFO-serialized mutex, a cancellable
//! retry delay, the batching/retry dispatcher itself, and the client facade
//! that enriches and hands it events.

pub mod capability;
pub mod client;
pub mod delay;
pub mod dispatcher;
pub mod error;
pub mod mutex;
pub mod retry;

pub use capability::{
    NoopPlatformProvider, NoopSessionProvider, PlatformProvider, SessionProvider,
};
pub use client::Client;
pub use delay::{cancellable_delay, CancelSignal, DelayError};
pub use dispatcher::Dispatcher;
pub use error::ClientError;
pub use mutex::{AsyncMutex, MutexError};
pub use retry::{backoff, SendOutcome};

#[cfg(any(test, feature = "test-support"))]
pub use capability::{FakePlatformProvider, FakeSessionProvider};
