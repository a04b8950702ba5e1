// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! External-collaborator interfaces the dispatcher depends on: transport,
//! storage, and logging. Real network/disk implementations are out of
//! scope for this crate (see spec Non-goals) — only trivial real defaults
//! and, behind `test-support`, call-recording fakes live here.

pub mod logger;
pub mod storage;
pub mod transport;

pub use logger::{Level, Logger, NoneLogger, TracingLogger};
pub use storage::{NoopStorage, Storage, StorageError};
pub use transport::{HeaderMap, Transport, TransportError, TransportResponse};

#[cfg(any(test, feature = "test-support"))]
pub use logger::{FakeLogger, LoggedCall};
#[cfg(any(test, feature = "test-support"))]
pub use storage::{FakeStorage, StorageCall};
#[cfg(any(test, feature = "test-support"))]
pub use transport::{FakeTransport, ScriptedResponse, TransportCall};
