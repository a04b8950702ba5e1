// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Platform and session capabilities supplied by the host runtime.
//!
//! Concrete platform detection and session-id generation are host
//! collaborators, not this crate's concern — only the contract plus trivial
//! no-op defaults live here.

use telemetry_core::Platform;

/// Reports the host platform tag attached to every event, if known.
pub trait PlatformProvider: Send + Sync + 'static {
    fn platform(&self) -> Option<Platform>;
}

/// Platform provider that never tags events.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPlatformProvider;

impl PlatformProvider for NoopPlatformProvider {
    fn platform(&self) -> Option<Platform> {
        None
    }
}

/// Reports the current session id attached to every event, if any.
pub trait SessionProvider: Send + Sync + 'static {
    fn session_id(&self) -> Option<String>;

    /// Invoked by `Client::dispose` so a stateful provider can drop any
    /// cached session. No-op by default.
    fn clear(&self) {}
}

/// Session provider that never attaches a session id.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSessionProvider;

impl SessionProvider for NoopSessionProvider {
    fn session_id(&self) -> Option<String> {
        None
    }
}

#[cfg(any(test, feature = "test-support"))]
mod fake {
    use super::{PlatformProvider, SessionProvider};
    use parking_lot::Mutex;
    use std::sync::Arc;
    use telemetry_core::Platform;

    /// Fixed platform tag, for deterministic facade tests.
    #[derive(Clone, Default)]
    pub struct FakePlatformProvider {
        platform: Option<Platform>,
    }

    impl FakePlatformProvider {
        pub fn new(platform: Option<Platform>) -> Self {
            Self { platform }
        }
    }

    impl PlatformProvider for FakePlatformProvider {
        fn platform(&self) -> Option<Platform> {
            self.platform.clone()
        }
    }

    /// Mutable session id a test can set and clear, recording whether
    /// `clear()` was ever called.
    #[derive(Clone, Default)]
    pub struct FakeSessionProvider {
        inner: Arc<Mutex<Option<String>>>,
    }

    impl FakeSessionProvider {
        pub fn new(session_id: impl Into<String>) -> Self {
            Self {
                inner: Arc::new(Mutex::new(Some(session_id.into()))),
            }
        }

        pub fn current(&self) -> Option<String> {
            self.inner.lock().clone()
        }
    }

    impl SessionProvider for FakeSessionProvider {
        fn session_id(&self) -> Option<String> {
            self.inner.lock().clone()
        }

        fn clear(&self) {
            *self.inner.lock() = None;
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakePlatformProvider, FakeSessionProvider};
