// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The client facade: validates configuration, enriches events with
//! metadata/session/platform/timestamp, and owns the dispatcher's lifecycle.

use crate::capability::{PlatformProvider, SessionProvider};
use crate::error::ClientError;
use crate::mutex::AsyncMutex;
use crate::Dispatcher;
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use telemetry_adapters::{Logger, Storage, Transport};
use telemetry_core::{Clock, DispatcherConfigBuilder, Event, MetadataStore, Value};

/// Constructs a [`Dispatcher`] from validated configuration and exposes the
/// event-tracking surface host applications call.
///
/// Auto-init is the chosen lifecycle (see `DESIGN.md`): the first `track`
/// call triggers `init` implicitly rather than requiring callers to do so.
pub struct Client<
    T: Transport,
    S: Storage,
    L: Logger,
    C: Clock,
    P: PlatformProvider,
    Sess: SessionProvider,
> {
    dispatcher: Arc<Dispatcher<T, S, L>>,
    logger: L,
    clock: C,
    platform_provider: P,
    session_provider: Sess,
    metadata: parking_lot::Mutex<MetadataStore>,
    init_mutex: AsyncMutex,
    initialized: AtomicBool,
    disposed: AtomicBool,
}

impl<T, S, L, C, P, Sess> Client<T, S, L, C, P, Sess>
where
    T: Transport,
    S: Storage,
    L: Logger + Clone,
    C: Clock,
    P: PlatformProvider,
    Sess: SessionProvider,
{
    /// Validate `config`, identifying the offending field on failure, then
    /// build the dispatcher and facade around it.
    pub fn new(
        config: DispatcherConfigBuilder,
        transport: T,
        storage: S,
        logger: L,
        clock: C,
        platform_provider: P,
        session_provider: Sess,
    ) -> Result<Arc<Self>, ClientError> {
        let config = config.build()?;
        let dispatcher = Dispatcher::new(config, transport, storage, logger.clone());
        Ok(Arc::new(Self {
            dispatcher,
            logger,
            clock,
            platform_provider,
            session_provider,
            metadata: parking_lot::Mutex::new(MetadataStore::new()),
            init_mutex: AsyncMutex::new(),
            initialized: AtomicBool::new(false),
            disposed: AtomicBool::new(false),
        }))
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::SeqCst)
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::SeqCst)
    }

    /// Idempotent. Restores persisted events into the dispatcher on first
    /// call. If the client was previously disposed, reopens the init mutex
    /// and dispatcher state first so `track` is usable again.
    pub async fn init(self: &Arc<Self>) {
        if self.disposed.swap(false, Ordering::SeqCst) {
            self.init_mutex.reset();
            self.dispatcher.reset();
            self.initialized.store(false, Ordering::SeqCst);
        }

        let this = Arc::clone(self);
        let _ = self
            .init_mutex
            .run_atomic(move || async move {
                if !this.initialized.load(Ordering::SeqCst) {
                    this.dispatcher.restore().await;
                    this.initialized.store(true, Ordering::SeqCst);
                }
            })
            .await;
    }

    /// Enrich and enqueue one event. A no-op (logged at `warn`) once
    /// disposed; otherwise ensures `init` has run before enqueueing.
    pub async fn track(
        self: &Arc<Self>,
        name: impl Into<String>,
        payload: Option<Value>,
        metadata: Option<HashMap<String, Value>>,
    ) -> Result<(), ClientError> {
        let name = name.into();
        if self.disposed.load(Ordering::SeqCst) {
            self.logger.warn(
                "Cannot enqueue event: Dispatcher has been disposed",
                json!({"event_name": name}),
            );
            return Ok(());
        }

        if !self.initialized.load(Ordering::SeqCst) {
            self.init().await;
        }

        let issued_at = self.clock.now_ms();
        let merged_metadata = self.metadata.lock().merge(metadata);
        let event = Event::new(
            name,
            payload,
            merged_metadata,
            issued_at,
            self.session_provider.session_id(),
            self.platform_provider.platform(),
        )?;
        self.dispatcher.enqueue(event).await;
        Ok(())
    }

    pub fn set_metadata(&self, key: impl Into<String>, value: Value) {
        self.metadata.lock().set(key, value);
    }

    pub fn get_metadata(&self) -> HashMap<String, Value> {
        self.metadata.lock().get_all()
    }

    pub async fn flush(self: &Arc<Self>) {
        self.dispatcher.flush().await;
    }

    /// Delegates to the dispatcher, clears the metadata store and any
    /// cached session, and marks the facade disposed. Idempotent.
    pub fn dispose(&self) {
        self.dispatcher.dispose();
        self.metadata.lock().clear();
        self.session_provider.clear();
        self.disposed.store(true, Ordering::SeqCst);
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
