// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The dispatcher: owns the queue, the persistent mirror, the flush timer,
//! and the retry state machine. This is the component spec.md calls out as
//! the hard part; everything else in this crate exists to support it.

use crate::delay::{cancellable_delay, CancelSignal};
use crate::mutex::AsyncMutex;
use crate::retry::{backoff, SendOutcome};
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use telemetry_adapters::{HeaderMap, Logger, Storage, StorageError, Transport};
use telemetry_core::{BufferLimit, DispatcherConfig, Event, FifoQueue};
use tokio::task::JoinHandle;

/// Last-N truncation used both for the persisted set (every enqueue) and
/// for the in-memory queue's own FIFO eviction.
fn tail(mut events: Vec<Event>, limit: BufferLimit) -> Vec<Event> {
    if let BufferLimit::Bounded(n) = limit {
        if events.len() > n {
            events.drain(0..events.len() - n);
        }
    }
    events
}

/// Owns one dispatcher's worth of queue, timer, and retry state.
///
/// Generic over the three external collaborators so tests can plug in
/// [`telemetry_adapters::FakeTransport`], [`telemetry_adapters::FakeStorage`]
/// and [`telemetry_adapters::FakeLogger`] in place of real ones.
pub struct Dispatcher<T: Transport, S: Storage, L: Logger> {
    transport: T,
    storage: S,
    logger: L,
    config: DispatcherConfig,
    queue: parking_lot::Mutex<FifoQueue>,
    timer: parking_lot::Mutex<Option<JoinHandle<()>>>,
    flush_mutex: AsyncMutex,
    cancel: CancelSignal,
    disposed: AtomicBool,
}

impl<T: Transport, S: Storage, L: Logger> Dispatcher<T, S, L> {
    pub fn new(config: DispatcherConfig, transport: T, storage: S, logger: L) -> Arc<Self> {
        Arc::new(Self {
            transport,
            storage,
            logger,
            config,
            queue: parking_lot::Mutex::new(FifoQueue::new()),
            timer: parking_lot::Mutex::new(None),
            flush_mutex: AsyncMutex::new(),
            cancel: CancelSignal::new(),
            disposed: AtomicBool::new(false),
        })
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::SeqCst)
    }

    /// Number of events currently sitting in memory, for tests and callers
    /// that want visibility without reaching into internals.
    pub fn queue_size(&self) -> usize {
        self.queue.lock().size()
    }

    /// Append `event`, persist a bounded snapshot, then either flush
    /// immediately (size threshold reached) or arm the flush timer.
    /// A no-op, logged at `warn`, once disposed.
    pub async fn enqueue(self: &Arc<Self>, event: Event) {
        if self.is_disposed() {
            self.logger.warn(
                "Cannot enqueue event: Dispatcher has been disposed",
                json!({"event_name": event.name}),
            );
            return;
        }

        let size = {
            let mut queue = self.queue.lock();
            queue.enqueue(event);
            self.evict_over_capacity(&mut queue);
            queue.size()
        };
        self.persist_snapshot().await;

        if size >= self.config.max_batch_size {
            self.flush().await;
        } else {
            self.arm_timer_if_absent();
        }
    }

    /// Drain and send the queue, serialized through the flush mutex.
    /// Cancels any armed timer on entry. A no-op once disposed.
    pub async fn flush(self: &Arc<Self>) {
        self.cancel_timer();
        if self.is_disposed() {
            return;
        }

        let this = Arc::clone(self);
        // `run_atomic` only fails with `Disposed`, which `dispose()` causes
        // by releasing the mutex; a flush racing a dispose is simply a
        // no-op rather than a propagated error.
        let _ = self
            .flush_mutex
            .run_atomic(move || async move { this.drain_and_send().await })
            .await;
    }

    async fn drain_and_send(self: &Arc<Self>) {
        let snapshot = {
            let mut queue = self.queue.lock();
            let snapshot = queue.snapshot();
            queue.clear();
            snapshot
        };
        if snapshot.is_empty() {
            return;
        }

        for chunk in snapshot.chunks(self.config.max_batch_size.max(1)) {
            self.send_with_retry(chunk.to_vec()).await;
        }
    }

    /// Load the persisted batch, truncate to the buffer cap, and place it
    /// into the queue. Arms the timer if anything was restored. Storage
    /// failures are logged and leave the queue empty.
    pub async fn restore(self: &Arc<Self>) {
        match self.storage.load().await {
            Ok(events) => {
                let restored = tail(events, self.config.max_buffer_size);
                let non_empty = !restored.is_empty();
                self.queue.lock().replace(restored);
                if non_empty {
                    self.arm_timer_if_absent();
                }
            }
            Err(err) => self.log_storage_error("load", err),
        }
    }

    /// Cancel the timer, clear the queue, release the flush mutex, fire
    /// the retry cancellation signal, and mark disposed. Idempotent.
    pub fn dispose(&self) {
        self.cancel_timer();
        self.queue.lock().clear();
        self.flush_mutex.release();
        self.cancel.fire();
        self.disposed.store(true, Ordering::SeqCst);
    }

    /// Undo `dispose`: reopen the flush mutex and the cancellation signal
    /// so a fresh `init` on the owning facade can use this dispatcher
    /// again. Does not touch the queue; callers restore separately.
    pub fn reset(&self) {
        self.flush_mutex.reset();
        self.cancel.reset();
        self.disposed.store(false, Ordering::SeqCst);
    }

    async fn send_with_retry(self: &Arc<Self>, mut batch: Vec<Event>) {
        let headers = self.header_map();
        let mut attempt: u32 = 0;

        loop {
            let outcome = match self
                .transport
                .send(
                    &self.config.endpoint,
                    &batch,
                    &headers,
                    &self.config.api_key_header,
                )
                .await
            {
                Ok(response) => SendOutcome::from_status(response.status),
                Err(_) => SendOutcome::NetworkError,
            };

            match outcome {
                SendOutcome::Success => {
                    self.clear_storage().await;
                    return;
                }
                SendOutcome::PermanentClient(status) | SendOutcome::Unexpected(status) => {
                    self.logger.warn(
                        "dropping events",
                        json!({"status": status, "count": batch.len()}),
                    );
                    self.clear_storage().await;
                    return;
                }
                SendOutcome::Transient(_) | SendOutcome::NetworkError => {
                    if attempt < self.config.max_retries {
                        self.log_retrying(outcome, attempt);
                        match cancellable_delay(backoff(attempt), &self.cancel).await {
                            Ok(()) => {
                                attempt += 1;
                                continue;
                            }
                            Err(_) => {
                                self.requeue_and_persist(&mut batch).await;
                                return;
                            }
                        }
                    } else {
                        self.log_exhausted(outcome);
                        self.requeue_and_persist(&mut batch).await;
                        return;
                    }
                }
            }
        }
    }

    fn log_retrying(&self, outcome: SendOutcome, attempt: u32) {
        match outcome {
            SendOutcome::Transient(status) => {
                self.logger
                    .warn("retrying", json!({"status": status, "attempt": attempt}));
            }
            _ => {
                self.logger.warn("retrying", json!({"attempt": attempt}));
            }
        }
    }

    fn log_exhausted(&self, outcome: SendOutcome) {
        match outcome {
            SendOutcome::Transient(status) => {
                self.logger
                    .error("max retries reached", json!({"status": status}));
            }
            _ => {
                self.logger.error("max retries reached", json!({}));
            }
        }
    }

    async fn requeue_and_persist(self: &Arc<Self>, batch: &mut Vec<Event>) {
        self.queue.lock().prepend(std::mem::take(batch));
        self.persist_snapshot().await;
    }

    async fn persist_snapshot(&self) {
        let snapshot = tail(self.queue.lock().snapshot(), self.config.max_buffer_size);
        if let Err(err) = self.storage.save(&snapshot).await {
            self.log_storage_error("save", err);
        }
    }

    async fn clear_storage(&self) {
        if let Err(err) = self.storage.clear().await {
            self.log_storage_error("clear", err);
        }
    }

    fn log_storage_error(&self, op: &str, err: StorageError) {
        match err {
            StorageError::QuotaExceeded { saved, dropped } => {
                self.logger.warn(
                    "storage error",
                    json!({"op": op, "saved": saved, "dropped": dropped}),
                );
            }
            StorageError::Other(message) => {
                self.logger
                    .error("storage error", json!({"op": op, "error": message}));
            }
        }
    }

    fn evict_over_capacity(&self, queue: &mut FifoQueue) {
        if let BufferLimit::Bounded(limit) = self.config.max_buffer_size {
            while queue.size() > limit {
                queue.dequeue();
            }
        }
    }

    fn header_map(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            self.config.api_key_header.clone(),
            self.config.api_key.clone(),
        );
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers
    }

    fn arm_timer_if_absent(self: &Arc<Self>) {
        let mut slot = self.timer.lock();
        if slot.is_some() {
            return;
        }
        let interval = Duration::from_millis(self.config.flush_interval_ms);
        let this = Arc::clone(self);
        *slot = Some(tokio::spawn(async move {
            tokio::time::sleep(interval).await;
            this.timer.lock().take();
            this.flush().await;
        }));
    }

    fn cancel_timer(&self) {
        if let Some(handle) = self.timer.lock().take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;
