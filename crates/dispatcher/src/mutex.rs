// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cooperative async mutex serializing flushes.
//!
//! `tokio::sync::Mutex` has no notion of a disposed terminal state or a
//! reset back to free, both of which the dispatcher's lifecycle needs, so
//! this is a small hand-rolled FIFO-fair mutex instead: a `parking_lot`
//! guarded state machine plus a queue of oneshot waiters woken in arrival
//! order.

use std::collections::VecDeque;
use std::future::Future;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::oneshot;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MutexError {
    #[error("mutex has been disposed")]
    Disposed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Free,
    Held,
    Disposed,
}

struct Inner {
    state: State,
    waiters: VecDeque<oneshot::Sender<()>>,
}

/// FIFO-fair async mutex with an explicit disposed state.
pub struct AsyncMutex {
    inner: Arc<parking_lot::Mutex<Inner>>,
}

impl Default for AsyncMutex {
    fn default() -> Self {
        Self::new()
    }
}

impl AsyncMutex {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(parking_lot::Mutex::new(Inner {
                state: State::Free,
                waiters: VecDeque::new(),
            })),
        }
    }

    pub fn is_held(&self) -> bool {
        matches!(self.inner.lock().state, State::Held)
    }

    /// Run `f` with the lock held, parking on a FIFO queue if it is
    /// already held. Fails immediately if the mutex has been disposed.
    /// The lock is released whether `f` succeeds or fails.
    pub async fn run_atomic<F, Fut, T>(&self, f: F) -> Result<T, MutexError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        self.acquire().await?;
        let result = f().await;
        self.release_one();
        Ok(result)
    }

    async fn acquire(&self) -> Result<(), MutexError> {
        let wait = {
            let mut inner = self.inner.lock();
            match inner.state {
                State::Disposed => return Err(MutexError::Disposed),
                State::Free => {
                    inner.state = State::Held;
                    None
                }
                State::Held => {
                    let (tx, rx) = oneshot::channel();
                    inner.waiters.push_back(tx);
                    Some(rx)
                }
            }
        };

        if let Some(rx) = wait {
            // A closed channel means the mutex was disposed while we were
            // parked; the drain in `release` still woke us, so we hold the
            // lock and must release it again to keep the invariant that
            // acquire and release_one are paired.
            let _ = rx.await;
        }
        Ok(())
    }

    /// Wake the oldest waiter, if any, handing it the lock. If there are
    /// none, the mutex goes back to free (unless disposed in the meantime).
    fn release_one(&self) {
        let mut inner = self.inner.lock();
        match inner.waiters.pop_front() {
            Some(tx) => {
                // Ownership of "held" transfers to the woken waiter.
                let _ = tx.send(());
            }
            None => {
                if inner.state != State::Disposed {
                    inner.state = State::Free;
                }
            }
        }
    }

    /// Transition to disposed. Any later `run_atomic` fails with
    /// `Disposed`. A waiter already parked is not abandoned: if one is
    /// waiting, it is handed the lock exactly as `release_one` would, so
    /// the queue keeps draining one holder at a time instead of letting
    /// every parked waiter run concurrently.
    pub fn release(&self) {
        let mut inner = self.inner.lock();
        inner.state = State::Disposed;
        if let Some(tx) = inner.waiters.pop_front() {
            let _ = tx.send(());
        }
    }

    /// Back to free, discarding any lingering waiters. Used when the
    /// owning facade is re-initialized after a dispose.
    pub fn reset(&self) {
        let mut inner = self.inner.lock();
        inner.state = State::Free;
        inner.waiters.clear();
    }
}

impl Clone for AsyncMutex {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
#[path = "mutex_tests.rs"]
mod tests;
