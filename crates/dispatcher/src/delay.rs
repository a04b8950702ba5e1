// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cancellable sleep used by the retry loop.

use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::watch;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DelayError {
    #[error("delay aborted by cancellation signal")]
    Aborted,
}

/// One-shot cancellation latch: fires once, never un-fires, and can be
/// cloned so every in-flight delay and the owning dispatcher share it.
#[derive(Clone)]
pub struct CancelSignal {
    tx: Arc<watch::Sender<bool>>,
    rx: watch::Receiver<bool>,
}

impl Default for CancelSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl CancelSignal {
    pub fn new() -> Self {
        let (tx, rx) = watch::channel(false);
        Self {
            tx: Arc::new(tx),
            rx,
        }
    }

    pub fn fire(&self) {
        // Ignore send errors: they only mean every receiver was dropped.
        let _ = self.tx.send(true);
    }

    pub fn is_fired(&self) -> bool {
        *self.rx.borrow()
    }

    /// Un-fire the signal. Only safe to call once nothing is still racing
    /// the old firing, i.e. when the owning dispatcher has been fully
    /// disposed and is being re-armed by a fresh `init`.
    pub fn reset(&self) {
        let _ = self.tx.send(false);
    }

    async fn wait_for_fire(&self) {
        let mut rx = self.rx.clone();
        if *rx.borrow() {
            return;
        }
        while rx.changed().await.is_ok() {
            if *rx.borrow() {
                return;
            }
        }
    }
}

/// Sleep for `duration` unless `signal` fires first.
pub async fn cancellable_delay(
    duration: Duration,
    signal: &CancelSignal,
) -> Result<(), DelayError> {
    if signal.is_fired() {
        return Err(DelayError::Aborted);
    }
    tokio::select! {
        _ = tokio::time::sleep(duration) => Ok(()),
        _ = signal.wait_for_fire() => Err(DelayError::Aborted),
    }
}

#[cfg(test)]
#[path = "delay_tests.rs"]
mod tests;
