// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dispatcher backed by a tokio runtime

use pubsub_core::{AsyncDispatcher, DispatchError, Invocation};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::runtime::{Handle, TryCurrentError};
use tokio::sync::Notify;

#[derive(Default)]
struct InFlight {
    count: AtomicUsize,
    idle: Notify,
}

/// Decrements the in-flight count when the task finishes or is dropped
struct InFlightGuard(Arc<InFlight>);

impl InFlightGuard {
    fn new(in_flight: &Arc<InFlight>) -> Self {
        in_flight.count.fetch_add(1, Ordering::SeqCst);
        Self(Arc::clone(in_flight))
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        if self.0.count.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.0.idle.notify_waiters();
        }
    }
}

/// Invocation handed to the blocking pool.
///
/// If the runtime drops the task without running it (for example after
/// shutdown), the drop reports a rejection to the captured error handler.
struct Pending {
    invocation: Option<Invocation>,
    _guard: InFlightGuard,
}

impl Pending {
    fn run(mut self) {
        if let Some(invocation) = self.invocation.take() {
            invocation.run_reporting();
        }
    }
}

impl Drop for Pending {
    fn drop(&mut self) {
        if let Some(invocation) = self.invocation.take() {
            tracing::warn!(
                listener = invocation.listener().name(),
                handler = %invocation.handler(),
                "runtime dropped handler before it ran"
            );
            invocation.report(invocation.rejected("runtime shut down"));
        }
    }
}

/// Runs each invocation on the runtime's blocking pool.
///
/// `dispatch` returns as soon as the task is spawned. Handler failures, and
/// handlers the runtime drops without running, are sent to the error handler
/// captured when the event was triggered.
#[derive(Clone)]
pub struct TokioDispatcher {
    handle: Handle,
    in_flight: Arc<InFlight>,
}

impl TokioDispatcher {
    pub fn new(handle: Handle) -> Self {
        Self {
            handle,
            in_flight: Arc::new(InFlight::default()),
        }
    }

    /// Dispatcher on the runtime this is called from
    pub fn from_current() -> Result<Self, TryCurrentError> {
        Ok(Self::new(Handle::try_current()?))
    }

    /// Number of dispatched handlers that have not finished
    pub fn in_flight(&self) -> usize {
        self.in_flight.count.load(Ordering::SeqCst)
    }

    /// Wait until every dispatched handler has finished
    pub async fn wait_idle(&self) {
        loop {
            // Registered before the check so a wakeup in between is not lost
            let notified = self.in_flight.idle.notified();
            if self.in_flight() == 0 {
                return;
            }
            notified.await;
        }
    }
}

impl AsyncDispatcher for TokioDispatcher {
    fn dispatch(&self, invocation: Invocation) -> Result<(), DispatchError> {
        let guard = InFlightGuard::new(&self.in_flight);
        tracing::trace!(
            listener = invocation.listener().name(),
            handler = %invocation.handler(),
            in_flight = self.in_flight(),
            "spawning handler"
        );

        let pending = Pending {
            invocation: Some(invocation),
            _guard: guard,
        };
        self.handle.spawn_blocking(move || pending.run());

        Ok(())
    }
}

#[cfg(test)]
#[path = "runtime_tests.rs"]
mod tests;
