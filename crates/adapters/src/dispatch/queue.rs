// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Deferred in-memory job queue

use pubsub_core::{AsyncDispatcher, DispatchError, Invocation};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

/// Queues invocations until the owner drains them.
///
/// Useful where "later" means a known point, such as the end of a request
/// or a worker tick. Drained invocations run on the draining thread in the
/// order they were dispatched.
#[derive(Clone, Default)]
pub struct QueueDispatcher {
    queue: Arc<Mutex<VecDeque<Invocation>>>,
}

impl QueueDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<Invocation>> {
        self.queue.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Invocations waiting to run
    pub fn pending(&self) -> usize {
        self.lock().len()
    }

    /// Run the oldest queued invocation, if any
    pub fn run_next(&self) -> bool {
        // Pop before running so handlers can dispatch more work
        let Some(invocation) = self.lock().pop_front() else {
            return false;
        };
        invocation.run_reporting();
        true
    }

    /// Run queued invocations until the queue is empty.
    ///
    /// Includes anything dispatched by the handlers themselves. Returns the
    /// number of invocations run.
    pub fn drain(&self) -> usize {
        let mut ran = 0;
        while self.run_next() {
            ran += 1;
        }
        if ran > 0 {
            tracing::debug!(ran, "drained dispatch queue");
        }
        ran
    }

    /// Drop everything queued without running it
    pub fn clear(&self) -> usize {
        let mut queue = self.lock();
        let dropped = queue.len();
        queue.clear();
        dropped
    }
}

impl AsyncDispatcher for QueueDispatcher {
    fn dispatch(&self, invocation: Invocation) -> Result<(), DispatchError> {
        let mut queue = self.lock();
        queue.push_back(invocation);
        tracing::trace!(pending = queue.len(), "queued invocation");
        Ok(())
    }
}

#[cfg(test)]
#[path = "queue_tests.rs"]
mod tests;
