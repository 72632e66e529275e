// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced dispatcher wrapper for consistent observability

use pubsub_core::{AsyncDispatcher, DispatchError, Invocation};

/// Wrapper that adds tracing to any AsyncDispatcher
#[derive(Clone)]
pub struct TracedDispatcher<D> {
    inner: D,
}

impl<D> TracedDispatcher<D> {
    pub fn new(inner: D) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &D {
        &self.inner
    }
}

impl<D: AsyncDispatcher> AsyncDispatcher for TracedDispatcher<D> {
    fn dispatch(&self, invocation: Invocation) -> Result<(), DispatchError> {
        let span = tracing::info_span!(
            "hub.dispatch",
            listener = invocation.listener().name(),
            handler = %invocation.handler(),
        );
        let _guard = span.enter();

        tracing::debug!(args = invocation.args().len(), "dispatching");

        let start = std::time::Instant::now();
        let result = self.inner.dispatch(invocation);
        let elapsed = start.elapsed();

        match &result {
            Ok(()) => tracing::debug!(elapsed_ms = elapsed.as_millis() as u64, "dispatched"),
            Err(e) => tracing::error!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "dispatch failed"
            ),
        }

        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
