// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake dispatcher for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use pubsub_core::{AsyncDispatcher, DispatchError, Invocation};
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// Recorded dispatch
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchCall {
    pub listener: String,
    pub handler: String,
    pub args: Vec<Value>,
}

/// Dispatcher that records invocations without running them
#[derive(Clone, Default)]
pub struct FakeDispatcher {
    calls: Arc<Mutex<Vec<DispatchCall>>>,
    reject: Arc<Mutex<Option<String>>>,
}

impl FakeDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded dispatches
    pub fn calls(&self) -> Vec<DispatchCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Reject every following dispatch with `reason`
    pub fn reject_with(&self, reason: impl Into<String>) {
        *self.reject.lock().unwrap_or_else(|e| e.into_inner()) = Some(reason.into());
    }
}

impl AsyncDispatcher for FakeDispatcher {
    fn dispatch(&self, invocation: Invocation) -> Result<(), DispatchError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(DispatchCall {
                listener: invocation.listener().name().to_string(),
                handler: invocation.handler().to_string(),
                args: invocation.args().to_vec(),
            });

        match self.reject.lock().unwrap_or_else(|e| e.into_inner()).as_ref() {
            Some(reason) => Err(invocation.rejected(reason.clone())),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
