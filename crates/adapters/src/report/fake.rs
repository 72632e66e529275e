// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake error handler for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use pubsub_core::{DispatchError, ErrorHandler};
use std::sync::{Arc, Mutex};

/// Recorded error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRecord {
    pub listener: String,
    pub handler: String,
    pub message: String,
}

/// Error handler that collects everything it is given
#[derive(Clone, Default)]
pub struct FakeErrorHandler {
    records: Arc<Mutex<Vec<ErrorRecord>>>,
}

impl FakeErrorHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded errors
    pub fn records(&self) -> Vec<ErrorRecord> {
        self.records.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Display form of each recorded error
    pub fn messages(&self) -> Vec<String> {
        self.records().into_iter().map(|r| r.message).collect()
    }
}

impl ErrorHandler for FakeErrorHandler {
    fn handle(&self, error: DispatchError) {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(ErrorRecord {
                listener: error.listener().to_string(),
                handler: error.handler().to_string(),
                message: error.to_string(),
            });
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
