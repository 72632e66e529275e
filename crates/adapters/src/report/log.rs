// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error handler that logs through `tracing`

use pubsub_core::{DispatchError, ErrorHandler};

/// Logs each failed delivery at error level with structured fields
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingErrorHandler;

impl TracingErrorHandler {
    pub fn new() -> Self {
        Self
    }
}

impl ErrorHandler for TracingErrorHandler {
    fn handle(&self, error: DispatchError) {
        let kind = match &error {
            DispatchError::Handler { .. } => "handler",
            DispatchError::Panicked { .. } => "panic",
            DispatchError::NoHandler { .. } => "no_handler",
            DispatchError::Dispatcher { .. } => "dispatcher",
        };
        tracing::error!(
            listener = error.listener(),
            handler = %error.handler(),
            kind,
            error = %error,
            "event handler failed"
        );
    }
}
