// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error reporting strategy

use crate::error::DispatchError;
use std::io::Write;

/// Receives every error raised while delivering an event.
///
/// Must not panic; nothing catches a failing error handler.
pub trait ErrorHandler: Send + Sync {
    fn handle(&self, error: DispatchError);
}

impl<F> ErrorHandler for F
where
    F: Fn(DispatchError) + Send + Sync,
{
    fn handle(&self, error: DispatchError) {
        self(error)
    }
}

/// Default error handler: one line per error on standard error
#[derive(Clone, Copy, Debug, Default)]
pub struct StderrErrorHandler;

impl StderrErrorHandler {
    pub(crate) fn write_error(out: &mut impl Write, error: &DispatchError) -> std::io::Result<()> {
        writeln!(out, "{error}")
    }
}

impl ErrorHandler for StderrErrorHandler {
    fn handle(&self, error: DispatchError) {
        // Nowhere left to report a failed write to stderr
        let _ = Self::write_error(&mut std::io::stderr().lock(), &error);
    }
}
