// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Async dispatch strategy

use super::ErrorHandler;
use crate::error::DispatchError;
use crate::event::{Args, HandlerName};
use crate::listener::Listener;
use serde_json::Value;
use std::sync::Arc;

/// One pending handler call: listener, handler name and arguments.
///
/// Also carries the error handler that was current when the event was
/// triggered, so a dispatcher that runs the call later can still report it.
pub struct Invocation {
    listener: Arc<Listener>,
    handler: HandlerName,
    args: Args,
    errors: Arc<dyn ErrorHandler>,
}

impl Invocation {
    pub fn new(
        listener: Arc<Listener>,
        handler: HandlerName,
        args: Args,
        errors: Arc<dyn ErrorHandler>,
    ) -> Self {
        Self {
            listener,
            handler,
            args,
            errors,
        }
    }

    pub fn listener(&self) -> &Arc<Listener> {
        &self.listener
    }

    pub fn handler(&self) -> &HandlerName {
        &self.handler
    }

    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// Call the handler now, on the current thread
    pub fn run(&self) -> Result<(), DispatchError> {
        self.listener.invoke(&self.handler, &self.args)
    }

    /// Call the handler and send any failure to the captured error handler.
    ///
    /// Returns `true` if the handler succeeded.
    pub fn run_reporting(&self) -> bool {
        match self.run() {
            Ok(()) => true,
            Err(error) => {
                self.report(error);
                false
            }
        }
    }

    /// Send an error to the error handler captured at trigger time
    pub fn report(&self, error: DispatchError) {
        self.errors.handle(error);
    }

    /// Error describing a dispatcher that could not accept this invocation
    pub fn rejected(&self, reason: impl Into<String>) -> DispatchError {
        DispatchError::Dispatcher {
            listener: self.listener.name().to_string(),
            handler: self.handler.clone(),
            reason: reason.into(),
        }
    }
}

impl std::fmt::Debug for Invocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Invocation")
            .field("listener", &self.listener.name())
            .field("handler", &self.handler)
            .field("args", &self.args)
            .finish()
    }
}

/// Executes handler calls for `async` registrations.
///
/// An error returned from `dispatch` is reported by the hub. Failures that
/// happen after `dispatch` returns must be reported by the dispatcher itself,
/// usually through `Invocation::run_reporting`.
pub trait AsyncDispatcher: Send + Sync {
    fn dispatch(&self, invocation: Invocation) -> Result<(), DispatchError>;
}

impl<F> AsyncDispatcher for F
where
    F: Fn(Invocation) -> Result<(), DispatchError> + Send + Sync,
{
    fn dispatch(&self, invocation: Invocation) -> Result<(), DispatchError> {
        self(invocation)
    }
}

/// Default dispatcher: calls the handler directly, exactly like a
/// synchronous registration.
#[derive(Clone, Copy, Debug, Default)]
pub struct InlineDispatcher;

impl AsyncDispatcher for InlineDispatcher {
    fn dispatch(&self, invocation: Invocation) -> Result<(), DispatchError> {
        invocation.run()
    }
}
