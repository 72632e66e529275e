// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Listeners and their typed handlers
//!
//! A listener is a named target holding one handler per event it answers.
//! Handlers are keyed by `handle_<event>` so a registry can check, before
//! anything is installed, that every listener can actually receive its event.

use crate::error::{DispatchError, HandlerResult};
use crate::event::{EventName, HandlerName};
use serde_json::Value;
use std::any::Any;
use std::collections::BTreeMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

type HandlerFn = dyn Fn(&[Value]) -> HandlerResult + Send + Sync;

/// A named listener and the handlers it exposes
#[derive(Clone)]
pub struct Listener {
    name: String,
    handlers: BTreeMap<HandlerName, Arc<HandlerFn>>,
}

impl Listener {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            handlers: BTreeMap::new(),
        }
    }

    /// Add the handler for `event`, replacing any previous one
    pub fn on<F>(mut self, event: impl Into<EventName>, handler: F) -> Self
    where
        F: Fn(&[Value]) -> HandlerResult + Send + Sync + 'static,
    {
        let event = event.into();
        self.handlers.insert(event.handler(), Arc::new(handler));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn responds_to(&self, handler: &HandlerName) -> bool {
        self.handlers.contains_key(handler)
    }

    pub fn handler_names(&self) -> impl Iterator<Item = &HandlerName> {
        self.handlers.keys()
    }

    /// Call a handler directly on the current thread.
    ///
    /// Returned errors and panics are both converted to `DispatchError`.
    pub fn invoke(&self, handler: &HandlerName, args: &[Value]) -> Result<(), DispatchError> {
        let Some(f) = self.handlers.get(handler) else {
            return Err(DispatchError::NoHandler {
                listener: self.name.clone(),
                handler: handler.clone(),
            });
        };

        match panic::catch_unwind(AssertUnwindSafe(|| f(args))) {
            Ok(Ok(())) => Ok(()),
            Ok(Err(source)) => Err(DispatchError::Handler {
                listener: self.name.clone(),
                handler: handler.clone(),
                source,
            }),
            Err(payload) => Err(DispatchError::Panicked {
                listener: self.name.clone(),
                handler: handler.clone(),
                message: panic_message(payload.as_ref()),
            }),
        }
    }
}

impl std::fmt::Debug for Listener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listener")
            .field("name", &self.name)
            .field("handlers", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}

pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
#[path = "listener_tests.rs"]
mod tests;
