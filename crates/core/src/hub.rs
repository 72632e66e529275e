// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The hub: registry plus dispatch
//!
//! Configure once at startup with `register`, then call `trigger` at runtime.
//! Each registration for the event is delivered in order; a failing handler
//! is reported to the error handler and never stops the ones after it.

use crate::config::{ConfigError, ListenerCatalog, RegistryConfig};
use crate::error::{DispatchError, RegistryError};
use crate::event::{Args, EventName};
use crate::listener::panic_message;
use crate::registry::{Registration, Registry};
use crate::strategy::{
    AsyncDispatcher, ErrorHandler, InlineDispatcher, Invocation, StderrErrorHandler,
};
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

struct HubState {
    registry: Arc<Registry>,
    error_handler: Arc<dyn ErrorHandler>,
    async_dispatcher: Arc<dyn AsyncDispatcher>,
}

/// In-process publish/subscribe hub.
///
/// Clones share state, so one hub built at the composition root can be
/// handed to every component that triggers events.
#[derive(Clone)]
pub struct Hub {
    state: Arc<RwLock<HubState>>,
}

impl Hub {
    /// Empty hub with the inline dispatcher and stderr error handler
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(HubState {
                registry: Arc::new(Registry::new()),
                error_handler: Arc::new(StderrErrorHandler),
                async_dispatcher: Arc::new(InlineDispatcher),
            })),
        }
    }

    pub fn with_error_handler(self, handler: Arc<dyn ErrorHandler>) -> Self {
        self.set_error_handler(handler);
        self
    }

    pub fn with_async_dispatcher(self, dispatcher: Arc<dyn AsyncDispatcher>) -> Self {
        self.set_async_dispatcher(dispatcher);
        self
    }

    fn read(&self) -> RwLockReadGuard<'_, HubState> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HubState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Replace the whole registry.
    ///
    /// The registry is validated first; if any registration is rejected the
    /// current registry stays installed.
    pub fn register(&self, registry: Registry) -> Result<(), RegistryError> {
        if let Err(e) = registry.validate() {
            tracing::warn!(error = %e, "registry rejected");
            return Err(e);
        }

        let events = registry.len();
        self.write().registry = Arc::new(registry);
        tracing::debug!(events, "registry installed");
        Ok(())
    }

    /// Build a registry from configuration and install it
    pub fn register_config(
        &self,
        config: &RegistryConfig,
        catalog: &ListenerCatalog,
    ) -> Result<(), ConfigError> {
        let registry = config.resolve(catalog)?;
        self.register(registry)?;
        Ok(())
    }

    /// Snapshot of the installed registry
    pub fn registry(&self) -> Arc<Registry> {
        Arc::clone(&self.read().registry)
    }

    pub fn error_handler(&self) -> Arc<dyn ErrorHandler> {
        Arc::clone(&self.read().error_handler)
    }

    /// Takes effect on the next `trigger`
    pub fn set_error_handler(&self, handler: Arc<dyn ErrorHandler>) {
        self.write().error_handler = handler;
    }

    pub fn async_dispatcher(&self) -> Arc<dyn AsyncDispatcher> {
        Arc::clone(&self.read().async_dispatcher)
    }

    /// Takes effect on the next `trigger`
    pub fn set_async_dispatcher(&self, dispatcher: Arc<dyn AsyncDispatcher>) {
        self.write().async_dispatcher = dispatcher;
    }

    /// Notify every listener registered for `event`.
    ///
    /// Synchronous registrations run before this returns; `async` ones are
    /// handed to the dispatcher and not awaited. Unregistered events are a
    /// no-op. Handler failures go to the error handler, never to the caller.
    pub fn trigger(&self, event: impl Into<EventName>, args: Args) {
        let event = event.into();

        // Snapshot so handlers may re-enter the hub without deadlocking
        let (registry, errors, dispatcher) = {
            let state = self.read();
            (
                Arc::clone(&state.registry),
                Arc::clone(&state.error_handler),
                Arc::clone(&state.async_dispatcher),
            )
        };

        let registrations = registry.registrations(&event);
        if registrations.is_empty() {
            tracing::trace!(event = %event, "no listeners");
            return;
        }

        tracing::debug!(event = %event, listeners = registrations.len(), "triggering");

        for registration in registrations {
            let result = deliver(&event, registration, &args, &errors, dispatcher.as_ref());
            if let Err(error) = result {
                tracing::debug!(
                    event = %event,
                    listener = registration.listener().name(),
                    error = %error,
                    "handler failed"
                );
                errors.handle(error);
            }
        }
    }
}

impl Default for Hub {
    fn default() -> Self {
        Self::new()
    }
}

fn deliver(
    event: &EventName,
    registration: &Registration,
    args: &Args,
    errors: &Arc<dyn ErrorHandler>,
    dispatcher: &dyn AsyncDispatcher,
) -> Result<(), DispatchError> {
    let listener = registration.listener();
    let handler = event.handler();

    if !registration.is_async() {
        tracing::trace!(listener = listener.name(), handler = %handler, "calling");
        return listener.invoke(&handler, args);
    }

    tracing::trace!(listener = listener.name(), handler = %handler, "dispatching");
    let invocation = Invocation::new(
        Arc::clone(listener),
        handler.clone(),
        args.clone(),
        Arc::clone(errors),
    );

    match panic::catch_unwind(AssertUnwindSafe(|| dispatcher.dispatch(invocation))) {
        Ok(result) => result,
        Err(payload) => Err(DispatchError::Dispatcher {
            listener: listener.name().to_string(),
            handler,
            reason: format!("dispatcher panicked: {}", panic_message(payload.as_ref())),
        }),
    }
}

#[cfg(test)]
#[path = "hub_tests.rs"]
mod tests;
