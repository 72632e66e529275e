// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for registration and dispatch

use crate::event::{EventName, HandlerName};
use thiserror::Error;

/// Error a handler closure may return
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result a handler closure returns
pub type HandlerResult = Result<(), HandlerError>;

/// Rejected registry. Raised by `register` before anything is installed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("event name must not be empty")]
    EmptyEventName,
    #[error("registration for event `{event}` has no listener")]
    MissingListener { event: EventName },
    #[error("listener `{listener}` registered for `{event}` does not respond to `{handler}`")]
    MissingHandler {
        event: EventName,
        listener: String,
        handler: HandlerName,
    },
}

impl RegistryError {
    /// Event whose registration was rejected
    pub fn event(&self) -> Option<&EventName> {
        match self {
            RegistryError::EmptyEventName => None,
            RegistryError::MissingListener { event } | RegistryError::MissingHandler { event, .. } => {
                Some(event)
            }
        }
    }
}

/// Failure while delivering an event to one listener.
///
/// Never returned from `trigger`; always routed to the hub's error handler.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("{listener}.{handler} failed: {source}")]
    Handler {
        listener: String,
        handler: HandlerName,
        #[source]
        source: HandlerError,
    },
    #[error("{listener}.{handler} panicked: {message}")]
    Panicked {
        listener: String,
        handler: HandlerName,
        message: String,
    },
    #[error("{listener} does not respond to {handler}")]
    NoHandler {
        listener: String,
        handler: HandlerName,
    },
    #[error("async dispatch of {listener}.{handler} failed: {reason}")]
    Dispatcher {
        listener: String,
        handler: HandlerName,
        reason: String,
    },
}

impl DispatchError {
    pub fn listener(&self) -> &str {
        match self {
            DispatchError::Handler { listener, .. }
            | DispatchError::Panicked { listener, .. }
            | DispatchError::NoHandler { listener, .. }
            | DispatchError::Dispatcher { listener, .. } => listener,
        }
    }

    pub fn handler(&self) -> &HandlerName {
        match self {
            DispatchError::Handler { handler, .. }
            | DispatchError::Panicked { handler, .. }
            | DispatchError::NoHandler { handler, .. }
            | DispatchError::Dispatcher { handler, .. } => handler,
        }
    }
}
