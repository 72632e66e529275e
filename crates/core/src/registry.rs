// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Registrations and the event registry

use crate::error::RegistryError;
use crate::event::EventName;
use crate::listener::Listener;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Binding of one listener to one event
#[derive(Debug, Clone)]
pub struct Registration {
    listener: Arc<Listener>,
    is_async: bool,
}

impl Registration {
    pub fn new(listener: impl Into<Arc<Listener>>, is_async: bool) -> Self {
        Self {
            listener: listener.into(),
            is_async,
        }
    }

    /// Handler runs on the triggering thread
    pub fn sync(listener: impl Into<Arc<Listener>>) -> Self {
        Self::new(listener, false)
    }

    /// Handler runs through the hub's async dispatcher
    pub fn asynchronous(listener: impl Into<Arc<Listener>>) -> Self {
        Self::new(listener, true)
    }

    pub fn listener(&self) -> &Arc<Listener> {
        &self.listener
    }

    pub fn is_async(&self) -> bool {
        self.is_async
    }
}

/// Event name to ordered registrations.
///
/// Order within an event is invocation order.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    events: BTreeMap<EventName, Vec<Registration>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a registration for `event`
    pub fn on(mut self, event: impl Into<EventName>, registration: Registration) -> Self {
        self.add(event, registration);
        self
    }

    pub fn add(&mut self, event: impl Into<EventName>, registration: Registration) {
        self.events
            .entry(event.into())
            .or_default()
            .push(registration);
    }

    /// Registrations for an event, empty if none
    pub fn registrations(&self, event: &EventName) -> &[Registration] {
        self.events.get(event).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn events(&self) -> impl Iterator<Item = &EventName> {
        self.events.keys()
    }

    /// Number of registered events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Check every registration before the registry may be installed
    pub fn validate(&self) -> Result<(), RegistryError> {
        for (event, registrations) in &self.events {
            if event.is_empty() {
                return Err(RegistryError::EmptyEventName);
            }

            let handler = event.handler();
            for registration in registrations {
                let listener = registration.listener();
                if listener.name().trim().is_empty() {
                    return Err(RegistryError::MissingListener {
                        event: event.clone(),
                    });
                }
                if !listener.responds_to(&handler) {
                    return Err(RegistryError::MissingHandler {
                        event: event.clone(),
                        listener: listener.name().to_string(),
                        handler,
                    });
                }
            }
        }
        Ok(())
    }
}

impl FromIterator<(EventName, Vec<Registration>)> for Registry {
    fn from_iter<T: IntoIterator<Item = (EventName, Vec<Registration>)>>(iter: T) -> Self {
        let mut registry = Registry::new();
        for (event, registrations) in iter {
            registry
                .events
                .entry(event)
                .or_default()
                .extend(registrations);
        }
        registry
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
