// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event and handler naming

use serde::{Deserialize, Serialize};

/// Arguments forwarded verbatim from `trigger` to each handler
pub type Args = Vec<serde_json::Value>;

/// Prefix joined to an event name to form its handler name
pub const HANDLER_PREFIX: &str = "handle_";

/// Name of an event, e.g. `took_action`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventName(pub String);

impl EventName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Handler a listener must expose to receive this event
    pub fn handler(&self) -> HandlerName {
        HandlerName::for_event(self)
    }
}

impl std::fmt::Display for EventName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for EventName {
    fn from(s: String) -> Self {
        EventName(s)
    }
}

impl From<&str> for EventName {
    fn from(s: &str) -> Self {
        EventName(s.to_string())
    }
}

impl From<&EventName> for EventName {
    fn from(name: &EventName) -> Self {
        name.clone()
    }
}

/// Name of the handler invoked for an event: `handle_<event>`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandlerName(String);

impl HandlerName {
    pub fn for_event(event: &EventName) -> Self {
        Self(format!("{}{}", HANDLER_PREFIX, event.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for HandlerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
