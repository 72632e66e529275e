// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Registry configuration
//!
//! Registries can be declared in TOML, naming listeners instead of holding
//! them. Names are resolved through a `ListenerCatalog`:
//!
//! ```toml
//! [[events.took_action]]
//! listener = "Mailer"
//! async = true
//! ```

use crate::error::RegistryError;
use crate::event::EventName;
use crate::listener::Listener;
use crate::registry::{Registration, Registry};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Errors loading or resolving a registry configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("event `{event}` names unknown listener `{listener}`")]
    UnknownListener { event: EventName, listener: String },
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// One registration as written in configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistrationConfig {
    #[serde(default)]
    pub listener: Option<String>,
    #[serde(default, rename = "async")]
    pub is_async: bool,
}

/// Declarative registry: event name to ordered registrations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    #[serde(default)]
    pub events: BTreeMap<EventName, Vec<RegistrationConfig>>,
}

impl RegistryConfig {
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded registry config");
        Self::parse(&content)
    }

    /// Look up every named listener and build the registry
    pub fn resolve(&self, catalog: &ListenerCatalog) -> Result<Registry, ConfigError> {
        let mut registry = Registry::new();

        for (event, entries) in &self.events {
            for entry in entries {
                let name = entry
                    .listener
                    .as_deref()
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .ok_or_else(|| RegistryError::MissingListener {
                        event: event.clone(),
                    })?;

                let listener = catalog
                    .get(name)
                    .ok_or_else(|| ConfigError::UnknownListener {
                        event: event.clone(),
                        listener: name.to_string(),
                    })?;

                registry.add(
                    event,
                    Registration::new(Arc::clone(listener), entry.is_async),
                );
            }
        }

        Ok(registry)
    }
}

/// Listeners addressable by name from configuration
#[derive(Debug, Clone, Default)]
pub struct ListenerCatalog {
    listeners: HashMap<String, Arc<Listener>>,
}

impl ListenerCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, listener: impl Into<Arc<Listener>>) -> Self {
        self.insert(listener);
        self
    }

    /// Add a listener under its own name, replacing any with the same name
    pub fn insert(&mut self, listener: impl Into<Arc<Listener>>) {
        let listener = listener.into();
        self.listeners.insert(listener.name().to_string(), listener);
    }

    pub fn get(&self, name: &str) -> Option<&Arc<Listener>> {
        self.listeners.get(name)
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
