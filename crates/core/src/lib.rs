// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! pubsub-core: in-process publish/subscribe hub
//!
//! This crate provides:
//! - `Hub` - registry of listeners per event with ordered, isolated dispatch
//! - `Listener` - named target with typed handlers keyed `handle_<event>`
//! - `AsyncDispatcher` / `ErrorHandler` - pluggable execution and reporting
//! - `RegistryConfig` - TOML registries resolved through a `ListenerCatalog`

pub mod config;
pub mod error;
pub mod event;
pub mod hub;
pub mod listener;
pub mod registry;
pub mod strategy;

// Re-exports
pub use config::{ConfigError, ListenerCatalog, RegistrationConfig, RegistryConfig};
pub use error::{DispatchError, HandlerError, HandlerResult, RegistryError};
pub use event::{Args, EventName, HandlerName};
pub use hub::Hub;
pub use listener::Listener;
pub use registry::{Registration, Registry};
pub use strategy::{
    AsyncDispatcher, ErrorHandler, InlineDispatcher, Invocation, StderrErrorHandler,
};
