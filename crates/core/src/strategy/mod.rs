// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pluggable strategies used by the hub
//!
//! The hub never decides how an `async` registration actually executes or
//! where a failed handler gets reported. Both concerns are capabilities the
//! embedding application supplies:
//! - `AsyncDispatcher` - executes an `Invocation` for `async` registrations
//! - `ErrorHandler` - receives every `DispatchError` raised during `trigger`
//!
//! Defaults keep everything on the calling thread: `InlineDispatcher` calls
//! the handler directly and `StderrErrorHandler` prints the error.

mod dispatcher;
mod error_handler;

pub use dispatcher::{AsyncDispatcher, InlineDispatcher, Invocation};
pub use error_handler::{ErrorHandler, StderrErrorHandler};

#[cfg(test)]
#[path = "strategy_tests.rs"]
mod tests;
