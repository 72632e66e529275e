// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Async dispatchers that actually defer handler execution

mod queue;
mod runtime;

pub use queue::QueueDispatcher;
pub use runtime::TokioDispatcher;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{DispatchCall, FakeDispatcher};
