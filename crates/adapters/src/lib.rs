// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Dispatch and reporting strategies for embedding the hub

pub mod dispatch;
pub mod report;
pub mod traced;

pub use dispatch::{QueueDispatcher, TokioDispatcher};
pub use report::TracingErrorHandler;
pub use traced::TracedDispatcher;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use dispatch::{DispatchCall, FakeDispatcher};
#[cfg(any(test, feature = "test-support"))]
pub use report::{ErrorRecord, FakeErrorHandler};
