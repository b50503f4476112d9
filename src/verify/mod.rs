// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: boundary wrappers and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Type-level wrappers** (`SortedSequence`, `PeakSequence`, ...) that
//!    check a solver's input preconditions once, at construction. If you hold
//!    one, the precondition holds.
//!
//! 2. **Runtime contracts** that panic in debug builds when a solver returns
//!    an answer violating its own postcondition. Zero-cost in release, but
//!    catch algorithmic errors when tests run.
//!
//! The solvers never validate their input themselves; malformed input gives
//! a meaningless answer, not an error. Validation is the caller's choice.

mod types;
pub mod contracts;

pub use types::*;
