// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Divide-and-conquer primitives over sequences, points and digit strings.
//!
//! Each primitive is a pure function over an immutable input. It splits the
//! range, solves both halves independently, and merges the two partial
//! results with a problem-specific combine rule.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────────────────────┐     ┌─────────────┐
//! │  input.rs   │────▶│  max_gap · median · majority │────▶│  batch.rs   │
//! │ (tokens,    │     │  peak · tree · closest_pair  │     │ (solve,     │
//! │  cases)     │     │  karatsuba                   │     │  format)    │
//! └─────────────┘     └──────────────────────────────┘     └─────────────┘
//!        │                   │              │                    │
//!        ▼                   ▼              ▼                    ▼
//! ┌──────────────────────────────┐  ┌────────────────────────────────────┐
//! │          trace.rs            │  │               verify/              │
//! │  (opt-in recursion events)   │  │  types: validated input wrappers   │
//! └──────────────────────────────┘  │  contracts: debug result checks    │
//!                                   └────────────────────────────────────┘
//! ```
//!
//! # Primitives
//!
//! | Primitive                   | Module         | Time            |
//! |-----------------------------|----------------|-----------------|
//! | [`max_gap`]                 | `max_gap`      | O(n)            |
//! | [`median_of_sorted_pair`]   | `median`       | O(log n)        |
//! | [`majority`]                | `majority`     | O(n log n)      |
//! | [`find_peak`]               | `peak`         | O(log n)        |
//! | [`tree_min`]                | `tree`         | O(n) build      |
//! | [`closest_pair`]            | `closest_pair` | O(n log n)      |
//! | [`karatsuba`]               | `karatsuba`    | O(n^1.585)      |
//!
//! # Usage
//!
//! ```
//! use dncore::{find_peak, majority, max_gap, median_of_sorted_pair};
//!
//! assert_eq!(max_gap(&[7, 1, 5, 3, 6, 4]).unwrap().to_string(), "1 4");
//! assert_eq!(median_of_sorted_pair(&[1, 3], &[2, 4]), Some(2.5));
//! assert_eq!(majority(&[4, 4, 1]), Some(4));
//! assert_eq!(find_peak(&[1, 3, 20, 4, 1, 0]), Some(2));
//! ```

// Module declarations
pub mod batch;
mod closest_pair;
pub mod input;
mod karatsuba;
mod majority;
mod max_gap;
mod median;
mod peak;
pub mod testing;
pub mod trace;
mod tree;
mod types;
pub mod verify;

// Re-exports for public API
pub use closest_pair::{closest_pair, closest_pair_traced};
pub use karatsuba::{karatsuba, karatsuba_traced, Digits};
pub use majority::{majority, majority_in};
pub use max_gap::max_gap;
pub use median::median_of_sorted_pair;
pub use peak::{find_peak, slope_at, Slope};
pub use trace::{Trace, TraceEvent};
pub use tree::{tree_min, BalancedTree, Node};
pub use types::{ClosestPair, GapPair, Numeric, Point};
pub use verify::InvariantError;
