// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Opt-in recording of recursion events.
//!
//! Solvers take a `&mut Trace` and call [`Trace::record`] at every step worth
//! seeing. A disabled trace drops events before constructing them, so the
//! untraced path pays one branch per call site and nothing else.

use serde::Serialize;

/// One step of a divide-and-conquer run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum TraceEvent {
    /// Entered a recursive call over `size` elements.
    Enter { depth: usize, size: usize },
    /// Karatsuba call on two operands.
    Call { depth: usize, x: String, y: String },
    /// Operands split at `m` low digits.
    Split {
        depth: usize,
        high_x: String,
        low_x: String,
        high_y: String,
        low_y: String,
        m: usize,
    },
    /// Base case solved directly.
    Base { depth: usize, x: String, y: String, product: String },
    /// Two points measured against each other.
    Compare { depth: usize, a: usize, b: usize },
    /// Best pair improved.
    Best { depth: usize, distance: f64, a: usize, b: usize },
    /// Both halves solved; merging across `mid_x` with current best.
    MergeStart { depth: usize, mid_x: f64, distance: f64 },
    /// Points within the merge strip.
    Strip { depth: usize, size: usize },
    /// Merge finished.
    MergeEnd { depth: usize, distance: f64 },
    /// Karatsuba combine `z2·10^(2m) + (z1 − z2 − z0)·10^m + z0`.
    Combine {
        depth: usize,
        z0: String,
        z1: String,
        z2: String,
        m: usize,
        result: String,
    },
    /// Left a recursive call.
    Exit { depth: usize, distance: f64 },
}

impl TraceEvent {
    pub fn depth(&self) -> usize {
        match self {
            TraceEvent::Enter { depth, .. }
            | TraceEvent::Call { depth, .. }
            | TraceEvent::Split { depth, .. }
            | TraceEvent::Base { depth, .. }
            | TraceEvent::Compare { depth, .. }
            | TraceEvent::Best { depth, .. }
            | TraceEvent::MergeStart { depth, .. }
            | TraceEvent::Strip { depth, .. }
            | TraceEvent::MergeEnd { depth, .. }
            | TraceEvent::Combine { depth, .. }
            | TraceEvent::Exit { depth, .. } => *depth,
        }
    }

    /// Short kind label, matching the serialized `type` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            TraceEvent::Enter { .. } => "enter",
            TraceEvent::Call { .. } => "call",
            TraceEvent::Split { .. } => "split",
            TraceEvent::Base { .. } => "base",
            TraceEvent::Compare { .. } => "compare",
            TraceEvent::Best { .. } => "best",
            TraceEvent::MergeStart { .. } => "merge-start",
            TraceEvent::Strip { .. } => "strip",
            TraceEvent::MergeEnd { .. } => "merge-end",
            TraceEvent::Combine { .. } => "combine",
            TraceEvent::Exit { .. } => "exit",
        }
    }

    /// One-line human description, without indentation.
    pub fn describe(&self) -> String {
        match self {
            TraceEvent::Enter { size, .. } => format!("enter n={}", size),
            TraceEvent::Call { x, y, .. } => format!("karatsuba({}, {})", x, y),
            TraceEvent::Split {
                high_x,
                low_x,
                high_y,
                low_y,
                m,
                ..
            } => format!("split x={}|{} y={}|{} (m={})", high_x, low_x, high_y, low_y, m),
            TraceEvent::Base { x, y, product, .. } => {
                format!("base {} * {} = {}", x, y, product)
            }
            TraceEvent::Compare { a, b, .. } => format!("compare {} - {}", a, b),
            TraceEvent::Best { distance, .. } => format!("best updated d={:.2}", distance),
            TraceEvent::MergeStart { mid_x, .. } => format!("merge start (midx={})", mid_x),
            TraceEvent::Strip { size, .. } => format!("strip size={}", size),
            TraceEvent::MergeEnd { distance, .. } => format!("merge end d={:.2}", distance),
            TraceEvent::Combine {
                z0, z1, z2, m, result, ..
            } => format!(
                "combine {} * 10^{} + ({} - {} - {}) * 10^{} + {} = {}",
                z2,
                2 * m,
                z1,
                z2,
                z0,
                m,
                z0,
                result
            ),
            TraceEvent::Exit { distance, .. } => format!("exit d={:.2}", distance),
        }
    }
}

/// Ordered event log. Disabled traces record nothing.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Trace {
    #[serde(skip)]
    enabled: bool,
    events: Vec<TraceEvent>,
}

impl Trace {
    /// A trace that records every event.
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            events: Vec::new(),
        }
    }

    /// A trace that records nothing.
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record the event built by `make`, if enabled.
    #[inline]
    pub fn record(&mut self, make: impl FnOnce() -> TraceEvent) {
        if self.enabled {
            self.events.push(make());
        }
    }

    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn into_events(self) -> Vec<TraceEvent> {
        self.events
    }
}
