// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the dncore command-line interface.
//!
//! One subcommand per exercise. Each reads a multi-case input from a file or
//! stdin and prints one answer line per case. The closest-pair and karatsuba
//! solvers can also print their recursion trace.

pub mod display;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use dncore::input::Exercise;

#[derive(Parser)]
#[command(
    name = "dncore",
    about = "Divide-and-conquer solvers over sequences, points and digits",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Flags shared by every exercise.
#[derive(Args, Debug, Clone)]
pub struct CaseArgs {
    /// Read cases from FILE instead of stdin
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Print answers as a JSON array instead of one line per case
    #[arg(long)]
    pub json: bool,

    /// Validate preconditions (sortedness, lengths, distinct neighbours)
    /// and report violations instead of solving
    #[arg(long)]
    pub strict: bool,

    /// Print per-case timing and sizes to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Solve cases in parallel (output order is unchanged)
    #[arg(long)]
    pub parallel: bool,
}

/// Flags for solvers that can record a recursion trace.
#[derive(Args, Debug, Clone)]
pub struct TracedArgs {
    #[command(flatten)]
    pub common: CaseArgs,

    /// Print the recursion trace of every case (stderr, or inline with --json)
    #[arg(long)]
    pub trace: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Best buy/sell index pair: `n v1 … vn` per case
    MaxGap(CaseArgs),

    /// Median of two sorted sequences: `n a1 … an b1 … bn` per case
    Median(CaseArgs),

    /// Strict majority value or NO: `n v1 … vn` per case
    Majority(CaseArgs),

    /// Index of a strict local peak or -1: `n v1 … vn` per case
    Peak(CaseArgs),

    /// Minimum via balanced-tree descent: `n v1 … vn` (floats) per case
    TreeMin(CaseArgs),

    /// Closest pair of points: `n x1 y1 … xn yn` per case
    ClosestPair(TracedArgs),

    /// Product of two decimal integers: `x y` per case
    Karatsuba(TracedArgs),
}

impl Commands {
    /// Exercise, shared flags and whether tracing was requested.
    pub fn into_parts(self) -> (Exercise, CaseArgs, bool) {
        match self {
            Commands::MaxGap(args) => (Exercise::MaxGap, args, false),
            Commands::Median(args) => (Exercise::Median, args, false),
            Commands::Majority(args) => (Exercise::Majority, args, false),
            Commands::Peak(args) => (Exercise::Peak, args, false),
            Commands::TreeMin(args) => (Exercise::TreeMin, args, false),
            Commands::ClosestPair(args) => (Exercise::ClosestPair, args.common, args.trace),
            Commands::Karatsuba(args) => (Exercise::Karatsuba, args.common, args.trace),
        }
    }
}
