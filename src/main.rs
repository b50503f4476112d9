// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

use clap::Parser;
use dncore::batch::{solve_all_timed, SolveOptions, Timed};
use dncore::input::{parse_cases, Exercise};

mod cli;
use cli::{display, CaseArgs, Cli};

fn main() {
    let cli = Cli::parse();
    let (exercise, args, trace) = cli.command.into_parts();
    if let Err(e) = run(exercise, &args, trace) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run(exercise: Exercise, args: &CaseArgs, trace: bool) -> Result<(), String> {
    let text = read_input(args.input.as_deref())?;
    let cases = parse_cases(exercise, &text).map_err(|e| format!("invalid input: {}", e))?;

    let options = SolveOptions {
        strict: args.strict,
        trace,
        parallel: args.parallel,
    };
    let outcomes = solve_all_timed(&cases, options);

    if args.verbose {
        for (timed, case) in outcomes.iter().zip(&cases) {
            display::case_summary(
                timed_case(timed),
                exercise,
                case.size(),
                timed.elapsed.as_secs_f64() * 1e6,
                timed.result.is_ok(),
            );
        }
    }

    if args.json {
        write_json(&outcomes)?;
    } else {
        write_lines(&outcomes)?;
    }

    let failed = outcomes.iter().filter(|t| t.result.is_err()).count();
    if failed > 0 {
        return Err(format!("{} of {} cases failed", failed, outcomes.len()));
    }
    Ok(())
}

fn timed_case(timed: &Timed) -> usize {
    match &timed.result {
        Ok(solved) => solved.case,
        Err(e) => e.case,
    }
}

/// Whole input from `path`, or stdin for `None` and `-`.
fn read_input(path: Option<&Path>) -> Result<String, String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {}", path.display(), e)),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| format!("failed to read stdin: {}", e))?;
            Ok(text)
        }
    }
}

/// One answer per line on stdout; traces and errors on stderr.
fn write_lines(outcomes: &[Timed]) -> Result<(), String> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for timed in outcomes {
        match &timed.result {
            Ok(solved) => {
                if let Some(events) = &solved.trace {
                    display::trace_box(solved.case, solved.exercise, events);
                }
                writeln!(out, "{}", solved.answer).map_err(|e| e.to_string())?;
            }
            Err(e) => eprintln!("❌ {}", e),
        }
    }
    out.flush().map_err(|e| e.to_string())
}

fn write_json(outcomes: &[Timed]) -> Result<(), String> {
    let values = outcomes
        .iter()
        .map(|timed| match &timed.result {
            Ok(solved) => serde_json::to_value(solved),
            Err(e) => Ok(serde_json::json!({ "case": e.case, "error": e.source.to_string() })),
        })
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("failed to serialize answers: {}", e))?;
    let json = serde_json::to_string_pretty(&values)
        .map_err(|e| format!("failed to serialize answers: {}", e))?;
    println!("{}", json);
    Ok(())
}
