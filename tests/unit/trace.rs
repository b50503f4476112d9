//! Recursion trace recording and serialization.

use dncore::{closest_pair_traced, karatsuba, karatsuba_traced, Point, Trace, TraceEvent};

#[test]
fn test_disabled_trace_records_nothing() {
    let mut trace = Trace::disabled();
    karatsuba_traced("123456", "654321", &mut trace).unwrap();
    assert!(trace.is_empty());
}

#[test]
fn test_karatsuba_trace_depths_nest() {
    let mut trace = Trace::enabled();
    let product = karatsuba_traced("12345678", "87654321", &mut trace).unwrap();
    assert_eq!(product, karatsuba("12345678", "87654321").unwrap());

    let events = trace.events();
    assert_eq!(events[0].depth(), 0);
    // Depth grows by at most one between consecutive events.
    for pair in events.windows(2) {
        assert!(pair[1].depth() <= pair[0].depth() + 1);
    }
    // Every split is eventually followed by a combine at the same depth.
    let splits = events.iter().filter(|e| e.kind() == "split").count();
    let combines = events.iter().filter(|e| e.kind() == "combine").count();
    assert_eq!(splits, combines);
}

#[test]
fn test_closest_pair_trace_reports_best_updates() {
    let points: Vec<Point> = (0..10)
        .map(|i| Point::new(f64::from(i) * 3.0, f64::from(i % 3)))
        .collect();
    let mut trace = Trace::enabled();
    let best = closest_pair_traced(&points, &mut trace).unwrap();
    let smallest_best = trace
        .events()
        .iter()
        .filter_map(|e| match e {
            TraceEvent::Best { distance, .. } => Some(*distance),
            _ => None,
        })
        .fold(f64::INFINITY, f64::min);
    // Every improvement is recorded, including the final one.
    assert_eq!(smallest_best, best.distance);
}

#[test]
fn test_trace_serializes_as_tagged_json() {
    let mut trace = Trace::enabled();
    karatsuba_traced("7", "8", &mut trace).unwrap();
    let json = serde_json::to_value(trace.events()).unwrap();
    assert_eq!(json[0]["type"], "call");
    assert_eq!(json[1]["type"], "base");
    assert_eq!(json[1]["product"], "56");
}
