use quickcheck::QuickCheck;

use crate::{FinderOptions, JsonFinder, Span};

fn full_scan(s: &str) -> Vec<Span> {
    JsonFinder::new(s, FinderOptions::default()).collect()
}

fn json_only_scan(s: &str) -> Vec<Span> {
    JsonFinder::new(
        s,
        FinderOptions {
            json_only: true,
            ..FinderOptions::default()
        },
    )
    .collect()
}

fn is_exact_partition(s: &str, spans: &[Span]) -> bool {
    let mut expected_start = 0;
    for span in spans {
        if span.start != expected_start || span.end < span.start {
            return false;
        }
        expected_start = span.end;
    }
    spans.first().map(|span| span.start) == Some(0) && expected_start == s.len()
}

/// Property: a full scan partitions the input exactly — contiguous ordered
/// spans covering the whole string — and every JSON span's text re-parses to
/// the value it carries.
#[test]
fn partition_covers_input_quickcheck() {
    fn prop(s: String) -> bool {
        let spans = full_scan(&s);
        if !is_exact_partition(&s, &spans) {
            return false;
        }
        spans.iter().filter(|span| span.is_json()).all(|span| {
            serde_json::from_str::<serde_json::Value>(span.text(&s))
                .as_ref()
                .ok()
                == span.value.as_ref()
        })
    }

    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    QuickCheck::new()
        .tests(tests)
        .quickcheck(prop as fn(String) -> bool);
}

/// Property: the `json_only` scan is exactly the JSON subsequence of the
/// full partition, whatever text surrounds the embedded values.
#[test]
fn json_only_is_the_json_subsequence_quickcheck() {
    fn prop(prefix: String, middle: String, suffix: String) -> bool {
        let s = format!("{prefix}[1, 2]{middle}{{\"k\": true}}{suffix}");
        let expected: Vec<Span> = full_scan(&s)
            .into_iter()
            .filter(|span| span.is_json())
            .collect();
        json_only_scan(&s) == expected
    }

    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    QuickCheck::new()
        .tests(tests)
        .quickcheck(prop as fn(String, String, String) -> bool);
}
