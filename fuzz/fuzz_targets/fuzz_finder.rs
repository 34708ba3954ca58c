#![no_main]
use jsonfinder::{FinderOptions, JsonFinder};
use libfuzzer_sys::fuzz_target;

// The scan must partition any input exactly: contiguous ordered spans
// covering the whole string, every JSON span re-parsing to its value, and
// the json_only scan equal to the JSON subsequence of the full scan.
fuzz_target!(|data: &str| {
    let spans: Vec<_> = JsonFinder::new(data, FinderOptions::default()).collect();

    let mut cursor = 0;
    for span in &spans {
        assert_eq!(span.start, cursor);
        assert!(span.end >= span.start);
        cursor = span.end;
        if let Some(value) = &span.value {
            let reparsed: serde_json::Value =
                serde_json::from_str(span.text(data)).expect("JSON span must re-parse");
            assert_eq!(&reparsed, value);
        }
    }
    assert_eq!(cursor, data.len());
    assert_eq!(spans.first().map(|span| span.start), Some(0));

    let json_only: Vec<_> = JsonFinder::new(
        data,
        FinderOptions {
            json_only: true,
            ..FinderOptions::default()
        },
    )
    .collect();
    let expected: Vec<_> = spans.into_iter().filter(|span| span.value.is_some()).collect();
    assert_eq!(json_only, expected);
});
