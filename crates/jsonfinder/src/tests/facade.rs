use serde_json::json;

use crate::{FindError, has_json, only_json};

#[test]
fn has_json_finds_an_embedded_object() {
    assert!(has_json(r#"stuff {"key": "value"} things"#));
}

#[test]
fn has_json_is_false_without_json() {
    assert!(!has_json("a normal string"));
    assert!(!has_json(""));
}

#[test]
fn has_json_ignores_bare_primitives() {
    assert!(!has_json("true null 42"));
}

#[test]
fn only_json_returns_the_single_span() {
    let span = only_json(r#"prefix {"a":"b"} suffix"#).unwrap();
    assert_eq!((span.start, span.end), (7, 16));
    assert_eq!(span.value, Some(json!({"a": "b"})));
}

#[test]
fn only_json_fails_on_multiple_matches() {
    assert_eq!(only_json("{}{}"), Err(FindError::MultipleMatches));
}

#[test]
fn only_json_fails_on_no_match() {
    assert_eq!(only_json("stuff only"), Err(FindError::NoMatch));
}
