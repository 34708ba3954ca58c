use serde_json::Value;

/// Returns whether `value` has at least `threshold` leaf elements.
///
/// The value is viewed as a tree: arrays contribute each element, objects
/// contribute each value (keys are not counted), and every non-container
/// value is one leaf. Empty containers contribute nothing. Traversal stops
/// as soon as the threshold is reached.
///
/// This is the usual acceptance test for suppressing trivial matches such as
/// `[1]` during a scan.
///
/// ```rust
/// use jsonfinder::counts_at_least;
/// use serde_json::json;
///
/// let v = json!({"a": [1, 2], "b": null});
/// assert!(counts_at_least(&v, 3));
/// assert!(!counts_at_least(&v, 4));
/// ```
#[must_use]
pub fn counts_at_least(value: &Value, threshold: usize) -> bool {
    if threshold == 0 {
        return true;
    }
    let mut remaining = threshold;
    // Explicit stack: inputs may nest deeper than the call stack allows.
    let mut stack = vec![value];
    while let Some(v) = stack.pop() {
        match v {
            Value::Array(items) => stack.extend(items),
            Value::Object(map) => stack.extend(map.values()),
            _ => {
                remaining -= 1;
                if remaining == 0 {
                    return true;
                }
            }
        }
    }
    false
}
