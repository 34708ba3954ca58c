use serde_json::Value;

/// One element of the partition produced by [`JsonFinder`](crate::JsonFinder).
///
/// `start` and `end` are byte offsets into the scanned input. For a JSON
/// span, `value` holds the parsed value and the input's `start..end` range is
/// exactly the textual form of that value. For a plain-text span `value` is
/// `None` and the range contains no accepted JSON.
///
/// Within one scan, spans are contiguous: each span starts where the
/// previous one ended, the first starts at 0 and the last ends at the
/// input's length.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    /// Byte offset of the first character of the span.
    pub start: usize,
    /// Byte offset one past the last character of the span.
    pub end: usize,
    /// The parsed value for JSON spans; `None` for plain text.
    pub value: Option<Value>,
}

impl Span {
    pub(crate) fn text_span(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            value: None,
        }
    }

    pub(crate) fn json_span(start: usize, end: usize, value: Value) -> Self {
        Self {
            start,
            end,
            value: Some(value),
        }
    }

    /// Returns `true` if this span carries a parsed JSON value.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.value.is_some()
    }

    /// The slice of `source` this span covers.
    ///
    /// # Panics
    ///
    /// Panics if `source` is not the string the span was produced from (or
    /// one of the same length and character boundaries).
    #[must_use]
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        &source[self.start..self.end]
    }

    /// The length of the span in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the span covers no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
