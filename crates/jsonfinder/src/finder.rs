use core::fmt;

use serde_json::Value;

use crate::{
    decode::{JsonDecoder, SerdeDecoder},
    error::FindError,
    span::Span,
};

/// Acceptance test applied to structurally valid candidates.
///
/// Called with the candidate's start and end byte offsets and its parsed
/// value; returning `false` demotes the candidate back to plain text. The
/// predicate may be called for several candidates per scan and must be
/// deterministic within one scan.
pub type ScanPredicate<'p> = Box<dyn FnMut(usize, usize, &Value) -> bool + 'p>;

/// Configuration options for a [`JsonFinder`] scan.
///
/// # Examples
///
/// ```rust
/// use jsonfinder::{FinderOptions, JsonFinder};
///
/// let options = FinderOptions {
///     json_only: true,
///     ..FinderOptions::default()
/// };
/// let matches: Vec<_> = JsonFinder::new("a {} b [] c", options).collect();
/// assert_eq!(matches.len(), 2);
/// ```
///
/// # Default
///
/// Full partition output, with no predicate.
#[derive(Default)]
pub struct FinderOptions<'p> {
    /// Suppress plain-text spans, yielding only JSON spans.
    ///
    /// When `false`, the scan partitions the whole input: it begins and ends
    /// with a plain-text span (possibly empty), and plain-text and JSON
    /// spans alternate in between.
    ///
    /// # Default
    ///
    /// `false`
    pub json_only: bool,

    /// Optional acceptance test for structurally valid candidates.
    ///
    /// A candidate rejected by the predicate is not emitted; its text is
    /// absorbed into the surrounding plain text, and the search resumes one
    /// character past the candidate's start, so JSON nested inside a
    /// rejected region can still be found.
    ///
    /// # Default
    ///
    /// `None`
    pub predicate: Option<ScanPredicate<'p>>,
}

impl fmt::Debug for FinderOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FinderOptions")
            .field("json_only", &self.json_only)
            .field("predicate", &self.predicate.is_some())
            .finish()
    }
}

/// An iterator partitioning an input string into plain-text and JSON spans.
///
/// The scan walks the input looking for `{` or `[` (whichever comes first),
/// attempts to decode a JSON value there, and on failure advances a single
/// character and retries. Successful decodes that pass the configured
/// predicate are emitted as JSON spans; everything else ends up inside
/// plain-text spans. Bare primitives are never candidates.
///
/// The sequence is produced lazily; consumers may stop pulling at any point
/// (as [`has_json`] does) without side effects.
pub struct JsonFinder<'s, 'p, D = SerdeDecoder> {
    input: &'s str,
    decoder: D,
    options: FinderOptions<'p>,
    string_start: usize,
    find_start: usize,
    pending: Option<Span>,
    done: bool,
}

impl<'s, 'p> JsonFinder<'s, 'p> {
    /// Scan `input` with the default [`SerdeDecoder`].
    #[must_use]
    pub fn new(input: &'s str, options: FinderOptions<'p>) -> Self {
        Self::with_decoder(input, SerdeDecoder, options)
    }
}

impl<'s, 'p, D: JsonDecoder> JsonFinder<'s, 'p, D> {
    /// Scan `input` with an explicit decoder.
    ///
    /// Each scan owns its decoder and cursor state, so independent scans
    /// never share anything.
    #[must_use]
    pub fn with_decoder(input: &'s str, decoder: D, options: FinderOptions<'p>) -> Self {
        Self {
            input,
            decoder,
            options,
            string_start: 0,
            find_start: 0,
            pending: None,
            done: false,
        }
    }

    /// Offset of the next `{` or `[` at or after the search cursor.
    fn next_candidate(&self) -> Option<usize> {
        self.input[self.find_start..]
            .find(['{', '['])
            .map(|rel| self.find_start + rel)
    }
}

impl<D: JsonDecoder> Iterator for JsonFinder<'_, '_, D> {
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        if let Some(span) = self.pending.take() {
            return Some(span);
        }
        if self.done {
            return None;
        }
        loop {
            let Some(json_start) = self.next_candidate() else {
                // No further candidates: the remainder is plain text.
                self.done = true;
                if self.options.json_only {
                    return None;
                }
                return Some(Span::text_span(self.string_start, self.input.len()));
            };
            let Ok((value, end)) = self.decoder.raw_decode(self.input, json_start) else {
                // False positive. Step one character past the opening
                // bracket and retry, so a value starting inside the failed
                // region is still found.
                self.find_start = json_start + 1;
                continue;
            };
            if let Some(predicate) = self.options.predicate.as_mut() {
                if !predicate(json_start, end, &value) {
                    // Rejected candidates behave exactly like decode
                    // failures; their text is absorbed into the surrounding
                    // plain text because the string cursor never moved.
                    self.find_start = json_start + 1;
                    continue;
                }
            }
            let text_start = self.string_start;
            self.string_start = end;
            self.find_start = end;
            let json = Span::json_span(json_start, end, value);
            if self.options.json_only {
                return Some(json);
            }
            self.pending = Some(json);
            return Some(Span::text_span(text_start, json_start));
        }
    }
}

impl<D: JsonDecoder> core::iter::FusedIterator for JsonFinder<'_, '_, D> {}

fn json_only_scan(s: &str) -> JsonFinder<'_, 'static> {
    JsonFinder::new(
        s,
        FinderOptions {
            json_only: true,
            ..FinderOptions::default()
        },
    )
}

/// Returns whether `s` contains at least one JSON object or array.
///
/// Stops scanning at the first match.
///
/// ```rust
/// use jsonfinder::has_json;
///
/// assert!(has_json(r#"stuff {"key": "value"} things"#));
/// assert!(!has_json("stuff only"));
/// ```
#[must_use]
pub fn has_json(s: &str) -> bool {
    json_only_scan(s).next().is_some()
}

/// Returns the single JSON span in `s`, failing when there are zero or more
/// than one.
///
/// ```rust
/// use jsonfinder::{FindError, only_json};
///
/// let span = only_json(r#"prefix {"a":"b"} suffix"#).unwrap();
/// assert_eq!((span.start, span.end), (7, 16));
/// assert_eq!(only_json("{}{}"), Err(FindError::MultipleMatches));
/// assert_eq!(only_json("stuff only"), Err(FindError::NoMatch));
/// ```
///
/// # Errors
///
/// [`FindError::NoMatch`] when the input contains no JSON object or array;
/// [`FindError::MultipleMatches`] when it contains more than one.
pub fn only_json(s: &str) -> Result<Span, FindError> {
    let mut finder = json_only_scan(s);
    let first = finder.next().ok_or(FindError::NoMatch)?;
    if finder.next().is_some() {
        return Err(FindError::MultipleMatches);
    }
    Ok(first)
}
