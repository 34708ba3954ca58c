use serde_json::Value;
use thiserror::Error;

/// Error returned by [`JsonDecoder::raw_decode`] when no JSON value starts
/// at the requested offset.
///
/// Decode errors never escape a scan: the scanner recovers by advancing one
/// character and retrying. The type is public only because the trait is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at offset {offset}")]
pub struct DecodeError {
    /// The offset the decode was attempted at.
    pub offset: usize,
    message: String,
}

impl DecodeError {
    /// Create an error for a failed decode at `offset`.
    #[must_use]
    pub fn new(offset: usize, message: impl Into<String>) -> Self {
        Self {
            offset,
            message: message.into(),
        }
    }
}

/// A JSON parser attempting to decode a single value at an exact position.
///
/// This is the one primitive the scanner needs from an underlying JSON
/// implementation. Decoding must start exactly at `offset` — leading
/// whitespace is a failure, not something to skip — and on success report
/// the byte offset immediately past the consumed text. Any JSON value type
/// may be decoded, not just objects and arrays.
pub trait JsonDecoder {
    /// Try to parse one JSON value starting at byte `offset` of `s`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] when the text at `offset` is not the start of
    /// a syntactically valid JSON value.
    ///
    /// # Panics
    ///
    /// Implementations may panic when `offset` is out of bounds or not on a
    /// character boundary; passing such an offset is a caller bug.
    fn raw_decode(&self, s: &str, offset: usize) -> Result<(Value, usize), DecodeError>;
}

/// The default decoder, backed by [`serde_json`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SerdeDecoder;

impl JsonDecoder for SerdeDecoder {
    fn raw_decode(&self, s: &str, offset: usize) -> Result<(Value, usize), DecodeError> {
        let tail = &s[offset..];
        // The stream deserializer skips leading whitespace; raw decoding
        // must not.
        if tail.starts_with([' ', '\t', '\n', '\r']) {
            return Err(DecodeError::new(offset, "expecting value"));
        }
        let mut stream = serde_json::Deserializer::from_str(tail).into_iter::<Value>();
        match stream.next() {
            Some(Ok(value)) => Ok((value, offset + stream.byte_offset())),
            Some(Err(err)) => Err(DecodeError::new(offset, err.to_string())),
            None => Err(DecodeError::new(offset, "unexpected end of input")),
        }
    }
}
