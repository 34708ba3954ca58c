//! Locate JSON objects and arrays embedded in arbitrary text.
//!
//! A scan partitions its input into alternating plain-text and JSON spans.
//! The produced [`Span`]s are contiguous and ordered: the first starts at
//! offset 0, the last ends at the input's length, and each span begins where
//! the previous one ended. Bare JSON primitives (`true`, `42`, `"x"`, `null`)
//! are never treated as matches on their own; only objects and arrays anchor
//! a candidate.
//!
//! ```rust
//! use jsonfinder::{FinderOptions, JsonFinder};
//!
//! let s = "true [1,2,3] null";
//! let spans: Vec<_> = JsonFinder::new(s, FinderOptions::default()).collect();
//!
//! assert_eq!(spans.len(), 3);
//! assert_eq!(spans[0].text(s), "true ");
//! assert_eq!(spans[1].text(s), "[1,2,3]");
//! assert_eq!(spans[2].text(s), " null");
//! assert!(spans[1].is_json());
//! ```
//!
//! The convenience functions [`has_json`] and [`only_json`] cover the two
//! most common queries, and [`counts_at_least`] provides the leaf-count test
//! typically used to reject trivial matches such as `[1]`.

mod decode;
mod elements;
mod error;
mod finder;
mod span;

#[cfg(test)]
mod tests;

pub use decode::{DecodeError, JsonDecoder, SerdeDecoder};
pub use elements::counts_at_least;
pub use error::FindError;
pub use finder::{FinderOptions, JsonFinder, ScanPredicate, has_json, only_json};
pub use span::Span;

pub use serde_json::Value;
