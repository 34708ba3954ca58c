use thiserror::Error;

/// Failure modes of [`only_json`](crate::only_json).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FindError {
    /// The input contained no JSON object or array.
    #[error("no JSON object found in argument")]
    NoMatch,
    /// The input contained more than one JSON object or array.
    #[error("more than one JSON object found in the argument")]
    MultipleMatches,
}
