use thiserror::Error;

/// Errors produced by the scoring pipeline.
///
/// Scoring is all-or-nothing per request: the first failure aborts the whole
/// batch and no partial results are reported. [`crate::score`] converts any
/// of these into the wire-level error reply instead of propagating them to
/// the host.
#[derive(Debug, Error)]
pub enum MatchError {
    /// A candidate (or a query value) cannot be scored as supplied, most
    /// commonly because the `text` field is absent or not a string.
    #[error("malformed candidate: {0}")]
    MalformedCandidate(String),
    /// Unexpected fault inside the scoring computation. The pipeline itself
    /// never raises this; hosts use it to report a scoring task that died
    /// before producing a reply.
    #[error("scoring error: {0}")]
    Scoring(String),
}
