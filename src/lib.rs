//! Fuzzy multi-word snippet matching and ranking.
//!
//! # Purpose
//!
//! `snipmatch` scores a batch of text snippets against a word-split query,
//! filters the batch by a minimum match ratio, orders what survives, and
//! shapes the reply envelope the caller renders. Matching is greedy and
//! non-overlapping: each query word claims the first free occurrence of
//! itself in the snippet, and characters claimed by one word are never
//! counted again for another.
//!
//! # Pipeline
//!
//! One request flows through three stages, each pure and stateless across
//! requests:
//!
//! 1. [`scoring`] runs every candidate through the word placement of the
//!    matching layer and produces a match ratio plus an exact-match flag.
//! 2. [`rank`] applies the inclusive threshold and the best-first ordering.
//! 3. [`response`] shapes the success, no-match diagnostic, or failure
//!    envelope.
//!
//! [`score`] composes the stages; [`score_value`] is the same boundary for
//! hosts that hold untrusted JSON instead of typed requests. The
//! `_with_config` variants take an explicit [`EngineConfig`] instead of the
//! defaults.
//!
//! # Example Usage
//!
//! ```
//! use snipmatch::{score, Candidate, SearchRequest};
//!
//! let request = SearchRequest {
//!     candidates: vec![Candidate::new("hello world foo")],
//!     query_words: vec!["hello".into(), "foo".into()],
//!     min_ratio: 50.0,
//! };
//!
//! let reply = score(&request);
//! assert!(reply.is_success());
//! assert_eq!(reply.count(), 1);
//! ```
//!
//! # Observability
//!
//! The engine emits `tracing` debug events per batch (candidate count,
//! query size, outcome) and nothing per candidate. Subscriber setup belongs
//! to the host; the library never installs one.

pub mod config;
pub mod error;
pub(crate) mod matching;
pub mod rank;
pub mod response;
pub mod scoring;
pub mod types;

pub use config::EngineConfig;
pub use error::MatchError;
pub use scoring::{lcs_ratio, score_candidate};
pub use types::{
    Candidate, NoMatchDiagnostic, ResponseStatus, ResultEntry, ResultRecord, ScoredCandidate,
    SearchRequest, SearchResponse,
};

/// Score one request with the default [`EngineConfig`].
///
/// Never fails outward: malformed candidates and scoring faults come back
/// as the error envelope, not as `Err`. Exactly one reply per request.
pub fn score(request: &SearchRequest) -> SearchResponse {
    score_with_config(request, &EngineConfig::default())
}

/// Score one request with an explicit [`EngineConfig`].
pub fn score_with_config(request: &SearchRequest, cfg: &EngineConfig) -> SearchResponse {
    tracing::debug!(
        candidates = request.candidates.len(),
        query_words = request.query_words.len(),
        min_ratio = request.min_ratio,
        "scoring batch"
    );

    match score_batch(&request.query_words, &request.candidates, cfg) {
        Ok(scored) => {
            let ranked = rank::rank(scored, request.min_ratio);
            tracing::debug!(hits = ranked.len(), "batch scored");
            response::build(ranked, &request.query_words, request.min_ratio)
        }
        Err(err) => {
            tracing::debug!(error = %err, "batch failed");
            response::failure(&err)
        }
    }
}

/// Score an untyped JSON request with the default [`EngineConfig`].
///
/// Deserialization failures become the wire-level error envelope, so hosts
/// can hand over untrusted payloads without pre-validating them.
pub fn score_value(value: serde_json::Value) -> SearchResponse {
    score_value_with_config(value, &EngineConfig::default())
}

/// Score an untyped JSON request with an explicit [`EngineConfig`].
pub fn score_value_with_config(value: serde_json::Value, cfg: &EngineConfig) -> SearchResponse {
    match serde_json::from_value::<SearchRequest>(value) {
        Ok(request) => score_with_config(&request, cfg),
        Err(err) => response::failure(&MatchError::MalformedCandidate(err.to_string())),
    }
}

/// Score every candidate, failing the whole batch on the first error.
fn score_batch(
    query_words: &[String],
    candidates: &[Candidate],
    cfg: &EngineConfig,
) -> Result<Vec<ScoredCandidate>, MatchError> {
    #[cfg(feature = "parallel")]
    if candidates.len() >= cfg.parallel_threshold {
        use rayon::prelude::*;
        return candidates
            .par_iter()
            .map(|candidate| scoring::score_candidate(query_words, candidate))
            .collect();
    }

    #[cfg(not(feature = "parallel"))]
    let _ = cfg;
    candidates
        .iter()
        .map(|candidate| scoring::score_candidate(query_words, candidate))
        .collect()
}
