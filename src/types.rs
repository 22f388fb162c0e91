use serde::{Deserialize, Serialize};

/// One snippet submitted for scoring.
///
/// Only `text` participates in matching; `filename`, `timestamp`, and
/// `similarity` are opaque caller data echoed back on every hit. `text` is
/// optional at the serde level so that a candidate missing it deserializes
/// cleanly and then fails the batch with a proper error instead of a parse
/// rejection that names the wrong field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Candidate {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub timestamp: String,
    /// Externally computed similarity, passed through unchanged.
    #[serde(default)]
    pub similarity: f64,
}

impl Candidate {
    /// Convenience constructor used by tests and embedding hosts.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            filename: String::new(),
            timestamp: String::new(),
            similarity: 0.0,
        }
    }
}

/// A single scoring request.
///
/// `query_words` follow the caller's tokenization convention (already
/// lower-cased, split on whitespace); word order does not affect which
/// candidates are returned, only how overlapping words consume text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchRequest {
    pub candidates: Vec<Candidate>,
    #[serde(rename = "queryWords")]
    pub query_words: Vec<String>,
    /// Inclusive minimum match ratio in percent. Absent means 0 (keep all).
    #[serde(rename = "minRatio", default)]
    pub min_ratio: f64,
}

/// Per-candidate scoring outcome; derived, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub candidate: Candidate,
    /// Percentage of query characters matched, always in `[0.0, 100.0]`.
    pub match_ratio: f64,
    /// Loose containment flag: every query word occurs somewhere in the
    /// text, ignoring the non-overlap accounting. Tie-break signal only.
    pub exact_match: bool,
}


/// Literal status tag carried by nested reply records.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    #[default]
    Success,
    Error,
}

/// One ranked hit as reported to the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResultRecord {
    pub filename: String,
    pub timestamp: String,
    pub similarity: f64,
    pub text: String,
    pub match_ratio: f64,
    pub exact_match: bool,
}

/// Structured "nothing cleared the threshold" record.
///
/// Shaped like a nested reply on purpose: the outer envelope stays uniform
/// with the populated case and callers branch on `data[0].count == 0`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NoMatchDiagnostic {
    pub status: ResponseStatus,
    pub data: Vec<ResultRecord>,
    pub count: usize,
    pub folder: String,
    pub max_results: String,
    pub message: String,
    pub suggestions: Vec<String>,
}

/// Entry in a successful reply: either a ranked hit or the single
/// no-match diagnostic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ResultEntry {
    Hit(ResultRecord),
    Diagnostic(NoMatchDiagnostic),
}

/// Reply envelope for one request. Exactly one is produced per request,
/// including the failure case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SearchResponse {
    /// Ranked hits, or the single diagnostic wrapper when nothing matched.
    Success { data: Vec<ResultEntry>, count: usize },
    /// Whole-batch failure; `data` is always empty and `count` zero.
    Error {
        message: String,
        data: Vec<ResultRecord>,
        count: usize,
        suggestions: Vec<String>,
    },
}

impl SearchResponse {
    /// Number of entries in the reply body.
    pub fn count(&self) -> usize {
        match self {
            SearchResponse::Success { count, .. } => *count,
            SearchResponse::Error { count, .. } => *count,
        }
    }

    /// True for either success shape, including the diagnostic wrapper.
    pub fn is_success(&self) -> bool {
        matches!(self, SearchResponse::Success { .. })
    }
}
