//! Reply shaping: ranked hits, the no-match diagnostic, and the failure
//! envelope.
//!
//! The strings produced here are part of the caller-facing contract and are
//! matched verbatim by downstream UI code; change them only with a contract
//! version bump.

use crate::error::MatchError;
use crate::types::{
    NoMatchDiagnostic, ResponseStatus, ResultEntry, ResultRecord, ScoredCandidate, SearchResponse,
};

/// Collection label reported in the no-match diagnostic.
pub const RESULT_FOLDER: &str = "subtitle";
/// Result-cap label reported in the no-match diagnostic.
pub const MAX_RESULTS_LABEL: &str = "unlimited";

const RETRY_SUGGESTION: &str = "Please try again";
const FALLBACK_FAILURE_MESSAGE: &str = "Error occurred during search processing";

/// Shape the reply for a ranked (possibly empty) result set.
pub fn build(
    ranked: Vec<ScoredCandidate>,
    query_words: &[String],
    min_ratio: f64,
) -> SearchResponse {
    if ranked.is_empty() {
        return no_match(query_words, min_ratio);
    }

    let data: Vec<ResultEntry> = ranked
        .into_iter()
        .map(|scored| ResultEntry::Hit(hit_record(scored)))
        .collect();
    let count = data.len();
    SearchResponse::Success { data, count }
}

/// Shape the reply for a failed batch. Carries the failure's display text,
/// falling back to a generic message rather than an empty one.
pub fn failure(err: &MatchError) -> SearchResponse {
    let mut message = err.to_string();
    if message.is_empty() {
        message = FALLBACK_FAILURE_MESSAGE.to_string();
    }
    SearchResponse::Error {
        message,
        data: Vec::new(),
        count: 0,
        suggestions: vec![RETRY_SUGGESTION.to_string()],
    }
}

fn hit_record(scored: ScoredCandidate) -> ResultRecord {
    let ScoredCandidate {
        candidate,
        match_ratio,
        exact_match,
    } = scored;
    ResultRecord {
        filename: candidate.filename,
        timestamp: candidate.timestamp,
        similarity: candidate.similarity,
        text: candidate.text.unwrap_or_default(),
        match_ratio,
        exact_match,
    }
}

// The empty case still reports success: the outer envelope stays uniform
// with the populated one and carries a single diagnostic record, so the
// outer count is 1 while the inner count is 0.
fn no_match(query_words: &[String], min_ratio: f64) -> SearchResponse {
    let diagnostic = NoMatchDiagnostic {
        status: ResponseStatus::Success,
        data: Vec::new(),
        count: 0,
        folder: RESULT_FOLDER.to_string(),
        max_results: MAX_RESULTS_LABEL.to_string(),
        message: format!("No results found for '{}'", query_words.join(" ")),
        suggestions: vec![
            "Check your input".to_string(),
            format!("Try lowering the minimum match rate (current: {min_ratio}%)"),
            "Try lowering the minimum similarity".to_string(),
            "Try using a shorter keyword".to_string(),
        ],
    };
    SearchResponse::Success {
        data: vec![ResultEntry::Diagnostic(diagnostic)],
        count: 1,
    }
}
