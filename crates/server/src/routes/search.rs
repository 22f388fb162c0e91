use crate::error::ServerResult;
use crate::state::ServerState;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use snipmatch::MatchError;
use std::sync::Arc;

/// Score a batch of candidate snippets against a word-split query.
///
/// The body must be JSON; beyond that its shape is not validated here.
/// The engine owns the request contract and answers shape problems with
/// its own error envelope, so every syntactically valid request completes
/// with HTTP 200 and exactly one reply envelope:
///
/// - ranked hits when at least one candidate clears the threshold,
/// - a no-match diagnostic when none does,
/// - the error envelope when the batch cannot be scored.
///
/// Non-JSON bodies are the one transport-level failure this handler owns
/// and come back as HTTP 400.
///
/// # Request
///
/// ```json
/// {
///   "candidates": [
///     {"text": "...", "filename": "...", "timestamp": "...", "similarity": 0.9}
///   ],
///   "queryWords": ["hello", "world"],
///   "minRatio": 50
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "status": "success",
///   "data": [{"filename": "...", "timestamp": "...", "similarity": 0.9,
///             "text": "...", "match_ratio": 100.0, "exact_match": true}],
///   "count": 1
/// }
/// ```
pub async fn run_search(
    State(state): State<Arc<ServerState>>,
    body: Bytes,
) -> ServerResult<impl IntoResponse> {
    let payload: serde_json::Value = serde_json::from_slice(&body)?;

    // Scoring is CPU-bound; keep it off the async runtime threads.
    let engine_cfg = state.engine_config();
    let reply = match tokio::task::spawn_blocking(move || {
        snipmatch::score_value_with_config(payload, &engine_cfg)
    })
    .await
    {
        Ok(reply) => reply,
        Err(err) => {
            tracing::error!(error = %err, "scoring task failed");
            snipmatch::response::failure(&MatchError::Scoring(format!(
                "scoring task failed: {err}"
            )))
        }
    };

    Ok(Json(reply))
}
