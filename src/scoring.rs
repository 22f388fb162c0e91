//! Per-candidate scoring: combines word placements into a match ratio and
//! an exact-match flag.

use crate::error::MatchError;
use crate::matching::claim_first_fit;
use crate::types::{Candidate, ScoredCandidate};

/// Score one candidate against the query words.
///
/// The candidate's text is lower-cased once and every query word is placed
/// into it under the shared non-overlap accounting, in the order given.
/// The match ratio is the percentage of query bytes that found a placement;
/// a query with no words scores 0. The exact-match flag is computed
/// independently by plain containment of every word, so it can be true even
/// when overlapping words kept the ratio below 100.
///
/// A candidate without a text field fails the whole batch; see
/// [`MatchError::MalformedCandidate`].
pub fn score_candidate(
    query_words: &[String],
    candidate: &Candidate,
) -> Result<ScoredCandidate, MatchError> {
    let text = candidate
        .text
        .as_deref()
        .ok_or_else(|| MatchError::MalformedCandidate("missing text field".into()))?;

    let haystack = text.to_lowercase();
    let mut used = vec![false; haystack.len()];

    let mut total_query = 0usize;
    let mut total_matched = 0usize;
    let mut exact_match = true;

    for word in query_words {
        let needle = word.to_lowercase();
        total_query += needle.len();
        if let Some(claimed) = claim_first_fit(haystack.as_bytes(), needle.as_bytes(), &mut used) {
            total_matched += claimed;
        }
        if exact_match && !haystack.contains(&needle) {
            exact_match = false;
        }
    }

    let match_ratio = if total_query > 0 {
        total_matched as f64 / total_query as f64 * 100.0
    } else {
        // No query characters to match. Defined as 0 rather than the
        // 0/0 indeterminate form; the vacuous containment check above
        // leaves exact_match true.
        0.0
    };

    Ok(ScoredCandidate {
        candidate: candidate.clone(),
        match_ratio,
        exact_match,
    })
}

/// Longest-common-subsequence similarity between two strings, in percent of
/// the first string's length.
///
/// Standalone utility for single-string comparisons; the batch pipeline
/// does not call it. Case-insensitive, 0 when either side is empty.
pub fn lcs_ratio(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let n = b_chars.len();

    // Two-row DP over subsequence lengths.
    let mut prev = vec![0usize; n + 1];
    let mut curr = vec![0usize; n + 1];
    for &a_ch in &a_chars {
        for (j, &b_ch) in b_chars.iter().enumerate() {
            curr[j + 1] = if a_ch == b_ch {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n] as f64 / a_chars.len() as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn all_words_found_scores_full_ratio() -> Result<(), MatchError> {
        let scored = score_candidate(&words(&["hello", "foo"]), &Candidate::new("hello world foo"))?;
        assert_eq!(scored.match_ratio, 100.0);
        assert!(scored.exact_match);
        Ok(())
    }

    #[test]
    fn overlapping_words_split_the_ratio() -> Result<(), MatchError> {
        // "ab" claims the only "ab"; "bc" has nowhere left to go.
        let scored = score_candidate(&words(&["ab", "bc"]), &Candidate::new("abc"))?;
        assert_eq!(scored.match_ratio, 50.0);
        assert!(scored.exact_match);
        Ok(())
    }

    #[test]
    fn repeated_word_counts_once_per_occurrence() -> Result<(), MatchError> {
        let scored = score_candidate(&words(&["abc"]), &Candidate::new("abcabc"))?;
        assert_eq!(scored.match_ratio, 100.0);

        let scored = score_candidate(&words(&["abc", "abc"]), &Candidate::new("abcabc"))?;
        assert_eq!(scored.match_ratio, 100.0);

        let scored = score_candidate(&words(&["abc", "abc", "abc"]), &Candidate::new("abcabc"))?;
        assert!((scored.match_ratio - 200.0 / 3.0).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn matching_is_case_insensitive() -> Result<(), MatchError> {
        let scored = score_candidate(&words(&["hello"]), &Candidate::new("HELLO WORLD"))?;
        assert_eq!(scored.match_ratio, 100.0);
        assert!(scored.exact_match);
        Ok(())
    }

    #[test]
    fn missing_word_lowers_ratio_and_clears_exact_flag() -> Result<(), MatchError> {
        let scored = score_candidate(&words(&["hello", "zzz"]), &Candidate::new("hello world"))?;
        assert_eq!(scored.match_ratio, 5.0 / 8.0 * 100.0);
        assert!(!scored.exact_match);
        Ok(())
    }

    #[test]
    fn exact_flag_ignores_overlap_accounting() -> Result<(), MatchError> {
        // Both words are contained, but they compete for the same bytes.
        let scored = score_candidate(&words(&["abcd", "bc"]), &Candidate::new("abcd"))?;
        assert!(scored.match_ratio < 100.0);
        assert!(scored.exact_match);
        Ok(())
    }

    #[test]
    fn empty_query_scores_zero_with_vacuous_exact_flag() -> Result<(), MatchError> {
        let scored = score_candidate(&[], &Candidate::new("anything"))?;
        assert_eq!(scored.match_ratio, 0.0);
        assert!(scored.exact_match);
        Ok(())
    }

    #[test]
    fn empty_word_contributes_nothing() -> Result<(), MatchError> {
        let scored = score_candidate(&words(&["", "abc"]), &Candidate::new("abc"))?;
        assert_eq!(scored.match_ratio, 100.0);
        assert!(scored.exact_match);
        Ok(())
    }

    #[test]
    fn empty_text_scores_zero() -> Result<(), MatchError> {
        let scored = score_candidate(&words(&["abc"]), &Candidate::new(""))?;
        assert_eq!(scored.match_ratio, 0.0);
        assert!(!scored.exact_match);
        Ok(())
    }

    #[test]
    fn missing_text_is_a_malformed_candidate() {
        let candidate = Candidate {
            text: None,
            filename: "broken.json".into(),
            timestamp: String::new(),
            similarity: 0.0,
        };
        let err = score_candidate(&words(&["abc"]), &candidate)
            .expect_err("candidate without text should fail");
        match err {
            MatchError::MalformedCandidate(msg) => assert!(msg.contains("text")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn ratio_stays_within_bounds() -> Result<(), MatchError> {
        let scored = score_candidate(
            &words(&["aaaa", "aaaa", "aaaa"]),
            &Candidate::new("aaaaaaaa"),
        )?;
        assert!(scored.match_ratio >= 0.0 && scored.match_ratio <= 100.0);
        Ok(())
    }

    #[test]
    fn lcs_ratio_identical_strings() {
        assert_eq!(lcs_ratio("hello", "hello"), 100.0);
        assert_eq!(lcs_ratio("hello", "HELLO"), 100.0);
    }

    #[test]
    fn lcs_ratio_partial_overlap() {
        // LCS of "abcdef" and "abdf" is "abdf" (4 of 6).
        assert!((lcs_ratio("abcdef", "abdf") - 4.0 / 6.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn lcs_ratio_empty_sides() {
        assert_eq!(lcs_ratio("", "abc"), 0.0);
        assert_eq!(lcs_ratio("abc", ""), 0.0);
        assert_eq!(lcs_ratio("", ""), 0.0);
    }

    #[test]
    fn lcs_ratio_is_relative_to_first_argument() {
        // Every char of "abc" appears in order in "aXbXcX".
        assert_eq!(lcs_ratio("abc", "aXbXcX"), 100.0);
        // The reverse direction only covers half of the longer string.
        assert_eq!(lcs_ratio("aXbXcX", "abc"), 50.0);
    }
}
