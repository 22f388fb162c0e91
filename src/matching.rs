//! First-fit word placement under a non-overlap constraint.
//!
//! Each query word claims the leftmost occurrence of itself in the candidate
//! text whose byte span is still unclaimed. Spans claimed by earlier words
//! stay claimed for the rest of the candidate, so two words can never count
//! the same character twice.

/// Claim the first non-overlapping occurrence of `word` in `text`.
///
/// `used` marks the byte positions already claimed by earlier words of the
/// same candidate and must be exactly `text.len()` long. On success the
/// occurrence's span is marked claimed and the claimed length (the word's
/// byte length) is returned. Occurrences are tried in increasing start
/// order; an occurrence rejected for overlap advances the scan by a single
/// byte, not past the rejected span, so a shifted occurrence one position
/// later is still considered.
///
/// An empty `word` never matches.
pub(crate) fn claim_first_fit(text: &[u8], word: &[u8], used: &mut [bool]) -> Option<usize> {
    if word.is_empty() {
        return None;
    }

    let mut start = 0usize;
    while let Some(pos) = find_from(text, word, start) {
        let end = pos + word.len();
        if used[pos..end].iter().any(|&claimed| claimed) {
            start = pos + 1;
            continue;
        }
        used[pos..end].fill(true);
        return Some(word.len());
    }
    None
}

/// Byte-wise substring search starting at `from`. Works on raw bytes so a
/// restart position landing inside a multi-byte character is harmless.
fn find_from(text: &[u8], word: &[u8], from: usize) -> Option<usize> {
    if from >= text.len() {
        return None;
    }
    text[from..]
        .windows(word.len())
        .position(|window| window == word)
        .map(|offset| from + offset)
}
