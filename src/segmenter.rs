/*!
 * Sentence-boundary text segmentation.
 *
 * Long inputs are split into segments that fit under the model's input limit.
 * Splits happen only at sentence boundaries, so no request ever receives a
 * partial sentence; a sentence longer than the limit is sent whole.
 */

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::SegmentError;

/// Pattern for one sentence unit: everything up to and including a run of
/// terminal punctuation, or trailing text with no terminator. Every character
/// of the input belongs to exactly one match, so splitting is lossless.
static SENTENCE_UNIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^.!?]*[.!?]+|[^.!?]+$").unwrap());

/// Split `text` into segments of at most `limit` characters, breaking only at
/// sentence boundaries.
///
/// Segmentation is deterministic for a given `(text, limit)` pair and the
/// returned segments concatenate back to `text` exactly. A single sentence
/// longer than `limit` becomes its own oversized segment rather than being
/// truncated.
///
/// # Errors
/// Returns `SegmentError::InvalidLimit` when `limit` is zero.
pub fn segment(text: &str, limit: usize) -> Result<Vec<String>, SegmentError> {
    if limit == 0 {
        return Err(SegmentError::InvalidLimit(limit));
    }

    if text.chars().count() <= limit {
        return Ok(vec![text.to_string()]);
    }

    let units: Vec<&str> = SENTENCE_UNIT.find_iter(text).map(|m| m.as_str()).collect();
    if units.is_empty() {
        // No recognizable sentences; send the text as one segment.
        return Ok(vec![text.to_string()]);
    }

    let mut segments = Vec::new();
    let mut buffer = String::new();
    let mut buffer_chars = 0usize;

    for unit in units {
        let unit_chars = unit.chars().count();

        // Close the current segment before this unit would push it over the
        // limit. An oversized unit lands in an empty buffer and is flushed
        // whole on the next iteration (or at the end).
        if buffer_chars + unit_chars > limit && !buffer.is_empty() {
            segments.push(std::mem::take(&mut buffer));
            buffer_chars = 0;
        }

        buffer.push_str(unit);
        buffer_chars += unit_chars;
    }

    if !buffer.is_empty() {
        segments.push(buffer);
    }

    debug!(
        "Segmented {} chars into {} segment(s) (limit {})",
        text.chars().count(),
        segments.len(),
        limit
    );

    Ok(segments)
}
