/*!
 * Tests for sentence-aware text segmentation
 */

use aidesk::errors::SegmentError;
use aidesk::segmenter::segment;

/// Text at or under the limit passes through as a single segment
#[test]
fn test_segment_textWithinLimit_shouldReturnSingleSegment() {
    let text = "Short enough.";
    let segments = segment(text, 100).unwrap();
    assert_eq!(segments, vec![text.to_string()]);
}

#[test]
fn test_segment_emptyText_shouldReturnSingleEmptySegment() {
    let segments = segment("", 10).unwrap();
    assert_eq!(segments, vec![String::new()]);
}

#[test]
fn test_segment_zeroLimit_shouldReturnInvalidLimit() {
    let result = segment("anything", 0);
    assert!(matches!(result, Err(SegmentError::InvalidLimit(0))));
}

/// Concatenating the segments must reconstitute the input exactly
#[test]
fn test_segment_longText_shouldRecombineLosslessly() {
    let text = "First sentence. Second one! A third? And a trailing fragment without punctuation";
    let segments = segment(text, 20).unwrap();
    assert!(segments.len() > 1);
    assert_eq!(segments.concat(), text);
}

#[test]
fn test_segment_shortSentences_shouldPackGreedily() {
    let segments = segment("A. B. C.", 4).unwrap();
    assert_eq!(
        segments,
        vec!["A.".to_string(), " B.".to_string(), " C.".to_string()]
    );
}

/// Each segment stays within the limit unless a single sentence exceeds it
#[test]
fn test_segment_mixedSentenceLengths_shouldBoundSegments() {
    let text = "Tiny. Small one. More tiny. Done.";
    let limit = 12;
    let segments = segment(text, limit).unwrap();
    for seg in &segments {
        assert!(
            seg.chars().count() <= limit,
            "segment {:?} exceeds limit",
            seg
        );
    }
    assert_eq!(segments.concat(), text);
}

/// A single sentence longer than the limit is kept whole, never split
#[test]
fn test_segment_oversizedSentence_shouldStayWhole() {
    let long = "This single sentence is much longer than the limit allows.";
    let text = format!("Ok. {} End.", long);
    let segments = segment(&text, 10).unwrap();

    assert!(segments.iter().any(|s| s.contains(long)));
    assert_eq!(segments.concat(), text);
}

/// Runs of terminators stay attached to their sentence
#[test]
fn test_segment_terminatorRuns_shouldRecombineLosslessly() {
    let text = "What?! Really... Yes!!! Quite so.";
    let segments = segment(text, 12).unwrap();
    assert_eq!(segments.concat(), text);
}

/// Character counting is by chars, not bytes
#[test]
fn test_segment_multibyteText_shouldCountChars() {
    let text = "Xin chào. Thế giới. Tạm biệt.";
    let segments = segment(text, 12).unwrap();
    assert!(segments.len() > 1);
    assert_eq!(segments.concat(), text);
}

#[test]
fn test_segment_whitespaceOnlyText_shouldReturnSingleSegment() {
    let segments = segment("   ", 100).unwrap();
    assert_eq!(segments, vec!["   ".to_string()]);
}
