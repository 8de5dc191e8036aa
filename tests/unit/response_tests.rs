/*!
 * Tests for structured model-response validation
 */

use serde::Deserialize;

use aidesk::errors::ResponseError;
use aidesk::response::parse_structured;
use aidesk::GeneratedContent;

#[derive(Debug, Deserialize)]
struct Pair {
    left: String,
    right: u32,
}

#[test]
fn test_parseStructured_arbitraryType_shouldDeserialize() {
    let parsed: Pair = parse_structured(r#"{"left": "a", "right": 2}"#).unwrap();
    assert_eq!(parsed.left, "a");
    assert_eq!(parsed.right, 2);
}

#[test]
fn test_parseStructured_fencedArticle_shouldDeserialize() {
    let raw = r##"```json
{
    "title": "On Parsing",
    "metaDescription": "A short piece",
    "outline": ["intro"],
    "article": "Body text.",
    "seoKeywords": ["parsing"],
    "hashtags": ["#rust"]
}
```"##;
    let content: GeneratedContent = parse_structured(raw).unwrap();
    assert_eq!(content.title, "On Parsing");
    assert_eq!(content.meta_description, "A short piece");
}

/// A fence without the json language tag is also stripped
#[test]
fn test_parseStructured_bareFence_shouldDeserialize() {
    let parsed: Pair = parse_structured("```\n{\"left\": \"x\", \"right\": 1}\n```").unwrap();
    assert_eq!(parsed.left, "x");
}

#[test]
fn test_parseStructured_missingField_shouldReportSchemaMismatch() {
    let result: Result<Pair, _> = parse_structured(r#"{"left": "only"}"#);
    let err = result.unwrap_err();
    assert!(matches!(err, ResponseError::SchemaMismatch { .. }));
    assert!(err.to_string().contains("right"));
}

/// The mismatch error carries a snippet of the offending body
#[test]
fn test_parseStructured_proseResponse_shouldIncludeSnippet() {
    let result: Result<Pair, _> = parse_structured("I am unable to help with that request.");
    match result.unwrap_err() {
        ResponseError::SchemaMismatch { snippet, .. } => {
            assert!(snippet.starts_with("I am unable"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_parseStructured_whitespaceOnly_shouldReturnEmpty() {
    let result: Result<Pair, _> = parse_structured(" \n\t ");
    assert!(matches!(result, Err(ResponseError::Empty)));
}
