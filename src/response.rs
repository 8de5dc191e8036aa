/*!
 * Structured model-response parsing.
 *
 * Even with a response schema attached to the request, hosted models sometimes
 * wrap the JSON payload in markdown code fences or return junk outright.
 * Responses are validated against the expected type via serde instead of the
 * caller guessing at the shape.
 */

use serde::de::DeserializeOwned;

use crate::errors::ResponseError;

/// Parse a raw model response into a typed value.
///
/// Tolerates surrounding whitespace and a markdown code fence around the JSON
/// body. Anything that does not deserialize into `T` is a
/// `ResponseError::SchemaMismatch`; an all-whitespace response is
/// `ResponseError::Empty`.
pub fn parse_structured<T: DeserializeOwned>(raw: &str) -> Result<T, ResponseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ResponseError::Empty);
    }

    let body = strip_code_fence(trimmed);
    serde_json::from_str(body).map_err(|e| ResponseError::SchemaMismatch {
        message: e.to_string(),
        snippet: snippet_of(body),
    })
}

/// Remove a surrounding ```json / ``` fence, if present.
fn strip_code_fence(text: &str) -> &str {
    let body = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
        .unwrap_or(text);
    let body = body.strip_suffix("```").unwrap_or(body);
    body.trim()
}

fn snippet_of(text: &str) -> String {
    text.chars().take(120).collect()
}
