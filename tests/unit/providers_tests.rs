/*!
 * Tests for provider clients and the model-backed translator
 */

use std::sync::Arc;
use std::time::Instant;

use aidesk::providers::gemini::Gemini;
use aidesk::providers::mock::MockClient;
use aidesk::providers::{ModelClient, ModelRequest, ModelTranslator};
use aidesk::translation::Translator;

#[test]
fn test_modelRequest_textContent_shouldSkipBinaryParts() {
    let request = ModelRequest::new()
        .inline_data("image/png", vec![1, 2, 3])
        .text("first ")
        .text("second");
    assert_eq!(request.text_content(), "first second");
}

#[tokio::test]
async fn test_modelTranslator_workingClient_shouldReturnValidatedResult() {
    let translator = ModelTranslator::new(Arc::new(MockClient::working()));
    let result = translator.translate("Hello.", "English", "Vietnamese").await.unwrap();
    assert!(result.translated_text.contains("[TRANSLATED]"));
    assert!(result.glossary.is_empty());
}

/// Prose where JSON was requested is a parse error, not a silent pass-through
#[tokio::test]
async fn test_modelTranslator_malformedClient_shouldReturnParseError() {
    let translator = ModelTranslator::new(Arc::new(MockClient::malformed()));
    let err = translator
        .translate("Hello.", "English", "Vietnamese")
        .await
        .unwrap_err();
    assert!(err.to_string().contains("parse"));
}

#[tokio::test]
async fn test_modelTranslator_emptyClient_shouldReturnParseError() {
    let translator = ModelTranslator::new(Arc::new(MockClient::empty()));
    let result = translator.translate("Hello.", "English", "Vietnamese").await;
    assert!(result.is_err());
}

/// Slow clients overlap when driven concurrently
#[tokio::test]
async fn test_slowClients_concurrentRequests_shouldOverlap() {
    let client = Arc::new(MockClient::slow(50));
    let translator = ModelTranslator::new(Arc::clone(&client) as Arc<dyn ModelClient>);

    let start = Instant::now();
    let (a, b, c) = tokio::join!(
        translator.translate("one", "English", "Vietnamese"),
        translator.translate("two", "English", "Vietnamese"),
        translator.translate("three", "English", "Vietnamese"),
    );
    let elapsed = start.elapsed();

    assert!(a.is_ok() && b.is_ok() && c.is_ok());
    assert_eq!(client.requests_served(), 3);
    // Three 50ms requests in parallel should finish well under 150ms
    assert!(elapsed.as_millis() < 140, "requests ran serially: {:?}", elapsed);
}

#[test]
fn test_gemini_constructor_shouldKeepModelName() {
    let client = Gemini::new("key", "gemini-2.5-flash");
    assert_eq!(client.model(), "gemini-2.5-flash");
}
