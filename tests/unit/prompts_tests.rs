/*!
 * Tests for prompt and response-schema construction
 */

use aidesk::prompts;

#[test]
fn test_translationPrompt_shouldQuoteTheSourceText() {
    let prompt = prompts::translation_prompt("The quick brown fox.", "English", "French");
    assert!(prompt.contains("from English to French"));
    assert!(prompt.contains("The quick brown fox."));
}

/// Schema descriptions name the target language so the model answers in it
#[test]
fn test_translationSchema_shouldEmbedTargetLanguage() {
    let schema = prompts::translation_schema("French");
    let description = schema["properties"]["translation"]["description"]
        .as_str()
        .unwrap();
    assert!(description.contains("French"));
}

#[test]
fn test_articlePrompt_shouldIncludeWholeBrief() {
    let prompt =
        prompts::article_prompt("Rust basics", "beginners", "short", "friendly", "English");
    assert!(prompt.contains("Rust basics"));
    assert!(prompt.contains("beginners"));
    assert!(prompt.contains("short"));
    assert!(prompt.contains("friendly"));
}

#[test]
fn test_articleSchema_shouldListAllSixFields() {
    let schema = prompts::article_schema();
    for field in [
        "title",
        "metaDescription",
        "outline",
        "article",
        "seoKeywords",
        "hashtags",
    ] {
        assert!(
            !schema["properties"][field].is_null(),
            "missing field {}",
            field
        );
    }
}

#[test]
fn test_editPlanSchema_shouldRequireStepsAndCompute() {
    let schema = prompts::edit_plan_schema();
    assert_eq!(
        schema["required"],
        serde_json::json!(["steps", "estimated_compute"])
    );
    assert_eq!(
        schema["properties"]["estimated_compute"]["required"],
        serde_json::json!(["gpu_seconds"])
    );
}

#[test]
fn test_sectionDraftPrompt_shouldAskForSectionTextOnly() {
    let prompt = prompts::section_draft_prompt("Summary", "10 years in Rust", "English");
    assert!(prompt.contains("Summary"));
    assert!(prompt.contains("10 years in Rust"));
    assert!(prompt.contains("section text only"));
}
