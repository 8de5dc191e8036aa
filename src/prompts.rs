/*!
 * Prompt templates and response schemas for the assistant operations.
 *
 * Templates use `{placeholder}` substitution; schemas are the structured
 * output contracts attached to model requests so responses come back as JSON
 * matching the types in `assistant` and `translation`.
 */

use serde_json::{json, Value};

/// System instruction for translation requests.
pub fn translation_system_instruction() -> String {
    "You are a professional translator. Translate faithfully, preserving the \
     original meaning, tone, and formatting. Respond only in the requested \
     JSON format."
        .to_string()
}

/// Prompt for translating one segment, asking for a glossary of
/// domain-specific terms alongside the translation.
pub fn translation_prompt(text: &str, source_language: &str, target_language: &str) -> String {
    format!(
        "Translate the following text from {source_language} to {target_language}.\n\
         Preserve the original meaning and tone.\n\
         Also, identify any domain-specific or technical terms in the source text \
         and provide a glossary for them in {target_language}.\n\n\
         Text to translate:\n\
         \"\"\"\n\
         {text}\n\
         \"\"\""
    )
}

/// Response schema for segment translation: the translated text plus a
/// glossary of term/definition pairs.
pub fn translation_schema(target_language: &str) -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "translation": {
                "type": "STRING",
                "description": format!("The translated text in {target_language}."),
            },
            "glossary": {
                "type": "ARRAY",
                "description": format!(
                    "A list of domain-specific terms and their definitions in {target_language}."
                ),
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "term": {
                            "type": "STRING",
                            "description": "The original term from the source text.",
                        },
                        "definition": {
                            "type": "STRING",
                            "description": format!("The definition of the term in {target_language}."),
                        },
                    },
                    "required": ["term", "definition"],
                },
            },
        },
        "required": ["translation", "glossary"],
    })
}

/// Prompt for generating a complete article from a content brief.
pub fn article_prompt(
    topic: &str,
    audience: &str,
    length: &str,
    tone: &str,
    output_language: &str,
) -> String {
    format!(
        "You are an expert content marketer. Based on the following brief, produce \
         complete, well-structured content in {output_language}.\n\
         Topic: \"{topic}\"\n\
         Target audience: \"{audience}\"\n\
         Desired length: \"{length}\"\n\
         Tone of voice: \"{tone}\"\n\n\
         Provide the result as a JSON object with:\n\
         1. title: a compelling, attention-grabbing headline.\n\
         2. metaDescription: a concise meta description (around 155-160 characters) for SEO.\n\
         3. outline: a detailed outline for the article, as an array of strings.\n\
         4. article: the full article content, well formatted with clear paragraphs.\n\
         5. seoKeywords: an array of relevant SEO keywords.\n\
         6. hashtags: an array of hashtags suitable for social media."
    )
}

/// Response schema for article generation.
pub fn article_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING", "description": "Compelling article headline." },
            "metaDescription": {
                "type": "STRING",
                "description": "Concise meta description (155-160 characters) for SEO.",
            },
            "outline": {
                "type": "ARRAY",
                "description": "Detailed outline for the article.",
                "items": { "type": "STRING" },
            },
            "article": { "type": "STRING", "description": "Full, formatted article content." },
            "seoKeywords": {
                "type": "ARRAY",
                "description": "Relevant SEO keywords.",
                "items": { "type": "STRING" },
            },
            "hashtags": {
                "type": "ARRAY",
                "description": "Hashtags suitable for social media.",
                "items": { "type": "STRING" },
            },
        },
        "required": ["title", "metaDescription", "outline", "article", "seoKeywords", "hashtags"],
    })
}

/// Prompt for describing an image-editing plan. The plan is only described;
/// no edit is ever performed.
pub fn edit_plan_prompt(instructions: &str, output_language: &str) -> String {
    format!(
        "Based on the provided image and the following desired edit, create a \
         step-by-step plan for an automated image editing pipeline in {output_language}.\n\
         Do not perform the edit yourself.\n\
         Return a list of transformations and an estimated total GPU computation time in seconds.\n\
         The transformation names should be like function calls (e.g., 'remove_background', \
         'adjust_brightness').\n\
         The parameters should be a string of key-value pairs.\n\n\
         Desired Edit: \"{instructions}\""
    )
}

/// Response schema for an image-editing plan.
pub fn edit_plan_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "steps": {
                "type": "ARRAY",
                "description": "The list of editing transformations.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": {
                            "type": "STRING",
                            "description": "The name of the transformation function, e.g., 'remove_background', 'adjust_brightness'.",
                        },
                        "description": {
                            "type": "STRING",
                            "description": "A human-readable description of what this step does.",
                        },
                        "parameters": {
                            "type": "STRING",
                            "description": "Key-value parameters for the function, e.g., 'contrast: 1.2, brightness: 0.1'.",
                        },
                    },
                    "required": ["name", "description", "parameters"],
                },
            },
            "estimated_compute": {
                "type": "OBJECT",
                "properties": {
                    "gpu_seconds": {
                        "type": "NUMBER",
                        "description": "Estimated GPU seconds required for the entire pipeline.",
                    },
                },
                "required": ["gpu_seconds"],
            },
        },
        "required": ["steps", "estimated_compute"],
    })
}

/// Prompt for drafting one section of a document (e.g. a professional summary
/// or a role description) as streamed prose.
pub fn section_draft_prompt(section: &str, context: &str, output_language: &str) -> String {
    format!(
        "Write the \"{section}\" section of a professional CV in {output_language}, \
         based on the following details. Respond with the section text only, \
         without headings or commentary.\n\n\
         Details:\n{context}"
    )
}
