/*!
 * Tests for language code utilities
 */

use aidesk::language_utils::{
    get_language_name, language_codes_match, lookup, supported_language_names,
};

#[test]
fn test_getLanguageName_defaultCodes_shouldAllResolve() {
    for code in ["en", "vi", "ja", "ko", "fr", "es", "de", "zh"] {
        assert!(get_language_name(code).is_ok(), "code {} failed", code);
    }
}

#[test]
fn test_lookup_withSurroundingWhitespace_shouldStillResolve() {
    assert!(lookup(" en ").is_some());
    assert!(lookup("\tfra\n").is_some());
}

#[test]
fn test_lookup_mixedCase_shouldResolve() {
    assert!(lookup("EN").is_some());
    assert!(lookup("Fr").is_some());
}

#[test]
fn test_languageCodesMatch_sameLanguageDifferentForms_shouldMatch() {
    assert!(language_codes_match("de", "deu"));
    assert!(language_codes_match("fr", "French"));
}

#[test]
fn test_languageCodesMatch_unknownCode_shouldNotMatch() {
    assert!(!language_codes_match("en", "q!"));
    assert!(!language_codes_match("", ""));
}

#[test]
fn test_supportedLanguageNames_shouldIncludeEnglish() {
    let names = supported_language_names();
    assert!(names.contains(&"English".to_string()));
}
