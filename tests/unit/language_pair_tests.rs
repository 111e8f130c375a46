/*!
 * Tests for From-To language pairs
 */

use vocabman::dictionary::LanguagePair;
use vocabman::errors::DictionaryError;

#[test]
fn test_parse_withValidSpec_shouldSplitOnSeparator() {
    let pair: LanguagePair = "English-French".parse().unwrap();
    assert_eq!(pair, LanguagePair::new("English", "French"));
    assert_eq!(pair.type_name(), "English-French");
    assert_eq!(pair.to_string(), "English-French");
}

#[test]
fn test_parse_withSurroundingWhitespace_shouldTrimTokens() {
    let pair: LanguagePair = " English - Ukrainian ".parse().unwrap();
    assert_eq!(pair.type_name(), "English-Ukrainian");
}

#[test]
fn test_parse_withInvalidSpecs_shouldFailWithInvalidFormat() {
    for input in ["English", "English-French-German", "-French", "English-", ""] {
        let result = input.parse::<LanguagePair>();
        assert!(
            matches!(result, Err(DictionaryError::InvalidFormat(_))),
            "'{}' should be rejected",
            input
        );
    }
}

#[test]
fn test_parse_withPathLikeTokens_shouldFailWithInvalidFormat() {
    for input in ["Eng/lish-French", "../../escaped-X", ".-French", "English-..", "Back\\slash-X"] {
        let result = input.parse::<LanguagePair>();
        assert!(
            matches!(result, Err(DictionaryError::InvalidFormat(_))),
            "'{}' should be rejected",
            input
        );
    }
}

#[test]
fn test_parse_withDotsInsideName_shouldBeAccepted() {
    let pair: LanguagePair = "Old.English-French".parse().unwrap();
    assert_eq!(pair.from, "Old.English");
}
