//! A word entry as it appears in a grade document. Only `word` is
//! required; everything else is optional annotation.
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WordRecord {
    pub word: String,
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub pos: Option<String>,
    #[serde(default)]
    pub chinese: Option<String>,
    #[serde(default)]
    pub sentence: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_record_deserializes() {
        let json = r#"{
            "word": "Apple",
            "phonetic": "ˈæp.əl",
            "pos": "n.",
            "chinese": "蘋果",
            "sentence": "I eat an apple every day."
        }"#;

        let record: WordRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.word, "Apple");
        assert_eq!(record.phonetic.as_deref(), Some("ˈæp.əl"));
        assert_eq!(record.pos.as_deref(), Some("n."));
        assert_eq!(record.chinese.as_deref(), Some("蘋果"));
        assert_eq!(record.sentence.as_deref(), Some("I eat an apple every day."));
    }

    #[test]
    fn test_missing_optional_fields_are_none() {
        let record: WordRecord = serde_json::from_str(r#"{"word": "cat"}"#).unwrap();

        assert_eq!(record.word, "cat");
        assert!(record.phonetic.is_none());
        assert!(record.pos.is_none());
        assert!(record.chinese.is_none());
        assert!(record.sentence.is_none());
    }

    #[test]
    fn test_record_without_word_is_rejected() {
        let result: Result<WordRecord, _> = serde_json::from_str(r#"{"chinese": "貓"}"#);
        assert!(result.is_err());
    }
}
