//! A grade's document: an ordered list of weeks, each with its word list.
use super::WordRecord;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GradeDocument {
    pub weeks: Vec<WeekEntry>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WeekEntry {
    pub week: u32,
    pub content: Vec<WordRecord>,
}

impl GradeDocument {
    /// Week numbers in document order, for populating a week selector.
    pub fn week_numbers(&self) -> Vec<u32> {
        self.weeks.iter().map(|entry| entry.week).collect()
    }

    /// Looks up a week by the value a selector hands back. Selector values
    /// are the printed week numbers, so the match is on the printed form.
    pub fn find_week(&self, selected: &str) -> Option<&WeekEntry> {
        self.weeks
            .iter()
            .find(|entry| entry.week.to_string() == selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document() -> GradeDocument {
        serde_json::from_str(
            r#"{
                "weeks": [
                    { "week": 1, "content": [ { "word": "Apple", "chinese": "蘋果" } ] },
                    { "week": 2, "content": [ { "word": "Banana" }, { "word": "Cherry" } ] },
                    { "week": 10, "content": [] }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_week_numbers_keep_document_order() {
        let document = sample_document();
        assert_eq!(document.week_numbers(), vec![1, 2, 10]);
    }

    #[test]
    fn test_find_week_matches_printed_number() {
        let document = sample_document();

        let week = document.find_week("2").unwrap();
        assert_eq!(week.week, 2);
        assert_eq!(week.content.len(), 2);

        assert!(document.find_week("02").is_none());
        assert!(document.find_week("3").is_none());
    }

    #[test]
    fn test_find_week_two_digit_number() {
        let document = sample_document();
        let week = document.find_week("10").unwrap();
        assert!(week.content.is_empty());
    }

    #[test]
    fn test_selected_week_maps_to_cards() {
        use crate::models::CardView;

        let document: GradeDocument = serde_json::from_str(
            r#"{
                "weeks": [
                    { "week": 1, "content": [
                        { "word": "Apple", "chinese": "蘋果" },
                        { "word": "Banana", "chinese": "香蕉" },
                        { "word": "Cat", "chinese": "貓" },
                        { "word": "Dog", "chinese": "狗" }
                    ] }
                ]
            }"#,
        )
        .unwrap();

        let week = document.find_week("1").unwrap();
        let cards: Vec<CardView> = week
            .content
            .iter()
            .map(|word| CardView::new(word, "3", week.week))
            .collect();

        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].audio_path, "Grade3/01/apple.mp3");
        assert_eq!(cards[0].word.chinese.as_deref(), Some("蘋果"));
    }
}
