//! A card as shown on screen: the word record plus where its
//! pronunciation clip lives under the audio root.
use super::WordRecord;

#[derive(Clone, Debug, PartialEq)]
pub struct CardView {
    pub word: WordRecord,
    /// Relative to the audio root, e.g. `Grade3/01/apple.mp3`.
    pub audio_path: String,
}

impl CardView {
    pub fn new(word: &WordRecord, grade: &str, week: u32) -> Self {
        let audio_path = format!("Grade{grade}/{week:02}/{}.mp3", normalize_word(&word.word));
        Self {
            word: word.clone(),
            audio_path,
        }
    }
}

/// Clip files are named after the word: parentheses removed, surrounding
/// whitespace trimmed, lower-cased. "Book(s)" is stored as `books.mp3`.
pub fn normalize_word(word: &str) -> String {
    let stripped: String = word.chars().filter(|c| *c != '(' && *c != ')').collect();
    stripped.trim().to_lowercase()
}
