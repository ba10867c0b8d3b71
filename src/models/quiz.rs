//! Multiple-choice questions over the active week: one Chinese meaning as
//! the prompt, four English words as options.

use super::WordRecord;
use crate::error::QuizError;
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

/// One correct word plus three distractors.
pub const OPTION_COUNT: usize = 4;

#[derive(Clone, Debug)]
pub struct QuizQuestion {
    /// The Chinese meaning being asked about.
    pub prompt: String,
    /// English words in presentation order.
    pub options: Vec<String>,
    pub correct_index: usize,
}

impl QuizQuestion {
    pub fn correct_word(&self) -> &str {
        &self.options[self.correct_index]
    }

    pub fn is_correct(&self, chosen: usize) -> bool {
        chosen == self.correct_index
    }
}

/// Draws a fresh question from `words`.
///
/// The correct entry is chosen uniformly among the entries that carry a
/// Chinese meaning; the three distractors are chosen uniformly from the
/// remaining distinct words; the option order is a uniform shuffle.
pub fn generate(words: &[WordRecord], rng: &mut impl Rng) -> Result<QuizQuestion, QuizError> {
    // Options are distinct by word text, so duplicates in the data count
    // once. Keeps the first occurrence of each word.
    let mut distinct: Vec<&WordRecord> = Vec::with_capacity(words.len());
    for record in words {
        if !distinct.iter().any(|seen| seen.word == record.word) {
            distinct.push(record);
        }
    }

    if distinct.len() < OPTION_COUNT {
        return Err(QuizError::NotEnoughWords {
            available: distinct.len(),
        });
    }

    let promptable: Vec<usize> = distinct
        .iter()
        .enumerate()
        .filter(|(_, record)| record.chinese.as_deref().is_some_and(|c| !c.is_empty()))
        .map(|(i, _)| i)
        .collect();
    let correct = *promptable
        .choose(rng)
        .ok_or(QuizError::NoPromptableWord)?;

    let mut pool: Vec<usize> = (0..distinct.len()).filter(|&i| i != correct).collect();
    pool.shuffle(rng);
    pool.truncate(OPTION_COUNT - 1);

    // Dropping the correct word into a random slot of the shuffled
    // distractors keeps the final order uniform.
    let correct_index = rng.random_range(0..=pool.len());
    pool.insert(correct_index, correct);

    let options: Vec<String> = pool.iter().map(|&i| distinct[i].word.clone()).collect();
    let prompt = distinct[correct]
        .chinese
        .clone()
        .unwrap_or_default();

    Ok(QuizQuestion {
        prompt,
        options,
        correct_index,
    })
}
