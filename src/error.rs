//! Error types for the boundaries where things can go wrong: loading a
//! grade document, playing a clip, and building a quiz.
//! None of these are fatal; each is absorbed and reported where it occurs.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to load a grade's word-list document.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The document file could not be read at all.
    #[error("cannot read word data for grade {} (looked in {}): {}", .grade, .path.display(), .source)]
    Read {
        grade: String,
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file was read but is not a valid grade document.
    #[error("word data for grade {} ({}) is malformed: {}", .grade, .path.display(), .source)]
    Parse {
        grade: String,
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Failure to start playback of one clip. Absorbed inside the audio
/// player: logged, and the clip is written off after a grace delay.
#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("no audio output device is available")]
    NoOutputDevice,

    #[error("cannot open audio clip {}: {}", .path.display(), .source)]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot decode audio clip {}: {}", .path.display(), .source)]
    Decode {
        path: PathBuf,
        source: rodio::decoder::DecoderError,
    },

    #[error("cannot start playback of {}: {}", .path.display(), .source)]
    Output {
        path: PathBuf,
        source: rodio::PlayError,
    },
}

/// A quiz could not be generated from the active week.
#[derive(Debug, Error)]
pub enum QuizError {
    /// A question needs one correct word and three distinct distractors.
    #[error("a quiz needs at least 4 different words, but this week only has {available}")]
    NotEnoughWords { available: usize },

    /// The prompt is the Chinese meaning, so at least one word must carry one.
    #[error("none of this week's words has a Chinese meaning to ask about")]
    NoPromptableWord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_error_names_grade_and_path() {
        let err = LoadError::Read {
            grade: "9".to_string(),
            path: PathBuf::from("document/grade9.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };

        let message = err.to_string();
        assert!(message.contains("grade 9"));
        assert!(message.contains("grade9.json"));
    }

    #[test]
    fn quiz_error_reports_pool_size() {
        let err = QuizError::NotEnoughWords { available: 2 };
        assert!(err.to_string().contains("2"));
    }
}
