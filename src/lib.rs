pub mod audio;
pub mod data;
pub mod error;
pub mod models;

pub use models::{CardView, GradeDocument, QuizQuestion, TeachingSession, WeekEntry, WordRecord};
