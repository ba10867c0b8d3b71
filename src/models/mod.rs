pub mod card;
pub mod grade;
pub mod quiz;
pub mod teaching_session;
pub mod word;

pub use card::CardView;
pub use grade::{GradeDocument, WeekEntry};
pub use quiz::QuizQuestion;
pub use teaching_session::TeachingSession;
pub use word::WordRecord;
