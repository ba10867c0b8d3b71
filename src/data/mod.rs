pub mod loader;

pub use loader::{document_path, load_grade_document};
