//! Loads grade documents from the word-data directory.
//! A grade's document lives at `document/grade{N}.json` under the data root.

use crate::error::LoadError;
use crate::models::GradeDocument;
use std::fs;
use std::path::{Path, PathBuf};

/// Where the document for `grade` is expected, relative to the data root.
pub fn document_path(data_root: &Path, grade: &str) -> PathBuf {
    data_root
        .join("document")
        .join(format!("grade{grade}.json"))
}

/// Reads and parses the document for `grade`. The returned error names the
/// grade and the path it looked at, so it can be shown to the user as-is.
pub fn load_grade_document(data_root: &Path, grade: &str) -> Result<GradeDocument, LoadError> {
    let path = document_path(data_root, grade);

    let contents = fs::read_to_string(&path).map_err(|source| LoadError::Read {
        grade: grade.to_string(),
        path: path.clone(),
        source,
    })?;

    let document = serde_json::from_str(&contents).map_err(|source| LoadError::Parse {
        grade: grade.to_string(),
        path,
        source,
    })?;

    Ok(document)
}
