use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// File name used when exporting the PRD section
pub const PRD_FILE_NAME: &str = "PRD.md";
/// File name used when exporting the Todo section
pub const TODO_FILE_NAME: &str = "TODO.md";

/// A completion split into its two Markdown documents
///
/// Both fields are trimmed and non-empty when produced by
/// [`parse_response`](crate::parse_response).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedDocument {
    /// Product Requirements Document
    pub prd: String,
    /// Checklist derived from the PRD
    pub todo: String,
}

impl ParsedDocument {
    /// Write `PRD.md` and `TODO.md` into `dir`, creating it if needed
    ///
    /// Existing files are overwritten. Returns the paths written.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or either file
    /// cannot be written
    pub fn write_to_dir(&self, dir: &Path) -> std::io::Result<[PathBuf; 2]> {
        std::fs::create_dir_all(dir)?;

        let prd_path = dir.join(PRD_FILE_NAME);
        let todo_path = dir.join(TODO_FILE_NAME);

        std::fs::write(&prd_path, with_trailing_newline(&self.prd))?;
        std::fs::write(&todo_path, with_trailing_newline(&self.todo))?;

        Ok([prd_path, todo_path])
    }
}

fn with_trailing_newline(text: &str) -> String {
    let mut out = text.to_owned();
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}
