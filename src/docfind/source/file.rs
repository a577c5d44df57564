use super::{parse_payload, DataSource};
use crate::error::Result;
use crate::model::Doctor;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Reads the directory from a JSON file on disk.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DataSource for FileSource {
    fn fetch(&self) -> Result<Vec<Doctor>> {
        debug!(path = %self.path.display(), "reading doctors");
        let body = fs::read_to_string(&self.path)?;
        parse_payload(&body)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
