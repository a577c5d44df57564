use super::{parse_payload, DataSource};
use crate::error::{DirectoryError, Result};
use crate::model::Doctor;
use tracing::debug;

/// Fetches the directory with a single blocking GET.
///
/// There is no retry and no timeout beyond the client's defaults; a failed
/// request is reported once and left to the caller.
pub struct HttpSource {
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl DataSource for HttpSource {
    fn fetch(&self) -> Result<Vec<Doctor>> {
        debug!(url = %self.url, "fetching doctors");

        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| DirectoryError::Fetch(e.to_string()))?;
        let response = client
            .get(&self.url)
            .send()
            .map_err(|e| DirectoryError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .map_err(|e| DirectoryError::Fetch(e.to_string()))?;
        parse_payload(&body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
