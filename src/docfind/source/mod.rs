//! # Data Sources
//!
//! The directory is read from a single JSON document: an array of doctor
//! records. The [`DataSource`] trait hides where that document lives.
//!
//! ## Implementations
//!
//! - [`http::HttpSource`]: Production source, one HTTPS GET, no retry
//! - [`file::FileSource`]: A JSON file on disk, for offline use
//! - [`memory::InMemorySource`]: Canned payloads for testing
//!
//! ## Validation
//!
//! Validation is shallow. [`parse_payload`] rejects a document
//! whose top level is not an array; individual records are decoded leniently
//! (missing fields take empty defaults, see [`crate::model::Doctor`]).

use crate::error::{DirectoryError, Result};
use crate::model::Doctor;
use serde_json::Value;
use tracing::warn;

pub mod file;
pub mod http;
pub mod memory;

pub const DEFAULT_SOURCE_URL: &str = "https://srijandubey.github.io/campus-api-mock/SRM-C1-25.json";

/// Somewhere a list of doctors can be fetched from.
pub trait DataSource {
    /// Fetch and decode the whole record list.
    fn fetch(&self) -> Result<Vec<Doctor>>;

    /// Human readable origin, used in log lines and error panels.
    fn describe(&self) -> String;
}

impl<T: DataSource + ?Sized> DataSource for Box<T> {
    fn fetch(&self) -> Result<Vec<Doctor>> {
        (**self).fetch()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Decodes a response body, requiring the top-level value to be an array.
///
/// Elements are decoded one by one; an element that is not an object, or
/// that still fails to decode, is skipped with a warning.
pub fn parse_payload(body: &str) -> Result<Vec<Doctor>> {
    let items = match serde_json::from_str::<Value>(body)? {
        Value::Array(items) => items,
        other => {
            return Err(DirectoryError::MalformedPayload(format!(
                "expected a JSON array, got {}",
                json_kind(&other)
            )))
        }
    };

    let mut doctors = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        if !item.is_object() {
            warn!(index, kind = json_kind(&item), "skipping doctor record that is not an object");
            continue;
        }
        match serde_json::from_value(item) {
            Ok(doctor) => doctors.push(doctor),
            Err(e) => warn!(index, error = %e, "skipping undecodable doctor record"),
        }
    }
    Ok(doctors)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Picks a source for a configured location: http(s) URLs are fetched over
/// the network, anything else is treated as a file path.
pub fn source_for(location: &str) -> Box<dyn DataSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(http::HttpSource::new(location))
    } else {
        let path = location.strip_prefix("file://").unwrap_or(location);
        Box::new(file::FileSource::new(path))
    }
}
