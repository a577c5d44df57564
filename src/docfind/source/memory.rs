use super::{parse_payload, DataSource};
use crate::error::{DirectoryError, Result};
use crate::model::Doctor;

/// Canned source for testing and development. Does NOT touch the network.
pub enum InMemorySource {
    Records(Vec<Doctor>),
    /// A raw body, run through the same payload validation as real sources.
    Body(String),
    /// Simulates a transport failure.
    Failing(String),
}

impl InMemorySource {
    pub fn new(records: Vec<Doctor>) -> Self {
        InMemorySource::Records(records)
    }

    pub fn from_body(body: impl Into<String>) -> Self {
        InMemorySource::Body(body.into())
    }

    pub fn failing(message: impl Into<String>) -> Self {
        InMemorySource::Failing(message.into())
    }
}

impl DataSource for InMemorySource {
    fn fetch(&self) -> Result<Vec<Doctor>> {
        match self {
            InMemorySource::Records(records) => Ok(records.clone()),
            InMemorySource::Body(body) => parse_payload(body),
            InMemorySource::Failing(message) => Err(DirectoryError::Fetch(message.clone())),
        }
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
