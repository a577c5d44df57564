//! Record store: the session's read-only list of doctors and its load status.
//!
//! The store is filled once. A load is started with [`RecordStore::begin_load`]
//! and finished with [`RecordStore::complete`]; if the view was unmounted in
//! between, the completion carries a stale ticket and is dropped.

use crate::error::Result;
use crate::model::Doctor;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Ready(Vec<Doctor>),
    Failed(String),
}

/// Identifies one load attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone)]
pub struct RecordStore {
    status: LoadStatus,
    generation: u64,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            status: LoadStatus::Loading,
            generation: 0,
        }
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.status = LoadStatus::Loading;
        LoadTicket(self.generation)
    }

    /// Applies a fetch result. Returns `false` when the ticket is stale and
    /// the result was discarded.
    pub fn complete(&mut self, ticket: LoadTicket, result: Result<Vec<Doctor>>) -> bool {
        if ticket.0 != self.generation {
            warn!("discarding doctors loaded after the view was unmounted");
            return false;
        }
        self.status = match result {
            Ok(records) => LoadStatus::Ready(records),
            Err(e) => {
                warn!(error = %e, "failed to load doctors");
                LoadStatus::Failed(e.to_string())
            }
        };
        true
    }

    /// Invalidates every outstanding ticket.
    pub fn unmount(&mut self) {
        self.generation += 1;
    }

    /// The loaded records; empty while loading or after a failure.
    pub fn records(&self) -> &[Doctor] {
        match &self.status {
            LoadStatus::Ready(records) => records,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, LoadStatus::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            LoadStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Every speciality name across the store, deduplicated, first seen first.
    pub fn available_specialities(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for name in self.records().iter().flat_map(|d| d.speciality_names()) {
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
        names
    }
}
