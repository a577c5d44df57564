//! Filter state manager.
//!
//! Owns the single [`FilterState`] of a session together with the
//! [`Location`] it is mirrored into. Every mutation builds a complete new
//! state and rewrites the location's query once.

use crate::filter::{ConsultationType, FilterState, SortBy};
use crate::url_sync::{self, Location};
use tracing::debug;

pub struct FilterManager<L: Location> {
    state: FilterState,
    location: L,
}

impl<L: Location> FilterManager<L> {
    /// Starts from the default state; call [`FilterManager::mount`] to adopt
    /// whatever the location already carries.
    pub fn new(location: L) -> Self {
        Self {
            state: FilterState::default(),
            location,
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    /// Initialises the state from the location's query. Does not write back.
    pub fn mount(&mut self) -> &FilterState {
        self.state = url_sync::load(&self.location.query());
        debug!(state = ?self.state, "mounted filters from location");
        &self.state
    }

    /// Replaces the whole state and mirrors it into the location.
    pub fn replace(&mut self, state: FilterState) -> &FilterState {
        self.state = state;
        let query = url_sync::store(&self.state);
        debug!(%query, "filters changed");
        self.location.replace(&query);
        &self.state
    }

    pub fn set_search(&mut self, search: impl Into<String>) -> &FilterState {
        let next = self.state.clone().with_search(search);
        self.replace(next)
    }

    pub fn set_consultation_type(
        &mut self,
        consultation_type: Option<ConsultationType>,
    ) -> &FilterState {
        let next = self.state.clone().with_consultation_type(consultation_type);
        self.replace(next)
    }

    pub fn toggle_speciality(&mut self, name: &str) -> &FilterState {
        let next = self.state.toggled(name);
        self.replace(next)
    }

    pub fn set_sort_by(&mut self, sort_by: Option<SortBy>) -> &FilterState {
        let next = self.state.clone().with_sort_by(sort_by);
        self.replace(next)
    }

    pub fn reset(&mut self) -> &FilterState {
        self.replace(FilterState::default())
    }
}
