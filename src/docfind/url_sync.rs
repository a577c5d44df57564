//! # URL Synchronizer
//!
//! Mirrors a [`FilterState`] into the page's query string and back.
//!
//! ## Parameters
//!
//! | key                | value                                   |
//! |--------------------|-----------------------------------------|
//! | `search`           | free text                               |
//! | `consultationType` | `Video Consult` or `In Clinic`          |
//! | `specialities`     | comma-separated speciality names        |
//! | `sortBy`           | `fees` or `experience`                  |
//!
//! [`load`] never fails: missing keys, unknown keys and unrecognised enum
//! literals all fall back to the unset value. [`store`] only writes keys whose
//! value differs from the default, so a pristine state maps to an empty query.
//!
//! For any state whose speciality names contain no comma (every name comes
//! from the record store, so this holds for states built through the UI),
//! `load(&store(&state)) == state`.
//!
//! ## Location
//!
//! The address bar is abstracted behind [`Location`]. Writes go through
//! [`Location::replace`], which swaps the current entry instead of adding a
//! history entry.

use crate::filter::{ConsultationType, FilterState, SortBy};
use url::{form_urlencoded, Url};

pub const SEARCH_KEY: &str = "search";
pub const CONSULTATION_TYPE_KEY: &str = "consultationType";
pub const SPECIALITIES_KEY: &str = "specialities";
pub const SORT_BY_KEY: &str = "sortBy";

const SPECIALITY_SEPARATOR: &str = ",";

/// Parses a query string (with or without the leading `?`) into a state.
pub fn load(query: &str) -> FilterState {
    let query = query.strip_prefix('?').unwrap_or(query);

    let mut search = None;
    let mut consultation_type = None;
    let mut specialities = None;
    let mut sort_by = None;

    // The first occurrence of a key wins, later duplicates are ignored.
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            SEARCH_KEY if search.is_none() => search = Some(value.into_owned()),
            CONSULTATION_TYPE_KEY if consultation_type.is_none() => {
                consultation_type = Some(ConsultationType::from_param(&value))
            }
            SPECIALITIES_KEY if specialities.is_none() => {
                specialities = Some(
                    value
                        .split(SPECIALITY_SEPARATOR)
                        .filter(|s| !s.is_empty())
                        .map(str::to_string)
                        .collect::<Vec<_>>(),
                )
            }
            SORT_BY_KEY if sort_by.is_none() => sort_by = Some(SortBy::from_param(&value)),
            _ => {}
        }
    }

    FilterState::new()
        .with_search(search.unwrap_or_default())
        .with_consultation_type(consultation_type.flatten())
        .with_specialities(specialities.unwrap_or_default())
        .with_sort_by(sort_by.flatten())
}

/// Serializes the non-default fields of `state`, without a leading `?`.
pub fn store(state: &FilterState) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    if !state.search.is_empty() {
        serializer.append_pair(SEARCH_KEY, &state.search);
    }
    if let Some(consultation_type) = state.consultation_type {
        serializer.append_pair(CONSULTATION_TYPE_KEY, consultation_type.as_param());
    }
    if !state.specialities.is_empty() {
        let joined = state.specialities.join(SPECIALITY_SEPARATOR);
        serializer.append_pair(SPECIALITIES_KEY, &joined);
    }
    if let Some(sort_by) = state.sort_by {
        serializer.append_pair(SORT_BY_KEY, sort_by.as_param());
    }

    serializer.finish()
}

/// A shareable link for `state` rooted at `base`. Any query already on
/// `base` is replaced; a fragment is kept.
pub fn page_url(base: &str, state: &FilterState) -> String {
    let query = store(state);
    let query = (!query.is_empty()).then_some(query.as_str());

    if let Ok(mut url) = Url::parse(base) {
        url.set_query(query);
        return url.to_string();
    }

    let base = base.split('?').next().unwrap_or(base);
    match query {
        Some(query) => format!("{}?{}", base, query),
        None => base.to_string(),
    }
}

/// The page address the filter state is mirrored into.
pub trait Location {
    /// The current query string, without the leading `?`.
    fn query(&self) -> String;

    /// Replaces the current query in place. Implementations must not add a
    /// navigable history entry or move the viewport.
    fn replace(&mut self, query: &str);
}

/// In-process location used by the terminal client and by tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryLocation {
    query: String,
    replacements: usize,
}

impl MemoryLocation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(query: &str) -> Self {
        Self {
            query: query.strip_prefix('?').unwrap_or(query).to_string(),
            replacements: 0,
        }
    }

    /// How many times the query was replaced since creation.
    pub fn replacements(&self) -> usize {
        self.replacements
    }
}

impl Location for MemoryLocation {
    fn query(&self) -> String {
        self.query.clone()
    }

    fn replace(&mut self, query: &str) {
        self.query = query.to_string();
        self.replacements += 1;
    }
}
