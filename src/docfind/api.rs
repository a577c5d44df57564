//! # API Facade
//!
//! [`DirectoryApi`] is the single entry point a UI client talks to. It owns
//! the session: the record store, the filter manager (and through it the
//! page location), and the autocomplete popover.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the query engine, the autocomplete engine and the
//!   filter manager
//! - **Recomputes** derived views in full after every change
//! - **Returns structured types** (`CmdResult`), never strings for display
//!
//! ## What the API Does NOT Do
//!
//! - **I/O beyond the fetch**: no stdout, stderr, or terminal assumptions
//! - **Presentation**: cards, colors and layout belong to the client
//!
//! ## Generic Over DataSource and Location
//!
//! `DirectoryApi<S: DataSource, L: Location>`:
//! - Production: `DirectoryApi<Box<dyn DataSource>, MemoryLocation>`
//! - Testing: `DirectoryApi<InMemorySource, MemoryLocation>`

use crate::autocomplete::{self, Autocomplete};
use crate::error::{DirectoryError, Result};
use crate::filter::{ConsultationType, FilterState, SortBy};
use crate::manager::FilterManager;
use crate::model::Doctor;
use crate::query;
use crate::records::{LoadStatus, RecordStore};
use crate::source::DataSource;
use crate::url_sync::{self, Location};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub doctors: Vec<Doctor>,
    pub suggestions: Vec<Doctor>,
    pub specialities: Vec<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_doctors(mut self, doctors: Vec<Doctor>) -> Self {
        self.doctors = doctors;
        self
    }

    pub fn with_suggestions(mut self, suggestions: Vec<Doctor>) -> Self {
        self.suggestions = suggestions;
        self
    }

    pub fn with_specialities(mut self, specialities: Vec<String>) -> Self {
        self.specialities = specialities;
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}

pub struct DirectoryApi<S: DataSource, L: Location> {
    source: S,
    records: RecordStore,
    filters: FilterManager<L>,
    search_box: Autocomplete,
    page_base: String,
}

impl<S: DataSource, L: Location> DirectoryApi<S, L> {
    pub fn new(source: S, location: L, page_base: impl Into<String>) -> Self {
        Self {
            source,
            records: RecordStore::new(),
            filters: FilterManager::new(location),
            search_box: Autocomplete::new(),
            page_base: page_base.into(),
        }
    }

    /// Fetches the records once. A failure is recorded in the store and
    /// reported as an error message; it is never returned as `Err`.
    pub fn load(&mut self) -> CmdResult {
        let ticket = self.records.begin_load();
        let fetched = self.source.fetch();
        self.records.complete(ticket, fetched);

        let mut result = CmdResult::default();
        match self.records.status() {
            LoadStatus::Ready(records) => {
                info!(count = records.len(), source = %self.source.describe(), "loaded doctors");
                result.add_message(CmdMessage::info(format!(
                    "Loaded {} doctors from {}",
                    records.len(),
                    self.source.describe()
                )));
            }
            LoadStatus::Failed(message) => {
                result.add_message(CmdMessage::error(message.clone()));
            }
            LoadStatus::Loading => {}
        }
        result
    }

    /// Adopts the filters carried by the location's current query.
    pub fn mount(&mut self) -> &FilterState {
        let state = self.filters.mount();
        self.search_box = Autocomplete::new();
        if !state.search.is_empty() {
            self.search_box.input(state.search.clone());
            self.search_box.click_outside();
        }
        self.filters.state()
    }

    /// Drops any load still in flight.
    pub fn unmount(&mut self) {
        self.records.unmount();
    }

    pub fn status(&self) -> &LoadStatus {
        self.records.status()
    }

    pub fn records(&self) -> &[Doctor] {
        self.records.records()
    }

    pub fn filters(&self) -> &FilterState {
        self.filters.state()
    }

    pub fn location(&self) -> &L {
        self.filters.location()
    }

    pub fn search_box(&self) -> &Autocomplete {
        &self.search_box
    }

    /// The filtered and sorted records for the current state.
    pub fn results(&self) -> CmdResult {
        CmdResult::default().with_doctors(query::apply(self.records(), self.filters.state()))
    }

    pub fn available_specialities(&self) -> CmdResult {
        CmdResult::default().with_specialities(self.records.available_specialities())
    }

    /// Shareable link for the current filters.
    pub fn page_url(&self) -> String {
        url_sync::page_url(&self.page_base, self.filters.state())
    }

    /// Name suggestions for `text`, independent of the search box state.
    pub fn suggest(&self, text: &str) -> CmdResult {
        let suggestions = autocomplete::suggest(self.records(), text)
            .into_iter()
            .cloned()
            .collect();
        CmdResult::default().with_suggestions(suggestions)
    }

    pub fn set_search(&mut self, search: impl Into<String>) -> CmdResult {
        let search = search.into();
        self.search_box.input(search.clone());
        self.search_box.click_outside();
        self.filters.set_search(search);
        self.results()
    }

    pub fn set_consultation_type(&mut self, consultation_type: Option<ConsultationType>) -> CmdResult {
        self.filters.set_consultation_type(consultation_type);
        self.results()
    }

    /// Toggles a speciality. Once the records are loaded, only names seen in
    /// the store can be selected; a selected name can always be removed.
    pub fn toggle_speciality(&mut self, name: &str) -> Result<CmdResult> {
        let selected = self.filters.state().has_speciality(name);
        let ready = matches!(self.records.status(), LoadStatus::Ready(_));
        if !selected && ready && !self.records.available_specialities().iter().any(|s| s == name) {
            return Err(DirectoryError::Api(format!("Unknown speciality: {}", name)));
        }
        self.filters.toggle_speciality(name);
        Ok(self.results())
    }

    pub fn set_sort_by(&mut self, sort_by: Option<SortBy>) -> CmdResult {
        self.filters.set_sort_by(sort_by);
        self.results()
    }

    /// Replaces every filter at once.
    pub fn replace_filters(&mut self, state: FilterState) -> CmdResult {
        self.filters.replace(state);
        self.results()
    }

    pub fn reset(&mut self) -> CmdResult {
        self.search_box = Autocomplete::new();
        self.filters.reset();
        self.results()
    }

    /// The user typed into the search box. Returns the visible suggestions.
    pub fn type_search(&mut self, text: impl Into<String>) -> CmdResult {
        self.search_box.input(text);
        self.visible_suggestions()
    }

    pub fn focus_search(&mut self) -> CmdResult {
        self.search_box.focus();
        self.visible_suggestions()
    }

    pub fn visible_suggestions(&self) -> CmdResult {
        let suggestions = self
            .search_box
            .visible_suggestions(self.records())
            .into_iter()
            .cloned()
            .collect();
        CmdResult::default().with_suggestions(suggestions)
    }

    /// Picks the `position`-th (1-based) visible suggestion and commits its
    /// name as the search term.
    pub fn select_suggestion(&mut self, position: usize) -> Result<CmdResult> {
        let picked = position
            .checked_sub(1)
            .and_then(|i| self.search_box.visible_suggestions(self.records()).get(i).cloned())
            .cloned()
            .ok_or_else(|| DirectoryError::Api(format!("No suggestion at position {}", position)))?;
        let term = self.search_box.select(&picked);
        self.filters.set_search(term);
        Ok(self.results())
    }

    /// Commits the search box text as typed.
    pub fn submit_search(&mut self) -> CmdResult {
        let term = self.search_box.submit();
        self.filters.set_search(term);
        self.results()
    }

    /// Closes the suggestions without touching the search term.
    pub fn dismiss_suggestions(&mut self) {
        self.search_box.click_outside();
    }
}
