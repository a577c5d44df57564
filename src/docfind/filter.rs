//! Filter state: what the user is currently searching, filtering and sorting by.
//!
//! The state is a plain value. It is owned by [`crate::manager::FilterManager`],
//! mirrored into the page URL by [`crate::url_sync`], and read by the query
//! engine. Enum fields carry their URL literal so the synchronizer and the
//! presentation layer agree on spelling.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsultationType {
    VideoConsult,
    InClinic,
}

impl ConsultationType {
    pub const ALL: [ConsultationType; 2] = [ConsultationType::VideoConsult, ConsultationType::InClinic];

    /// The literal used in the `consultationType` query parameter.
    pub fn as_param(&self) -> &'static str {
        match self {
            ConsultationType::VideoConsult => "Video Consult",
            ConsultationType::InClinic => "In Clinic",
        }
    }

    /// Parses a query parameter literal. Anything unrecognised is `None`.
    pub fn from_param(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_param() == value)
    }
}

impl fmt::Display for ConsultationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortBy {
    /// Fee, lowest first.
    Fees,
    /// Experience, most experienced first.
    Experience,
}

impl SortBy {
    pub const ALL: [SortBy; 2] = [SortBy::Fees, SortBy::Experience];

    /// The literal used in the `sortBy` query parameter.
    pub fn as_param(&self) -> &'static str {
        match self {
            SortBy::Fees => "fees",
            SortBy::Experience => "experience",
        }
    }

    pub fn from_param(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_param() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortBy::Fees => "Fees (Low to High)",
            SortBy::Experience => "Experience (High to Low)",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

/// The complete search/filter/sort configuration.
///
/// `specialities` keeps selection order for rendering and never holds the
/// same name twice; matching treats it as a set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search: String,
    pub consultation_type: Option<ConsultationType>,
    pub specialities: Vec<String>,
    pub sort_by: Option<SortBy>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_consultation_type(mut self, consultation_type: Option<ConsultationType>) -> Self {
        self.consultation_type = consultation_type;
        self
    }

    pub fn with_specialities<I, T>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.specialities.clear();
        for name in names {
            let name = name.into();
            if !self.specialities.contains(&name) {
                self.specialities.push(name);
            }
        }
        self
    }

    pub fn with_sort_by(mut self, sort_by: Option<SortBy>) -> Self {
        self.sort_by = sort_by;
        self
    }

    /// Returns a copy with `name` added when absent or removed when present.
    pub fn toggled(&self, name: &str) -> Self {
        let mut next = self.clone();
        if let Some(pos) = next.specialities.iter().position(|s| s == name) {
            next.specialities.remove(pos);
        } else {
            next.specialities.push(name.to_string());
        }
        next
    }

    pub fn has_speciality(&self, name: &str) -> bool {
        self.specialities.iter().any(|s| s == name)
    }

    /// True when no predicate narrows the list and no sort applies.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
