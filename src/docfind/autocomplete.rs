//! Name autocomplete.
//!
//! [`suggest`] is the pure lookup. [`Autocomplete`] is the popover state that
//! a search box drives: typing opens it, picking a suggestion or submitting
//! commits a search term and closes it, and a click outside only closes it.

use crate::model::Doctor;

pub const SUGGESTION_LIMIT: usize = 3;

/// First [`SUGGESTION_LIMIT`] records, in store order, whose name contains
/// `query` case-insensitively. Blank queries suggest nothing.
pub fn suggest<'a>(records: &'a [Doctor], query: &str) -> Vec<&'a Doctor> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|doctor| doctor.name.to_lowercase().contains(&needle))
        .take(SUGGESTION_LIMIT)
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Autocomplete {
    text: String,
    open: bool,
}

impl Autocomplete {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The user typed: replace the text and show the suggestions.
    pub fn input(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.open = true;
    }

    pub fn focus(&mut self) {
        self.open = true;
    }

    pub fn visible_suggestions<'a>(&self, records: &'a [Doctor]) -> Vec<&'a Doctor> {
        if !self.open {
            return Vec::new();
        }
        suggest(records, &self.text)
    }

    /// Takes the doctor's exact name as the search term.
    pub fn select(&mut self, doctor: &Doctor) -> String {
        self.text = doctor.name.clone();
        self.open = false;
        self.text.clone()
    }

    /// Commits the raw text as typed.
    pub fn submit(&mut self) -> String {
        self.open = false;
        self.text.clone()
    }

    pub fn click_outside(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(names: &[&str]) -> Vec<Doctor> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Doctor::new(i.to_string(), *name))
            .collect()
    }

    fn names<'a>(doctors: &[&'a Doctor]) -> Vec<&'a str> {
        doctors.iter().map(|d| d.name.as_str()).collect()
    }

    #[test]
    fn returns_substring_matches_in_store_order() {
        let store = records(&["Aarav Shah", "Aarti Singh", "Amit Roy", "Deepa Shah"]);
        assert_eq!(
            names(&suggest(&store, "aar")),
            vec!["Aarav Shah", "Aarti Singh"]
        );
        assert_eq!(names(&suggest(&store, "SHAH")), vec!["Aarav Shah", "Deepa Shah"]);
    }

    #[test]
    fn caps_at_three_matches() {
        let store = records(&["Aarav Shah", "Aarti Singh", "Aarush Roy", "Aarya Das", "Deepa Shah"]);
        let found = suggest(&store, "aar");
        assert_eq!(found.len(), SUGGESTION_LIMIT);
        assert_eq!(
            names(&found),
            vec!["Aarav Shah", "Aarti Singh", "Aarush Roy"]
        );
    }

    #[test]
    fn blank_query_suggests_nothing() {
        let store = records(&["Aarav Shah", "Aarti Singh"]);
        assert!(suggest(&store, "").is_empty());
        assert!(suggest(&store, "   ").is_empty());
    }

    #[test]
    fn suggestions_hidden_until_opened() {
        let store = records(&["Aarav Shah"]);
        let mut widget = Autocomplete::new();
        assert!(widget.visible_suggestions(&store).is_empty());

        widget.input("aar");
        assert_eq!(widget.visible_suggestions(&store).len(), 1);

        widget.click_outside();
        assert!(widget.visible_suggestions(&store).is_empty());
        assert_eq!(widget.text(), "aar");

        widget.focus();
        assert_eq!(widget.visible_suggestions(&store).len(), 1);
    }

    #[test]
    fn selecting_commits_exact_name_and_closes() {
        let store = records(&["Aarav Shah", "Aarti Singh"]);
        let mut widget = Autocomplete::new();
        widget.input("aarti");

        let picked = widget.visible_suggestions(&store)[0].clone();
        let committed = widget.select(&picked);

        assert_eq!(committed, "Aarti Singh");
        assert_eq!(widget.text(), "Aarti Singh");
        assert!(!widget.is_open());
    }

    #[test]
    fn submit_commits_raw_text() {
        let mut widget = Autocomplete::new();
        widget.input("aa");
        assert_eq!(widget.submit(), "aa");
        assert!(!widget.is_open());
    }
}
