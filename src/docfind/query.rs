//! Query engine: filter and sort the record store for a given [`FilterState`].
//!
//! The predicates are independent conjunctions (name, consultation type,
//! specialities). Sorting happens after filtering and is stable, so records
//! that compare equal keep their store order. Records whose fee or experience
//! text carries no digits sort after every parseable record in both
//! directions.

use crate::filter::{ConsultationType, FilterState, SortBy};
use crate::model::Doctor;
use std::cmp::Ordering;
use tracing::debug;

pub fn apply(records: &[Doctor], state: &FilterState) -> Vec<Doctor> {
    let term = state.search.trim().to_lowercase();

    let mut result: Vec<Doctor> = records
        .iter()
        .filter(|doctor| matches_name(doctor, &term))
        .filter(|doctor| matches_consultation(doctor, state.consultation_type))
        .filter(|doctor| matches_specialities(doctor, &state.specialities))
        .cloned()
        .collect();

    match state.sort_by {
        Some(SortBy::Fees) => {
            result.sort_by(|a, b| compare_unparsed_last(a.fee_amount(), b.fee_amount(), false))
        }
        Some(SortBy::Experience) => result.sort_by(|a, b| {
            compare_unparsed_last(a.experience_years(), b.experience_years(), true)
        }),
        None => {}
    }

    debug!(
        total = records.len(),
        matched = result.len(),
        "applied filters"
    );
    result
}

/// `term` must already be trimmed and lower-cased.
fn matches_name(doctor: &Doctor, term: &str) -> bool {
    term.is_empty() || doctor.name.to_lowercase().contains(term)
}

fn matches_consultation(doctor: &Doctor, consultation_type: Option<ConsultationType>) -> bool {
    match consultation_type {
        None => true,
        Some(ConsultationType::VideoConsult) => doctor.video_consult,
        Some(ConsultationType::InClinic) => doctor.in_clinic,
    }
}

/// Any overlap between the record's specialities and the selection passes.
fn matches_specialities(doctor: &Doctor, selected: &[String]) -> bool {
    selected.is_empty()
        || doctor
            .speciality_names()
            .any(|name| selected.iter().any(|s| s == name))
}

fn compare_unparsed_last(a: Option<u64>, b: Option<u64>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) if descending => b.cmp(&a),
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
