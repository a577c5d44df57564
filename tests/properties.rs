use proptest::prelude::*;

use docfind::filter::{ConsultationType, FilterState, SortBy};
use docfind::model::Doctor;
use docfind::{autocomplete, query, url_sync};

fn consultation_strategy() -> impl Strategy<Value = Option<ConsultationType>> {
    prop_oneof![
        Just(None),
        Just(Some(ConsultationType::VideoConsult)),
        Just(Some(ConsultationType::InClinic)),
    ]
}

fn sort_strategy() -> impl Strategy<Value = Option<SortBy>> {
    prop_oneof![Just(None), Just(Some(SortBy::Fees)), Just(Some(SortBy::Experience))]
}

// Speciality names never contain the list separator.
fn state_strategy() -> impl Strategy<Value = FilterState> {
    (
        "[ -~]{0,16}",
        consultation_strategy(),
        prop::collection::vec("[A-Za-z &/+%=?-]{1,12}", 0..4),
        sort_strategy(),
    )
        .prop_map(|(search, consultation, specialities, sort)| {
            FilterState::new()
                .with_search(search)
                .with_consultation_type(consultation)
                .with_specialities(specialities)
                .with_sort_by(sort)
        })
}

fn doctor_strategy() -> impl Strategy<Value = Doctor> {
    (
        0u32..1000,
        "[A-Za-z ]{1,12}",
        prop::collection::vec(prop::sample::select(vec!["Dentist", "Cardiologist", "ENT"]), 0..3),
        prop_oneof![Just(String::new()), (0u32..2000).prop_map(|f| format!("₹ {f}"))],
        prop_oneof![Just("N/A".to_string()), (0u32..40).prop_map(|y| format!("{y} Years"))],
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(id, name, specialities, fees, experience, video, clinic)| {
            Doctor::new(id.to_string(), name)
                .with_specialities(specialities)
                .with_fees(fees)
                .with_experience(experience)
                .with_consultation(video, clinic)
        })
}

proptest! {
    #[test]
    fn url_round_trip(state in state_strategy()) {
        let stored = url_sync::store(&state);
        prop_assert_eq!(url_sync::load(&stored), state);
    }

    #[test]
    fn default_state_keeps_every_record_in_order(records in prop::collection::vec(doctor_strategy(), 0..20)) {
        prop_assert_eq!(query::apply(&records, &FilterState::new()), records);
    }

    #[test]
    fn results_are_a_subset_of_the_records(
        records in prop::collection::vec(doctor_strategy(), 0..20),
        state in state_strategy(),
    ) {
        let results = query::apply(&records, &state);
        prop_assert!(results.len() <= records.len());
        for doctor in &results {
            prop_assert!(records.contains(doctor));
        }
    }

    #[test]
    fn fee_sort_is_non_decreasing(records in prop::collection::vec(doctor_strategy(), 0..20)) {
        let state = FilterState::new().with_sort_by(Some(SortBy::Fees));
        let fees: Vec<Option<u64>> = query::apply(&records, &state)
            .iter()
            .map(Doctor::fee_amount)
            .collect();
        let parsed = fees.iter().take_while(|f| f.is_some()).count();
        prop_assert!(fees[parsed..].iter().all(Option::is_none));
        prop_assert!(fees[..parsed].windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn suggestions_are_capped_and_match(
        records in prop::collection::vec(doctor_strategy(), 0..20),
        text in "[a-z]{1,3}",
    ) {
        let suggestions = autocomplete::suggest(&records, &text);
        prop_assert!(suggestions.len() <= autocomplete::SUGGESTION_LIMIT);
        for doctor in suggestions {
            prop_assert!(doctor.name.to_lowercase().contains(&text));
        }
    }
}
