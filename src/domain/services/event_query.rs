//! Event discovery: filtering and ordering of the event catalog.
//!
//! Every discovery view goes through [`run_query`]. The catalog is borrowed
//! and never reordered; each call returns a freshly allocated result.

use std::cmp::Ordering;

use chrono::NaiveDate;
use icu_collator::options::{CollatorOptions, Strength};
use icu_collator::{Collator, CollatorBorrowed, CollatorPreferences};
use tracing::{debug, warn};

use crate::domain::models::criteria::{DateRange, FilterCriteria, Place, Selection, SortKey};
use crate::domain::models::event::Event;

pub const NO_MATCHES_MESSAGE: &str = "No matching events";

pub fn result_label(count: usize) -> String {
    match count {
        1 => "1 event found".to_string(),
        n => format!("{n} events found"),
    }
}

pub fn run_query(catalog: &[Event], criteria: &FilterCriteria) -> Vec<Event> {
    if criteria.date_range != DateRange::All {
        debug!(date_range = %criteria.date_range, "date range filter has no predicate, ignoring");
    }

    let needle = criteria.normalized_query();
    let mut results: Vec<Event> = catalog
        .iter()
        .filter(|event| passes(event, criteria, needle.as_deref()))
        .cloned()
        .collect();

    sort_events(&mut results, criteria.sort);

    debug!(
        catalog = catalog.len(),
        matched = results.len(),
        sort = %criteria.sort,
        "event query evaluated"
    );
    results
}

pub fn matches(event: &Event, criteria: &FilterCriteria) -> bool {
    passes(event, criteria, criteria.normalized_query().as_deref())
}

fn passes(event: &Event, criteria: &FilterCriteria, needle: Option<&str>) -> bool {
    matches_text(event, needle)
        && criteria.format.admits(&event.format)
        && criteria.council.admits(&event.council)
        && criteria.specialty.admits_opt(event.specialty.as_ref())
        && matches_location(event, &criteria.location)
}

/// `needle` must already be trimmed and lowercased.
fn matches_text(event: &Event, needle: Option<&str>) -> bool {
    let Some(needle) = needle else {
        return true;
    };
    event.title.to_lowercase().contains(needle)
        || event
            .subtitle
            .as_deref()
            .is_some_and(|s| s.to_lowercase().contains(needle))
}

fn matches_location(event: &Event, location: &Selection<Place>) -> bool {
    match location {
        Selection::All => true,
        Selection::Only(Place::City(city)) => event.city == Some(*city),
        Selection::Only(Place::Online) => event.is_online(),
    }
}

/// Stable sort; events with equal keys keep their catalog order.
pub fn sort_events(events: &mut [Event], key: SortKey) {
    match key {
        SortKey::DateAsc => events.sort_by(|a, b| compare_dates(a.calendar_date(), b.calendar_date(), false)),
        SortKey::DateDesc => events.sort_by(|a, b| compare_dates(a.calendar_date(), b.calendar_date(), true)),
        SortKey::Title => match title_collator() {
            Some(collator) => events.sort_by(|a, b| collator.compare(&a.title, &b.title)),
            None => events.sort_by(|a, b| compare_folded(&a.title, &b.title)),
        },
    }
}

/// Root-locale collation at tertiary strength: accents sort next to their
/// base letter and lowercase precedes uppercase.
fn title_collator() -> Option<CollatorBorrowed<'static>> {
    let mut options = CollatorOptions::default();
    options.strength = Some(Strength::Tertiary);
    match Collator::try_new(CollatorPreferences::default(), options) {
        Ok(collator) => Some(collator),
        Err(e) => {
            warn!("title collator unavailable, falling back to case folding: {:?}", e);
            None
        }
    }
}

/// Unparsable dates sort after every valid date, whichever the direction.
fn compare_dates(a: Option<NaiveDate>, b: Option<NaiveDate>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) if descending => b.cmp(&a),
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare_folded(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::event::{City, Council, EventFormat, Specialty};
    use crate::infra::seed::seed_events;

    fn ids(events: &[Event]) -> Vec<&str> {
        events.iter().map(|e| e.id.as_str()).collect()
    }

    fn variant(id: &str, title: &str, date: &str) -> Event {
        let mut event = seed_events()[0].clone();
        event.id = id.to_string();
        event.title = title.to_string();
        event.date = date.to_string();
        event
    }

    #[test]
    fn test_all_criteria_return_whole_catalog() {
        let catalog = seed_events();

        let asc = run_query(&catalog, &FilterCriteria::default());
        assert_eq!(ids(&asc), vec!["1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12"]);

        let desc = run_query(&catalog, &FilterCriteria { sort: SortKey::DateDesc, ..Default::default() });
        assert_eq!(ids(&desc), vec!["12", "11", "10", "9", "8", "7", "6", "5", "4", "3", "2", "1"]);

        let by_title = run_query(&catalog, &FilterCriteria { sort: SortKey::Title, ..Default::default() });
        assert_eq!(ids(&by_title), vec!["2", "4", "1", "3", "10", "5", "9", "12", "7", "11", "6", "8"]);
    }

    #[test]
    fn test_online_format_ascending() {
        let criteria = FilterCriteria {
            format: Selection::Only(EventFormat::Online),
            ..Default::default()
        };
        let results = run_query(&seed_events(), &criteria);
        assert_eq!(ids(&results), vec!["2", "3", "5", "7", "9", "12"]);
    }

    #[test]
    fn test_text_query_ecmo() {
        let criteria = FilterCriteria { q: "ECMO".into(), ..Default::default() };
        let results = run_query(&seed_events(), &criteria);
        assert_eq!(ids(&results), vec!["3"]);
        assert_eq!(results[0].title, "ECMO Basics");
    }

    #[test]
    fn test_text_query_hits_subtitle_and_is_trimmed() {
        let criteria = FilterCriteria { q: "  septic SHOCK ".into(), ..Default::default() };
        assert_eq!(ids(&run_query(&seed_events(), &criteria)), vec!["6"]);
    }

    #[test]
    fn test_specialty_cardiology_by_title() {
        let criteria = FilterCriteria {
            specialty: Selection::Only(Specialty::Cardiology),
            sort: SortKey::Title,
            ..Default::default()
        };
        assert_eq!(ids(&run_query(&seed_events(), &criteria)), vec!["4"]);
    }

    #[test]
    fn test_text_constraint_never_adds_events() {
        let catalog = seed_events();
        let base = FilterCriteria {
            council: Selection::Only(Council::Dmc),
            ..Default::default()
        };
        let unconstrained = run_query(&catalog, &base);

        for q in ["care", "2025", "online", "workshop", "zzz", "e"] {
            let narrowed = run_query(&catalog, &FilterCriteria { q: q.into(), ..base.clone() });
            assert!(narrowed.len() <= unconstrained.len());
            for event in &narrowed {
                assert!(unconstrained.iter().any(|e| e.id == event.id), "{} leaked in for '{}'", event.id, q);
            }
        }
    }

    #[test]
    fn test_query_is_idempotent_and_leaves_catalog_alone() {
        let catalog = seed_events();
        let snapshot = catalog.clone();
        let criteria = FilterCriteria {
            q: "care".into(),
            sort: SortKey::Title,
            ..Default::default()
        };

        let first = run_query(&catalog, &criteria);
        let second = run_query(&catalog, &criteria);
        assert_eq!(first, second);
        assert_eq!(catalog, snapshot);
    }

    #[test]
    fn test_ties_keep_catalog_order_for_every_key() {
        let catalog = vec![
            variant("a", "Same Title", "2025-12-01"),
            variant("b", "Earlier", "2025-11-01"),
            variant("c", "same title", "2025-12-01"),
            variant("d", "Same Title", "2025-12-01"),
        ];

        let asc = run_query(&catalog, &FilterCriteria::default());
        assert_eq!(ids(&asc), vec!["b", "a", "c", "d"]);

        let desc = run_query(&catalog, &FilterCriteria { sort: SortKey::DateDesc, ..Default::default() });
        assert_eq!(ids(&desc), vec!["a", "c", "d", "b"]);

        let by_title = run_query(&catalog, &FilterCriteria { sort: SortKey::Title, ..Default::default() });
        assert_eq!(ids(&by_title), vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn test_title_sort_collates_accents_with_base_letter() {
        let catalog = vec![
            variant("f", "Falls Prevention", "2025-12-01"),
            variant("e1", "Échographie Basics", "2025-12-02"),
            variant("e0", "Echo Basics", "2025-12-03"),
        ];
        let by_title = run_query(&catalog, &FilterCriteria { sort: SortKey::Title, ..Default::default() });
        assert_eq!(ids(&by_title), vec!["e0", "e1", "f"]);
    }

    #[test]
    fn test_case_folded_fallback_order() {
        assert_eq!(compare_folded("ecmo basics", "ECMO Basics"), Ordering::Equal);
        assert_eq!(compare_folded("Airway", "cardio"), Ordering::Less);
    }

    #[test]
    fn test_invalid_dates_sort_last_in_both_directions() {
        let catalog = vec![
            variant("bad", "Broken", "20th of never"),
            variant("late", "Late", "2025-12-20"),
            variant("empty", "Empty", ""),
            variant("early", "Early", "2025-11-02"),
        ];

        let asc = run_query(&catalog, &FilterCriteria::default());
        assert_eq!(ids(&asc), vec!["early", "late", "bad", "empty"]);

        let desc = run_query(&catalog, &FilterCriteria { sort: SortKey::DateDesc, ..Default::default() });
        assert_eq!(ids(&desc), vec!["late", "early", "bad", "empty"]);
    }

    #[test]
    fn test_missing_subtitle_same_as_empty() {
        let mut without = variant("x", "Grand Rounds", "2025-12-01");
        without.subtitle = None;
        let mut empty = without.clone();
        empty.subtitle = Some(String::new());

        for q in ["rounds", "icu", ""] {
            let criteria = FilterCriteria { q: q.into(), ..Default::default() };
            assert_eq!(matches(&without, &criteria), matches(&empty, &criteria));
        }
        assert!(matches(&without, &FilterCriteria { q: "rounds".into(), ..Default::default() }));
    }

    #[test]
    fn test_location_city_and_online_sentinel() {
        let catalog = seed_events();

        let delhi = FilterCriteria { location: Selection::Only(Place::City(City::Delhi)), ..Default::default() };
        assert_eq!(ids(&run_query(&catalog, &delhi)), vec!["1", "10"]);

        let online = FilterCriteria { location: Selection::Only(Place::Online), ..Default::default() };
        assert_eq!(ids(&run_query(&catalog, &online)), vec!["2", "3", "5", "7", "9", "12"]);
    }

    #[test]
    fn test_missing_specialty_never_matches_specific_value() {
        let mut event = variant("x", "Untagged", "2025-12-01");
        event.specialty = None;

        assert!(matches(&event, &FilterCriteria::default()));
        let criteria = FilterCriteria {
            specialty: Selection::Only(Specialty::CriticalCare),
            ..Default::default()
        };
        assert!(!matches(&event, &criteria));
    }

    #[test]
    fn test_date_range_has_no_effect() {
        let catalog = seed_events();
        let everything = run_query(&catalog, &FilterCriteria::default());
        for range in [DateRange::ThisWeek, DateRange::ThisMonth, DateRange::Custom] {
            let criteria = FilterCriteria { date_range: range, ..Default::default() };
            assert_eq!(run_query(&catalog, &criteria), everything);
        }
    }

    #[test]
    fn test_result_label() {
        assert_eq!(result_label(0), "0 events found");
        assert_eq!(result_label(1), "1 event found");
        assert_eq!(result_label(6), "6 events found");
    }

    #[test]
    fn test_constraints_combine_with_and() {
        let criteria = FilterCriteria {
            format: Selection::Only(EventFormat::InPerson),
            council: Selection::Only(Council::Rmc),
            ..Default::default()
        };
        assert_eq!(ids(&run_query(&seed_events(), &criteria)), vec!["11"]);

        let none = FilterCriteria {
            format: Selection::Only(EventFormat::Online),
            location: Selection::Only(Place::City(City::Jaipur)),
            ..Default::default()
        };
        assert!(run_query(&seed_events(), &none).is_empty());
    }
}
