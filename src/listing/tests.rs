use super::Model;
use crate::filter::{FieldFilter, MatchMode};
use crate::pagination::PageControl;
use crate::record::{FieldKind, FieldSpec, Record, Schema};
use crate::sort::SortOrder;
use bubbletea_rs::{KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};

fn appointment_schema() -> Schema {
    Schema::new(vec![
        FieldSpec::new("doctor", "Doctor", FieldKind::Text),
        FieldSpec::new("date", "Date", FieldKind::Date),
        FieldSpec::new("status", "Status", FieldKind::Text),
    ])
}

fn appointment_rows(n: usize) -> Vec<Record> {
    (1..=n)
        .map(|i| {
            Record::new()
                .with("doctor", format!("Specialization {i}"))
                .with("date", format!("{i:02}.01.2024"))
                .with("status", if i <= 5 { "Upcoming" } else { "Archived" })
        })
        .collect()
}

fn appointments() -> Model {
    Model::new(appointment_schema(), appointment_rows(13), 5)
}

fn doctors() -> Model {
    let schema = Schema::new(vec![
        FieldSpec::new("doctor", "Doctor", FieldKind::Text),
        FieldSpec::new("specialization", "Specialization", FieldKind::Text),
        FieldSpec::new("hospital", "Hospital", FieldKind::Text),
    ]);
    let rows = vec![
        ("John Doe", "Ophthalmologist", "XYZ"),
        ("Jane Smith", "Cardiologist", "ABC"),
        ("Alice Johnson", "Dermatologist", "LMN"),
    ]
    .into_iter()
    .map(|(d, s, h)| {
        Record::new()
            .with("doctor", d)
            .with("specialization", s)
            .with("hospital", h)
    })
    .collect();
    Model::new(schema, rows, 5)
}

fn key(code: KeyCode) -> Msg {
    Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    })
}

fn doctors_on_page(listing: &Model) -> Vec<&str> {
    listing
        .visible_page_rows()
        .iter()
        .map(|r| r.get("doctor").unwrap())
        .collect()
}

#[test]
fn test_first_page_shows_first_five_of_thirteen() {
    let listing = appointments();
    assert_eq!(listing.pager().total_pages(), 3);
    assert_eq!(
        doctors_on_page(&listing),
        vec![
            "Specialization 1",
            "Specialization 2",
            "Specialization 3",
            "Specialization 4",
            "Specialization 5",
        ]
    );
    assert_eq!(
        listing.pager().controls(),
        vec![
            PageControl::Page {
                number: 1,
                active: true
            },
            PageControl::Page {
                number: 2,
                active: false
            },
            PageControl::Page {
                number: 3,
                active: false
            },
            PageControl::Next,
        ]
    );
}

#[test]
fn test_last_page_is_short() {
    let mut listing = appointments();
    listing.go_to_page(3);
    assert_eq!(listing.page_rows().len(), 3);
}

#[test]
fn test_empty_listing_renders_zero_rows() {
    let listing = Model::new(appointment_schema(), Vec::new(), 5);
    assert!(listing.page_rows().is_empty());
    assert_eq!(listing.pager().total_pages(), 1);
    assert!(listing.view().contains("No rows."));
}

#[test]
fn test_sort_toggles_ascending_descending_ascending() {
    let mut listing = appointments();
    listing.sort_by("date");
    assert_eq!(
        listing.sort_criteria().map(|c| c.order),
        Some(SortOrder::Ascending)
    );
    listing.sort_by("date");
    assert_eq!(
        listing.sort_criteria().map(|c| c.order),
        Some(SortOrder::Descending)
    );
    assert_eq!(
        listing.page_rows()[0].get("doctor"),
        Some("Specialization 13")
    );
    listing.sort_by("date");
    assert_eq!(
        listing.sort_criteria().map(|c| c.order),
        Some(SortOrder::Ascending)
    );
    assert_eq!(
        listing.page_rows()[0].get("doctor"),
        Some("Specialization 1")
    );
}

#[test]
fn test_sorting_a_different_column_starts_ascending() {
    let mut listing = appointments();
    listing.sort_by("date");
    listing.sort_by("date"); // now descending
    listing.sort_by("status");
    assert_eq!(
        listing.sort_criteria().map(|c| c.order),
        Some(SortOrder::Ascending)
    );
    assert_eq!(listing.page_rows()[0].get("status"), Some("Archived"));
}

#[test]
fn test_sort_is_stable_for_equal_keys() {
    let mut listing = appointments();
    listing.sort_by("status");
    // "Archived" sorts before "Upcoming"; within each status the prior
    // (date) order must survive.
    let dates: Vec<&str> = listing
        .page_rows()
        .iter()
        .map(|r| r.get("date").unwrap())
        .collect();
    assert_eq!(
        dates,
        vec![
            "06.01.2024",
            "07.01.2024",
            "08.01.2024",
            "09.01.2024",
            "10.01.2024"
        ]
    );
}

#[test]
fn test_sort_resets_to_first_page() {
    let mut listing = appointments();
    listing.go_to_page(3);
    listing.sort_by("date");
    assert_eq!(listing.pager().page(), 1);
}

#[test]
fn test_sort_indicator_follows_the_active_column() {
    let mut listing = appointments();
    assert_eq!(listing.sort_indicator("date"), None);
    listing.sort_by("date");
    assert_eq!(listing.sort_indicator("date"), Some(SortOrder::Ascending));
    assert_eq!(listing.sort_indicator("status"), None);
    listing.sort_by("date");
    assert_eq!(listing.sort_indicator("date"), Some(SortOrder::Descending));
    assert!(listing.view().contains("Date ▼"));
}

#[test]
fn test_filter_hides_rows_without_touching_pagination() {
    let mut listing = appointments();
    listing.set_filter("status", FieldFilter::new("status", "upcoming"));
    // Visibility only: the slice is still five rows, the pagination still
    // three pages; the filter just hides what it rejects.
    assert_eq!(listing.page_rows().len(), 5);
    assert_eq!(listing.visible_page_rows().len(), 5);
    assert_eq!(listing.pager().total_pages(), 3);
    assert_eq!(listing.hidden_count(), 8);

    listing.go_to_page(2);
    assert_eq!(listing.page_rows().len(), 5);
    assert!(listing.visible_page_rows().is_empty());

    listing.clear_filter("status");
    assert_eq!(listing.hidden_count(), 0);
    assert_eq!(listing.visible_page_rows().len(), 5);
}

#[test]
fn test_doctor_filter_by_specialization() {
    let mut listing = doctors();
    listing.set_filter(
        "specialization",
        FieldFilter::new("specialization", "cardiologist"),
    );
    assert_eq!(doctors_on_page(&listing), vec!["Jane Smith"]);
    assert_eq!(listing.len(), 3);
}

#[test]
fn test_combined_filters_require_every_match() {
    let mut listing = doctors();
    listing.set_filter("hospital", FieldFilter::new("hospital", "xyz"));
    listing.set_filter(
        "specialization",
        FieldFilter::new("specialization", "oph").with_mode(MatchMode::Substring),
    );
    assert_eq!(doctors_on_page(&listing), vec!["John Doe"]);

    // Replacing a named filter swaps the predicate.
    listing.set_filter("hospital", FieldFilter::new("hospital", "abc"));
    assert!(doctors_on_page(&listing).is_empty());
}

#[test]
fn test_set_items_clamps_the_page() {
    let mut listing = appointments();
    listing.go_to_page(3);
    listing.set_items(appointment_rows(4));
    assert_eq!(listing.pager().page(), 1);
    assert_eq!(listing.pager().total_pages(), 1);
    assert_eq!(listing.page_rows().len(), 4);
}

#[test]
fn test_set_items_reapplies_the_sort() {
    let mut listing = appointments();
    listing.sort_by("date");
    listing.sort_by("date"); // descending
    listing.set_items(appointment_rows(6));
    assert_eq!(
        listing.page_rows()[0].get("date"),
        Some("06.01.2024")
    );
}

#[test]
fn test_key_messages_drive_paging_and_selection() {
    let mut listing = appointments();
    listing.update(&key(KeyCode::PageDown));
    assert_eq!(listing.pager().page(), 2);
    listing.update(&key(KeyCode::PageUp));
    assert_eq!(listing.pager().page(), 1);

    listing.update(&key(KeyCode::Down));
    listing.update(&key(KeyCode::Down));
    assert_eq!(
        listing.selected_record().and_then(|r| r.get("doctor")),
        Some("Specialization 3")
    );
    listing.update(&key(KeyCode::Up));
    assert_eq!(
        listing.selected_record().and_then(|r| r.get("doctor")),
        Some("Specialization 2")
    );
}

#[test]
fn test_selection_stays_within_visible_rows() {
    let mut listing = doctors();
    for _ in 0..10 {
        listing.select_next();
    }
    assert_eq!(
        listing.selected_record().and_then(|r| r.get("doctor")),
        Some("Alice Johnson")
    );

    // Filtering down to one visible row pulls the selection back in.
    listing.set_filter(
        "specialization",
        FieldFilter::new("specialization", "cardiologist"),
    );
    assert_eq!(
        listing.selected_record().and_then(|r| r.get("doctor")),
        Some("Jane Smith")
    );
}

#[test]
fn test_page_change_resets_selection() {
    let mut listing = appointments();
    listing.select_next();
    listing.next_page();
    assert_eq!(
        listing.selected_record().and_then(|r| r.get("doctor")),
        Some("Specialization 6")
    );
}

#[test]
fn test_view_contains_headers_rows_and_pagination() {
    let mut listing = appointments().with_title("Appointments");
    let view = listing.view();
    assert!(view.contains("Appointments"));
    assert!(view.contains("Doctor"));
    assert!(view.contains("Specialization 1"));
    assert!(!view.contains("Specialization 6"));
    assert!(view.contains("Next"));
    assert!(!view.contains("Previous"));

    listing.go_to_page(2);
    let view = listing.view();
    assert!(view.contains("Specialization 6"));
    assert!(view.contains("Previous"));
}

#[test]
fn test_status_line_reports_hidden_rows() {
    let mut listing = appointments().with_row_name("appointment", "appointments");
    assert!(listing.view().contains("13 appointments"));
    listing.set_filter("status", FieldFilter::new("status", "upcoming"));
    assert!(listing.view().contains("8 hidden"));
}
