//! Row providers and the built-in demo datasets.
//!
//! A listing does not care where its rows come from: anything implementing
//! [`RecordSource`] can supply them, whether a hardcoded table, a file, or a
//! future network fetch. [`StaticSource`] is the in-memory implementation
//! used by the demo datasets, validating rows against their schema before
//! handing them over.
//!
//! The demo datasets are the four tables of the hospital dashboard: patient
//! appointments, hospitalizations, the hospital directory, and the doctor
//! roster. Each comes with its schema and a fully configured
//! [`listing::Model`](crate::listing::Model).

use crate::listing;
use crate::record::{FieldKind, FieldSpec, Record, Schema};
use thiserror::Error;

/// Errors surfaced while fetching rows from a source.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceError {
    /// A row does not carry a field its schema requires.
    #[error("row {row} is missing required field {field:?}")]
    MissingField {
        /// Zero-based row position.
        row: usize,
        /// Name of the missing field.
        field: String,
    },
    /// A date field holds a value that does not parse as `DD.MM.YYYY`.
    #[error("row {row} has a malformed date in {field:?}: {value:?}")]
    MalformedDate {
        /// Zero-based row position.
        row: usize,
        /// Name of the date field.
        field: String,
        /// The offending value.
        value: String,
    },
}

/// Supplies the initial ordered row set of a listing.
pub trait RecordSource {
    /// Fetches all rows, in source order.
    fn fetch(&self) -> Result<Vec<Record>, SourceError>;
}

/// An in-memory source over literal rows.
///
/// Rows are validated against the schema on fetch: every schema field must
/// be present on every row, and date fields must parse. This keeps
/// data-shape mistakes at the boundary; everything downstream of a source is
/// infallible.
///
/// # Examples
///
/// ```rust
/// use medboard_widgets::record::{FieldKind, FieldSpec, Record, Schema};
/// use medboard_widgets::source::{RecordSource, StaticSource};
///
/// let schema = Schema::new(vec![FieldSpec::new("doctor", "Doctor", FieldKind::Text)]);
/// let source = StaticSource::new(
///     schema,
///     vec![Record::new().with("doctor", "Jane Smith")],
/// );
/// assert_eq!(source.fetch().unwrap().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct StaticSource {
    schema: Schema,
    rows: Vec<Record>,
}

impl StaticSource {
    /// Creates a source over the given rows.
    pub fn new(schema: Schema, rows: Vec<Record>) -> Self {
        Self { schema, rows }
    }
}

impl RecordSource for StaticSource {
    fn fetch(&self) -> Result<Vec<Record>, SourceError> {
        for (row, record) in self.rows.iter().enumerate() {
            for field in self.schema.fields() {
                let Some(value) = record.get(&field.name) else {
                    return Err(SourceError::MissingField {
                        row,
                        field: field.name.clone(),
                    });
                };
                if field.kind == FieldKind::Date && crate::sort::parse_date(value).is_none() {
                    return Err(SourceError::MalformedDate {
                        row,
                        field: field.name.clone(),
                        value: value.to_string(),
                    });
                }
            }
        }
        Ok(self.rows.clone())
    }
}

/// Rows per page used by every demo listing.
const DEMO_PER_PAGE: usize = 5;

/// Schema of the appointments table.
pub fn appointment_schema() -> Schema {
    Schema::new(vec![
        FieldSpec::new("doctor", "Doctor", FieldKind::Text),
        FieldSpec::new("location", "Location", FieldKind::Natural),
        FieldSpec::new("date", "Date", FieldKind::Date),
        FieldSpec::new("time", "Time", FieldKind::Text),
        FieldSpec::new("status", "Status", FieldKind::Text),
    ])
}

/// The 13 demo appointment rows: five upcoming, the rest archived.
pub fn appointment_rows() -> Vec<Record> {
    (1..=13)
        .map(|i| {
            Record::new()
                .with("doctor", format!("Specialization {i}"))
                .with("location", format!("Hospital {i}, address {i}"))
                .with("date", format!("{i:02}.01.2024"))
                .with("time", format!("{:02}:00", 8 + i))
                .with("status", if i <= 5 { "Upcoming" } else { "Archived" })
        })
        .collect()
}

/// The appointments listing, sorted-by-date seed included.
pub fn appointments() -> listing::Model {
    listing::Model::new(appointment_schema(), appointment_rows(), DEMO_PER_PAGE)
        .with_title("Appointments")
        .with_row_name("appointment", "appointments")
        .with_initial_sort("date")
}

/// Schema of the hospitalizations table.
pub fn hospitalization_schema() -> Schema {
    Schema::new(vec![
        FieldSpec::new("location", "Location", FieldKind::Natural),
        FieldSpec::new("start", "Start", FieldKind::Date),
        FieldSpec::new("end", "End", FieldKind::Date),
        FieldSpec::new("status", "Status", FieldKind::Text),
    ])
}

/// The 15 demo hospitalization rows, alternating ongoing and archived.
pub fn hospitalization_rows() -> Vec<Record> {
    (1..=15)
        .map(|i| {
            Record::new()
                .with("location", format!("Hospital {i}, address {i}"))
                .with("start", format!("{i:02}.01.2024"))
                .with("end", format!("{:02}.01.2024", i + 9))
                .with("status", if i % 2 == 1 { "Ongoing" } else { "Archived" })
        })
        .collect()
}

/// The hospitalizations listing.
pub fn hospitalizations() -> listing::Model {
    listing::Model::new(
        hospitalization_schema(),
        hospitalization_rows(),
        DEMO_PER_PAGE,
    )
    .with_title("Hospitalizations")
    .with_row_name("hospitalization", "hospitalizations")
    .with_initial_sort("location")
}

/// Schema of the hospital directory.
pub fn hospital_schema() -> Schema {
    Schema::new(vec![
        FieldSpec::new("hospital", "Hospital", FieldKind::Natural),
        FieldSpec::new("address", "Address", FieldKind::Natural),
        FieldSpec::new("laboratory", "Laboratory", FieldKind::YesNo),
        FieldSpec::new("wards", "Wards", FieldKind::Ratio),
    ])
}

/// The 12 demo hospitals with their laboratory flag and `occupied/total`
/// ward counts.
pub fn hospital_rows() -> Vec<Record> {
    const WARDS: [&str; 12] = [
        "10/20", "5/15", "8/25", "12/30", "15/18", "7/22", "9/24", "11/28", "14/21", "6/16",
        "13/26", "4/14",
    ];
    WARDS
        .iter()
        .enumerate()
        .map(|(i, wards)| {
            let letter = (b'A' + i as u8) as char;
            Record::new()
                .with("hospital", format!("Hospital {letter}"))
                .with("address", format!("Address {}", i + 1))
                .with("laboratory", if i % 2 == 0 { "Yes" } else { "No" })
                .with("wards", *wards)
        })
        .collect()
}

/// The hospital directory listing.
pub fn hospitals() -> listing::Model {
    listing::Model::new(hospital_schema(), hospital_rows(), DEMO_PER_PAGE)
        .with_title("Hospitals")
        .with_row_name("hospital", "hospitals")
        .with_initial_sort("laboratory")
}

/// Schema of the doctor roster.
pub fn doctor_schema() -> Schema {
    Schema::new(vec![
        FieldSpec::new("doctor", "Doctor", FieldKind::Text),
        FieldSpec::new("specialization", "Specialization", FieldKind::Text),
        FieldSpec::new("hospital", "Hospital", FieldKind::Text),
    ])
}

/// The 10 demo doctors.
pub fn doctor_rows() -> Vec<Record> {
    const DOCTORS: [(&str, &str, &str); 10] = [
        ("John Doe", "Ophthalmologist", "XYZ"),
        ("Jane Smith", "Cardiologist", "ABC"),
        ("Alice Johnson", "Dermatologist", "LMN"),
        ("Michael Brown", "Neurologist", "OPQ"),
        ("Emma Davis", "Pediatrician", "XYZ"),
        ("William Wilson", "Orthopedic", "ABC"),
        ("Olivia Martinez", "Gynecologist", "LMN"),
        ("James Anderson", "Oncologist", "OPQ"),
        ("Sophia Thomas", "Psychiatrist", "XYZ"),
        ("Benjamin Lee", "Urologist", "ABC"),
    ];
    DOCTORS
        .iter()
        .map(|(doctor, specialization, hospital)| {
            Record::new()
                .with("doctor", *doctor)
                .with("specialization", *specialization)
                .with("hospital", *hospital)
        })
        .collect()
}

/// The doctor roster listing. Rows are selectable so a host can offer a
/// "choose doctor" action; filter by `specialization` and `hospital` to
/// narrow it down.
pub fn doctors() -> listing::Model {
    listing::Model::new(doctor_schema(), doctor_rows(), DEMO_PER_PAGE)
        .with_title("Doctors")
        .with_row_name("doctor", "doctors")
}
