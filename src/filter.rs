//! Named row-visibility predicates.
//!
//! Filtering in this crate only toggles visibility: it never reorders items
//! and never changes pagination counts, which stay derived from the full row
//! set. A [`FilterSet`] holds one predicate per filter control (e.g. the
//! hospital and specialization dropdowns of the doctor roster); a row is
//! visible iff every predicate accepts it.

use crate::record::Record;
use std::collections::HashMap;

/// How a filter query is matched against a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Case-insensitive substring containment.
    #[default]
    Substring,
    /// Case-insensitive equality after trimming both sides.
    Exact,
}

/// A predicate over one record field, driven by a filter control's value.
///
/// An empty query matches every row, mirroring a cleared filter control. A
/// non-empty query against a field the record does not carry matches
/// nothing; predicates never fail.
///
/// # Examples
///
/// ```rust
/// use medboard_widgets::filter::FieldFilter;
/// use medboard_widgets::record::Record;
///
/// let filter = FieldFilter::new("specialization", "cardio");
/// let jane = Record::new().with("specialization", "Cardiologist");
/// let john = Record::new().with("specialization", "Ophthalmologist");
/// assert!(filter.matches(&jane));
/// assert!(!filter.matches(&john));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFilter {
    /// Field the filter inspects.
    pub field: String,
    /// Query text from the filter control.
    pub query: String,
    /// Matching mode.
    pub mode: MatchMode,
}

impl FieldFilter {
    /// Creates a substring filter for the given field and query.
    pub fn new(field: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            query: query.into(),
            mode: MatchMode::Substring,
        }
    }

    /// Sets the matching mode (builder pattern).
    pub fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Returns true if the record passes this filter.
    pub fn matches(&self, record: &Record) -> bool {
        if self.query.trim().is_empty() {
            return true;
        }
        let Some(value) = record.get(&self.field) else {
            return false;
        };
        match self.mode {
            MatchMode::Substring => value
                .to_lowercase()
                .contains(&self.query.trim().to_lowercase()),
            MatchMode::Exact => value.trim().eq_ignore_ascii_case(self.query.trim()),
        }
    }
}

/// All active filters of a listing, keyed by filter name.
///
/// Setting a filter under an existing name replaces the previous predicate,
/// the way re-selecting a dropdown value replaces its old selection.
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    filters: HashMap<String, FieldFilter>,
}

impl FilterSet {
    /// Creates an empty filter set (everything visible).
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs or replaces the named filter.
    pub fn set(&mut self, name: impl Into<String>, filter: FieldFilter) {
        self.filters.insert(name.into(), filter);
    }

    /// Removes the named filter. Unknown names are ignored.
    pub fn clear(&mut self, name: &str) {
        self.filters.remove(name);
    }

    /// Removes every filter.
    pub fn clear_all(&mut self) {
        self.filters.clear();
    }

    /// Returns the named filter, if installed.
    pub fn get(&self, name: &str) -> Option<&FieldFilter> {
        self.filters.get(name)
    }

    /// Returns true if no filters are installed.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Returns true if the record passes every installed filter.
    pub fn visible(&self, record: &Record) -> bool {
        self.filters.values().all(|f| f.matches(record))
    }
}
