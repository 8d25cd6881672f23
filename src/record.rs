//! Records and the field descriptors that drive sorting and display.
//!
//! Every table in this crate is generic over its row shape: a [`Record`] is an
//! ordered mapping from field name to string value, and a [`Schema`] describes
//! which fields a list type carries and how each one compares and renders.
//! One schema instance is shared by all rows of a listing (appointments,
//! hospitalizations, hospitals, doctor rosters, ...), so adding a new list
//! type means writing a schema, not a new widget.

/// Comparison and display semantics for a single record field.
///
/// The kind decides how [`crate::sort`] orders two values of the field:
///
/// - `Text` compares strings as-is (case-sensitive).
/// - `Natural` compares case-insensitively with digit runs compared as
///   numbers, so `"Hospital 2"` sorts before `"Hospital 10"`.
/// - `Date` parses `DD.MM.YYYY` values and compares chronologically.
/// - `YesNo` is a two-valued enumeration where `"Yes"` sorts before `"No"`.
/// - `Ratio` holds values like `"8/25"` (occupied/total ward counts) and
///   compares by the integer before the first slash.
///
/// For `Date`, `YesNo` and `Ratio`, values that fail to parse are treated as
/// a data-quality defect in the source row and sort after every parseable
/// value, in both sort directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    /// Plain case-sensitive text.
    #[default]
    Text,
    /// Case-insensitive, numeric-aware collation.
    Natural,
    /// Calendar date in `DD.MM.YYYY` form.
    Date,
    /// `"Yes"`/`"No"` enumeration.
    YesNo,
    /// Mixed alphanumeric `occupied/total` value, compared by the leading
    /// integer component.
    Ratio,
}

/// Describes one column of a list type.
///
/// # Examples
///
/// ```rust
/// use medboard_widgets::record::{FieldKind, FieldSpec};
///
/// let spec = FieldSpec::new("date", "Date", FieldKind::Date);
/// assert_eq!(spec.title, "Date");
/// ```
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Field name used as the lookup key on every record.
    pub name: String,
    /// Column title shown in the table header.
    pub title: String,
    /// Comparison semantics for the field.
    pub kind: FieldKind,
}

impl FieldSpec {
    /// Creates a field descriptor.
    pub fn new(name: impl Into<String>, title: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            kind,
        }
    }
}

/// The ordered set of fields a list type carries.
///
/// Field order is display order. Lookup by name is linear; schemas hold a
/// handful of fields at most.
///
/// # Examples
///
/// ```rust
/// use medboard_widgets::record::{FieldKind, FieldSpec, Schema};
///
/// let schema = Schema::new(vec![
///     FieldSpec::new("doctor", "Doctor", FieldKind::Text),
///     FieldSpec::new("date", "Date", FieldKind::Date),
/// ]);
/// assert_eq!(schema.field("date").unwrap().kind, FieldKind::Date);
/// assert!(schema.field("missing").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<FieldSpec>,
}

impl Schema {
    /// Creates a schema from its field descriptors.
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    /// Returns the fields in display order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Looks up a field descriptor by name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns true if the schema carries a field of the given name.
    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }
}

/// One row of domain data: field name to value, in insertion order.
///
/// Records are deliberately stringly-typed; the [`Schema`] supplies the
/// semantics. Missing fields are represented by absence, not by empty
/// strings, so `get` returns `Option`.
///
/// # Examples
///
/// ```rust
/// use medboard_widgets::record::Record;
///
/// let row = Record::new()
///     .with("doctor", "Jane Smith")
///     .with("specialization", "Cardiologist");
/// assert_eq!(row.get("doctor"), Some("Jane Smith"));
/// assert_eq!(row.get("hospital"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a field value (builder pattern).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Adds or replaces a field value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(slot) = self.fields.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.fields.push((name, value));
        }
    }

    /// Returns the value of a field, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the number of fields on this record.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_existing_field() {
        let mut row = Record::new().with("status", "Upcoming");
        row.set("status", "Archived");
        assert_eq!(row.get("status"), Some("Archived"));
        assert_eq!(row.len(), 1);
    }

    #[test]
    fn test_schema_lookup() {
        let schema = Schema::new(vec![
            FieldSpec::new("laboratory", "Laboratory", FieldKind::YesNo),
            FieldSpec::new("wards", "Wards", FieldKind::Ratio),
        ]);
        assert!(schema.has_field("wards"));
        assert_eq!(schema.field("laboratory").unwrap().kind, FieldKind::YesNo);
        assert_eq!(schema.fields().len(), 2);
    }
}
