//! Ordering of records by a single field.
//!
//! Comparison semantics are chosen by the field's [`FieldKind`]; the sort
//! itself is stable, so rows with equal keys keep their prior relative order.
//! Values that cannot be parsed for their kind (a malformed date, a ward
//! count without a leading number) sort after every parseable value in both
//! directions, as do rows missing the field entirely. That keeps bad source
//! data visible at the end of the table instead of failing the sort.

use crate::record::{FieldKind, Record, Schema};
use chrono::NaiveDate;
use std::cmp::Ordering;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortOrder {
    /// Returns the opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ord,
            SortOrder::Descending => ord.reverse(),
        }
    }
}

/// The field and direction a listing is currently sorted on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortCriteria {
    /// Field name being sorted on.
    pub key: String,
    /// Sort direction.
    pub order: SortOrder,
}

impl SortCriteria {
    /// Creates an ascending criteria for the given field.
    pub fn ascending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            order: SortOrder::Ascending,
        }
    }
}

/// Compares two field values under the given kind and direction.
///
/// For `Date`, `YesNo` and `Ratio` kinds, unparseable values compare greater
/// than parseable ones regardless of direction, so they always land at the
/// bottom of the table.
///
/// # Examples
///
/// ```rust
/// use medboard_widgets::record::FieldKind;
/// use medboard_widgets::sort::{compare, SortOrder};
/// use std::cmp::Ordering;
///
/// // Ward ratios compare by the integer before the slash.
/// assert_eq!(
///     compare(FieldKind::Ratio, "8/25", "10/20", SortOrder::Ascending),
///     Ordering::Less
/// );
/// // "Yes" sorts before "No" ascending.
/// assert_eq!(
///     compare(FieldKind::YesNo, "Yes", "No", SortOrder::Ascending),
///     Ordering::Less
/// );
/// ```
pub fn compare(kind: FieldKind, a: &str, b: &str, order: SortOrder) -> Ordering {
    match kind {
        FieldKind::Text => order.apply(a.cmp(b)),
        FieldKind::Natural => order.apply(natural_cmp(a, b)),
        FieldKind::Date => keyed(parse_date(a), parse_date(b), order),
        FieldKind::YesNo => keyed(parse_yes_no(a), parse_yes_no(b), order),
        FieldKind::Ratio => keyed(parse_ratio(a), parse_ratio(b), order),
    }
}

/// Stably sorts `items` in place by `criteria`, using the field's kind from
/// the schema. Rows missing the sort field sort last in both directions.
///
/// A criteria naming a field the schema does not carry leaves the order
/// untouched; callers only construct criteria from schema fields.
pub fn sort_records(items: &mut [Record], schema: &Schema, criteria: &SortCriteria) {
    let Some(spec) = schema.field(&criteria.key) else {
        return;
    };
    let kind = spec.kind;
    let order = criteria.order;
    items.sort_by(|a, b| {
        match (a.get(&criteria.key), b.get(&criteria.key)) {
            (Some(av), Some(bv)) => compare(kind, av, bv, order),
            // Missing fields always sink to the bottom.
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
}

/// Applies the direction to parsed keys, keeping unparseable values last.
fn keyed<K: Ord>(a: Option<K>, b: Option<K>, order: SortOrder) -> Ordering {
    match (a, b) {
        (Some(ka), Some(kb)) => order.apply(ka.cmp(&kb)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

pub(crate) fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%d.%m.%Y").ok()
}

fn parse_yes_no(value: &str) -> Option<u8> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("yes") {
        Some(0)
    } else if value.eq_ignore_ascii_case("no") {
        Some(1)
    } else {
        None
    }
}

fn parse_ratio(value: &str) -> Option<i64> {
    value.split('/').next()?.trim().parse().ok()
}

/// Case-insensitive comparison with digit runs compared numerically.
fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut ca = a.chars().peekable();
    let mut cb = b.chars().peekable();
    loop {
        match (ca.peek().copied(), cb.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                if x.is_ascii_digit() && y.is_ascii_digit() {
                    let run_a = take_digit_run(&mut ca);
                    let run_b = take_digit_run(&mut cb);
                    let ord = cmp_digit_runs(&run_a, &run_b);
                    if ord != Ordering::Equal {
                        return ord;
                    }
                } else {
                    let ord = x.to_lowercase().cmp(y.to_lowercase());
                    if ord != Ordering::Equal {
                        return ord;
                    }
                    ca.next();
                    cb.next();
                }
            }
        }
    }
}

fn take_digit_run(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.peek().copied() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        chars.next();
    }
    run
}

// Compares digit runs of arbitrary length without parsing into an integer:
// strip leading zeros, then a longer run is larger, then compare lexically.
fn cmp_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
