//! The tabular list controller: one widget subsuming every table of the
//! hospital front end.
//!
//! A `listing::Model` owns the ordered row set of one table together with its
//! sort state, current page, filters, and row selection, and renders the
//! table plus its pagination strip. The per-entity behavior (which fields
//! exist, how each sorts, what the columns are called) lives entirely in the
//! [`Schema`](crate::record::Schema), so appointments, hospitalizations,
//! hospitals and doctor rosters are all instances of the same controller
//! rather than near-duplicate implementations.
//!
//! ## State model
//!
//! - Sorting stably reorders the full row set and resets to the first page.
//!   Clicking the sorted column again flips the direction; any other column
//!   starts ascending.
//! - Filtering only toggles row visibility at render time. It never reorders
//!   rows and never changes pagination counts, which stay derived from the
//!   full row set.
//! - The current page is always within `[1, total_pages]`, re-clamped
//!   whenever the row set changes.
//!
//! Every view is recomputed in full from this state, so repeated events are
//! idempotent and there is no incremental display state to corrupt.
//!
//! ## Example
//!
//! ```rust
//! use medboard_widgets::listing::Model;
//! use medboard_widgets::record::{FieldKind, FieldSpec, Record, Schema};
//!
//! let schema = Schema::new(vec![
//!     FieldSpec::new("doctor", "Doctor", FieldKind::Text),
//!     FieldSpec::new("specialization", "Specialization", FieldKind::Text),
//! ]);
//! let rows = vec![
//!     Record::new().with("doctor", "Jane Smith").with("specialization", "Cardiologist"),
//!     Record::new().with("doctor", "John Doe").with("specialization", "Ophthalmologist"),
//! ];
//! let mut listing = Model::new(schema, rows, 5).with_title("Doctors");
//!
//! listing.sort_by("doctor");
//! assert_eq!(listing.page_rows().len(), 2);
//! ```

mod keys;
mod model;
mod rendering;
pub mod style;

pub use keys::ListingKeyMap;
pub use model::Model;
pub use style::ListingStyles;

#[cfg(test)]
mod tests;
