#![warn(missing_docs)]

//! # medboard-widgets
//!
//! Sortable, filterable, paginated table components for hospital-management
//! terminal dashboards, built for [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! ## Overview
//!
//! A hospital dashboard is mostly tables: upcoming appointments, current
//! hospitalizations, the hospital directory, the doctor roster. Each one
//! needs the same few behaviors (slice the rows into pages, sort by a
//! column with type-aware comparisons, hide rows that fail the active
//! filters) and they differ only in their columns. This crate provides
//! that behavior once, as a schema-driven [`listing::Model`], instead of a
//! near-duplicate implementation per table.
//!
//! Components follow the Elm Architecture conventions of bubbletea-rs:
//! state lives in a `Model`, `update(&Msg)` reacts to key input, and
//! `view()` renders a string. All derived output is recomputed from state
//! on every call, so event handlers are idempotent and there is no
//! incremental display state to corrupt.
//!
//! ## Components
//!
//! - **[`listing`]**: the tabular list controller with pagination, column
//!   sorting, row filtering, row selection, and table rendering.
//! - **[`pagination`]**: page state plus the Previous / numbered-window /
//!   Next control strip.
//! - **[`record`]**: schema-driven rows; field descriptors decide how each
//!   column compares and displays.
//! - **[`sort`]**: stable, type-aware ordering for dates, Yes/No flags,
//!   `8/25` ward ratios, and natural text.
//! - **[`filter`]**: named visibility predicates over record fields.
//! - **[`source`]**: the row-provider seam and the built-in demo datasets.
//! - **[`key`]**: type-safe key bindings shared by the widgets.
//!
//! ## Example
//!
//! ```rust
//! use medboard_widgets::filter::FieldFilter;
//! use medboard_widgets::source;
//!
//! // A fully configured doctor roster over the demo data.
//! let mut roster = source::doctors();
//!
//! roster.set_filter(
//!     "specialization",
//!     FieldFilter::new("specialization", "cardiologist"),
//! );
//! let visible = roster.visible_page_rows();
//! assert_eq!(visible.len(), 1);
//! assert_eq!(visible[0].get("doctor"), Some("Jane Smith"));
//!
//! // Sorting and paging are driven the same way from a host application.
//! roster.clear_filter("specialization");
//! roster.sort_by("doctor");
//! println!("{}", roster.view());
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use medboard_widgets::prelude::*;
//! use medboard_widgets::source;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     appointments: Listing,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         (Self { appointments: source::appointments() }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.appointments.update(&msg);
//!         None
//!     }
//!
//!     fn view(&self) -> String {
//!         self.appointments.view()
//!     }
//! }
//! ```

pub mod filter;
pub mod key;
pub mod listing;
pub mod pagination;
pub mod record;
pub mod sort;
pub mod source;

pub use filter::{FieldFilter, FilterSet, MatchMode};
pub use key::{Binding, KeyMap};
pub use listing::{ListingKeyMap, ListingStyles, Model as Listing};
pub use pagination::{Model as Paginator, PageControl, PagerKeyMap};
pub use record::{FieldKind, FieldSpec, Record, Schema};
pub use sort::{SortCriteria, SortOrder};
pub use source::{RecordSource, SourceError, StaticSource};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use medboard_widgets::prelude::*;
///
/// let pager = Paginator::new().with_per_page(5).with_total_items(13);
/// assert_eq!(pager.total_pages(), 3);
/// ```
pub mod prelude {
    pub use crate::filter::{FieldFilter, FilterSet, MatchMode};
    pub use crate::key::{Binding, KeyMap};
    pub use crate::listing::{ListingKeyMap, ListingStyles, Model as Listing};
    pub use crate::pagination::{Model as Paginator, PageControl, PagerKeyMap};
    pub use crate::record::{FieldKind, FieldSpec, Record, Schema};
    pub use crate::sort::{SortCriteria, SortOrder};
    pub use crate::source::{RecordSource, SourceError, StaticSource};
}
