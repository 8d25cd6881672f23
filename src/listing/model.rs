//! The listing state and its operations.

use super::keys::ListingKeyMap;
use super::style::ListingStyles;
use crate::filter::{FieldFilter, FilterSet};
use crate::pagination;
use crate::record::{Record, Schema};
use crate::sort::{sort_records, SortCriteria, SortOrder};
use bubbletea_rs::{KeyMsg, Msg};
use tracing::debug;

/// A paginated, sortable, filterable table of [`Record`]s.
///
/// One instance owns the complete state of one table. All derived output
/// (page rows, pagination controls, the rendered view) is recomputed from
/// this state on demand, so there are no partial updates to keep
/// consistent and repeated events are harmless.
///
/// # Examples
///
/// ```rust
/// use medboard_widgets::listing::Model;
/// use medboard_widgets::record::{FieldKind, FieldSpec, Record, Schema};
///
/// let schema = Schema::new(vec![
///     FieldSpec::new("location", "Location", FieldKind::Natural),
///     FieldSpec::new("start", "Start", FieldKind::Date),
/// ]);
/// let rows: Vec<Record> = (1..=7)
///     .map(|i| {
///         Record::new()
///             .with("location", format!("Hospital {i}"))
///             .with("start", format!("{i:02}.01.2024"))
///     })
///     .collect();
///
/// let mut listing = Model::new(schema, rows, 5).with_title("Hospitalizations");
/// assert_eq!(listing.page_rows().len(), 5);
///
/// listing.next_page();
/// assert_eq!(listing.page_rows().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    pub(super) title: String,
    pub(super) schema: Schema,
    pub(super) items: Vec<Record>,
    pub(super) pager: pagination::Model,
    pub(super) sort: Option<SortCriteria>,
    pub(super) filters: FilterSet,
    /// Position of the selected row within the visible rows of the page.
    pub(super) selected: usize,
    pub(super) row_name: (String, String),
    /// Key bindings.
    pub keymap: ListingKeyMap,
    /// Styles.
    pub styles: ListingStyles,
}

impl Model {
    /// Creates a listing over the given rows, `per_page` rows to a page.
    pub fn new(schema: Schema, items: Vec<Record>, per_page: usize) -> Self {
        let pager = pagination::Model::new()
            .with_per_page(per_page)
            .with_total_items(items.len());
        Self {
            title: String::new(),
            schema,
            items,
            pager,
            sort: None,
            filters: FilterSet::new(),
            selected: 0,
            row_name: ("row".to_string(), "rows".to_string()),
            keymap: ListingKeyMap::default(),
            styles: ListingStyles::default(),
        }
    }

    /// Sets the listing title (builder pattern).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Seeds the sort criteria without reordering the rows, so the first
    /// `sort_by` on that field flips to descending the way a pre-sorted
    /// data set behaves (builder pattern).
    pub fn with_initial_sort(mut self, key: impl Into<String>) -> Self {
        self.sort = Some(SortCriteria::ascending(key));
        self
    }

    /// Sets the noun used in the status line, e.g. `("appointment",
    /// "appointments")` (builder pattern).
    pub fn with_row_name(
        mut self,
        singular: impl Into<String>,
        plural: impl Into<String>,
    ) -> Self {
        self.row_name = (singular.into(), plural.into());
        self
    }

    /// Returns the listing title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the schema describing this listing's columns.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Returns the pagination state.
    pub fn pager(&self) -> &pagination::Model {
        &self.pager
    }

    /// Returns the current sort criteria, if any.
    pub fn sort_criteria(&self) -> Option<&SortCriteria> {
        self.sort.as_ref()
    }

    /// Returns the total number of rows, visible or not.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the listing holds no rows at all.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replaces the row set, re-applies the current sort criteria, and
    /// clamps the page back into range.
    pub fn set_items(&mut self, items: Vec<Record>) {
        self.items = items;
        if let Some(criteria) = &self.sort {
            sort_records(&mut self.items, &self.schema, criteria);
        }
        self.pager.set_total_items(self.items.len());
        self.clamp_selection();
        debug!(rows = self.items.len(), "listing rows replaced");
    }

    /// Sorts the full row set by the given schema field.
    ///
    /// Sorting the already-ascending field flips it to descending; every
    /// other case (different field, currently descending, or no prior sort)
    /// sorts ascending. The sort is stable, reorders all rows regardless of
    /// filter visibility, and resets to the first page.
    ///
    /// `key` must name a schema field; an unknown key is a programming
    /// error and leaves the listing untouched.
    pub fn sort_by(&mut self, key: &str) {
        debug_assert!(self.schema.has_field(key), "unknown sort field {key:?}");
        if !self.schema.has_field(key) {
            return;
        }
        let order = match &self.sort {
            Some(c) if c.key == key && c.order == SortOrder::Ascending => SortOrder::Descending,
            _ => SortOrder::Ascending,
        };
        let criteria = SortCriteria {
            key: key.to_string(),
            order,
        };
        sort_records(&mut self.items, &self.schema, &criteria);
        debug!(key, ?order, "listing sorted");
        self.sort = Some(criteria);
        self.pager.go_to_page(1);
        self.selected = 0;
    }

    /// Returns the sort direction shown on the given column's header, if it
    /// is the sorted column.
    pub fn sort_indicator(&self, key: &str) -> Option<SortOrder> {
        self.sort
            .as_ref()
            .filter(|c| c.key == key)
            .map(|c| c.order)
    }

    /// Jumps to the given page (1-based). Jumping to the current page is a
    /// no-op.
    pub fn go_to_page(&mut self, n: usize) {
        self.pager.go_to_page(n);
        self.selected = 0;
        debug!(page = self.pager.page(), "listing page changed");
    }

    /// Advances one page, stopping at the last.
    pub fn next_page(&mut self) {
        self.pager.next_page();
        self.selected = 0;
    }

    /// Moves back one page, stopping at the first.
    pub fn prev_page(&mut self) {
        self.pager.prev_page();
        self.selected = 0;
    }

    /// Installs or replaces a named filter.
    ///
    /// Filtering only changes which rows render: the row order, the page
    /// and the pagination counts all stay put.
    pub fn set_filter(&mut self, name: impl Into<String>, filter: FieldFilter) {
        let name = name.into();
        debug!(
            filter = name.as_str(),
            field = filter.field.as_str(),
            query = filter.query.as_str(),
            "listing filter set"
        );
        self.filters.set(name, filter);
        self.clamp_selection();
    }

    /// Removes a named filter. Unknown names are ignored.
    pub fn clear_filter(&mut self, name: &str) {
        self.filters.clear(name);
        self.clamp_selection();
    }

    /// Removes every filter.
    pub fn clear_filters(&mut self) {
        self.filters.clear_all();
        self.clamp_selection();
    }

    /// Returns the named filter, if installed.
    pub fn filter(&self, name: &str) -> Option<&FieldFilter> {
        self.filters.get(name)
    }

    /// Returns the full slice of rows for the current page, before filter
    /// visibility is applied. At most `per_page` rows; empty when the
    /// listing is empty.
    pub fn page_rows(&self) -> &[Record] {
        let (start, end) = self.pager.get_slice_bounds(self.items.len());
        &self.items[start..end]
    }

    /// Returns the rows of the current page that pass every filter, in
    /// order. These are the rows a view actually shows.
    pub fn visible_page_rows(&self) -> Vec<&Record> {
        self.page_rows()
            .iter()
            .filter(|r| self.filters.visible(r))
            .collect()
    }

    /// Returns true if the row passes every installed filter.
    pub fn row_visible(&self, record: &Record) -> bool {
        self.filters.visible(record)
    }

    /// Returns how many rows of the full set the filters currently hide.
    pub fn hidden_count(&self) -> usize {
        self.items
            .iter()
            .filter(|r| !self.filters.visible(r))
            .count()
    }

    /// Moves the row selection down within the visible rows of the page.
    pub fn select_next(&mut self) {
        let visible = self.visible_page_rows().len();
        if visible > 0 && self.selected + 1 < visible {
            self.selected += 1;
        }
    }

    /// Moves the row selection up within the visible rows of the page.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Returns the selected visible row, if any row is visible.
    pub fn selected_record(&self) -> Option<&Record> {
        self.visible_page_rows().get(self.selected).copied()
    }

    /// Updates the listing from key messages: page navigation and row
    /// selection per the key map.
    pub fn update(&mut self, msg: &Msg) {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.keymap.next_page.matches(key_msg) {
                self.next_page();
            } else if self.keymap.prev_page.matches(key_msg) {
                self.prev_page();
            } else if self.keymap.row_down.matches(key_msg) {
                self.select_next();
            } else if self.keymap.row_up.matches(key_msg) {
                self.select_prev();
            }
        }
    }

    fn clamp_selection(&mut self) {
        let visible = self.visible_page_rows().len();
        if visible == 0 {
            self.selected = 0;
        } else if self.selected >= visible {
            self.selected = visible - 1;
        }
    }
}
