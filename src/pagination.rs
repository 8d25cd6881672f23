//! Pagination state and the page-control strip.
//!
//! This component tracks the current page of a listing and computes the
//! control strip shown under a table: a "Previous" control, a sliding window
//! of at most five page numbers with the current page marked active, and a
//! "Next" control. It does not render pages of content itself; pairing the
//! slice bounds with a row set is the listing's job.

use crate::key::{self, KeyMap as KeyMapTrait};
use bubbletea_rs::{KeyMsg, Msg};
use crossterm::event::KeyCode;

/// Maximum number of page-number controls shown at once.
const MAX_PAGE_CONTROLS: usize = 5;

/// Key bindings for pager navigation.
///
/// # Examples
///
/// ```rust
/// use medboard_widgets::pagination::PagerKeyMap;
/// use medboard_widgets::key::{Binding, KeyMap};
/// use crossterm::event::KeyCode;
///
/// let keymap = PagerKeyMap {
///     prev_page: Binding::new(vec![KeyCode::Char('a')]).with_help("a", "previous page"),
///     next_page: Binding::new(vec![KeyCode::Char('d')]).with_help("d", "next page"),
/// };
/// assert_eq!(keymap.short_help().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct PagerKeyMap {
    /// Navigate to the previous page. Default keys: PageUp, Left, 'h'.
    pub prev_page: key::Binding,
    /// Navigate to the next page. Default keys: PageDown, Right, 'l'.
    pub next_page: key::Binding,
}

impl Default for PagerKeyMap {
    fn default() -> Self {
        Self {
            prev_page: key::Binding::new(vec![KeyCode::PageUp, KeyCode::Left, KeyCode::Char('h')])
                .with_help("←/h", "prev page"),
            next_page: key::Binding::new(vec![
                KeyCode::PageDown,
                KeyCode::Right,
                KeyCode::Char('l'),
            ])
            .with_help("→/l", "next page"),
        }
    }
}

impl KeyMapTrait for PagerKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.prev_page, &self.next_page]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![vec![&self.prev_page, &self.next_page]]
    }
}

/// One control in the pagination strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    /// Go back one page; emitted only when a previous page exists.
    Previous,
    /// Jump to a specific page.
    Page {
        /// Target page number (1-based).
        number: usize,
        /// True for the current page.
        active: bool,
    },
    /// Advance one page; emitted only when a further page exists.
    Next,
}

/// Pagination state for one listing.
///
/// Pages are 1-based and the current page is always within
/// `[1, total_pages]`; `total_pages` is at least 1 even for an empty
/// listing. `per_page` is fixed per instance (minimum 1).
///
/// # Examples
///
/// ```rust
/// use medboard_widgets::pagination::Model;
///
/// let mut pager = Model::new().with_per_page(5).with_total_items(13);
/// assert_eq!(pager.total_pages(), 3);
/// assert!(pager.on_first_page());
///
/// pager.next_page();
/// assert_eq!(pager.page(), 2);
/// assert_eq!(pager.get_slice_bounds(13), (5, 10));
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    page: usize,
    per_page: usize,
    total_pages: usize,
    /// Key bindings.
    pub keymap: PagerKeyMap,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 1,
            total_pages: 1,
            keymap: PagerKeyMap::default(),
        }
    }
}

impl Model {
    /// Creates a pager with default settings: one item per page, one page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of items per page, minimum 1 (builder pattern).
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    /// Sets the total number of items and recomputes pages (builder pattern).
    pub fn with_total_items(mut self, items: usize) -> Self {
        self.set_total_items(items);
        self
    }

    /// Returns the current page (1-based).
    pub fn page(&self) -> usize {
        self.page
    }

    /// Returns the number of items per page.
    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Returns the total number of pages, always at least 1.
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Recomputes `total_pages` from an item count and clamps the current
    /// page back into range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use medboard_widgets::pagination::Model;
    ///
    /// let mut pager = Model::new().with_per_page(5).with_total_items(13);
    /// pager.go_to_page(3);
    ///
    /// // Shrinking the data pulls the page back into range.
    /// pager.set_total_items(6);
    /// assert_eq!(pager.total_pages(), 2);
    /// assert_eq!(pager.page(), 2);
    ///
    /// // An empty listing still has one page.
    /// pager.set_total_items(0);
    /// assert_eq!(pager.total_pages(), 1);
    /// assert_eq!(pager.page(), 1);
    /// ```
    pub fn set_total_items(&mut self, items: usize) {
        self.total_pages = if items == 0 {
            1
        } else {
            items.div_ceil(self.per_page)
        };
        self.page = self.page.clamp(1, self.total_pages);
    }

    /// Jumps to the given page.
    ///
    /// Callers only construct page numbers from the emitted controls, so an
    /// out-of-range `n` is a programming error; it is reported in debug
    /// builds and clamped so the page invariant holds regardless. Jumping to
    /// the current page is a no-op.
    pub fn go_to_page(&mut self, n: usize) {
        debug_assert!(
            (1..=self.total_pages).contains(&n),
            "page {n} out of range 1..={}",
            self.total_pages
        );
        self.page = n.clamp(1, self.total_pages);
    }

    /// Moves back one page, stopping at the first.
    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    /// Advances one page, stopping at the last.
    pub fn next_page(&mut self) {
        if !self.on_last_page() {
            self.page += 1;
        }
    }

    /// Returns true if the current page is the first.
    pub fn on_first_page(&self) -> bool {
        self.page == 1
    }

    /// Returns true if the current page is the last.
    pub fn on_last_page(&self) -> bool {
        self.page == self.total_pages
    }

    /// Returns `(start, end)` slice bounds for the current page over a
    /// collection of the given length. Never exceeds `length`, so the bounds
    /// are always safe to index with.
    pub fn get_slice_bounds(&self, length: usize) -> (usize, usize) {
        let start = ((self.page - 1) * self.per_page).min(length);
        let end = (start + self.per_page).min(length);
        (start, end)
    }

    /// Returns how many items the current page holds, which is less than
    /// `per_page` on a short last page and 0 for an empty collection.
    pub fn items_on_page(&self, total_items: usize) -> usize {
        let (start, end) = self.get_slice_bounds(total_items);
        end - start
    }

    /// Returns the sliding window of page numbers to display.
    ///
    /// At most five numbers are shown and the window always contains the
    /// current page:
    ///
    /// - five or fewer pages: all of them;
    /// - within the first three pages: `1..=5`;
    /// - within the last three pages: the final five;
    /// - otherwise: two pages either side of the current one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use medboard_widgets::pagination::Model;
    ///
    /// let mut pager = Model::new().with_per_page(5).with_total_items(60); // 12 pages
    /// assert_eq!(pager.window(), vec![1, 2, 3, 4, 5]);
    ///
    /// pager.go_to_page(7);
    /// assert_eq!(pager.window(), vec![5, 6, 7, 8, 9]);
    ///
    /// pager.go_to_page(11);
    /// assert_eq!(pager.window(), vec![8, 9, 10, 11, 12]);
    /// ```
    pub fn window(&self) -> Vec<usize> {
        let (start, end) = if self.total_pages <= MAX_PAGE_CONTROLS {
            (1, self.total_pages)
        } else if self.page <= MAX_PAGE_CONTROLS.div_ceil(2) {
            (1, MAX_PAGE_CONTROLS)
        } else if self.page + MAX_PAGE_CONTROLS / 2 >= self.total_pages {
            (self.total_pages - MAX_PAGE_CONTROLS + 1, self.total_pages)
        } else {
            (
                self.page - MAX_PAGE_CONTROLS / 2,
                self.page + MAX_PAGE_CONTROLS / 2,
            )
        };
        (start..=end).collect()
    }

    /// Returns the control strip for the current state: `Previous` only when
    /// a previous page exists, one numbered control per window entry with the
    /// current page active, and `Next` only when a further page exists.
    pub fn controls(&self) -> Vec<PageControl> {
        let mut controls = Vec::new();
        if self.page > 1 {
            controls.push(PageControl::Previous);
        }
        for number in self.window() {
            controls.push(PageControl::Page {
                number,
                active: number == self.page,
            });
        }
        if self.page < self.total_pages {
            controls.push(PageControl::Next);
        }
        controls
    }

    /// Applies a pagination control, as activated by a host UI.
    pub fn apply(&mut self, control: PageControl) {
        match control {
            PageControl::Previous => self.prev_page(),
            PageControl::Next => self.next_page(),
            PageControl::Page { number, .. } => self.go_to_page(number),
        }
    }

    /// Updates the pager from key messages using its key map.
    pub fn update(&mut self, msg: &Msg) {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.keymap.next_page.matches(key_msg) {
                self.next_page();
            } else if self.keymap.prev_page.matches(key_msg) {
                self.prev_page();
            }
        }
    }

    /// Renders the control strip as plain text, the active page in brackets.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use medboard_widgets::pagination::Model;
    ///
    /// let mut pager = Model::new().with_per_page(5).with_total_items(13);
    /// assert_eq!(pager.view(), "[1] 2 3 Next");
    ///
    /// pager.go_to_page(2);
    /// assert_eq!(pager.view(), "Previous 1 [2] 3 Next");
    /// ```
    pub fn view(&self) -> String {
        let parts: Vec<String> = self
            .controls()
            .into_iter()
            .map(|control| match control {
                PageControl::Previous => "Previous".to_string(),
                PageControl::Next => "Next".to_string(),
                PageControl::Page { number, active } => {
                    if active {
                        format!("[{number}]")
                    } else {
                        number.to_string()
                    }
                }
            })
            .collect();
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bubbletea_rs::KeyMsg;
    use crossterm::event::KeyModifiers;
    use proptest::prelude::*;

    fn pager(per_page: usize, items: usize) -> Model {
        Model::new().with_per_page(per_page).with_total_items(items)
    }

    #[test]
    fn test_thirteen_items_five_per_page() {
        let p = pager(5, 13);
        assert_eq!(p.total_pages(), 3);
        assert_eq!(p.get_slice_bounds(13), (0, 5));
        assert_eq!(
            p.controls(),
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
    fn test_previous_appears_after_leaving_first_page() {
        let mut p = pager(5, 13);
        p.next_page();
        let controls = p.controls();
        assert_eq!(controls.first(), Some(&PageControl::Previous));
        assert_eq!(controls.last(), Some(&PageControl::Next));
    }

    #[test]
    fn test_last_page_has_no_next() {
        let mut p = pager(5, 13);
        p.go_to_page(3);
        assert!(!p.controls().contains(&PageControl::Next));
        assert_eq!(p.items_on_page(13), 3);
        // Saturates at the last page.
        p.next_page();
        assert_eq!(p.page(), 3);
    }

    #[test]
    fn test_window_clamps_at_both_ends() {
        let mut p = pager(5, 60); // 12 pages
        assert_eq!(p.window(), vec![1, 2, 3, 4, 5]);
        p.go_to_page(3);
        assert_eq!(p.window(), vec![1, 2, 3, 4, 5]);
        p.go_to_page(4);
        assert_eq!(p.window(), vec![2, 3, 4, 5, 6]);
        p.go_to_page(10);
        assert_eq!(p.window(), vec![8, 9, 10, 11, 12]);
        p.go_to_page(12);
        assert_eq!(p.window(), vec![8, 9, 10, 11, 12]);
    }

    #[test]
    fn test_go_to_page_is_idempotent() {
        let mut p = pager(5, 13);
        p.go_to_page(2);
        let before = p.clone().view();
        p.go_to_page(2);
        assert_eq!(p.view(), before);
    }

    #[test]
    fn test_empty_listing_still_has_one_page() {
        let p = pager(5, 0);
        assert_eq!(p.total_pages(), 1);
        assert_eq!(p.get_slice_bounds(0), (0, 0));
        assert_eq!(p.items_on_page(0), 0);
        assert_eq!(p.view(), "[1]");
    }

    #[test]
    fn test_keymap_drives_navigation() {
        let mut p = pager(5, 13);
        let next: Msg = Box::new(KeyMsg {
            key: KeyCode::PageDown,
            modifiers: KeyModifiers::NONE,
        });
        let prev: Msg = Box::new(KeyMsg {
            key: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
        });
        p.update(&next);
        assert_eq!(p.page(), 2);
        p.update(&prev);
        assert_eq!(p.page(), 1);
        // Repeated prev on the first page stays put.
        p.update(&prev);
        assert_eq!(p.page(), 1);
    }

    proptest! {
        #[test]
        fn prop_total_pages_formula(per_page in 1usize..40, items in 0usize..400) {
            let p = pager(per_page, items);
            prop_assert_eq!(p.total_pages(), items.div_ceil(per_page).max(1));
        }

        #[test]
        fn prop_window_is_bounded_and_contains_current_page(
            per_page in 1usize..40,
            items in 0usize..400,
            jump in 0usize..400,
        ) {
            let mut p = pager(per_page, items);
            p.go_to_page((jump % p.total_pages()) + 1);
            let window = p.window();
            prop_assert!(window.len() <= 5);
            prop_assert!(window.contains(&p.page()));
            prop_assert!(window.iter().all(|&n| n >= 1 && n <= p.total_pages()));
        }

        #[test]
        fn prop_page_slice_never_exceeds_per_page(
            per_page in 1usize..40,
            items in 0usize..400,
            jump in 0usize..400,
        ) {
            let mut p = pager(per_page, items);
            p.go_to_page((jump % p.total_pages()) + 1);
            let (start, end) = p.get_slice_bounds(items);
            prop_assert!(end <= items);
            prop_assert!(end - start <= per_page);
            let expected = items
                .saturating_sub((p.page() - 1) * per_page)
                .min(per_page);
            prop_assert_eq!(p.items_on_page(items), expected);
        }
    }
}
