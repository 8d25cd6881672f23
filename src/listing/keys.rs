//! Key bindings for listing navigation.

use crate::key::{self, KeyMap as KeyMapTrait};
use crossterm::event::KeyCode;

/// Key bindings for moving between pages and rows of a listing.
///
/// # Examples
///
/// ```rust
/// use medboard_widgets::listing::ListingKeyMap;
/// use medboard_widgets::key::KeyMap;
///
/// let keymap = ListingKeyMap::default();
/// assert_eq!(keymap.short_help().len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct ListingKeyMap {
    /// Move the row selection up. Default keys: Up, 'k'.
    pub row_up: key::Binding,
    /// Move the row selection down. Default keys: Down, 'j'.
    pub row_down: key::Binding,
    /// Go to the previous page. Default keys: PageUp, Left, 'h'.
    pub prev_page: key::Binding,
    /// Go to the next page. Default keys: PageDown, Right, 'l'.
    pub next_page: key::Binding,
}

impl Default for ListingKeyMap {
    fn default() -> Self {
        Self {
            row_up: key::Binding::new(vec![KeyCode::Up, KeyCode::Char('k')])
                .with_help("↑/k", "row up"),
            row_down: key::Binding::new(vec![KeyCode::Down, KeyCode::Char('j')])
                .with_help("↓/j", "row down"),
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

impl KeyMapTrait for ListingKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![
            &self.row_up,
            &self.row_down,
            &self.prev_page,
            &self.next_page,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![&self.row_up, &self.row_down],
            vec![&self.prev_page, &self.next_page],
        ]
    }
}
