//! Styling for listing rendering.
//!
//! Built on lipgloss; every default uses `AdaptiveColor` so tables stay
//! readable on both light and dark terminal themes. Replace individual
//! styles to retheme a listing without touching its logic.

use lipgloss_extras::prelude::*;

/// Unicode bullet (•) separating the parts of the status line.
pub const BULLET: &str = "•";

/// Styles for the visual elements of a listing.
///
/// # Examples
///
/// ```rust
/// use medboard_widgets::listing::ListingStyles;
/// use lipgloss_extras::prelude::*;
///
/// let mut styles = ListingStyles::default();
/// styles.header = Style::new().bold(true).underline(true);
/// ```
#[derive(Debug, Clone)]
pub struct ListingStyles {
    /// The listing title.
    pub title: Style,
    /// Status line under the title (row counts, hidden-row count).
    pub status_bar: Style,
    /// Column header row, sort indicator included.
    pub header: Style,
    /// The currently selected row.
    pub selected_row: Style,
    /// Message shown when no rows are visible.
    pub no_rows: Style,
    /// "Previous"/"Next" pagination controls.
    pub nav_control: Style,
    /// The active page number.
    pub active_page: Style,
    /// Inactive page numbers.
    pub inactive_page: Style,
}

impl Default for ListingStyles {
    fn default() -> Self {
        let subdued_color = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };

        Self {
            title: Style::new()
                .background(Color::from("62"))
                .foreground(Color::from("230"))
                .padding(0, 1, 0, 1),
            status_bar: Style::new().foreground(AdaptiveColor {
                Light: "#A49FA5",
                Dark: "#777777",
            }),
            header: Style::new().bold(true),
            selected_row: Style::new().foreground(AdaptiveColor {
                Light: "#EE6FF8",
                Dark: "#EE6FF8",
            }),
            no_rows: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
            nav_control: Style::new().foreground(subdued_color.clone()),
            active_page: Style::new().bold(true).foreground(AdaptiveColor {
                Light: "#847A85",
                Dark: "#979797",
            }),
            inactive_page: Style::new().foreground(subdued_color),
        }
    }
}
