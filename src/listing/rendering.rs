//! View rendering for listings.
//!
//! Rendering is a pure function of the listing state: each call rebuilds the
//! title, status line, column headers, the visible rows of the current page,
//! and the pagination strip from scratch.

use super::style::BULLET;
use super::Model;
use crate::pagination::PageControl;
use crate::sort::SortOrder;
use unicode_width::UnicodeWidthStr;

const ASC_INDICATOR: &str = "▲";
const DESC_INDICATOR: &str = "▼";

impl Model {
    /// Renders the complete listing: title, status, table and pagination.
    pub fn view(&self) -> String {
        let mut sections = Vec::new();
        if !self.title.is_empty() {
            sections.push(self.styles.title.clone().render(&self.title));
        }
        sections.push(self.view_status());
        sections.push(self.view_table());
        sections.push(self.view_pagination());
        sections.join("\n")
    }

    /// Renders the status line: row count and how many rows filters hide.
    pub(super) fn view_status(&self) -> String {
        let count = self.len();
        let noun = if count == 1 {
            &self.row_name.0
        } else {
            &self.row_name.1
        };
        let mut status = format!("{count} {noun}");
        let hidden = self.hidden_count();
        if hidden > 0 {
            status.push_str(&format!(" {BULLET} {hidden} hidden"));
        }
        self.styles.status_bar.clone().render(&status)
    }

    /// Renders the column headers, separator, and visible page rows.
    pub(super) fn view_table(&self) -> String {
        let widths = self.column_widths();
        let mut out = String::new();

        // Header row, prefixed to align with the selection marker column.
        let header_cells: Vec<String> = self
            .schema
            .fields()
            .iter()
            .zip(&widths)
            .map(|(field, &width)| pad(&self.header_cell(&field.name, &field.title), width))
            .collect();
        out.push_str(
            &self
                .styles
                .header
                .clone()
                .render(&format!("  {}", header_cells.join(" | "))),
        );
        out.push('\n');

        let separator: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
        out.push_str(&format!("  {}", separator.join("-+-")));
        out.push('\n');

        let visible = self.visible_page_rows();
        if visible.is_empty() {
            out.push_str(&self.styles.no_rows.clone().render("No rows."));
            return out;
        }

        for (position, row) in visible.iter().enumerate() {
            let cells: Vec<String> = self
                .schema
                .fields()
                .iter()
                .zip(&widths)
                .map(|(field, &width)| pad(row.get(&field.name).unwrap_or(""), width))
                .collect();
            let line = cells.join(" | ");
            if position == self.selected {
                out.push_str("> ");
                out.push_str(&self.styles.selected_row.clone().render(&line));
            } else {
                out.push_str("  ");
                out.push_str(&line);
            }
            out.push('\n');
        }
        out.pop();
        out
    }

    /// Renders the pagination strip with the current page marked active.
    pub(super) fn view_pagination(&self) -> String {
        let parts: Vec<String> = self
            .pager
            .controls()
            .into_iter()
            .map(|control| match control {
                PageControl::Previous => self.styles.nav_control.clone().render("Previous"),
                PageControl::Next => self.styles.nav_control.clone().render("Next"),
                PageControl::Page { number, active } => {
                    if active {
                        self.styles.active_page.clone().render(&format!("[{number}]"))
                    } else {
                        self.styles.inactive_page.clone().render(&number.to_string())
                    }
                }
            })
            .collect();
        parts.join(" ")
    }

    fn header_cell(&self, name: &str, title: &str) -> String {
        match self.sort_indicator(name) {
            Some(SortOrder::Ascending) => format!("{title} {ASC_INDICATOR}"),
            Some(SortOrder::Descending) => format!("{title} {DESC_INDICATOR}"),
            None => title.to_string(),
        }
    }

    // Widths cover the header cell (indicator included) and every value in
    // the full row set, so columns keep their width across pages and
    // filter changes.
    fn column_widths(&self) -> Vec<usize> {
        self.schema
            .fields()
            .iter()
            .map(|field| {
                let header = self.header_cell(&field.name, &field.title);
                let mut width = header.width();
                for row in &self.items {
                    if let Some(value) = row.get(&field.name) {
                        width = width.max(value.width());
                    }
                }
                width
            })
            .collect()
    }
}

fn pad(value: &str, width: usize) -> String {
    let mut cell = value.to_string();
    for _ in value.width()..width {
        cell.push(' ');
    }
    cell
}
