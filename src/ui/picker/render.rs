//! Terminal rendering functions for the picker.

use treeselect::Mark;

use crate::ui::theme::{expand_icon, icons, icons_ascii, mark_icon};

use super::menu::Row;

/// Render a single row to a string
pub fn render_row(row: &Row, is_active: bool, supports_unicode: bool) -> String {
    let cursor = if is_active { "> " } else { "  " };
    let indent = "  ".repeat(row.depth);

    let expand = if row.has_children {
        format!("{} ", expand_icon(row.expanded, supports_unicode))
    } else {
        String::from("  ")
    };

    format!(
        "{}{}{}{} {}",
        cursor,
        indent,
        expand,
        mark_icon(row.mark, supports_unicode),
        row.label
    )
}

/// Render the search input line
pub fn render_search_bar(query: &str, editing: bool, supports_unicode: bool) -> String {
    let icon = if supports_unicode {
        icons::SEARCH
    } else {
        icons_ascii::SEARCH
    };
    let caret = if editing { "_" } else { "" };
    format!("{} {}{}", icon, query, caret)
}

/// Render the status bar with the selection summary and icon legend
pub fn render_status_bar(summary: &str, supports_unicode: bool) -> String {
    format!(
        "Selected: {}\n\n{} = selected    {} = partial    {} = not selected",
        summary,
        mark_icon(Mark::Checked, supports_unicode),
        mark_icon(Mark::Indeterminate, supports_unicode),
        mark_icon(Mark::Unchecked, supports_unicode),
    )
}

/// Render the help bar showing keyboard shortcuts
pub fn render_help_bar(multi: bool, search: bool, searching: bool) -> String {
    if searching {
        return String::from("Type to filter    [Enter] Done    [Esc] Clear search");
    }

    let mut keys = Vec::new();
    if multi {
        keys.extend(["[a] All", "[n] None", "[i] Invert"]);
    }
    if search {
        keys.push("[/] Search");
    }
    keys.extend(["[Enter] Confirm", "[q] Quit"]);

    format!(
        "{}\n(Use ↑↓ to navigate, Space to toggle, →← to expand/collapse)",
        keys.join("    ")
    )
}
