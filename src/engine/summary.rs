//! Display text for a selection (header/preview line)

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::domain::value_objects::SelectionMode;

use super::extract::{Selection, SelectionItem};

const ENTRY_SEPARATOR: &str = ", ";
const ELLIPSIS: char = '…';

/// Human-readable summary of `selection`
///
/// Falls back to `placeholder` when nothing is selected. With `max_width`,
/// whole entries are dropped from the end and replaced by ` +N more`.
pub fn summarize(selection: &Selection, placeholder: &str, max_width: Option<usize>) -> String {
    if selection.is_empty() {
        return placeholder.to_string();
    }

    let entries: Vec<String> = selection
        .items
        .iter()
        .map(|item| entry_text(selection.mode, item))
        .collect();

    match max_width {
        Some(width) => fit_entries(&entries, width),
        None => entries.join(ENTRY_SEPARATOR),
    }
}

fn entry_text(mode: SelectionMode, item: &SelectionItem) -> String {
    if let Some(parent) = &item.parent {
        return format!("{} / {}", parent.name, item.name);
    }
    match (mode, &item.children) {
        (SelectionMode::MultiTree, Some(children)) if !children.is_empty() => {
            let names: Vec<&str> = children.iter().map(|c| c.name.as_str()).collect();
            format!("{} ({})", item.name, names.join(ENTRY_SEPARATOR))
        }
        _ => item.name.clone(),
    }
}

fn fit_entries(entries: &[String], width: usize) -> String {
    let full = entries.join(ENTRY_SEPARATOR);
    if full.width() <= width {
        return full;
    }

    // Keep as many leading entries as fit together with the "+N more" suffix
    for keep in (1..entries.len()).rev() {
        let text = entries[..keep].join(ENTRY_SEPARATOR);
        let suffix = format!(" +{} more", entries.len() - keep);
        if text.width() + suffix.width() <= width {
            return text + &suffix;
        }
    }

    let suffix = if entries.len() > 1 {
        format!(" +{} more", entries.len() - 1)
    } else {
        String::new()
    };
    let budget = width.saturating_sub(suffix.width());
    truncate_to_width(&entries[0], budget) + &suffix
}

/// Cut `text` to at most `width` columns, ending in an ellipsis
fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push(ELLIPSIS);
    out
}
