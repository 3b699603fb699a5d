use crossterm::style::Color;
use dialoguer::theme::Theme;
use std::fmt;

use treeselect::Mark;

/// Design tokens for the treeselect terminal UI.
///
/// All icons must be sourced from this module.
pub mod colors {
    use super::Color;

    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
}

pub mod icons {
    pub const WARNING: &str = "⚠";
    pub const ERROR: &str = "✗";
    pub const SEARCH: &str = "⌕";

    // Selection states.
    pub const SELECTED: &str = "●";
    pub const UNSELECTED: &str = "○";
    pub const PARTIAL: &str = "◐";

    // Tree expansion.
    pub const EXPAND: &str = "▼";
    pub const COLLAPSE: &str = "▶";

    pub const SEPARATOR: &str = "─";
}

pub mod icons_ascii {
    pub const WARNING: &str = "[WARN]";
    pub const ERROR: &str = "[FAIL]";
    pub const SEARCH: &str = "/";

    // Selection states.
    pub const SELECTED: &str = "[x]";
    pub const UNSELECTED: &str = "[ ]";
    pub const PARTIAL: &str = "[-]";

    // Tree expansion.
    pub const EXPAND: &str = "[v]";
    pub const COLLAPSE: &str = "[>]";

    pub const SEPARATOR: &str = "-";
}

/// Icon for a node mark
pub fn mark_icon(mark: Mark, unicode: bool) -> &'static str {
    match (mark, unicode) {
        (Mark::Checked, true) => icons::SELECTED,
        (Mark::Checked, false) => icons_ascii::SELECTED,
        (Mark::Indeterminate, true) => icons::PARTIAL,
        (Mark::Indeterminate, false) => icons_ascii::PARTIAL,
        (Mark::Unchecked, true) => icons::UNSELECTED,
        (Mark::Unchecked, false) => icons_ascii::UNSELECTED,
    }
}

pub fn expand_icon(expanded: bool, unicode: bool) -> &'static str {
    match (expanded, unicode) {
        (true, true) => icons::EXPAND,
        (true, false) => icons_ascii::EXPAND,
        (false, true) => icons::COLLAPSE,
        (false, false) => icons_ascii::COLLAPSE,
    }
}

pub fn warning_icon(unicode: bool) -> &'static str {
    if unicode {
        icons::WARNING
    } else {
        icons_ascii::WARNING
    }
}

// ----------------------------------------------------------------------------
// RadioTheme - dialoguer theme for single-choice prompts
// ----------------------------------------------------------------------------

/// dialoguer theme for single-selection prompts.
///
/// The active item shows `●` and the others `○` (Unicode mode), or `[x]` and
/// `[ ]` in ASCII fallback mode. Everything else defers to `ColorfulTheme`.
pub struct RadioTheme {
    unicode: bool,
    inner: dialoguer::theme::ColorfulTheme,
}

impl RadioTheme {
    pub fn new(unicode: bool) -> Self {
        Self {
            unicode,
            inner: dialoguer::theme::ColorfulTheme::default(),
        }
    }
}

impl Theme for RadioTheme {
    fn format_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.inner.format_prompt(f, prompt)
    }

    fn format_error(&self, f: &mut dyn fmt::Write, err: &str) -> fmt::Result {
        self.inner.format_error(f, err)
    }

    fn format_select_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.inner.format_select_prompt(f, prompt)
    }

    fn format_select_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        self.inner.format_select_prompt_selection(f, prompt, sel)
    }

    fn format_select_prompt_item(
        &self,
        f: &mut dyn fmt::Write,
        text: &str,
        active: bool,
    ) -> fmt::Result {
        let icon = mark_icon(Mark::from_checked(active), self.unicode);
        if active {
            write!(f, "> {} {}", icon, text)
        } else {
            write!(f, "  {} {}", icon, text)
        }
    }
}
