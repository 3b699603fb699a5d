use std::path::Path;

use crossterm::style::Stylize;

use treeselect::config::ConfigWarning;
use treeselect::diagnostics::{Diagnostic, DiagnosticSeverity};

use super::theme::{colors, icons, icons_ascii};

pub fn print_config_warnings(path: &Path, warnings: &[ConfigWarning]) {
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("⚠ Unknown config key '{}' in {}:{}", w.key, path.display(), line);
        } else {
            eprintln!("⚠ Unknown config key '{}' in {}", w.key, path.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}

/// One diagnostic as a single line, without color
pub fn format_diagnostic(diagnostic: &Diagnostic, unicode: bool) -> String {
    let icon = match (diagnostic.severity(), unicode) {
        (DiagnosticSeverity::Error, true) => icons::ERROR,
        (DiagnosticSeverity::Error, false) => icons_ascii::ERROR,
        (DiagnosticSeverity::Warning, true) => icons::WARNING,
        (DiagnosticSeverity::Warning, false) => icons_ascii::WARNING,
    };
    format!("{} {}", icon, diagnostic)
}

pub fn print_diagnostics(diagnostics: &[Diagnostic], unicode: bool, color: bool) {
    for d in diagnostics {
        let line = format_diagnostic(d, unicode);
        if !color {
            eprintln!("{}", line);
            continue;
        }
        match d.severity() {
            DiagnosticSeverity::Error => eprintln!("{}", line.with(colors::ERROR)),
            DiagnosticSeverity::Warning => eprintln!("{}", line.with(colors::WARNING)),
        }
    }
}
