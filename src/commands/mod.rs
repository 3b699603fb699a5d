//! Command handlers

pub mod pick;
pub mod show;

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use treeselect::diagnostics::Diagnostic;
use treeselect::{Selection, SelectionRequest, SelectControl, SelectionMode};

use crate::ui::json::emit_event;
use crate::ui::json::events::{DataEvent, DiagnosticEvent};
use crate::ui::output::{print_config_warnings, print_diagnostics};
use crate::ui::terminal::TerminalCapabilities;

/// Load a control from a config file, surfacing unknown-key warnings
pub(crate) fn load_control(config: &Path, json: bool) -> Result<SelectControl> {
    let (control, warnings) = SelectControl::from_file(config)
        .with_context(|| format!("failed to load {}", config.display()))?;
    if !json {
        print_config_warnings(config, &warnings);
    }
    Ok(control)
}

/// Drain and report the control's diagnostics
pub(crate) fn report_diagnostics(
    command: &str,
    control: &mut SelectControl,
    json: bool,
    caps: &TerminalCapabilities,
) -> Result<()> {
    let diagnostics: Vec<Diagnostic> = control.drain_diagnostics();
    if json {
        for d in &diagnostics {
            emit_event(&DiagnosticEvent::new(command, d))?;
        }
    } else {
        print_diagnostics(&diagnostics, caps.supports_unicode, caps.supports_color);
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct SelectionData<'a> {
    container_id: &'a str,
    mode: SelectionMode,
    summary: String,
    selection: &'a Selection,
    request: SelectionRequest,
}

/// Print a selection as a `data` event or as a summary line plus items
pub(crate) fn print_selection(
    command: &str,
    control: &SelectControl,
    selection: &Selection,
    json: bool,
    verbose: u8,
) -> Result<()> {
    if json {
        let data = SelectionData {
            container_id: control.container_id(),
            mode: control.mode(),
            summary: control.summary(None),
            selection,
            request: selection.to_request(),
        };
        emit_event(&DataEvent::new(command, data))?;
        return Ok(());
    }

    println!("{}", control.summary(None));
    if verbose == 0 {
        return Ok(());
    }

    for item in &selection.items {
        match &item.parent {
            Some(parent) => println!("  - {} / {} ({})", parent.name, item.name, item.id),
            None => println!("  - {} ({})", item.name, item.id),
        }
        for child in item.children.iter().flatten() {
            println!("      - {} ({})", child.name, child.id);
        }
    }
    Ok(())
}
