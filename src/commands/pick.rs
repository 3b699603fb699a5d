//! Pick command handler
//!
//! Interactive selection in the terminal. Single-choice flat lists use a
//! dialoguer prompt; everything else runs the tree picker.

use std::path::Path;

use anyhow::{bail, Result};
use dialoguer::{FuzzySelect, Select};

use treeselect::{Selection, SelectionMode, SelectionRequest, SelectControl};

use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, StartEvent};
use crate::ui::picker::{run_interactive, Picker};
use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use crate::ui::theme::RadioTheme;

pub fn cmd_pick(config: &Path, json: bool, verbose: u8) -> Result<()> {
    let caps = detect_capabilities();
    if !caps.is_interactive() {
        bail!("pick needs an interactive terminal; use `treeselect show` instead");
    }

    if json {
        emit_event(&StartEvent::new("pick"))?;
    }

    let mut control = super::load_control(config, json)?;
    super::report_diagnostics("pick", &mut control, json, &caps)?;

    let picked = if control.mode() == SelectionMode::SingleFlat {
        pick_single(&mut control, &caps)?
    } else {
        let mut picker = Picker::new(control);
        let picked = run_interactive(&mut picker, &caps)?;
        control = picker.into_control();
        picked
    };

    super::report_diagnostics("pick", &mut control, json, &caps)?;

    match picked {
        Some(selection) => {
            super::print_selection("pick", &control, &selection, json, verbose)?;
            if json {
                emit_event(&CompleteEvent::success("pick"))?;
            }
        }
        None => {
            if json {
                emit_event(&CompleteEvent::failure("pick"))?;
            } else {
                eprintln!("Cancelled.");
            }
        }
    }
    Ok(())
}

fn pick_single(control: &mut SelectControl, caps: &TerminalCapabilities) -> Result<Option<Selection>> {
    let parents = control.tree().parents();
    if parents.is_empty() {
        bail!("'{}' has no items to pick from", control.container_id());
    }

    let labels: Vec<&str> = parents.iter().map(|p| p.label.as_str()).collect();
    let current = parents.iter().position(|p| p.mark().is_checked()).unwrap_or(0);
    let theme = RadioTheme::new(caps.supports_unicode);
    let prompt = control.placeholder().to_string();

    let chosen = if control.flags().search {
        FuzzySelect::with_theme(&theme)
            .with_prompt(prompt)
            .items(&labels)
            .default(current)
            .interact_opt()?
    } else {
        Select::with_theme(&theme)
            .with_prompt(prompt)
            .items(&labels)
            .default(current)
            .interact_opt()?
    };

    let Some(index) = chosen else {
        return Ok(None);
    };
    let id = parents[index].id.clone();
    control.set_selection(&SelectionRequest::new().with_parents([id]));
    Ok(Some(control.selection()))
}
