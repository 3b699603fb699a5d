//! Show command handler
//!
//! Loads a control, applies the requested operations in order (injection,
//! search, bulk) and prints the resulting selection.

use std::path::Path;

use anyhow::Result;

use treeselect::SelectionRequest;

use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, ErrorEvent, StartEvent};
use crate::ui::terminal::detect_capabilities;

#[derive(Debug, Clone, Default)]
pub struct ShowOptions {
    pub parents: Vec<String>,
    pub children: Vec<String>,
    pub search: Option<String>,
    pub select_all: bool,
    pub clear_all: bool,
}

impl ShowOptions {
    fn request(&self) -> Option<SelectionRequest> {
        if self.parents.is_empty() && self.children.is_empty() {
            return None;
        }
        Some(
            SelectionRequest::new()
                .with_parents(&self.parents)
                .with_children(&self.children),
        )
    }
}

pub fn cmd_show(config: &Path, options: &ShowOptions, json: bool, verbose: u8) -> Result<()> {
    if json {
        emit_event(&StartEvent::new("show"))?;
    }

    let result = run(config, options, json, verbose);

    if json {
        if let Err(e) = &result {
            emit_event(&ErrorEvent::new("show", format!("{:#}", e)))?;
        }
        let complete = if result.is_ok() {
            CompleteEvent::success("show")
        } else {
            CompleteEvent::failure("show")
        };
        emit_event(&complete)?;
    }
    result
}

fn run(config: &Path, options: &ShowOptions, json: bool, verbose: u8) -> Result<()> {
    let caps = detect_capabilities();
    let mut control = super::load_control(config, json)?;

    if let Some(request) = options.request() {
        control.set_selection(&request);
    }
    if let Some(query) = &options.search {
        control.search(query);
    }
    if options.select_all {
        control.toggle_all(true, true);
    }
    if options.clear_all {
        control.toggle_all(false, true);
    }

    super::report_diagnostics("show", &mut control, json, &caps)?;

    let selection = control.selection();
    super::print_selection("show", &control, &selection, json, verbose)
}
