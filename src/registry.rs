//! Container-id keyed registry of controls
//!
//! Hosts address controls by container id. Missing containers are reported
//! on the registry's own diagnostics and the call does nothing.

use std::collections::HashMap;

use crate::config::ControlConfig;
use crate::control::SelectControl;
use crate::diagnostics::{Diagnostic, DiagnosticSink, Diagnostics};
use crate::engine::{Selection, SelectionRequest};

#[derive(Debug, Default)]
pub struct ControlRegistry {
    controls: HashMap<String, SelectControl>,
    diagnostics: Diagnostics,
}

impl ControlRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create (or replace) the control for `config.container_id`
    pub fn initialize(&mut self, config: &ControlConfig) -> Option<&SelectControl> {
        let control = SelectControl::new(config, &mut self.diagnostics)?;
        let key = control.container_id().to_string();
        self.controls.insert(key.clone(), control);
        self.controls.get(&key)
    }

    pub fn control(&self, container_id: &str) -> Option<&SelectControl> {
        self.controls.get(container_id)
    }

    pub fn control_mut(&mut self, container_id: &str) -> Option<&mut SelectControl> {
        let found = self.controls.get_mut(container_id);
        if found.is_none() {
            self.diagnostics.report(Diagnostic::UnknownContainer {
                container_id: container_id.to_string(),
            });
        }
        found
    }

    /// Selection of a container, or `None` if it is not registered
    pub fn get_selection(&mut self, container_id: &str) -> Option<Selection> {
        match self.controls.get(container_id) {
            Some(control) => Some(control.selection()),
            None => {
                self.diagnostics.report(Diagnostic::UnknownContainer {
                    container_id: container_id.to_string(),
                });
                None
            }
        }
    }

    /// Returns `false` when the container is unknown
    pub fn set_selection(&mut self, container_id: &str, request: &SelectionRequest) -> bool {
        match self.control_mut(container_id) {
            Some(control) => {
                control.set_selection(request);
                true
            }
            None => false,
        }
    }

    /// Returns `false` when the container is unknown
    pub fn toggle_all(&mut self, container_id: &str, select: bool, respect_search: bool) -> bool {
        match self.control_mut(container_id) {
            Some(control) => {
                control.toggle_all(select, respect_search);
                true
            }
            None => false,
        }
    }

    /// Returns `false` when the container is unknown
    pub fn search(&mut self, container_id: &str, query: &str) -> bool {
        match self.control_mut(container_id) {
            Some(control) => {
                control.search(query);
                true
            }
            None => false,
        }
    }

    /// Drop a control; returns it if it was registered
    pub fn teardown(&mut self, container_id: &str) -> Option<SelectControl> {
        self.controls.remove(container_id)
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn drain_diagnostics(&mut self) -> Vec<Diagnostic> {
        self.diagnostics.drain()
    }
}
