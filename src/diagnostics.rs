//! Diagnostic channel
//!
//! Nothing in the selection engine aborts: configuration problems, duplicate
//! ids and lookup misses are reported here and the offending request (or the
//! offending part of it) is ignored.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::domain::value_objects::{CompositeId, Identifier, SelectionMode};

/// Severity of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Warning,
    Error,
}

/// Which level of the tree an unknown id was looked up in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeLevel {
    Parent,
    Child,
}

impl fmt::Display for NodeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeLevel::Parent => write!(f, "parent"),
            NodeLevel::Child => write!(f, "child"),
        }
    }
}

/// A non-fatal problem observed by the engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// `initialize` was called without a usable container id
    #[error("container id is missing or empty")]
    MissingContainerId,
    /// A flag value was not `{ enabled = <bool> }`; the flag is disabled
    #[error("flag '{flag}' has invalid value {value}; treating it as disabled")]
    InvalidFlag { flag: String, value: String },
    /// A flag name is not one the control knows
    #[error("unknown flag '{flag}'")]
    UnknownFlag { flag: String },
    /// The same composite id was generated twice in one render pass
    #[error("duplicate id '{id}'")]
    DuplicateId { id: CompositeId },
    /// Items nested below the child level are ignored
    #[error("'{id}' has {ignored} nested item(s) below the child level; ignored")]
    NestingTooDeep { id: CompositeId, ignored: usize },
    /// A selection request referenced an id that is not in the tree
    #[error("no {level} with id '{id}'")]
    UnknownId { level: NodeLevel, id: Identifier },
    /// An event referenced a composite id that is not in the tree
    #[error("no node with composite id '{id}'")]
    UnknownNode { id: CompositeId },
    /// No control is registered under this container id
    #[error("no control registered for container '{container_id}'")]
    UnknownContainer { container_id: String },
    /// Bulk select/clear is not available for this control
    #[error("bulk select/clear is not available in {mode} mode")]
    BulkUnavailable { mode: SelectionMode },
    /// Search is not enabled for this control
    #[error("search is not enabled for container '{container_id}'")]
    SearchUnavailable { container_id: String },
}

impl Diagnostic {
    pub fn severity(&self) -> DiagnosticSeverity {
        match self {
            Diagnostic::MissingContainerId | Diagnostic::UnknownContainer { .. } => {
                DiagnosticSeverity::Error
            }
            _ => DiagnosticSeverity::Warning,
        }
    }
}

/// Receiver of diagnostics
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Collecting sink, drained by the host
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Take every collected diagnostic, leaving the sink empty
    pub fn drain(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.entries)
    }

    pub fn has_errors(&self) -> bool {
        self.entries
            .iter()
            .any(|d| d.severity() == DiagnosticSeverity::Error)
    }
}

impl DiagnosticSink for Diagnostics {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }
}

/// Sink that discards everything
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn report(&mut self, _diagnostic: Diagnostic) {
        // Do nothing
    }
}
