//! Shared JSON event types for consistent CLI output.
//!
//! Every command emits `start`, then any number of `diagnostic` and `data`
//! events, then `complete` (or `error` followed by `complete`).

use serde::Serialize;

use treeselect::diagnostics::{Diagnostic, DiagnosticSeverity};

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Event emitted when a command finishes.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
}

impl<'a> CompleteEvent<'a> {
    pub fn success(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: true,
        }
    }

    pub fn failure(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: false,
        }
    }
}

/// Event emitted when a command fails.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub message: String,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command,
            message: message.into(),
        }
    }
}

/// A non-fatal engine diagnostic.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub severity: DiagnosticSeverity,
    pub message: String,
    #[serde(flatten)]
    pub diagnostic: &'a Diagnostic,
}

impl<'a> DiagnosticEvent<'a> {
    pub fn new(command: &'a str, diagnostic: &'a Diagnostic) -> Self {
        Self {
            event: "diagnostic",
            command,
            severity: diagnostic.severity(),
            message: diagnostic.to_string(),
            diagnostic,
        }
    }
}

/// Wrapper for data events that includes command context.
#[derive(Debug, Clone, Serialize)]
pub struct DataEvent<'a, T: Serialize> {
    pub event: &'static str,
    pub command: &'a str,
    #[serde(flatten)]
    pub data: T,
}

impl<'a, T: Serialize> DataEvent<'a, T> {
    pub fn new(command: &'a str, data: T) -> Self {
        Self {
            event: "data",
            command,
            data,
        }
    }
}
