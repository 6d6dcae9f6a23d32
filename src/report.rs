//! Diagnostics collected during an adjacency run.
//!
//! Messages are mirrored to the `log` crate and collected for the caller.
//! Diagnostics never affect control flow.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Warning,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportEntry {
    pub severity: Severity,
    pub message: String,
}

/// Human-readable record of an adjacency run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdjacencyReport {
    entries: Vec<ReportEntry>,
    /// Number of surface pairs linked in this run.
    pub pairs_linked: usize,
    /// Number of sub-surface (window) pairs linked in this run.
    pub sub_surfaces_linked: usize,
}

impl AdjacencyReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn info(&mut self, message: String) {
        log::info!("{message}");
        self.entries.push(ReportEntry {
            severity: Severity::Info,
            message,
        });
    }

    pub(crate) fn warn(&mut self, message: String) {
        log::warn!("{message}");
        self.entries.push(ReportEntry {
            severity: Severity::Warning,
            message,
        });
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries
            .iter()
            .filter(|e| e.severity == Severity::Warning)
    }

    pub fn has_warnings(&self) -> bool {
        self.warnings().next().is_some()
    }
}

impl fmt::Display for AdjacencyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            match entry.severity {
                Severity::Info => writeln!(f, "{}", entry.message)?,
                Severity::Warning => writeln!(f, "Warning: {}", entry.message)?,
            }
        }
        writeln!(
            f,
            "Linked {} surface pair(s) and {} sub-surface pair(s).",
            self.pairs_linked, self.sub_surfaces_linked
        )
    }
}
