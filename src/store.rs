//! In-memory zone store and solve sessions.
//!
//! The solver works on plain `Zone` values. The store adds the
//! hand-off layer around it: callers check zones in, refer to them by
//! opaque handles, and get fresh handles back for the updated copies of a
//! run. Inputs are never mutated in place, so the pre-run zones stay
//! addressable under their old handles.

use std::collections::HashMap;
use std::fmt;

use anyhow::{Result, anyhow};

use crate::UID;
use crate::adjacency::{AdjacencyConfig, solve_adjacencies};
use crate::context::ModelContext;
use crate::model::zone::Zone;
use crate::report::AdjacencyReport;

/// Opaque reference to a zone checked into a `ZoneStore`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZoneHandle(UID);

/// Identifier of one solve run. All handles committed by a run share it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunId(String);

impl RunId {
    pub fn new() -> Self {
        Self(UID::new().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Keyed zone storage. Handles stay valid until the store is dropped.
#[derive(Debug, Default)]
pub struct ZoneStore {
    zones: HashMap<ZoneHandle, Zone>,
}

impl ZoneStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks a zone in under a handle derived from its own uid.
    pub fn insert(&mut self, zone: Zone) -> ZoneHandle {
        let handle = ZoneHandle(zone.uid.clone());
        self.zones.insert(handle.clone(), zone);
        handle
    }

    /// Copies the zones behind `handles` out of the store, in order.
    pub fn fetch(&self, handles: &[ZoneHandle]) -> Result<Vec<Zone>> {
        handles
            .iter()
            .map(|h| {
                self.zones
                    .get(h)
                    .cloned()
                    .ok_or_else(|| anyhow!("Unknown zone handle: {}", h.0))
            })
            .collect()
    }

    /// Checks updated zones in under run-scoped handles, in order.
    pub fn commit(&mut self, zones: Vec<Zone>, run: &RunId) -> Vec<ZoneHandle> {
        zones
            .into_iter()
            .map(|zone| {
                let handle = ZoneHandle(UID::from(format!("{}/{}", run.as_str(), zone.uid)));
                self.zones.insert(handle.clone(), zone);
                handle
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

/// A store plus the model context runs are solved under.
#[derive(Debug, Default)]
pub struct Session {
    pub store: ZoneStore,
    pub context: ModelContext,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Solves adjacencies for the zones behind `handles` and commits the
    /// updated copies under a fresh run id. Returns the new handles in the
    /// same order as the input.
    pub fn solve(
        &mut self,
        handles: &[ZoneHandle],
        config: &AdjacencyConfig,
    ) -> Result<(Vec<ZoneHandle>, AdjacencyReport)> {
        let mut zones = self.store.fetch(handles)?;
        let report = solve_adjacencies(&mut zones, config, &self.context)?;
        let committed = self.store.commit(zones, &RunId::new());
        Ok((committed, report))
    }
}
