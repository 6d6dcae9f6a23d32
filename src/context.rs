//! Session tolerances.
//!
//! These replace the host document's ambient state (absolute and angular
//! model tolerances) with an explicitly passed value.

use serde::{Deserialize, Serialize};

/// Working tolerances for a resolver session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ModelContext {
    /// Minimum absolute length tolerance. The adjacency tolerance is
    /// floored at this value.
    pub absolute_tolerance: f64,
    /// Angular tolerance in radians for the normal-orientation gate.
    pub angle_tolerance: f64,
}

impl Default for ModelContext {
    fn default() -> Self {
        Self {
            absolute_tolerance: 1e-3,
            angle_tolerance: 1.0_f64.to_radians(),
        }
    }
}

impl ModelContext {
    pub fn new(absolute_tolerance: f64, angle_tolerance: f64) -> Self {
        Self {
            absolute_tolerance,
            angle_tolerance,
        }
    }
}
