//! Construction assignments.
//!
//! A construction is a name reference resolved by an external construction
//! library; this crate never validates the library contents.

use crate::model::surface::SurfaceType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Named construction assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Construction(pub String);

impl Construction {
    pub fn new(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl fmt::Display for Construction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Default interior constructions indexed by surface type.
///
/// When a matched surface has no override construction, it receives the
/// default for its own (post-transition) type from this set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteriorConstructionSet {
    pub wall: Construction,
    pub floor: Construction,
    pub ceiling: Construction,
}

impl Default for InteriorConstructionSet {
    fn default() -> Self {
        Self {
            wall: Construction::new("Interior Wall"),
            floor: Construction::new("Interior Floor"),
            ceiling: Construction::new("Interior Ceiling"),
        }
    }
}

impl InteriorConstructionSet {
    pub fn for_type(&self, surface_type: SurfaceType) -> &Construction {
        match surface_type {
            SurfaceType::Wall => &self.wall,
            SurfaceType::Floor | SurfaceType::GroundFloor => &self.floor,
            SurfaceType::Roof | SurfaceType::Ceiling => &self.ceiling,
        }
    }
}
