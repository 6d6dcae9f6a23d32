//! Zone container for grouping surfaces.

use crate::Polygon;
use crate::UID;
use crate::model::surface::Surface;
use crate::name::HasName;
use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

/// A bounded volume (e.g. a room) composed of planar surfaces.
///
/// Surface order is preserved; `SurfaceHandle` indices refer to positions
/// in this order, so surfaces must not be reordered while handles are live.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    pub name: String,
    pub uid: UID,
    surfaces: Vec<Surface>,
}

impl HasName for Zone {
    fn get_name(&self) -> &str {
        &self.name
    }
}

impl Zone {
    /// Creates a new zone with the given name and surfaces.
    ///
    /// Surface names must be unique within the zone.
    pub fn new(name: &str, surfaces: Vec<Surface>) -> Result<Self> {
        let mut zone = Self {
            name: name.to_string(),
            uid: UID::new(),
            surfaces: Vec::with_capacity(surfaces.len()),
        };
        for srf in surfaces {
            zone.add_surface(srf)?;
        }
        Ok(zone)
    }

    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    pub(crate) fn surfaces_mut(&mut self) -> &mut [Surface] {
        &mut self.surfaces
    }

    pub fn surface_mut(&mut self, idx: usize) -> Option<&mut Surface> {
        self.surfaces.get_mut(idx)
    }

    /// Adds a surface to the zone.
    pub fn add_surface(&mut self, surface: Surface) -> Result<()> {
        if self.surfaces.iter().any(|s| s.name == surface.name) {
            return Err(anyhow!("Surface is already present: {}", &surface.name));
        }
        self.surfaces.push(surface);
        Ok(())
    }

    /// Aggregate geometry of the zone: the polygons of all parent surfaces.
    ///
    /// Used by the coarse proximity filter; sub-surfaces are coplanar with
    /// their parents and add nothing to the probe.
    pub fn polygons(&self) -> Vec<&Polygon> {
        self.surfaces.iter().map(|s| s.geometry()).collect()
    }
}
