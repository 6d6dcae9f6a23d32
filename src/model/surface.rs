//! Planar surfaces and their sub-surfaces (windows).

use crate::model::boundary::{BcObject, BoundaryCondition, SunExposure, WindExposure};
use crate::model::construction::{Construction, InteriorConstructionSet};
use crate::name::HasName;
use crate::{Point, Polygon, UID, Vector};
use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a surface within its zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceType {
    Wall,
    Roof,
    Ceiling,
    Floor,
    /// Floor touching the ground. Re-typed to plain `Floor` when it turns
    /// out to be an interior boundary.
    GroundFloor,
}

impl fmt::Display for SurfaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SurfaceType::Wall => "Wall",
            SurfaceType::Roof => "Roof",
            SurfaceType::Ceiling => "Ceiling",
            SurfaceType::Floor => "Floor",
            SurfaceType::GroundFloor => "Ground Floor",
        };
        write!(f, "{s}")
    }
}

/// A sub-surface (e.g. a window) hosted by a parent surface.
///
/// Sub-surfaces are not independently owned entities: their adjacency link
/// is a name-level reference to the paired sibling, set at most once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubSurface {
    pub name: String,
    pub uid: UID,
    /// Name of the paired sub-surface on the partner surface, if any.
    pub partner_name: Option<String>,
    geometry: Polygon,
}

impl SubSurface {
    pub fn new(name: &str, geometry: Polygon) -> Self {
        Self {
            name: name.to_string(),
            uid: UID::new(),
            partner_name: None,
            geometry,
        }
    }

    pub fn geometry(&self) -> &Polygon {
        &self.geometry
    }

    pub fn centroid(&self) -> Point {
        self.geometry.centroid()
    }

    pub fn is_paired(&self) -> bool {
        self.partner_name.is_some()
    }
}

impl HasName for SubSurface {
    fn get_name(&self) -> &str {
        &self.name
    }
}

/// A planar face of a zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Surface {
    pub name: String,
    pub uid: UID,
    pub surface_type: SurfaceType,
    pub boundary_condition: BoundaryCondition,
    pub bc_object: BcObject,
    /// Override construction; `None` means the type-indexed default applies.
    pub construction: Option<Construction>,
    pub interior_constructions: InteriorConstructionSet,
    pub sun_exposure: SunExposure,
    pub wind_exposure: WindExposure,
    sub_surfaces: Vec<SubSurface>,
    geometry: Polygon,
}

impl Surface {
    /// Creates a new exterior surface with default exposure.
    pub fn new(name: &str, surface_type: SurfaceType, geometry: Polygon) -> Self {
        Self {
            name: name.to_string(),
            uid: UID::new(),
            surface_type,
            boundary_condition: BoundaryCondition::Outdoors,
            bc_object: BcObject::Unset,
            construction: None,
            interior_constructions: InteriorConstructionSet::default(),
            sun_exposure: SunExposure::default(),
            wind_exposure: WindExposure::default(),
            sub_surfaces: Vec::new(),
            geometry,
        }
    }

    pub fn geometry(&self) -> &Polygon {
        &self.geometry
    }

    pub fn centroid(&self) -> Point {
        self.geometry.centroid()
    }

    /// Outward unit normal.
    pub fn normal(&self) -> Vector {
        self.geometry.vn
    }

    /// Elevation (z) of the surface centroid.
    pub fn elevation(&self) -> f64 {
        self.centroid().z
    }

    pub fn is_interior(&self) -> bool {
        self.boundary_condition == BoundaryCondition::Surface
    }

    pub fn sub_surfaces(&self) -> &[SubSurface] {
        &self.sub_surfaces
    }

    pub(crate) fn sub_surfaces_mut(&mut self) -> &mut [SubSurface] {
        &mut self.sub_surfaces
    }

    pub fn add_sub_surface(&mut self, sub: SubSurface) -> Result<()> {
        if self.sub_surfaces.iter().any(|s| s.name == sub.name) {
            return Err(anyhow!("Sub-surface is already present: {}", &sub.name));
        }
        self.sub_surfaces.push(sub);
        Ok(())
    }
}

impl HasName for Surface {
    fn get_name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xy_square(z: f64) -> Result<Polygon> {
        let pts = vec![
            Point::new(0., 0., z),
            Point::new(2., 0., z),
            Point::new(2., 2., z),
            Point::new(0., 2., z),
        ];
        Polygon::new(pts, None)
    }

    #[test]
    fn test_new_surface_defaults() -> Result<()> {
        let srf = Surface::new("wall_n", SurfaceType::Wall, xy_square(0.)?);
        assert_eq!(srf.boundary_condition, BoundaryCondition::Outdoors);
        assert!(srf.bc_object.is_unset());
        assert!(srf.construction.is_none());
        assert_eq!(srf.sun_exposure, SunExposure::Sun);
        assert_eq!(srf.wind_exposure, WindExposure::Wind);
        assert!(!srf.is_interior());
        Ok(())
    }

    #[test]
    fn test_centroid_and_elevation() -> Result<()> {
        let srf = Surface::new("roof", SurfaceType::Roof, xy_square(3.)?);
        assert!(srf.centroid().is_close(&Point::new(1., 1., 3.)));
        assert!((srf.elevation() - 3.).abs() < 1e-10);
        Ok(())
    }

    #[test]
    fn test_add_sub_surface() -> Result<()> {
        let mut srf = Surface::new("wall", SurfaceType::Wall, xy_square(0.)?);
        srf.add_sub_surface(SubSurface::new("win_0", xy_square(0.)?))?;
        assert_eq!(srf.sub_surfaces().len(), 1);
        assert!(!srf.sub_surfaces()[0].is_paired());

        // Same name is rejected
        let result = srf.add_sub_surface(SubSurface::new("win_0", xy_square(0.)?));
        assert!(result.is_err());
        Ok(())
    }
}
