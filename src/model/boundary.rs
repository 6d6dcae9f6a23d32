//! Boundary conditions and the partner reference between matched surfaces.

use crate::model::surface::Surface;
use crate::model::zone::Zone;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a surface's exterior context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundaryCondition {
    /// Exposed to the outside environment.
    Outdoors,
    /// Interior boundary shared with a surface of another zone.
    Surface,
    /// Touching the ground.
    Ground,
    /// No heat transfer across the boundary.
    Adiabatic,
}

impl fmt::Display for BoundaryCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BoundaryCondition::Outdoors => "Outdoors",
            BoundaryCondition::Surface => "Surface",
            BoundaryCondition::Ground => "Ground",
            BoundaryCondition::Adiabatic => "Adiabatic",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SunExposure {
    #[default]
    Sun,
    NoSun,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WindExposure {
    #[default]
    Wind,
    NoWind,
}

/// Non-owning reference to a surface within a zone slice.
///
/// `zone` and `surface` index into the slice passed to the resolver.
/// Neither surface of a matched pair owns the other, so the link is kept
/// as indices rather than pointers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceHandle {
    pub zone: usize,
    pub surface: usize,
}

/// The boundary-condition partner reference a surface holds.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BcObject {
    /// No partner.
    #[default]
    Unset,
    /// Name-only placeholder (e.g. from imported models).
    Name(String),
    /// Resolved partner surface, traversable via [`surface_at`].
    Surface(SurfaceHandle),
}

impl BcObject {
    pub fn is_unset(&self) -> bool {
        matches!(self, BcObject::Unset)
    }

    /// Returns the partner handle when the reference is fully resolved.
    pub fn handle(&self) -> Option<SurfaceHandle> {
        match self {
            BcObject::Surface(h) => Some(*h),
            _ => None,
        }
    }
}

/// Resolves a handle against the zone slice it was created for.
pub fn surface_at(zones: &[Zone], handle: SurfaceHandle) -> Option<&Surface> {
    zones.get(handle.zone)?.surfaces().get(handle.surface)
}

/// Mutably borrows both surfaces of a matched pair at once.
///
/// Matched surfaces always belong to different zones; returns `None` for
/// same-zone handles or out-of-range indices.
pub fn surface_pair_mut(
    zones: &mut [Zone],
    a: SurfaceHandle,
    b: SurfaceHandle,
) -> Option<(&mut Surface, &mut Surface)> {
    if a.zone == b.zone || a.zone >= zones.len() || b.zone >= zones.len() {
        return None;
    }
    let (first, second, swapped) = if a.zone < b.zone {
        (a, b, false)
    } else {
        (b, a, true)
    };
    let (left, right) = zones.split_at_mut(second.zone);
    let s1 = left[first.zone].surface_mut(first.surface)?;
    let s2 = right[0].surface_mut(second.surface)?;
    if swapped { Some((s2, s1)) } else { Some((s1, s2)) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::surface::{Surface, SurfaceType};
    use crate::{Point, Polygon};
    use anyhow::Result;

    fn square_surface(name: &str) -> Result<Surface> {
        let pts = vec![
            Point::new(0., 0., 0.),
            Point::new(1., 0., 0.),
            Point::new(1., 1., 0.),
            Point::new(0., 1., 0.),
        ];
        Ok(Surface::new(name, SurfaceType::Wall, Polygon::new(pts, None)?))
    }

    fn two_zones() -> Result<Vec<Zone>> {
        let z0 = Zone::new("z0", vec![square_surface("a")?])?;
        let z1 = Zone::new("z1", vec![square_surface("b")?])?;
        Ok(vec![z0, z1])
    }

    #[test]
    fn test_surface_at() -> Result<()> {
        let zones = two_zones()?;
        let h = SurfaceHandle { zone: 1, surface: 0 };
        assert_eq!(surface_at(&zones, h).unwrap().name, "b");
        let bad = SurfaceHandle { zone: 5, surface: 0 };
        assert!(surface_at(&zones, bad).is_none());
        Ok(())
    }

    #[test]
    fn test_surface_pair_mut() -> Result<()> {
        let mut zones = two_zones()?;
        let a = SurfaceHandle { zone: 0, surface: 0 };
        let b = SurfaceHandle { zone: 1, surface: 0 };
        let (s1, s2) = surface_pair_mut(&mut zones, a, b).unwrap();
        assert_eq!(s1.name, "a");
        assert_eq!(s2.name, "b");

        // Order is preserved when handles are given in reverse
        let (s1, s2) = surface_pair_mut(&mut zones, b, a).unwrap();
        assert_eq!(s1.name, "b");
        assert_eq!(s2.name, "a");
        Ok(())
    }

    #[test]
    fn test_surface_pair_mut_same_zone() -> Result<()> {
        let mut zones = two_zones()?;
        let a = SurfaceHandle { zone: 0, surface: 0 };
        assert!(surface_pair_mut(&mut zones, a, a).is_none());
        Ok(())
    }

    #[test]
    fn test_bc_object_handle() {
        let h = SurfaceHandle { zone: 0, surface: 1 };
        assert_eq!(BcObject::Surface(h).handle(), Some(h));
        assert_eq!(BcObject::Unset.handle(), None);
        assert_eq!(BcObject::Name("w".to_string()).handle(), None);
        assert!(BcObject::Unset.is_unset());
    }
}
