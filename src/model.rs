//! Zone and surface object model.
//!
//! Hierarchy: Zone → Surface → SubSurface. Zones are owned by the caller
//! (or by a [`crate::store::ZoneStore`]); the adjacency resolver mutates
//! surfaces in place and never creates or destroys zones or surfaces.

pub mod boundary;
pub mod construction;
pub mod surface;
pub mod zone;
