//! State transition applied to a confirmed adjacent surface pair.

use crate::adjacency::AdjacencyConfig;
use crate::model::boundary::{
    BcObject, BoundaryCondition, SunExposure, SurfaceHandle, WindExposure, surface_pair_mut,
};
use crate::model::surface::SurfaceType;
use crate::model::zone::Zone;
use crate::report::AdjacencyReport;

/// Rewrites both surfaces of a matched pair as an interior boundary.
///
/// Parent-level fields (type, construction, boundary condition, partner
/// link, exposure) are all updated before sub-surface pairing is
/// attempted, so a sub-surface count mismatch leaves a fully transitioned
/// parent pair behind. Anomalies degrade to report entries; this function
/// never fails.
pub fn link_adjacent_pair(
    zones: &mut [Zone],
    a: SurfaceHandle,
    b: SurfaceHandle,
    config: &AdjacencyConfig,
    tol: f64,
    report: &mut AdjacencyReport,
) {
    let Some((s1, s2)) = surface_pair_mut(zones, a, b) else {
        report.warn("Cannot link surfaces: invalid or same-zone handles.".to_string());
        return;
    };

    // A roof cannot be an interior boundary
    if s1.surface_type == SurfaceType::Roof {
        s1.surface_type = SurfaceType::Ceiling;
    }
    if s2.surface_type == SurfaceType::Roof {
        s2.surface_type = SurfaceType::Ceiling;
    }

    // A ground floor paired with another surface no longer touches ground
    if s1.surface_type == SurfaceType::GroundFloor {
        s1.surface_type = SurfaceType::Floor;
    }
    if s2.surface_type == SurfaceType::GroundFloor {
        s2.surface_type = SurfaceType::Floor;
    }

    // Construction: type-indexed interior default, or the override verbatim
    match &config.construction_override {
        None => {
            s1.construction = Some(s1.interior_constructions.for_type(s1.surface_type).clone());
            s2.construction = Some(s2.interior_constructions.for_type(s2.surface_type).clone());
        }
        Some(c) => {
            s1.construction = Some(c.clone());
            s2.construction = Some(c.clone());
        }
    }

    // Boundary condition: mutual link, or the override verbatim (which
    // suppresses the partner reference)
    match config.boundary_condition_override {
        None => {
            s1.boundary_condition = BoundaryCondition::Surface;
            s2.boundary_condition = BoundaryCondition::Surface;
            s1.bc_object = BcObject::Surface(b);
            s2.bc_object = BcObject::Surface(a);
        }
        Some(bc) => {
            s1.boundary_condition = bc;
            s2.boundary_condition = bc;
        }
    }

    // An interior surface cannot be weather-exposed
    s1.sun_exposure = SunExposure::NoSun;
    s2.sun_exposure = SunExposure::NoSun;
    s1.wind_exposure = WindExposure::NoWind;
    s2.wind_exposure = WindExposure::NoWind;

    // Sub-surface (window) pairing
    let n1 = s1.sub_surfaces().len();
    let n2 = s2.sub_surfaces().len();
    if (n1 > 0 || n2 > 0) && n1 != n2 {
        report.warn(format!(
            "Number of windows doesn't match between {} and {}. \
             Make sure adjacent surfaces are divided correctly and have similar windows.",
            s1.name, s2.name
        ));
        return;
    }
    if n1 == 0 {
        return;
    }

    for i in 0..n1 {
        if s1.sub_surfaces()[i].is_paired() {
            continue;
        }
        let c1 = s1.sub_surfaces()[i].centroid();

        let matched = (0..n2).find(|&j| {
            !s2.sub_surfaces()[j].is_paired() && c1.distance(&s2.sub_surfaces()[j].centroid()) <= tol
        });

        if let Some(j) = matched {
            let name1 = s1.sub_surfaces()[i].name.clone();
            let name2 = s2.sub_surfaces()[j].name.clone();
            s1.sub_surfaces_mut()[i].partner_name = Some(name2.clone());
            s2.sub_surfaces_mut()[j].partner_name = Some(name1.clone());
            report.info(format!("Interior window {name1} is adjacent to {name2}."));
            report.sub_surfaces_linked += 1;
        }
    }
}
