//! Adjacency solving for multi-zone buildings.
//!
//! Exterior surfaces of different zones that touch within tolerance are
//! reclassified as a linked interior boundary pair. The pipeline per
//! visited surface is sample generation, a coarse zone proximity filter,
//! fine surface matching and finally the pair update.

pub mod matcher;
pub mod proximity;
pub mod samples;
pub mod update;

use anyhow::{Result, bail};

use crate::adjacency::matcher::{NormalOrientation, find_adjacent_surface};
use crate::adjacency::proximity::is_zone_proximate;
use crate::adjacency::samples::sample_rays;
use crate::adjacency::update::link_adjacent_pair;
use crate::context::ModelContext;
use crate::model::boundary::{BcObject, BoundaryCondition, SurfaceHandle};
use crate::model::construction::Construction;
use crate::model::zone::Zone;
use crate::name::sorted_indices;
use crate::report::AdjacencyReport;

/// Options for a single adjacency run.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyConfig {
    /// Matching tolerance in model units. Falls back to the context's
    /// absolute tolerance when unset, and is never allowed below it.
    pub tolerance: Option<f64>,
    /// Construction assigned verbatim to both surfaces of every linked
    /// pair, instead of each surface's type-indexed interior default.
    pub construction_override: Option<Construction>,
    /// Boundary condition assigned to both surfaces of every linked pair
    /// instead of `Surface`. Suppresses the mutual partner reference.
    pub boundary_condition_override: Option<BoundaryCondition>,
    /// Clear all existing adjacency state before matching.
    pub reset_existing: bool,
}

impl AdjacencyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tolerance used for matching, floored at the model's absolute
    /// tolerance. Values below it would be meaningless to the geometry.
    pub fn effective_tolerance(&self, ctx: &ModelContext) -> f64 {
        self.tolerance
            .unwrap_or(ctx.absolute_tolerance)
            .max(ctx.absolute_tolerance)
    }
}

/// Finds and links all adjacent surface pairs across `zones`.
///
/// Zones and surfaces are visited in name order, so runs over the same
/// model are deterministic. Each exterior surface is linked to at most one
/// partner; the first match across the other zones wins. Surfaces that are
/// already interior when visited are skipped, which makes repeated runs
/// no-ops unless `reset_existing` is set.
pub fn solve_adjacencies(
    zones: &mut [Zone],
    config: &AdjacencyConfig,
    ctx: &ModelContext,
) -> Result<AdjacencyReport> {
    if zones.is_empty() {
        bail!("Cannot solve adjacencies: no zones given");
    }

    let tol = config.effective_tolerance(ctx);
    let hit_tol = tol + ctx.absolute_tolerance;
    let mut report = AdjacencyReport::new();

    if config.reset_existing {
        reset_adjacencies(zones);
    }

    let zone_order = sorted_indices(zones);

    for &zi in &zone_order {
        let surface_order = sorted_indices(zones[zi].surfaces());

        for si in surface_order {
            // Checked at visit time: an earlier iteration may have linked
            // this surface already.
            if zones[zi].surfaces()[si].boundary_condition != BoundaryCondition::Outdoors {
                continue;
            }

            let samples = sample_rays(zones[zi].surfaces()[si].geometry(), tol);
            if samples.is_empty() {
                continue;
            }

            let mut found = None;
            for &oz in &zone_order {
                if oz == zi {
                    continue;
                }
                if !is_zone_proximate(&samples, &zones[oz], hit_tol) {
                    continue;
                }
                let surface = &zones[zi].surfaces()[si];
                if let Some(m) =
                    find_adjacent_surface(surface, &samples, &zones[oz], tol, ctx.angle_tolerance)
                {
                    found = Some((oz, m));
                    break;
                }
            }

            let Some((oz, m)) = found else {
                continue;
            };

            let a = SurfaceHandle { zone: zi, surface: si };
            let b = SurfaceHandle {
                zone: oz,
                surface: m.surface,
            };
            {
                let s1 = &zones[zi].surfaces()[si];
                let s2 = &zones[oz].surfaces()[m.surface];
                report.info(format!(
                    "Surface {} which is a {} is adjacent to {} which is a {}.",
                    s1.name, s1.surface_type, s2.name, s2.surface_type
                ));
                if m.orientation == NormalOrientation::Coincident {
                    report.info(format!(
                        "Normal direction of one of the surfaces {}, {} should be reversed.",
                        s1.name, s2.name
                    ));
                }
            }

            link_adjacent_pair(zones, a, b, config, tol, &mut report);
            report.pairs_linked += 1;
        }
    }

    Ok(report)
}

/// Returns every surface to an exterior state and severs all links,
/// including sub-surface partner names.
fn reset_adjacencies(zones: &mut [Zone]) {
    for zone in zones.iter_mut() {
        for surface in zone.surfaces_mut() {
            surface.boundary_condition = BoundaryCondition::Outdoors;
            surface.bc_object = BcObject::Unset;
            for sub in surface.sub_surfaces_mut() {
                sub.partner_name = None;
            }
        }
    }
}
