pub mod adjacency;
pub mod context;
pub mod geom;
pub mod model;
pub mod name;
pub mod report;
pub mod store;
mod uid;

// Prelude
pub use adjacency::{AdjacencyConfig, solve_adjacencies};
pub use context::ModelContext;
pub use geom::point::Point;
pub use geom::polygon::Polygon;
pub use geom::ray::Ray;
pub use geom::triangles::TriangleIndex;
pub use geom::vector::Vector;
pub use model::boundary::{BcObject, BoundaryCondition, SunExposure, SurfaceHandle, WindExposure};
pub use model::construction::{Construction, InteriorConstructionSet};
pub use model::surface::{SubSurface, Surface, SurfaceType};
pub use model::zone::Zone;
pub use name::{HasName, SortByName};
pub use report::{AdjacencyReport, ReportEntry, Severity};
pub use store::{RunId, Session, ZoneHandle, ZoneStore};
pub use uid::UID;
