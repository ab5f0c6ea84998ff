//! Grid-cell overlay generation for web maps.
//!
//! Builds a GeoJSON-style feature collection of rectangular cells from
//! longitude/latitude node arrays, for rendering a clickable grid on top of
//! a base map. Generation runs at most once per target: [`ensure_grid`]
//! checks the backing store before regenerating, so the overlay file acts as
//! a write-once cache.

pub mod error;
pub mod generator;
pub mod geojson;
pub mod store;

pub use error::{OverlayError, OverlayResult};
pub use generator::{generate_grid, global_grid_nodes, GridCell};
pub use geojson::{CellGeometry, CellProperties, GridFeature, GridFeatureCollection};
pub use store::{ensure_grid, FsOverlayStore, MemoryOverlayStore, OverlayStore};
