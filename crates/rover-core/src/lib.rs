//! **rover-core** — terrain grids and geometry for the rover planner.
//!
//! This crate provides the data the search engine works over: grid
//! coordinates, the terrain symbols with their battery costs, and a
//! validated rectangular [`TerrainGrid`].

pub mod geom;
pub mod grid;
pub mod terrain;

pub use geom::{Bounds, Pos, manhattan};
pub use grid::{DEFAULT_BATTERY, DEFAULT_GOAL, DEFAULT_START, GridError, TerrainGrid};
pub use terrain::Terrain;
