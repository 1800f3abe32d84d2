//! **backbone-core**: grid navigation for 2D games (core types).
//!
//! This crate provides the data the pathfinder works on: grid coordinates,
//! per-cell navigation data, and shared-storage navigation grids in two and
//! three dimensions.

pub mod cell;
pub mod geom;
pub mod grid;
pub mod grid3;

pub use cell::{BLOCKED_WEIGHT, GridCell};
pub use geom::{Point, Point3, Range};
pub use grid::{GridError, NavGrid};
pub use grid3::NavGrid3;
