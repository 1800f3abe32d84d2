//! Pathfinding over navigation grids.
//!
//! [`Pathfinder`] resolves batches of [`PathRequest`]s against a shared
//! [`NavGrid`](backbone_core::NavGrid) (4-connected) or
//! [`NavGrid3`](backbone_core::NavGrid3) (26-connected). Each request is
//! searched independently and yields the cells from its start (exclusive)
//! to its end (inclusive), or an empty path when the end cannot be reached.
//!
//! Entering a cell costs the mean of the two cells' weights; cells at or
//! above the configured blocked weight are never entered.
//!
//! # Cell selection
//!
//! | Strategy | Picks | Paths |
//! |---|---|---|
//! | [`NearestFirst`] (default) | open cell closest to the goal | good, not always cheapest |
//! | [`CheapestFirst`] | open cell with the lowest accumulated cost | cheapest |
//!
//! Also here: [`update_blocker_distances`] for the per-cell
//! distance-to-obstacle field, and [`CoordinateConverter`] for mapping paths
//! to window space.

mod blocker;
mod config;
mod convert;
mod distance;
mod error;
mod neighbors;
mod pathfinder;
mod request;
mod select;
mod traits;

pub use blocker::{BlockerField, NO_BLOCKER, update_blocker_distances};
pub use config::PathfinderConfig;
pub use convert::CoordinateConverter;
pub use distance::{squared_euclidean, squared_euclidean_3d, transition_cost};
pub use error::PathError;
pub use pathfinder::{Pathfinder, path_cost};
pub use request::{Path, PathRequest};
pub use select::{CellSelector, CheapestFirst, NearestFirst};
pub use traits::{Coordinate, NavGraph};

pub use glam::Vec2;
