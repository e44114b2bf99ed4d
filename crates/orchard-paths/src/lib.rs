//! Waypoint-constrained monotone path planning on fruit boards.
//!
//! Given a start, a destination and a set of fruit waypoints, this crate
//! finds every maximal ordering of waypoints that can be visited without ever
//! stepping away from the destination, and picks the ordering that collects
//! the rarest fruit:
//!
//! - **Geometry**: [`manhattan`], [`canonical_box`], [`nodes_in_box`]
//! - **Dominance graph**: [`RoutePlanner::construct_restricted_paths`],
//!   memoized in a [`RefinementCache`]
//! - **Enumeration**: [`RoutePlanner::possible_paths`]
//! - **Selection**: [`select_path`]
//!
//! All graph work goes through [`RoutePlanner`], which owns the refinement
//! cache for the lifetime of one game episode.

mod distance;
mod enumerate;
mod planner;
mod refine;
mod select;
mod traits;

pub use distance::{canonical_box, manhattan, nodes_in_box, nodes_in_box_all};
pub use enumerate::{extend_partial_path, extract_paths, is_monotone, unit_steps};
pub use planner::{Chain, DominanceGraph, Refinement, RefinementCache, RoutePlanner};
pub use refine::{TwoStep, refine};
pub use select::{fruit_count, select_path};
pub use traits::FruitLookup;
