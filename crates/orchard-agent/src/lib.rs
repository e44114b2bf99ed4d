//! A turn-based fruit-collecting agent.
//!
//! Each turn the host answers a handful of [`Host`] queries; the [`Session`]
//! rebuilds its view of the board and returns exactly one
//! [`Action`](orchard_core::Action):
//!
//! - [`FruitStash`] groups live fruit by category and orders categories by
//!   rarity
//! - [`RouteExecutor`] commits to a waypoint chain from `orchard-paths` and
//!   walks it, replanning when the destination is gone
//! - [`Strategy`] implementations pick between the planner and a greedy
//!   baseline

mod executor;
mod host;
mod session;
mod stash;
mod strategy;

pub use executor::RouteExecutor;
pub use host::{Host, Snapshot};
pub use session::{Session, SessionConfig};
pub use stash::{FruitStash, NodeFruitMap};
pub use strategy::{GreedyStrategy, ParseStrategyError, PlannerStrategy, Strategy, StrategyKind};
