//! **orchard-core**: core types for a turn-based fruit-collecting agent.
//!
//! This crate provides the foundational types used across the *orchard*
//! workspace: board positions and canonical bounding boxes, the column-major
//! fruit board, fruit categories with half-unit tallies, and the per-turn
//! action vocabulary.

pub mod action;
pub mod board;
pub mod error;
pub mod fruit;
pub mod geom;

pub use action::{Action, Direction, move_direction};
pub use board::Board;
pub use error::{BoardError, GeomError};
pub use fruit::{Count, FruitType};
pub use geom::{Heading, Point, Rect};
