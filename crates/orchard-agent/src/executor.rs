//! Committing to a waypoint chain and walking it one action per turn.

use std::collections::VecDeque;

use orchard_core::{Action, Board, GeomError, Point, move_direction};
use orchard_paths::{RoutePlanner, canonical_box, nodes_in_box, select_path};

use crate::stash::{FruitStash, NodeFruitMap};

/// Walks a committed waypoint chain, replanning whenever its destination is
/// gone.
#[derive(Debug, Default)]
pub struct RouteExecutor {
    planner: RoutePlanner,
    plan: VecDeque<Point>,
}

impl RouteExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waypoints still ahead, the next one first.
    pub fn plan(&self) -> &VecDeque<Point> {
        &self.plan
    }

    /// The planner and its refinement cache.
    pub fn planner(&self) -> &RoutePlanner {
        &self.planner
    }

    /// Last point of the committed plan.
    pub fn destination(&self) -> Option<Point> {
        self.plan.back().copied()
    }

    /// Whether the plan must be rebuilt before it can be followed.
    pub fn is_stale(&self, board: &Board) -> bool {
        self.destination().is_none_or(|d| !board.has_fruit(d))
    }

    /// The action for this turn.
    ///
    /// Planning failures are logged and answered with [`Action::Pass`].
    pub fn next_action(
        &mut self,
        position: Point,
        board: &Board,
        stash: &FruitStash,
        fruits: &NodeFruitMap,
    ) -> Action {
        if self.is_stale(board) {
            if !self.plan.is_empty() {
                log::debug!("destination emptied, replanning from {position}");
                self.plan.clear();
            }
            match self.replan(position, stash, fruits) {
                Ok(true) => {}
                Ok(false) => return Action::Pass,
                Err(err) => {
                    log::warn!("planning from {position} failed: {err}");
                    return Action::Pass;
                }
            }
        }
        self.advance(position, board)
    }

    fn advance(&mut self, position: Point, board: &Board) -> Action {
        while self.plan.front() == Some(&position) {
            self.plan.pop_front();
            if board.has_fruit(position) {
                return Action::Take;
            }
        }
        self.plan
            .front()
            .and_then(|&next| move_direction(next, position))
            .map_or(Action::Pass, Action::from)
    }

    /// Commit to a new plan toward the closest fruit of the rarest live
    /// category. `Ok(false)` when there is nothing left to go for.
    fn replan(
        &mut self,
        position: Point,
        stash: &FruitStash,
        fruits: &NodeFruitMap,
    ) -> Result<bool, GeomError> {
        let Some(rarest) = stash.rarest() else {
            return Ok(false);
        };
        let Some(target) = stash.closest(rarest, position) else {
            return Ok(false);
        };
        if target == position {
            self.plan = VecDeque::from([position]);
            return Ok(true);
        }

        let rect = canonical_box(position, target)?;
        let waypoints: Vec<Point> =
            nodes_in_box(rect, stash.all_locations(), |p| p != position).collect();
        let chains = self.planner.possible_paths(position, target, waypoints)?;
        let Some(best) = select_path(&chains, stash.rarity(), fruits) else {
            return Ok(false);
        };
        log::debug!(
            "plan toward {rarest} at {target}: {} waypoints, {} candidates",
            best.len(),
            chains.len()
        );
        self.plan = best.iter().copied().collect();
        Ok(true)
    }
}
