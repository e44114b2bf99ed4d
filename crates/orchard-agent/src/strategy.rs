//! Move-selection strategies.

use std::fmt;
use std::str::FromStr;

use orchard_core::{Action, move_direction};
use orchard_paths::RefinementCache;

use crate::executor::RouteExecutor;
use crate::host::Host;
use crate::stash::{FruitStash, NodeFruitMap};

/// A policy that turns one turn's view of the game into one action.
///
/// The session calls [`update_state`](Strategy::update_state) and then
/// [`decide_move`](Strategy::decide_move) once per turn.
pub trait Strategy {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Absorb this turn's board and tallies.
    fn update_state(&mut self, host: &dyn Host);

    /// Choose this turn's action.
    fn decide_move(&mut self, host: &dyn Host) -> Action;

    /// The strategy's refinement cache, if it plans routes.
    fn refinement_cache(&self) -> Option<&RefinementCache> {
        None
    }
}

/// Takes what it stands on, otherwise walks to the closest live fruit.
#[derive(Debug, Default)]
pub struct GreedyStrategy {
    stash: FruitStash,
}

impl GreedyStrategy {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Strategy for GreedyStrategy {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn update_state(&mut self, host: &dyn Host) {
        self.stash = FruitStash::observe(host);
    }

    fn decide_move(&mut self, host: &dyn Host) -> Action {
        let position = host.my_position();
        if host
            .board()
            .fruit_at(position)
            .is_some_and(|f| self.stash.is_live(f))
        {
            return Action::Take;
        }
        self.stash
            .closest_any(position)
            .and_then(|target| move_direction(target, position))
            .map_or(Action::Pass, Action::from)
    }
}

/// Follows rarity-ordered waypoint plans through a [`RouteExecutor`].
#[derive(Debug, Default)]
pub struct PlannerStrategy {
    stash: FruitStash,
    fruits: NodeFruitMap,
    executor: RouteExecutor,
}

impl PlannerStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn executor(&self) -> &RouteExecutor {
        &self.executor
    }
}

impl Strategy for PlannerStrategy {
    fn name(&self) -> &'static str {
        "planner"
    }

    fn update_state(&mut self, host: &dyn Host) {
        self.stash = FruitStash::observe(host);
        self.fruits = NodeFruitMap::from_board(host.board());
    }

    fn decide_move(&mut self, host: &dyn Host) -> Action {
        self.executor.next_action(
            host.my_position(),
            host.board(),
            &self.stash,
            &self.fruits,
        )
    }

    fn refinement_cache(&self) -> Option<&RefinementCache> {
        Some(self.executor.planner().cache())
    }
}

/// Which [`Strategy`] a session runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StrategyKind {
    Greedy,
    #[default]
    Planner,
}

impl StrategyKind {
    /// A fresh strategy of this kind.
    pub fn build(self) -> Box<dyn Strategy> {
        match self {
            Self::Greedy => Box::new(GreedyStrategy::new()),
            Self::Planner => Box::new(PlannerStrategy::new()),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Greedy => "greedy",
            Self::Planner => "planner",
        })
    }
}

/// An unrecognized strategy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStrategyError(String);

impl fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown strategy {:?} (expected \"greedy\" or \"planner\")",
            self.0
        )
    }
}

impl std::error::Error for ParseStrategyError {}

impl FromStr for StrategyKind {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "greedy" => Ok(Self::Greedy),
            "planner" => Ok(Self::Planner),
            _ => Err(ParseStrategyError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::Snapshot;
    use orchard_core::{Board, Count, Direction, FruitType, Point};

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    fn decide(strategy: &mut dyn Strategy, host: &Snapshot) -> Action {
        strategy.update_state(host);
        strategy.decide_move(host)
    }

    #[test]
    fn greedy_takes_live_fruit_underfoot() {
        let mut board = Board::new(3, 3);
        board.set(p(1, 1), 2);
        let snap = Snapshot::new(board, p(1, 1), p(0, 0));
        assert_eq!(decide(&mut GreedyStrategy::new(), &snap), Action::Take);
    }

    #[test]
    fn greedy_ignores_decided_fruit_underfoot() {
        let mut board = Board::new(3, 1);
        board.set(p(0, 0), 2);
        board.set(p(2, 0), 4);
        let mut snap = Snapshot::new(board, p(0, 0), p(1, 0));
        snap.theirs
            .insert(FruitType::new(2).unwrap(), Count::whole(1));
        assert_eq!(
            decide(&mut GreedyStrategy::new(), &snap),
            Action::Move(Direction::East)
        );
    }

    #[test]
    fn greedy_heads_for_the_closest_fruit() {
        let mut board = Board::new(5, 5);
        board.set(p(4, 4), 1);
        board.set(p(0, 3), 1);
        let snap = Snapshot::new(board, p(0, 0), p(4, 0));
        assert_eq!(
            decide(&mut GreedyStrategy::new(), &snap),
            Action::Move(Direction::South)
        );
    }

    #[test]
    fn strategies_pass_on_an_empty_board() {
        let snap = Snapshot::new(Board::new(2, 2), p(0, 0), p(1, 1));
        assert_eq!(decide(&mut GreedyStrategy::new(), &snap), Action::Pass);
        assert_eq!(decide(&mut PlannerStrategy::new(), &snap), Action::Pass);
    }

    #[test]
    fn planner_exposes_its_cache() {
        let mut board = Board::new(5, 5);
        board.set(p(4, 4), 1);
        let snap = Snapshot::new(board, p(0, 0), p(4, 0));
        let mut planner = PlannerStrategy::new();
        assert_eq!(decide(&mut planner, &snap), Action::Move(Direction::East));
        assert!(planner.refinement_cache().is_some_and(|c| !c.is_empty()));
        assert!(GreedyStrategy::new().refinement_cache().is_none());
    }

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!("Greedy".parse(), Ok(StrategyKind::Greedy));
        assert_eq!("planner".parse(), Ok(StrategyKind::Planner));
        let err = "random".parse::<StrategyKind>().unwrap_err();
        assert!(err.to_string().contains("random"));
    }

    #[test]
    fn kind_builds_matching_strategy() {
        for kind in [StrategyKind::Greedy, StrategyKind::Planner] {
            assert_eq!(kind.build().name(), kind.to_string());
        }
        assert_eq!(StrategyKind::default(), StrategyKind::Planner);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn kind_serializes_lowercase() {
        let json = serde_json::to_string(&StrategyKind::Greedy).unwrap();
        assert_eq!(json, "\"greedy\"");
    }
}
