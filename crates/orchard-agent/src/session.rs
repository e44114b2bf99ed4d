//! The per-episode controller a game host drives.

use orchard_core::Action;
use orchard_paths::RefinementCache;

use crate::host::Host;
use crate::strategy::{Strategy, StrategyKind};

/// Settings fixed for every episode a [`Session`] plays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    pub strategy: StrategyKind,
}

/// One agent's state for one episode.
///
/// Everything episode-scoped (stash, node map, refinement cache and plan)
/// lives inside the strategy and is rebuilt by [`Session::new_game`].
pub struct Session {
    config: SessionConfig,
    strategy: Box<dyn Strategy>,
    turn: u32,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            strategy: config.strategy.build(),
            turn: 0,
        }
    }

    /// Start a new episode, discarding all state from the previous one.
    pub fn new_game(&mut self) {
        log::debug!("new game with {} strategy", self.config.strategy);
        *self = Self::new(self.config);
    }

    /// Decide this turn's action.
    pub fn make_move(&mut self, host: &dyn Host) -> Action {
        self.turn += 1;
        self.strategy.update_state(host);
        let action = self.strategy.decide_move(host);
        log::debug!(
            "turn {} [{}] at {}: {action}",
            self.turn,
            self.strategy.name(),
            host.my_position()
        );
        action
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Turns played this episode.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn refinement_cache(&self) -> Option<&RefinementCache> {
        self.strategy.refinement_cache()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("config", &self.config)
            .field("strategy", &self.strategy.name())
            .field("turn", &self.turn)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::Snapshot;
    use orchard_core::{Board, Direction, Point};

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    fn episode() -> Snapshot {
        let mut board = Board::new(5, 5);
        board.set(p(4, 4), 1);
        board.set(p(2, 2), 2);
        Snapshot::new(board, p(0, 0), p(4, 0))
    }

    #[test]
    fn new_game_forgets_the_previous_episode() {
        let mut session = Session::default();
        let snap = episode();
        assert_eq!(session.make_move(&snap), Action::Move(Direction::East));
        let first_misses = session.refinement_cache().map(|c| c.misses());
        assert!(first_misses.is_some_and(|m| m > 0));

        session.new_game();
        assert_eq!(session.turn(), 0);
        let cache = session.refinement_cache().unwrap();
        assert!(cache.is_empty());
        assert_eq!(cache.hits(), 0);

        // Identical coordinates in the second episode are computed afresh.
        assert_eq!(session.make_move(&snap), Action::Move(Direction::East));
        let cache = session.refinement_cache().unwrap();
        assert_eq!(cache.hits(), 0);
        assert_eq!(Some(cache.misses()), first_misses);
    }

    #[test]
    fn make_move_counts_turns() {
        let mut session = Session::new(SessionConfig {
            strategy: StrategyKind::Greedy,
        });
        let snap = episode();
        session.make_move(&snap);
        session.make_move(&snap);
        assert_eq!(session.turn(), 2);
        assert_eq!(session.strategy_name(), "greedy");
        assert!(session.refinement_cache().is_none());
    }

    #[test]
    fn new_game_keeps_the_configuration() {
        let config = SessionConfig {
            strategy: StrategyKind::Greedy,
        };
        let mut session = Session::new(config);
        session.new_game();
        assert_eq!(session.config(), config);
        assert_eq!(session.strategy_name(), "greedy");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_defaults_missing_fields() {
        let config: SessionConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SessionConfig::default());
    }
}
