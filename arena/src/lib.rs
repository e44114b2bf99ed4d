//! A two-player fruit arena.
//!
//! [`Arena`] generates a seeded board, resolves both players' simultaneous
//! actions each turn and scores the result. A [`Matchup`] drives two
//! [`Session`]s through a series of matches.

use std::collections::BTreeMap;
use std::fmt;

use orchard_agent::{Host, Session, SessionConfig, StrategyKind};
use orchard_core::{Action, Board, Count, FruitType, Point};
use rand::rngs::SmallRng;
use rand::{RngExt, SeedableRng};

/// Board generation and match settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArenaConfig {
    pub width: i32,
    pub height: i32,
    /// Number of fruit categories.
    pub fruit_types: u32,
    /// Upper bound on the (odd) number of items per category.
    pub max_per_type: u32,
    pub turn_limit: u32,
    pub seed: u64,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            fruit_types: 5,
            max_per_type: 7,
            turn_limit: 200,
            seed: 0,
        }
    }
}

/// Errors raised when an [`ArenaConfig`] cannot produce a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArenaError {
    /// Width or height is not positive.
    EmptyBoard { width: i32, height: i32 },
    /// No fruit categories, or a zero per-category maximum.
    NoFruit,
    /// More cells than a board can index.
    TooLarge { width: i32, height: i32 },
    /// The worst-case fruit count plus the start cell does not fit.
    Overcrowded { needed: u64, cells: u64 },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBoard { width, height } => {
                write!(f, "arena: {width}x{height} board has no cells")
            }
            Self::TooLarge { width, height } => {
                write!(f, "arena: {width}x{height} board is too large")
            }
            Self::NoFruit => f.write_str("arena: at least one fruit type and item is required"),
            Self::Overcrowded { needed, cells } => {
                write!(f, "arena: up to {needed} cells needed, board has {cells}")
            }
        }
    }
}

impl std::error::Error for ArenaError {}

impl ArenaConfig {
    /// Check that a board can always be generated from these settings.
    pub fn validate(&self) -> Result<(), ArenaError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ArenaError::EmptyBoard {
                width: self.width,
                height: self.height,
            });
        }
        if self.fruit_types == 0 || self.max_per_type == 0 {
            return Err(ArenaError::NoFruit);
        }
        let cells = self.width as u64 * self.height as u64;
        if cells > i32::MAX as u64 {
            return Err(ArenaError::TooLarge {
                width: self.width,
                height: self.height,
            });
        }
        let needed = self.fruit_types as u64 * self.max_per_type as u64 + 1;
        if needed > cells {
            return Err(ArenaError::Overcrowded { needed, cells });
        }
        Ok(())
    }
}

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    pub const BOTH: [Seat; 2] = [Seat::First, Seat::Second];

    pub fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }

    fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::First => "first",
            Self::Second => "second",
        })
    }
}

/// Final score of a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Categories won by each seat, indexed like [`Seat::BOTH`].
    pub wins: [u32; 2],
    pub turns: u32,
    /// `None` on a draw.
    pub winner: Option<Seat>,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b] = self.wins;
        match self.winner {
            Some(seat) => write!(f, "{seat} wins {a}-{b} after {} turns", self.turns),
            None => write!(f, "draw {a}-{b} after {} turns", self.turns),
        }
    }
}

/// Game state shared by both players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arena {
    config: ArenaConfig,
    board: Board,
    positions: [Point; 2],
    collected: [BTreeMap<FruitType, Count>; 2],
    totals: BTreeMap<FruitType, u32>,
    turn: u32,
}

impl Arena {
    /// Generate a board from `config.seed`.
    ///
    /// Every category gets an odd number of items, at most
    /// `config.max_per_type`, on distinct cells. Both players start on the
    /// same empty cell.
    pub fn new(config: ArenaConfig) -> Result<Self, ArenaError> {
        config.validate()?;
        let mut rng = SmallRng::seed_from_u64(config.seed);
        let mut board = Board::new(config.width, config.height);
        let mut free: Vec<Point> = board.iter().map(|(p, _)| p).collect();
        let mut totals = BTreeMap::new();

        for fruit in (1..=config.fruit_types).filter_map(FruitType::new) {
            let n = 2 * rng.random_range(0..config.max_per_type.div_ceil(2)) + 1;
            for _ in 0..n {
                let p = free.swap_remove(rng.random_range(0..free.len()));
                board.set(p, fruit.id());
            }
            totals.insert(fruit, n);
        }
        let start = free[rng.random_range(0..free.len())];
        log::debug!(
            "arena {}x{} seed {}: {} fruit, start {start}",
            config.width,
            config.height,
            config.seed,
            totals.values().sum::<u32>()
        );

        Ok(Self {
            config,
            board,
            positions: [start; 2],
            collected: Default::default(),
            totals,
            turn: 0,
        })
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn position(&self, seat: Seat) -> Point {
        self.positions[seat.index()]
    }

    pub fn collected(&self, seat: Seat, fruit: FruitType) -> Count {
        self.collected[seat.index()]
            .get(&fruit)
            .copied()
            .unwrap_or_default()
    }

    pub fn total(&self, fruit: FruitType) -> u32 {
        self.totals.get(&fruit).copied().unwrap_or(0)
    }

    /// Turns resolved so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// `seat`'s view of the game.
    pub fn view(&self, seat: Seat) -> PlayerView<'_> {
        PlayerView { arena: self, seat }
    }

    /// Resolve one turn of simultaneous actions, indexed like [`Seat::BOTH`].
    ///
    /// Moves off the board are ignored. Taking fruit awards a whole item, or
    /// half an item each when both players take the same cell.
    pub fn step(&mut self, actions: [Action; 2]) {
        self.turn += 1;
        let takes = actions.map(|a| a == Action::Take);
        if takes == [true, true] && self.positions[0] == self.positions[1] {
            if let Some(fruit) = self.board.take(self.positions[0]) {
                for held in &mut self.collected {
                    *held.entry(fruit).or_default() += Count::HALF;
                }
            }
        } else {
            for (i, _) in takes.iter().enumerate().filter(|(_, t)| **t) {
                if let Some(fruit) = self.board.take(self.positions[i]) {
                    *self.collected[i].entry(fruit).or_default() += Count::ONE;
                }
            }
        }

        for (i, action) in actions.into_iter().enumerate() {
            if let Action::Move(d) = action {
                let next = self.positions[i] + d.delta();
                if self.board.contains(next) {
                    self.positions[i] = next;
                }
            }
        }
        log::trace!(
            "turn {}: {} / {} -> {} / {}",
            self.turn,
            actions[0],
            actions[1],
            self.positions[0],
            self.positions[1]
        );
    }

    /// Whether `fruit` is already won by either player.
    pub fn is_decided(&self, fruit: FruitType) -> bool {
        let win = Count::from_halves(self.total(fruit));
        Seat::BOTH
            .iter()
            .any(|&s| self.collected(s, fruit) > win)
    }

    /// Whether the match has ended.
    pub fn is_over(&self) -> bool {
        self.turn >= self.config.turn_limit
            || self.board.fruits().next().is_none()
            || self.totals.keys().all(|&f| self.is_decided(f))
    }

    /// Score the match as it stands: each category goes to whoever holds
    /// more of it.
    pub fn outcome(&self) -> Outcome {
        let mut wins = [0; 2];
        for &fruit in self.totals.keys() {
            let first = self.collected(Seat::First, fruit);
            let second = self.collected(Seat::Second, fruit);
            if first > second {
                wins[0] += 1;
            } else if second > first {
                wins[1] += 1;
            }
        }
        let winner = match wins[0].cmp(&wins[1]) {
            std::cmp::Ordering::Greater => Some(Seat::First),
            std::cmp::Ordering::Less => Some(Seat::Second),
            std::cmp::Ordering::Equal => None,
        };
        Outcome {
            wins,
            turns: self.turn,
            winner,
        }
    }
}

/// The [`Host`] answers one player receives.
#[derive(Debug, Clone, Copy)]
pub struct PlayerView<'a> {
    arena: &'a Arena,
    seat: Seat,
}

impl Host for PlayerView<'_> {
    fn board(&self) -> &Board {
        self.arena.board()
    }

    fn my_position(&self) -> Point {
        self.arena.position(self.seat)
    }

    fn opponent_position(&self) -> Point {
        self.arena.position(self.seat.other())
    }

    fn my_item_count(&self, fruit: FruitType) -> Count {
        self.arena.collected(self.seat, fruit)
    }

    fn opponent_item_count(&self, fruit: FruitType) -> Count {
        self.arena.collected(self.seat.other(), fruit)
    }

    fn total_item_count(&self, fruit: FruitType) -> u32 {
        self.arena.total(fruit)
    }
}

/// Two sessions that play a series of matches against each other.
///
/// The sessions live across matches and are reset with
/// [`Session::new_game`] before each one.
#[derive(Debug)]
pub struct Matchup {
    kinds: [StrategyKind; 2],
    sessions: [Session; 2],
}

impl Matchup {
    pub fn new(kinds: [StrategyKind; 2]) -> Self {
        Self {
            kinds,
            sessions: kinds.map(|strategy| Session::new(SessionConfig { strategy })),
        }
    }

    pub fn session(&self, seat: Seat) -> &Session {
        &self.sessions[seat.index()]
    }

    /// Play one match on a board generated from `config`.
    pub fn play(&mut self, config: ArenaConfig) -> Result<Outcome, ArenaError> {
        let mut arena = Arena::new(config)?;
        for session in &mut self.sessions {
            session.new_game();
        }
        while !arena.is_over() {
            let actions = [
                self.sessions[0].make_move(&arena.view(Seat::First)),
                self.sessions[1].make_move(&arena.view(Seat::Second)),
            ];
            arena.step(actions);
        }
        let outcome = arena.outcome();
        log::info!("{} vs {}: {outcome}", self.kinds[0], self.kinds[1]);
        Ok(outcome)
    }
}

/// Play one match between two fresh strategies.
pub fn play_match(config: ArenaConfig, kinds: [StrategyKind; 2]) -> Result<Outcome, ArenaError> {
    Matchup::new(kinds).play(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use orchard_core::Direction;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    fn fruit(id: u32) -> FruitType {
        FruitType::new(id).unwrap()
    }

    /// A hand-built arena with both players at `start`.
    fn fixed(board: Board, start: Point) -> Arena {
        let mut totals = BTreeMap::new();
        for (_, f) in board.fruits() {
            *totals.entry(f).or_insert(0) += 1;
        }
        Arena {
            config: ArenaConfig {
                width: board.width(),
                height: board.height(),
                ..ArenaConfig::default()
            },
            board,
            positions: [start; 2],
            collected: Default::default(),
            totals,
            turn: 0,
        }
    }

    #[test]
    fn same_seed_same_board() {
        let config = ArenaConfig {
            seed: 42,
            ..ArenaConfig::default()
        };
        assert_eq!(Arena::new(config).unwrap(), Arena::new(config).unwrap());
    }

    #[test]
    fn generated_counts_are_odd_and_bounded() {
        for seed in 0..20 {
            let config = ArenaConfig {
                seed,
                ..ArenaConfig::default()
            };
            let arena = Arena::new(config).unwrap();
            for id in 1..=config.fruit_types {
                let n = arena.board().count(fruit(id)) as u32;
                assert_eq!(n % 2, 1, "seed {seed}, type {id}: {n} items");
                assert!(n <= config.max_per_type);
                assert_eq!(arena.total(fruit(id)), n);
            }
            let start = arena.position(Seat::First);
            assert_eq!(start, arena.position(Seat::Second));
            assert!(!arena.board().has_fruit(start));
        }
    }

    #[test]
    fn invalid_configs_are_rejected() {
        let tiny = ArenaConfig {
            width: 2,
            height: 2,
            ..ArenaConfig::default()
        };
        assert!(matches!(
            Arena::new(tiny),
            Err(ArenaError::Overcrowded { .. })
        ));
        let flat = ArenaConfig {
            height: 0,
            ..ArenaConfig::default()
        };
        assert!(matches!(
            Arena::new(flat),
            Err(ArenaError::EmptyBoard { .. })
        ));
        let huge = ArenaConfig {
            width: 70_000,
            height: 70_000,
            ..ArenaConfig::default()
        };
        assert_eq!(
            huge.validate(),
            Err(ArenaError::TooLarge {
                width: 70_000,
                height: 70_000,
            })
        );
        let barren = ArenaConfig {
            fruit_types: 0,
            ..ArenaConfig::default()
        };
        assert_eq!(Arena::new(barren), Err(ArenaError::NoFruit));
    }

    #[test]
    fn simultaneous_take_splits_the_item() {
        let mut board = Board::new(3, 3);
        board.set(p(1, 1), 2);
        let mut arena = fixed(board, p(1, 1));
        arena.step([Action::Take, Action::Take]);
        assert_eq!(arena.collected(Seat::First, fruit(2)), Count::HALF);
        assert_eq!(arena.collected(Seat::Second, fruit(2)), Count::HALF);
        assert!(!arena.board().has_fruit(p(1, 1)));
    }

    #[test]
    fn lone_take_awards_a_whole_item() {
        let mut board = Board::new(3, 3);
        board.set(p(0, 0), 1);
        let mut arena = fixed(board, p(0, 0));
        arena.step([Action::Move(Direction::East), Action::Take]);
        assert_eq!(arena.collected(Seat::Second, fruit(1)), Count::ONE);
        assert_eq!(arena.collected(Seat::First, fruit(1)), Count::ZERO);
        assert_eq!(arena.position(Seat::First), p(1, 0));
    }

    #[test]
    fn moves_off_the_board_are_ignored() {
        let mut arena = fixed(Board::new(2, 2), p(0, 0));
        arena.step([Action::Move(Direction::North), Action::Move(Direction::West)]);
        assert_eq!(arena.position(Seat::First), p(0, 0));
        assert_eq!(arena.position(Seat::Second), p(0, 0));
        arena.step([Action::Move(Direction::South), Action::Pass]);
        assert_eq!(arena.position(Seat::First), p(0, 1));
    }

    #[test]
    fn view_swaps_perspective() {
        let mut board = Board::new(3, 1);
        board.set(p(0, 0), 1);
        let mut arena = fixed(board, p(0, 0));
        arena.step([Action::Take, Action::Move(Direction::East)]);
        let second = arena.view(Seat::Second);
        assert_eq!(second.my_position(), p(1, 0));
        assert_eq!(second.opponent_position(), p(0, 0));
        assert_eq!(second.opponent_item_count(fruit(1)), Count::ONE);
        assert_eq!(second.total_item_count(fruit(1)), 1);
    }

    #[test]
    fn match_ends_once_every_category_is_decided() {
        let mut board = Board::new(4, 1);
        board.set(p(0, 0), 1);
        board.set(p(1, 0), 1);
        board.set(p(2, 0), 1);
        board.set(p(3, 0), 2);
        let mut arena = fixed(board, p(0, 0));
        arena.step([Action::Take, Action::Pass]);
        assert!(!arena.is_decided(fruit(1)));
        let east = Action::Move(Direction::East);
        arena.step([east, east]);
        arena.step([Action::Take, Action::Pass]);
        // Two of three items is more than half.
        assert!(arena.is_decided(fruit(1)));
        assert!(!arena.is_over());
        arena.positions[0] = p(3, 0);
        arena.step([Action::Take, Action::Pass]);
        assert!(arena.is_over());
        let outcome = arena.outcome();
        assert_eq!(outcome.wins, [2, 0]);
        assert_eq!(outcome.winner, Some(Seat::First));
    }

    #[test]
    fn planner_against_greedy_terminates() {
        let config = ArenaConfig {
            seed: 7,
            ..ArenaConfig::default()
        };
        let outcome = play_match(config, [StrategyKind::Planner, StrategyKind::Greedy]).unwrap();
        assert!(outcome.turns <= config.turn_limit);
        assert!(outcome.wins[0] + outcome.wins[1] <= config.fruit_types);
    }

    #[test]
    fn matches_are_reproducible() {
        let config = ArenaConfig {
            seed: 3,
            ..ArenaConfig::default()
        };
        let kinds = [StrategyKind::Greedy, StrategyKind::Planner];
        assert_eq!(play_match(config, kinds), play_match(config, kinds));
    }

    #[test]
    fn matchup_resets_sessions_between_matches() {
        let config = ArenaConfig {
            seed: 5,
            ..ArenaConfig::default()
        };
        let kinds = [StrategyKind::Planner, StrategyKind::Greedy];
        let mut matchup = Matchup::new(kinds);
        let first = matchup.play(config).unwrap();
        let second = matchup.play(config).unwrap();
        assert_eq!(first, second);
        assert_eq!(Ok(second.clone()), play_match(config, kinds));
        // The turn counter restarts with every match.
        assert_eq!(matchup.session(Seat::First).turn(), second.turns);
        assert_eq!(matchup.session(Seat::Second).turn(), second.turns);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_fills_missing_fields_from_default() {
        let config: ArenaConfig = serde_json::from_str(r#"{"seed": 9}"#).unwrap();
        assert_eq!(
            config,
            ArenaConfig {
                seed: 9,
                ..ArenaConfig::default()
            }
        );
    }
}
