//! The per-turn queries a game host answers.

use std::collections::BTreeMap;

use orchard_core::{Board, Count, FruitType, Point};

/// Read-only view of the game a host exposes to an agent each turn.
pub trait Host {
    /// Current board snapshot.
    fn board(&self) -> &Board;

    /// The agent's own position.
    fn my_position(&self) -> Point;

    /// The opponent's position.
    fn opponent_position(&self) -> Point;

    /// How much of `fruit` the agent has collected.
    fn my_item_count(&self, fruit: FruitType) -> Count;

    /// How much of `fruit` the opponent has collected.
    fn opponent_item_count(&self, fruit: FruitType) -> Count;

    /// How many items of `fruit` the episode started with.
    fn total_item_count(&self, fruit: FruitType) -> u32;
}

/// An owned, self-contained [`Host`] answer set for one turn.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub board: Board,
    pub me: Point,
    pub opponent: Point,
    pub mine: BTreeMap<FruitType, Count>,
    pub theirs: BTreeMap<FruitType, Count>,
    pub totals: BTreeMap<FruitType, u32>,
}

impl Snapshot {
    /// A snapshot with no items collected yet; totals are read off `board`.
    pub fn new(board: Board, me: Point, opponent: Point) -> Self {
        let mut totals = BTreeMap::new();
        for (_, f) in board.fruits() {
            *totals.entry(f).or_insert(0) += 1;
        }
        Self {
            board,
            me,
            opponent,
            mine: BTreeMap::new(),
            theirs: BTreeMap::new(),
            totals,
        }
    }
}

impl Host for Snapshot {
    fn board(&self) -> &Board {
        &self.board
    }

    fn my_position(&self) -> Point {
        self.me
    }

    fn opponent_position(&self) -> Point {
        self.opponent
    }

    fn my_item_count(&self, fruit: FruitType) -> Count {
        self.mine.get(&fruit).copied().unwrap_or_default()
    }

    fn opponent_item_count(&self, fruit: FruitType) -> Count {
        self.theirs.get(&fruit).copied().unwrap_or_default()
    }

    fn total_item_count(&self, fruit: FruitType) -> u32 {
        self.totals.get(&fruit).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_totals_come_from_the_board() {
        let mut board = Board::new(3, 3);
        board.set(Point::new(0, 0), 1);
        board.set(Point::new(2, 1), 1);
        board.set(Point::new(1, 2), 2);
        let snap = Snapshot::new(board, Point::new(1, 1), Point::new(0, 2));
        let apple = FruitType::new(1).unwrap();
        assert_eq!(snap.total_item_count(apple), 2);
        assert_eq!(snap.my_item_count(apple), Count::ZERO);
        assert_eq!(snap.my_position(), Point::new(1, 1));
        assert_eq!(snap.opponent_position(), Point::new(0, 2));
    }
}
