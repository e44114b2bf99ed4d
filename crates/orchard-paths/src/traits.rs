use std::collections::{BTreeMap, HashMap};

use orchard_core::{Board, FruitType, Point};

/// Read access to which fruit a waypoint holds.
pub trait FruitLookup {
    /// Fruit known at `p`, or `None` if the point holds nothing.
    fn fruit_at(&self, p: Point) -> Option<FruitType>;
}

impl FruitLookup for BTreeMap<Point, FruitType> {
    fn fruit_at(&self, p: Point) -> Option<FruitType> {
        self.get(&p).copied()
    }
}

impl FruitLookup for HashMap<Point, FruitType> {
    fn fruit_at(&self, p: Point) -> Option<FruitType> {
        self.get(&p).copied()
    }
}

impl FruitLookup for Board {
    fn fruit_at(&self, p: Point) -> Option<FruitType> {
        Board::fruit_at(self, p)
    }
}
