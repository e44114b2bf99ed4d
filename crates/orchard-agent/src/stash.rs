//! Per-turn fruit bookkeeping: where each live category's fruit lies and how
//! rare each category is.

use std::collections::{BTreeMap, BTreeSet};

use orchard_core::{Board, Count, FruitType, Point};
use orchard_paths::{FruitLookup, manhattan};

use crate::host::Host;

/// Known fruit locations grouped by category, restricted to categories that
/// are still contested.
///
/// A category is decided once either player holds strictly more than half of
/// its items; decided categories and categories with nothing left on the
/// board are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FruitStash {
    locations: BTreeMap<FruitType, BTreeSet<Point>>,
    win_counts: BTreeMap<FruitType, Count>,
    rarity: Vec<FruitType>,
}

impl FruitStash {
    /// An empty stash.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the stash from this turn's board and tallies.
    pub fn observe<H: Host + ?Sized>(host: &H) -> Self {
        let mut found: BTreeMap<FruitType, BTreeSet<Point>> = BTreeMap::new();
        for (p, f) in host.board().fruits() {
            found.entry(f).or_default().insert(p);
        }

        let mut stash = Self::new();
        for (f, points) in found {
            let win = Count::from_halves(host.total_item_count(f));
            if host.my_item_count(f) > win || host.opponent_item_count(f) > win {
                continue;
            }
            stash.win_counts.insert(f, win);
            stash.locations.insert(f, points);
        }
        stash.rarity = stash.locations.keys().copied().collect();
        let wins = &stash.win_counts;
        stash.rarity.sort_by_key(|f| (wins[f], *f));
        stash
    }

    /// Whether no contested fruit remains.
    pub fn is_empty(&self) -> bool {
        self.rarity.is_empty()
    }

    /// Live categories, rarest (lowest win count) first.
    pub fn rarity(&self) -> &[FruitType] {
        &self.rarity
    }

    /// The rarest live category.
    pub fn rarest(&self) -> Option<FruitType> {
        self.rarity.first().copied()
    }

    /// Whether `fruit` is still contested and on the board.
    pub fn is_live(&self, fruit: FruitType) -> bool {
        self.locations.contains_key(&fruit)
    }

    /// Known locations of `fruit`.
    pub fn locations(&self, fruit: FruitType) -> Option<&BTreeSet<Point>> {
        self.locations.get(&fruit)
    }

    /// Count needed, strictly exceeded, to claim `fruit`.
    pub fn win_count(&self, fruit: FruitType) -> Option<Count> {
        self.win_counts.get(&fruit).copied()
    }

    /// Every known location of every live category.
    pub fn all_locations(&self) -> impl Iterator<Item = Point> + '_ {
        self.locations.values().flatten().copied()
    }

    /// Location of `fruit` closest to `from`; ties go to the earliest in
    /// stash order. `None` when the category has no known location.
    pub fn closest(&self, fruit: FruitType, from: Point) -> Option<Point> {
        self.locations
            .get(&fruit)?
            .iter()
            .copied()
            .min_by_key(|&p| manhattan(p, from))
    }

    /// Closest live fruit of any category.
    pub fn closest_any(&self, from: Point) -> Option<Point> {
        self.rarity
            .iter()
            .filter_map(|&f| self.closest(f, from))
            .min_by_key(|&p| manhattan(p, from))
    }
}

/// Which fruit each known fruit-bearing point holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeFruitMap(BTreeMap<Point, FruitType>);

impl NodeFruitMap {
    /// Every fruit-bearing cell of `board`.
    pub fn from_board(board: &Board) -> Self {
        Self(board.fruits().collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, p: Point) -> Option<FruitType> {
        self.0.get(&p).copied()
    }
}

impl FruitLookup for NodeFruitMap {
    fn fruit_at(&self, p: Point) -> Option<FruitType> {
        self.get(p)
    }
}
