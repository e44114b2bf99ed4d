use std::collections::BTreeMap;

use orchard_core::{FruitType, Point};

use crate::planner::Chain;
use crate::traits::FruitLookup;

/// How many waypoints of each fruit type a chain passes through.
///
/// Points the lookup knows nothing about (the start, empty cells)
/// contribute nothing.
pub fn fruit_count<L>(chain: &[Point], lookup: &L) -> BTreeMap<FruitType, u32>
where
    L: FruitLookup + ?Sized,
{
    let mut counts = BTreeMap::new();
    for &p in chain {
        if let Some(f) = lookup.fruit_at(p) {
            *counts.entry(f).or_insert(0) += 1;
        }
    }
    counts
}

/// Per-type counts of `chain`, listed in `rarity` order.
fn coverage<L>(chain: &[Point], rarity: &[FruitType], lookup: &L) -> Vec<u32>
where
    L: FruitLookup + ?Sized,
{
    let counts = fruit_count(chain, lookup);
    rarity
        .iter()
        .map(|f| counts.get(f).copied().unwrap_or(0))
        .collect()
}

/// Pick the chain that collects the most of the rarest type, breaking ties
/// on the next-rarest type and so on.
///
/// Chains that tie on every type resolve to the earliest one. Returns `None`
/// only when `chains` is empty.
pub fn select_path<'a, L>(chains: &'a [Chain], rarity: &[FruitType], lookup: &L) -> Option<&'a Chain>
where
    L: FruitLookup + ?Sized,
{
    let mut best: Option<(&Chain, Vec<u32>)> = None;
    for chain in chains {
        let score = coverage(chain, rarity, lookup);
        match &best {
            Some((_, top)) if *top >= score => {}
            _ => best = Some((chain, score)),
        }
    }
    best.map(|(chain, _)| chain)
}
