use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::rc::Rc;

use orchard_core::Point;

/// Pruned successor sets: for each node, the admissible next waypoints
/// toward a fixed destination.
pub type DominanceGraph = BTreeMap<Point, BTreeSet<Point>>;

/// An ordered waypoint sequence from a start point to a destination.
pub type Chain = Vec<Point>;

// ---------------------------------------------------------------------------
// Refinement cache
// ---------------------------------------------------------------------------

/// Result of one refinement step over a node set toward a destination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Refinement {
    /// Nodes that are not reachable through another node: the immediate
    /// successors of whoever owns the node set.
    pub filtered: BTreeSet<Point>,
    /// For each node, the other nodes inside its box toward the destination.
    pub graph: DominanceGraph,
}

/// Canonical memo key: the destination and the sorted node set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    end: Point,
    nodes: Vec<Point>,
}

impl CacheKey {
    fn new(end: Point, nodes: &BTreeSet<Point>) -> Self {
        Self {
            end,
            nodes: nodes.iter().copied().collect(),
        }
    }
}

/// Memo table of refinement steps, scoped to one game episode.
///
/// Node identity only means something within one episode's board history,
/// so a new episode must start from an empty cache.
#[derive(Debug, Default)]
pub struct RefinementCache {
    entries: HashMap<CacheKey, Rc<Refinement>>,
    hits: u64,
    misses: u64,
}

impl RefinementCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn get(&mut self, end: Point, nodes: &BTreeSet<Point>) -> Option<Rc<Refinement>> {
        let found = self.entries.get(&CacheKey::new(end, nodes)).cloned();
        if found.is_some() {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        found
    }

    pub(crate) fn insert(
        &mut self,
        end: Point,
        nodes: &BTreeSet<Point>,
        refinement: Refinement,
    ) -> Rc<Refinement> {
        let refinement = Rc::new(refinement);
        self.entries
            .insert(CacheKey::new(end, nodes), Rc::clone(&refinement));
        refinement
    }

    /// Number of memoized refinement steps.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been memoized yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lookups answered from the table.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Lookups that had to compute a refinement.
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Drop every entry and reset the counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }
}

// ---------------------------------------------------------------------------
// RoutePlanner
// ---------------------------------------------------------------------------

/// Central coordinator for waypoint route planning.
///
/// `RoutePlanner` owns the refinement cache so that repeated queries toward
/// the same destination over the same waypoints are answered without
/// recomputing the dominance frontier.
#[derive(Debug, Default)]
pub struct RoutePlanner {
    pub(crate) cache: RefinementCache,
}

impl RoutePlanner {
    /// Create a planner with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The planner's refinement cache.
    #[inline]
    pub fn cache(&self) -> &RefinementCache {
        &self.cache
    }

    /// Forget every memoized refinement.
    pub fn reset(&mut self) {
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodes(points: &[(i32, i32)]) -> BTreeSet<Point> {
        points.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn cache_key_ignores_insertion_order() {
        let mut a = BTreeSet::new();
        a.insert(Point::new(2, 2));
        a.insert(Point::new(1, 1));
        let b = nodes(&[(1, 1), (2, 2)]);
        assert_eq!(
            CacheKey::new(Point::new(4, 4), &a),
            CacheKey::new(Point::new(4, 4), &b)
        );
    }

    #[test]
    fn cache_key_depends_on_destination() {
        let n = nodes(&[(1, 1)]);
        assert_ne!(
            CacheKey::new(Point::new(4, 4), &n),
            CacheKey::new(Point::new(4, 3), &n)
        );
    }

    #[test]
    fn cache_counts_hits_and_misses() {
        let mut cache = RefinementCache::new();
        let end = Point::new(3, 3);
        let n = nodes(&[(1, 1), (3, 3)]);
        assert!(cache.get(end, &n).is_none());
        cache.insert(end, &n, Refinement::default());
        assert!(cache.get(end, &n).is_some());
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.misses(), 1);

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.hits(), 0);
        assert_eq!(cache.misses(), 0);
    }
}
