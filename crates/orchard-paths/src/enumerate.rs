use std::collections::BTreeSet;

use orchard_core::{GeomError, Point, Rect, move_direction};

use crate::distance::nodes_in_box;
use crate::planner::{Chain, DominanceGraph, RoutePlanner};

/// Extend `path` by one hop along every successor of its last node.
///
/// A path whose last node has no successors is terminal and comes back
/// unchanged as the only element.
pub fn extend_partial_path(path: Chain, graph: &DominanceGraph) -> Vec<Chain> {
    let successors = path
        .last()
        .and_then(|last| graph.get(last))
        .filter(|s| !s.is_empty());
    let Some(successors) = successors else {
        return vec![path];
    };
    successors
        .iter()
        .map(|&next| {
            let mut ext = Vec::with_capacity(path.len() + 1);
            ext.extend_from_slice(&path);
            ext.push(next);
            ext
        })
        .collect()
}

/// Grow every partial path until it is maximal in `graph`.
///
/// Paths are returned in the order they became terminal. The graph is acyclic
/// and finite, so every round either finishes a path or lengthens it.
pub fn extract_paths(partials: Vec<Chain>, graph: &DominanceGraph) -> Vec<Chain> {
    let mut done = Vec::new();
    let mut frontier = partials;
    while !frontier.is_empty() {
        let mut grown = Vec::new();
        for path in frontier {
            let len = path.len();
            for ext in extend_partial_path(path, graph) {
                if ext.len() > len {
                    grown.push(ext);
                } else {
                    done.push(ext);
                }
            }
        }
        frontier = grown;
    }
    done
}

impl RoutePlanner {
    /// Every maximal waypoint chain from `start` to `end` through `nodes`.
    ///
    /// Nodes outside the box of `start` and `end`, and `start` itself, are
    /// ignored. Each chain begins at `start` and finishes at `end`.
    pub fn possible_paths<I>(
        &mut self,
        start: Point,
        end: Point,
        nodes: I,
    ) -> Result<Vec<Chain>, GeomError>
    where
        I: IntoIterator<Item = Point>,
    {
        let rect = Rect::spanning(start, end)?;
        let nodes: BTreeSet<Point> = nodes_in_box(rect, nodes, |p| p != start).collect();
        let graph = self.construct_restricted_paths(start, end, &nodes)?;
        let chains = extract_paths(vec![vec![start]], &graph);
        log::debug!(
            "{} candidate chains {start} -> {end} over {} waypoints",
            chains.len(),
            nodes.len()
        );
        Ok(chains)
    }
}

/// Whether every hop of `chain` moves toward its last point without
/// reversing on either axis or standing still.
pub fn is_monotone(chain: &[Point]) -> bool {
    let (Some(&first), Some(&last)) = (chain.first(), chain.last()) else {
        return true;
    };
    let heading = first.heading_to(last);
    chain.windows(2).all(|w| {
        let step = w[0].heading_to(w[1]);
        step != Point::ZERO
            && (step.x == 0 || step.x == heading.x)
            && (step.y == 0 || step.y == heading.y)
    })
}

/// Expand a waypoint chain into the unit steps an agent walks, using the
/// fixed column-first move rule.
pub fn unit_steps(chain: &[Point]) -> Vec<Point> {
    let Some(&first) = chain.first() else {
        return Vec::new();
    };
    let mut steps = vec![first];
    let mut at = first;
    for &target in &chain[1..] {
        while let Some(d) = move_direction(target, at) {
            at = at + d.delta();
            steps.push(at);
        }
    }
    steps
}
