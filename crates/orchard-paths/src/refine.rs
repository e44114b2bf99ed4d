//! Dominance-graph construction.
//!
//! Enumerating every monotone unit-step path between two points is
//! combinatorial in their distance. Instead, each waypoint only keeps edges to
//! its *dominance frontier*: the candidates inside its box toward the
//! destination that are not themselves inside the box of another candidate.
//! Anything behind the frontier is reached through a frontier node.

use std::collections::BTreeSet;
use std::rc::Rc;

use orchard_core::{GeomError, Point, Rect};

use crate::distance::nodes_in_box;
use crate::planner::{DominanceGraph, Refinement, RoutePlanner};

/// Nodes reachable in two steps, and each node's candidates toward `end`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TwoStep {
    pub reachable: BTreeSet<Point>,
    pub graph: DominanceGraph,
}

/// For each node, collect the other nodes inside its box toward `end`.
///
/// `end` itself has no box toward itself and never gets an entry. Every node
/// that appears in some other node's box is marked reachable in two steps.
pub fn refine(end: Point, nodes: &BTreeSet<Point>) -> TwoStep {
    let mut out = TwoStep::default();
    for &n in nodes {
        let Ok(rect) = Rect::spanning(n, end) else {
            continue;
        };
        let candidates: BTreeSet<Point> =
            nodes_in_box(rect, nodes.iter().copied(), |p| p != n).collect();
        if candidates.is_empty() {
            continue;
        }
        out.reachable.extend(candidates.iter().copied());
        out.graph.insert(n, candidates);
    }
    out
}

impl RoutePlanner {
    /// One memoized refinement step: the frontier of `nodes` toward `end`
    /// plus every node's candidate set.
    pub fn single_refinement_step(&mut self, end: Point, nodes: &BTreeSet<Point>) -> Rc<Refinement> {
        if let Some(hit) = self.cache.get(end, nodes) {
            log::trace!("refinement cache hit: {} nodes toward {end}", nodes.len());
            return hit;
        }
        let TwoStep { reachable, graph } = refine(end, nodes);
        let filtered = nodes.difference(&reachable).copied().collect();
        self.cache.insert(end, nodes, Refinement { filtered, graph })
    }

    /// Build the dominance graph from `start` toward `end` over `nodes`.
    ///
    /// `nodes` are expected to lie inside the box of `start` and `end` and to
    /// exclude `start`; `end` is added when missing. Every edge `u -> v`
    /// satisfies `v ∈ box(u, end)`, and `u` keeps only its immediate
    /// successors.
    pub fn construct_restricted_paths(
        &mut self,
        start: Point,
        end: Point,
        nodes: &BTreeSet<Point>,
    ) -> Result<DominanceGraph, GeomError> {
        if start == end {
            return Err(GeomError::Degenerate(start));
        }
        let mut graph = DominanceGraph::new();
        self.restrict(start, end, nodes.clone(), &mut graph);
        log::trace!(
            "dominance graph {start} -> {end}: {} nodes, {} edges",
            graph.len(),
            graph.values().map(BTreeSet::len).sum::<usize>()
        );
        Ok(graph)
    }

    fn restrict(
        &mut self,
        start: Point,
        end: Point,
        mut nodes: BTreeSet<Point>,
        graph: &mut DominanceGraph,
    ) {
        nodes.insert(end);
        let step = self.single_refinement_step(end, &nodes);
        if step.graph.is_empty() {
            graph.entry(start).or_default().extend(nodes);
            return;
        }
        graph
            .entry(start)
            .or_default()
            .extend(step.filtered.iter().copied());
        for (&k, candidates) in &step.graph {
            // A node's candidate set toward `end` does not depend on which
            // predecessor reached it, so its subgraph is built once.
            if graph.contains_key(&k) {
                continue;
            }
            self.restrict(k, end, candidates.clone(), graph);
        }
    }
}
