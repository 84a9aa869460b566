//! Directed capacity graph supplied by the graph-editing collaborator
//!
//! The graph is a deterministically ordered adjacency mapping
//! `node -> {neighbor -> capacity}`. Ordered storage is deliberate: neighbor
//! enumeration order decides which of several equal-length augmenting paths
//! the engine discovers first, and a `BTreeMap` pins that order so identical
//! inputs always replay identically.
//!
//! At most one directed edge exists per ordered node pair. Undirected input
//! is never assumed symmetric; callers expand an undirected edge explicitly
//! through [`CapacityGraph::add_undirected_edge`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::algorithm::traits::{Capacity, NodeKey};

/// Directed graph with integer edge capacities.
///
/// Immutable for the duration of one max-flow computation: the residual
/// builder and the engine only ever borrow it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityGraph<N: NodeKey> {
    /// Adjacency mapping; every node that appears as either endpoint of any
    /// edge has an entry, possibly with no outgoing edges.
    adjacency: BTreeMap<N, BTreeMap<N, Capacity>>,
}

impl<N: NodeKey> Default for CapacityGraph<N> {
    fn default() -> Self {
        Self {
            adjacency: BTreeMap::new(),
        }
    }
}

impl<N: NodeKey> CapacityGraph<N> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from a directed edge list.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N, Capacity)>,
    {
        let mut graph = Self::new();
        for (from, to, capacity) in edges {
            graph.add_edge(from, to, capacity);
        }
        graph
    }

    /// Ensures `node` exists, with no outgoing edges if it is new.
    pub fn add_node(&mut self, node: N) {
        self.adjacency.entry(node).or_default();
    }

    /// Inserts the directed edge `from -> to`, replacing any previous
    /// capacity recorded for the same ordered pair. Both endpoints are
    /// registered as nodes.
    pub fn add_edge(&mut self, from: N, to: N, capacity: Capacity) {
        self.adjacency.entry(to.clone()).or_default();
        self.adjacency.entry(from).or_default().insert(to, capacity);
    }

    /// Expands an undirected edge into the two directed edges `from -> to`
    /// and `to -> from`, each with the full capacity. This is the only
    /// undirected entry point; the builder boundary sees explicit directed
    /// capacities exclusively.
    pub fn add_undirected_edge(&mut self, from: N, to: N, capacity: Capacity) {
        self.add_edge(from.clone(), to.clone(), capacity);
        self.add_edge(to, from, capacity);
    }

    /// Whether `node` is present in the graph.
    pub fn contains_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Capacity of the directed edge `from -> to`, if it exists.
    pub fn capacity(&self, from: &N, to: &N) -> Option<Capacity> {
        self.adjacency.get(from)?.get(to).copied()
    }

    /// All nodes in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }

    /// All directed edges `(from, to, capacity)` in ascending
    /// `(from, to)` order.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N, Capacity)> {
        self.adjacency
            .iter()
            .flat_map(|(from, targets)| {
                targets.iter().map(move |(to, &capacity)| (from, to, capacity))
            })
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeMap::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_endpoints_are_registered_as_nodes() {
        let mut graph = CapacityGraph::new();
        graph.add_edge("a", "b", 4);

        assert!(graph.contains_node(&"a"));
        assert!(graph.contains_node(&"b"));
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.capacity(&"a", &"b"), Some(4));
        assert_eq!(graph.capacity(&"b", &"a"), None);
    }

    #[test]
    fn duplicate_edge_replaces_previous_capacity() {
        let mut graph = CapacityGraph::new();
        graph.add_edge(1, 2, 10);
        graph.add_edge(1, 2, 3);

        assert_eq!(graph.capacity(&1, &2), Some(3));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn undirected_edge_expands_to_both_directions() {
        let mut graph = CapacityGraph::new();
        graph.add_undirected_edge("u", "v", 8);

        assert_eq!(graph.capacity(&"u", &"v"), Some(8));
        assert_eq!(graph.capacity(&"v", &"u"), Some(8));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn edges_enumerate_in_ascending_order() {
        let graph = CapacityGraph::from_edges([
            ("b", "c", 1),
            ("a", "c", 2),
            ("a", "b", 3),
        ]);

        let listed: Vec<_> = graph
            .edges()
            .map(|(u, v, c)| (*u, *v, c))
            .collect();
        assert_eq!(listed, vec![("a", "b", 3), ("a", "c", 2), ("b", "c", 1)]);
    }

    #[test]
    fn isolated_nodes_survive_alongside_edges() {
        let mut graph = CapacityGraph::new();
        graph.add_node("lonely");
        graph.add_edge("s", "t", 5);

        assert!(graph.contains_node(&"lonely"));
        assert_eq!(graph.node_count(), 3);
    }
}
