//! Residual-capacity graph derived from a capacity graph
//!
//! For every edge `(u, v)` with capacity `c`, the residual graph carries a
//! forward entry `residual[u][v] = c` and guarantees a reverse entry
//! `residual[v][u]`, created at capacity 0 when the caller did not supply
//! the opposite edge. The reverse entry is what lets later augmentations
//! cancel and reroute flow already pushed.
//!
//! Construction is additive: when both directions exist as real edges, the
//! two capacities coexist and neither direction is ever zeroed out.

use std::collections::BTreeMap;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::algorithm::traits::{Flow, FlowError, NodeKey, ResidualNetwork};
use crate::data_structures::graph::CapacityGraph;

/// Mutable residual network, exclusively owned by one engine run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResidualGraph<N: NodeKey> {
    adjacency: BTreeMap<N, BTreeMap<N, Flow>>,
}

impl<N: NodeKey> ResidualGraph<N> {
    /// Derives the residual graph for a `source -> sink` computation.
    ///
    /// Fails fast, before any search is attempted, when the request is
    /// malformed: a negative capacity anywhere in the graph, `source ==
    /// sink`, or an endpoint that is not present. Every node of the input
    /// receives an adjacency entry (isolated nodes included) so the
    /// engine's search never hits a missing-node lookup. The input graph is
    /// never mutated.
    pub fn from_capacity_graph(
        graph: &CapacityGraph<N>,
        source: &N,
        sink: &N,
    ) -> Result<Self, FlowError<N>> {
        if source == sink {
            return Err(FlowError::SourceIsSink(source.clone()));
        }
        if !graph.contains_node(source) {
            return Err(FlowError::MissingSource(source.clone()));
        }
        if !graph.contains_node(sink) {
            return Err(FlowError::MissingSink(sink.clone()));
        }

        let mut adjacency: BTreeMap<N, BTreeMap<N, Flow>> = BTreeMap::new();
        for node in graph.nodes() {
            adjacency.entry(node.clone()).or_default();
        }

        for (from, to, capacity) in graph.edges() {
            if capacity < 0 {
                return Err(FlowError::NegativeCapacity {
                    from: from.clone(),
                    to: to.clone(),
                    capacity,
                });
            }
            // Additive on the forward direction: a zero back entry created
            // by the opposite real edge must not swallow this capacity.
            *adjacency
                .entry(from.clone())
                .or_default()
                .entry(to.clone())
                .or_insert(0) += capacity;
            adjacency
                .entry(to.clone())
                .or_default()
                .entry(from.clone())
                .or_insert(0);
        }

        trace!(
            "residual graph built: {} node(s), {} directed entr(ies)",
            adjacency.len(),
            adjacency.values().map(BTreeMap::len).sum::<usize>()
        );

        Ok(Self { adjacency })
    }

    /// Number of nodes carried by the residual structure.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }
}

impl<N: NodeKey> ResidualNetwork<N> for ResidualGraph<N> {
    fn neighbors(&self, node: &N) -> Vec<N> {
        self.adjacency
            .get(node)
            .map(|targets| targets.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn residual_capacity(&self, from: &N, to: &N) -> Flow {
        self.adjacency
            .get(from)
            .and_then(|targets| targets.get(to))
            .copied()
            .unwrap_or(0)
    }

    fn set_residual_capacity(&mut self, from: &N, to: &N, capacity: Flow) {
        self.adjacency
            .entry(from.clone())
            .or_default()
            .insert(to.clone(), capacity);
    }
}
