//! Augmenting-path maximum-flow engine with explicit step recording
//!
//! Ford-Fulkerson with breadth-first path discovery (the Edmonds-Karp
//! discipline). Each round finds a shortest augmenting path through
//! strictly-positive residual capacities, pushes the path's bottleneck, and
//! appends an immutable [`Step`] carrying the path, the increment, and a
//! deep snapshot of the cumulative flow map. The ordered step history is
//! the replay contract consumed by the external renderer; pacing and
//! display are entirely its concern.
//!
//! Capacities and flow are exact integers, so every augmentation increases
//! the total by at least one and the loop terminates after at most the sum
//! of capacities out of the source.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::algorithm::traits::{Flow, FlowError, NodeKey, ResidualNetwork};
use crate::data_structures::graph::CapacityGraph;
use crate::data_structures::residual::ResidualGraph;

/// One recorded augmentation, immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step<N: NodeKey> {
    /// Ordered `(from, to)` edges of the augmenting path, source to sink.
    /// Always a simple path discovered through positive residual
    /// capacities.
    pub path: Vec<(N, N)>,

    /// Positive bottleneck pushed by this augmentation.
    pub flow_added: Flow,

    /// Deep snapshot of the cumulative per-edge flow after this
    /// augmentation. Later augmentations never invalidate it.
    pub flow_state: BTreeMap<(N, N), Flow>,
}

/// Outcome of one complete engine run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowResult<N: NodeKey> {
    /// Total flow from source to sink.
    pub max_flow: Flow,

    /// Complete augmentation history in discovery order.
    pub steps: Vec<Step<N>>,
}

impl<N: NodeKey> FlowResult<N> {
    /// Sum of the per-step increments; always equals [`max_flow`](Self::max_flow).
    pub fn total_flow_added(&self) -> Flow {
        self.steps.iter().map(|step| step.flow_added).sum()
    }
}

/// One maximum-flow computation instance.
///
/// Single-threaded and run-to-completion: `run` owns the residual network
/// mutation exclusively and returns only when no augmenting path remains.
#[derive(Debug, Default)]
pub struct MaxFlowEngine {
    augmentations: usize,
}

impl MaxFlowEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of augmenting rounds performed by the last `run`.
    pub fn augmentations(&self) -> usize {
        self.augmentations
    }

    /// Computes the maximum flow over `residual`, recording every
    /// augmentation.
    ///
    /// The endpoints are guaranteed present by the residual builder. An
    /// immediate failure to find any augmenting path is a legitimate
    /// zero-flow result, not an error.
    pub fn run<N, R>(&mut self, residual: &mut R, source: &N, sink: &N) -> FlowResult<N>
    where
        N: NodeKey,
        R: ResidualNetwork<N>,
    {
        self.augmentations = 0;
        let mut flow: BTreeMap<(N, N), Flow> = BTreeMap::new();
        let mut steps = Vec::new();
        let mut max_flow = 0;

        while let Some((path, bottleneck)) = Self::find_augmenting_path(residual, source, sink) {
            for (from, to) in &path {
                let forward = residual.residual_capacity(from, to);
                residual.set_residual_capacity(from, to, forward - bottleneck);
                let backward = residual.residual_capacity(to, from);
                residual.set_residual_capacity(to, from, backward + bottleneck);
                *flow.entry((from.clone(), to.clone())).or_insert(0) += bottleneck;
            }

            max_flow += bottleneck;
            self.augmentations += 1;
            debug!(
                "augmentation {}: +{} along {} edge(s), total flow {}",
                self.augmentations,
                bottleneck,
                path.len(),
                max_flow
            );

            steps.push(Step {
                path,
                flow_added: bottleneck,
                flow_state: flow.clone(),
            });
        }

        FlowResult { max_flow, steps }
    }

    /// Breadth-first search for a shortest augmenting path.
    ///
    /// Traverses only entries with residual capacity > 0, recording parent
    /// pointers, and reconstructs the edge path with its bottleneck once
    /// the sink is reached. Neighbor order is the network's enumeration
    /// order, which decides the tie-break among equal-length paths.
    fn find_augmenting_path<N, R>(
        residual: &R,
        source: &N,
        sink: &N,
    ) -> Option<(Vec<(N, N)>, Flow)>
    where
        N: NodeKey,
        R: ResidualNetwork<N>,
    {
        let mut parent: HashMap<N, N> = HashMap::new();
        let mut visited: HashSet<N> = HashSet::new();
        visited.insert(source.clone());

        let mut queue = VecDeque::new();
        queue.push_back(source.clone());

        while let Some(node) = queue.pop_front() {
            for neighbor in residual.neighbors(&node) {
                if visited.contains(&neighbor)
                    || residual.residual_capacity(&node, &neighbor) <= 0
                {
                    continue;
                }
                visited.insert(neighbor.clone());
                parent.insert(neighbor.clone(), node.clone());

                if neighbor == *sink {
                    return Some(Self::reconstruct_path(residual, &parent, source, sink));
                }
                queue.push_back(neighbor);
            }
        }

        None
    }

    /// Walks parent pointers backward from the sink, producing the forward
    /// edge sequence and its minimum residual capacity.
    fn reconstruct_path<N, R>(
        residual: &R,
        parent: &HashMap<N, N>,
        source: &N,
        sink: &N,
    ) -> (Vec<(N, N)>, Flow)
    where
        N: NodeKey,
        R: ResidualNetwork<N>,
    {
        let mut path = Vec::new();
        let mut bottleneck = Flow::MAX;
        let mut current = sink.clone();

        // The source carries no parent entry, so the walk stops there.
        while let Some(previous) = parent.get(&current) {
            bottleneck = bottleneck.min(residual.residual_capacity(previous, &current));
            path.push((previous.clone(), current.clone()));
            current = previous.clone();
        }
        debug_assert_eq!(current, *source);

        path.reverse();
        (path, bottleneck)
    }
}

/// Validates the request, derives the residual graph, and runs the engine.
///
/// The one-call entry point for callers holding a [`CapacityGraph`].
pub fn ford_fulkerson<N: NodeKey>(
    graph: &CapacityGraph<N>,
    source: &N,
    sink: &N,
) -> Result<FlowResult<N>, FlowError<N>> {
    let mut residual = ResidualGraph::from_capacity_graph(graph, source, sink)?;
    let mut engine = MaxFlowEngine::new();
    Ok(engine.run(&mut residual, source, sink))
}

/// Minimum source/sink cut certified by a completed flow computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinCut<N: NodeKey> {
    /// Total capacity crossing the cut; equals the maximum flow by
    /// max-flow/min-cut duality.
    pub capacity: Flow,

    /// Original edges leaving the source side, in graph enumeration order.
    pub edges: Vec<(N, N)>,

    /// Nodes reachable from the source in the exhausted residual graph.
    pub source_side: BTreeSet<N>,
}

/// Computes a minimum cut between `source` and `sink`.
///
/// Runs the flow engine to exhaustion, then takes the source side as the
/// set of nodes still reachable through positive residual capacities. Every
/// original edge from that set to its complement is saturated and belongs
/// to the cut.
pub fn min_cut<N: NodeKey>(
    graph: &CapacityGraph<N>,
    source: &N,
    sink: &N,
) -> Result<MinCut<N>, FlowError<N>> {
    let mut residual = ResidualGraph::from_capacity_graph(graph, source, sink)?;
    let mut engine = MaxFlowEngine::new();
    let _ = engine.run(&mut residual, source, sink);

    let mut source_side = BTreeSet::new();
    source_side.insert(source.clone());
    let mut queue = VecDeque::from([source.clone()]);
    while let Some(node) = queue.pop_front() {
        for neighbor in residual.neighbors(&node) {
            if !source_side.contains(&neighbor)
                && residual.residual_capacity(&node, &neighbor) > 0
            {
                source_side.insert(neighbor.clone());
                queue.push_back(neighbor);
            }
        }
    }

    let mut capacity = 0;
    let mut edges = Vec::new();
    for (from, to, edge_capacity) in graph.edges() {
        if source_side.contains(from) && !source_side.contains(to) {
            capacity += edge_capacity;
            edges.push((from.clone(), to.clone()));
        }
    }

    Ok(MinCut {
        capacity,
        edges,
        source_side,
    })
}
