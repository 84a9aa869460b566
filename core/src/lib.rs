//! FLUXION Core Engine
//!
//! Computational core of the FLUXION network-flow observatory. The crate
//! implements a replayable maximum-flow engine: a residual graph is derived
//! from a caller-supplied capacity graph, augmenting paths are discovered by
//! breadth-first search (Edmonds-Karp discipline), and every augmentation is
//! recorded as an immutable step so that an external renderer can replay the
//! computation at its own pace.
//!
//! The engine is single-threaded and runs to completion in one call; replay
//! pacing, graph editing, and rendering are the concern of external
//! collaborators consuming [`FlowResult`] and [`ReplaySession`].

pub mod algorithm;
pub mod data_structures;
pub mod execution;

pub use self::algorithm::max_flow::{
    ford_fulkerson, min_cut, FlowResult, MaxFlowEngine, MinCut, Step,
};
pub use self::algorithm::traits::{Capacity, Flow, FlowError, NodeKey, ResidualNetwork};
pub use self::data_structures::graph::CapacityGraph;
pub use self::data_structures::residual::ResidualGraph;
pub use self::execution::session::ReplaySession;
