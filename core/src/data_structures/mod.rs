//! Graph data structures consumed by the flow engine.

pub mod graph;
pub mod residual;

pub use self::graph::CapacityGraph;
pub use self::residual::ResidualGraph;
