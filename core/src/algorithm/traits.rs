//! Core trait definitions for the FLUXION flow engine
//!
//! This module establishes the abstraction boundary that lets a single
//! maximum-flow engine serve any concrete residual-graph representation.
//! The engine only ever needs three capabilities from a network: ordered
//! neighbor enumeration, residual-capacity lookup, and residual-capacity
//! update. Every representation that provides them plugs in unchanged.

use std::fmt::Debug;
use std::hash::Hash;

use thiserror::Error;

/// Edge capacity in exact integer units.
///
/// Capacities are signed at the boundary so that negative caller input is
/// representable and can be rejected during validation; a validated network
/// only ever carries non-negative values. Exact integer arithmetic is what
/// guarantees termination of the augmentation loop.
pub type Capacity = i64;

/// Flow value in the same exact integer units as [`Capacity`].
pub type Flow = i64;

/// Bound alias for node identifiers.
///
/// Nodes are opaque to the engine: strings, integers, or any caller type
/// that is cloneable, totally ordered, and hashable qualifies. The `Ord`
/// bound is what pins neighbor enumeration order and therefore makes every
/// run reproducible.
pub trait NodeKey: Clone + Ord + Hash + Debug {}

impl<T: Clone + Ord + Hash + Debug> NodeKey for T {}

/// Abstract residual-network capability consumed by the flow engine.
///
/// Implementations own the residual state exclusively for the duration of
/// one engine run; the engine mutates capacities only through
/// [`set_residual_capacity`](ResidualNetwork::set_residual_capacity).
pub trait ResidualNetwork<N: NodeKey> {
    /// Nodes with a recorded residual entry out of `node`, in the
    /// implementation's enumeration order. The order decides which of
    /// several equal-length augmenting paths is discovered first; it must
    /// be stable across runs for identical inputs.
    fn neighbors(&self, node: &N) -> Vec<N>;

    /// Current residual capacity of the directed entry `from -> to`.
    /// Entries that were never recorded report zero.
    fn residual_capacity(&self, from: &N, to: &N) -> Flow;

    /// Overwrites the residual capacity of the entry `from -> to`.
    fn set_residual_capacity(&mut self, from: &N, to: &N, capacity: Flow);
}

/// Validation errors raised before any flow computation starts.
///
/// A malformed request fails fast here; it is never conflated with the
/// legitimate zero-flow result of a disconnected but well-formed network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError<N: NodeKey> {
    #[error("negative capacity {capacity} on edge {from:?} -> {to:?}")]
    NegativeCapacity { from: N, to: N, capacity: Capacity },

    #[error("source and sink are the same node {0:?}")]
    SourceIsSink(N),

    #[error("source node {0:?} is not present in the graph")]
    MissingSource(N),

    #[error("sink node {0:?} is not present in the graph")]
    MissingSink(N),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_identify_the_offending_nodes() {
        let err: FlowError<&str> = FlowError::NegativeCapacity {
            from: "a",
            to: "b",
            capacity: -3,
        };
        assert_eq!(
            err.to_string(),
            "negative capacity -3 on edge \"a\" -> \"b\""
        );

        let err: FlowError<u32> = FlowError::SourceIsSink(7);
        assert_eq!(err.to_string(), "source and sink are the same node 7");
    }
}
