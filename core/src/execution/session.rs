//! Replay session over a completed flow computation
//!
//! The computation session is an explicit value object rather than global
//! UI state: it owns the finished [`FlowResult`] and a cursor into its
//! step history, and every navigation clamps the cursor into bounds.
//! Timing and pacing of the replay stay with the rendering collaborator;
//! the session only answers "which step is current".

use serde::{Deserialize, Serialize};

use crate::algorithm::max_flow::{FlowResult, Step};
use crate::algorithm::traits::NodeKey;

/// Cursor-bearing view over an immutable step history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplaySession<N: NodeKey> {
    result: FlowResult<N>,
    cursor: usize,
}

impl<N: NodeKey> ReplaySession<N> {
    /// Wraps a finished computation, positioned on the first step.
    pub fn new(result: FlowResult<N>) -> Self {
        Self { result, cursor: 0 }
    }

    /// The underlying computation result. Never mutated by the session.
    pub fn result(&self) -> &FlowResult<N> {
        &self.result
    }

    /// The step under the cursor, or `None` for an empty history.
    pub fn current(&self) -> Option<&Step<N>> {
        self.result.steps.get(self.cursor)
    }

    /// Cursor position; 0 when the history is empty.
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.result.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.result.steps.is_empty()
    }

    /// Moves one step forward, clamped to the last step.
    pub fn advance(&mut self) -> Option<&Step<N>> {
        self.cursor = self.clamp(self.cursor.saturating_add(1));
        self.current()
    }

    /// Moves one step backward, clamped to the first step.
    pub fn retreat(&mut self) -> Option<&Step<N>> {
        self.cursor = self.clamp(self.cursor.saturating_sub(1));
        self.current()
    }

    /// Jumps to `index`, clamped into `[0, len - 1]`.
    pub fn seek(&mut self, index: usize) -> Option<&Step<N>> {
        self.cursor = self.clamp(index);
        self.current()
    }

    fn clamp(&self, index: usize) -> usize {
        match self.result.steps.len() {
            0 => 0,
            len => index.min(len - 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::max_flow::ford_fulkerson;
    use crate::data_structures::graph::CapacityGraph;

    fn two_step_session() -> ReplaySession<&'static str> {
        let graph = CapacityGraph::from_edges([
            ("A", "B", 10),
            ("A", "C", 5),
            ("B", "D", 10),
            ("C", "D", 10),
        ]);
        ReplaySession::new(ford_fulkerson(&graph, &"A", &"D").unwrap())
    }

    #[test]
    fn navigation_clamps_at_both_ends() {
        let mut session = two_step_session();
        assert_eq!(session.len(), 2);
        assert_eq!(session.position(), 0);

        session.retreat();
        assert_eq!(session.position(), 0);

        session.advance();
        assert_eq!(session.position(), 1);

        session.advance();
        assert_eq!(session.position(), 1);
    }

    #[test]
    fn seek_clamps_out_of_range_indices() {
        let mut session = two_step_session();

        let step = session.seek(99).unwrap();
        assert_eq!(step.flow_added, 5);
        assert_eq!(session.position(), 1);

        session.seek(0);
        assert_eq!(session.position(), 0);
    }

    #[test]
    fn current_reflects_the_cursor() {
        let mut session = two_step_session();

        assert_eq!(session.current().unwrap().flow_added, 10);
        session.advance();
        assert_eq!(session.current().unwrap().flow_added, 5);
    }

    #[test]
    fn empty_history_has_no_current_step() {
        let graph = CapacityGraph::from_edges([("s", "a", 1), ("b", "t", 1)]);
        let mut session = ReplaySession::new(ford_fulkerson(&graph, &"s", &"t").unwrap());

        assert!(session.is_empty());
        assert!(session.current().is_none());
        assert!(session.advance().is_none());
        assert!(session.seek(5).is_none());
        assert_eq!(session.position(), 0);
    }

    #[test]
    fn session_never_mutates_the_result() {
        let mut session = two_step_session();
        let before = session.result().clone();

        session.advance();
        session.seek(99);
        session.retreat();
        assert_eq!(*session.result(), before);
    }
}
