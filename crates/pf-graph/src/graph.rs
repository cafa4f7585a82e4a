//! Core graph data structures.

use pf_core::Position;

use crate::catalog::{ColorTag, StageKind};

/// Status string assigned to freshly created nodes.
pub const STATUS_READY: &str = "Ready";

/// A placed, positioned instance of a stage on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: String,
    pub kind: StageKind,
    pub position: Position,
    pub label: String,
    pub status: String,
    pub color: ColorTag,
    pub selected: bool,
}

/// A directed link between two nodes denoting pipeline execution order.
///
/// Endpoints are ids, not references: the model does not guarantee they
/// point at live nodes (see `Pipeline::edge_endpoints`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
}

impl Edge {
    /// Whether this edge starts and ends on the same node.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_loop_detection() {
        let edge = Edge {
            id: "e1".into(),
            source: "3".into(),
            target: "3".into(),
        };
        assert!(edge.is_self_loop());

        let edge = Edge {
            id: "e2".into(),
            source: "3".into(),
            target: "4".into(),
        };
        assert!(!edge.is_self_loop());
    }
}
