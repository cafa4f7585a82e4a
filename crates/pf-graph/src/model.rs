//! The mutable pipeline model.

use std::collections::BTreeSet;

use pf_core::{IdSeq, Position};
use tracing::{debug, info};

use crate::catalog::StageKind;
use crate::error::PayloadError;
use crate::graph::{Edge, Node, STATUS_READY};
use crate::payload::DragPayload;

/// The canonical, mutable pipeline graph.
///
/// Owns the node and edge lists, the id counters, and the selection set.
/// The rendering surface holds no authoritative copy: it is handed these
/// lists each frame and reports intended mutations back as gesture calls.
/// All mutation is synchronous on one thread.
#[derive(Debug, Clone)]
pub struct Pipeline {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    node_ids: IdSeq,
    edge_ids: IdSeq,
    selection: BTreeSet<String>,
}

impl Pipeline {
    /// An empty pipeline. Node ids start at "1", edge ids at "e1".
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            node_ids: IdSeq::new("", 1),
            edge_ids: IdSeq::new("e", 1),
            selection: BTreeSet::new(),
        }
    }

    /// The preloaded demo pipeline: one node per stage kind (ids "1".."6")
    /// wired as a single chain 1→2→3→4→5→6. The node counter lands at 7,
    /// so the first palette drop afterwards yields id "7".
    pub fn demo() -> Self {
        let mut pipeline = Self::new();
        let mut prev: Option<String> = None;
        for (i, kind) in StageKind::ALL.into_iter().enumerate() {
            let pos = Position::new(120.0 + i as f32 * 190.0, 280.0);
            let id = pipeline.add_node(kind, pos).id.clone();
            if let Some(prev_id) = prev {
                pipeline.connect(&prev_id, &id);
            }
            prev = Some(id);
        }
        pipeline
    }

    /// Append a node of the given catalog kind at `position`.
    ///
    /// The id is unique and numerically greater than every id issued
    /// before it, for the lifetime of the model.
    pub fn add_node(&mut self, kind: StageKind, position: Position) -> &Node {
        let id = self.node_ids.issue();
        info!(node = %id, ?kind, "add node");
        self.nodes.push(Node {
            id,
            kind,
            position,
            label: kind.name().to_string(),
            status: STATUS_READY.to_string(),
            color: kind.color(),
            selected: false,
        });
        let last = self.nodes.len() - 1;
        &self.nodes[last]
    }

    /// Handle a palette drop: parse the serialized payload and create a
    /// node from it at `position`.
    ///
    /// A malformed or absent payload returns `Err` without touching the
    /// model; callers discard the error silently (no user-visible failure).
    pub fn drop_payload(&mut self, raw: &str, position: Position) -> Result<&Node, PayloadError> {
        let payload = DragPayload::from_json(raw)?;
        let id = self.node_ids.issue();
        info!(node = %id, kind = ?payload.data.icon, "drop payload");
        self.nodes.push(Node {
            id,
            kind: payload.data.icon,
            position,
            label: payload.data.label,
            status: payload.data.status,
            color: payload.data.color,
            selected: false,
        });
        let last = self.nodes.len() - 1;
        Ok(&self.nodes[last])
    }

    /// Append an edge from `source` to `target` with a synthesized id.
    ///
    /// Permissive: no duplicate, cycle, self-loop, or endpoint-existence
    /// checks. This is an authoring sketchpad, not a validated execution
    /// graph.
    pub fn connect(&mut self, source: &str, target: &str) -> &Edge {
        let id = self.edge_ids.issue();
        info!(edge = %id, %source, %target, "connect");
        self.edges.push(Edge {
            id,
            source: source.to_string(),
            target: target.to_string(),
        });
        let last = self.edges.len() - 1;
        &self.edges[last]
    }

    /// Replace the selection set wholesale with the ids the rendering
    /// surface currently reports as selected. Idempotent.
    pub fn set_selection<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.selection = ids.into_iter().collect();
        for node in &mut self.nodes {
            node.selected = self.selection.contains(&node.id);
        }
        debug!(selected = self.selection.len(), "selection replaced");
    }

    /// Update a node's canvas position. Unknown ids are a no-op.
    pub fn move_node(&mut self, id: &str, position: Position) {
        if let Some(node) = self.nodes.iter_mut().find(|n| n.id == id) {
            node.position = position;
        }
    }

    /// Remove the named nodes.
    ///
    /// Edges are deliberately NOT cascade-deleted: whether they should
    /// follow their endpoints is undecided, so they stay in the model and
    /// the renderer skips any edge whose endpoint is gone. Id counters are
    /// never rewound.
    pub fn remove_nodes<'a, I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let doomed: BTreeSet<&str> = ids.into_iter().collect();
        if doomed.is_empty() {
            return;
        }
        let before = self.nodes.len();
        self.nodes.retain(|n| !doomed.contains(n.id.as_str()));
        self.selection.retain(|id| !doomed.contains(id.as_str()));
        info!(removed = before - self.nodes.len(), "remove nodes");
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Ids of the currently selected nodes.
    pub fn selection(&self) -> &BTreeSet<String> {
        &self.selection
    }

    /// Resolve an edge's endpoints, or `None` if either node is gone.
    pub fn edge_endpoints(&self, edge: &Edge) -> Option<(&Node, &Node)> {
        Some((self.node(&edge.source)?, self.node(&edge.target)?))
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ColorTag, STAGES};

    fn payload_json(idx: usize) -> String {
        DragPayload::for_stage(&STAGES[idx]).to_json().unwrap()
    }

    #[test]
    fn node_ids_are_distinct_and_increasing() {
        let mut pipeline = Pipeline::new();
        let mut ids = Vec::new();
        for kind in StageKind::ALL {
            ids.push(pipeline.add_node(kind, Position::ZERO).id.clone());
        }
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                assert_ne!(a, b);
            }
        }
        let nums: Vec<u32> = ids.iter().map(|id| id.parse().unwrap()).collect();
        assert!(nums.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn ids_survive_deletions() {
        let mut pipeline = Pipeline::new();
        let a = pipeline.add_node(StageKind::Ingest, Position::ZERO).id.clone();
        let b = pipeline
            .add_node(StageKind::Transformer, Position::ZERO)
            .id
            .clone();
        pipeline.remove_nodes([a.as_str(), b.as_str()]);
        assert!(pipeline.nodes().is_empty());

        let c = pipeline
            .add_node(StageKind::Destination, Position::ZERO)
            .id
            .clone();
        assert_eq!(c, "3");
    }

    #[test]
    fn connect_is_permissive() {
        let mut pipeline = Pipeline::new();
        let a = pipeline.add_node(StageKind::Ingest, Position::ZERO).id.clone();
        let b = pipeline
            .add_node(StageKind::Profiler, Position::ZERO)
            .id
            .clone();

        // Self-loop succeeds.
        let loop_id = pipeline.connect(&a, &a).id.clone();
        // Duplicate edges succeed.
        let e1 = pipeline.connect(&a, &b).id.clone();
        let e2 = pipeline.connect(&a, &b).id.clone();
        // So does an edge to a node that does not exist.
        pipeline.connect(&a, "999");

        assert_eq!(pipeline.edges().len(), 4);
        assert_ne!(e1, e2);
        assert!(pipeline.edges()[0].is_self_loop());
        assert_eq!(pipeline.edges()[0].id, loop_id);
    }

    #[test]
    fn dangling_edge_has_no_endpoints() {
        let mut pipeline = Pipeline::new();
        let a = pipeline.add_node(StageKind::Ingest, Position::ZERO).id.clone();
        let b = pipeline
            .add_node(StageKind::Profiler, Position::ZERO)
            .id
            .clone();
        pipeline.connect(&a, &b);
        pipeline.remove_nodes([b.as_str()]);

        // Edge survives node removal but resolves to nothing.
        assert_eq!(pipeline.edges().len(), 1);
        assert!(pipeline.edge_endpoints(&pipeline.edges()[0]).is_none());
    }

    #[test]
    fn malformed_drop_is_a_no_op() {
        let mut pipeline = Pipeline::demo();
        for raw in ["", "   ", "not json", r#"{"foo": 1}"#] {
            let before: Vec<Node> = pipeline.nodes().to_vec();
            assert!(pipeline.drop_payload(raw, Position::ZERO).is_err());
            assert_eq!(pipeline.nodes(), before.as_slice());
        }
        // The counter did not advance either: the next good drop is "7".
        let id = pipeline
            .drop_payload(&payload_json(0), Position::ZERO)
            .unwrap()
            .id
            .clone();
        assert_eq!(id, "7");
    }

    #[test]
    fn selection_replaces_wholesale() {
        let mut pipeline = Pipeline::demo();
        pipeline.set_selection(["1".to_string(), "3".to_string()]);
        assert!(pipeline.node("1").unwrap().selected);
        assert!(!pipeline.node("2").unwrap().selected);
        assert!(pipeline.node("3").unwrap().selected);

        pipeline.set_selection(["2".to_string()]);
        assert!(!pipeline.node("1").unwrap().selected);
        assert!(pipeline.node("2").unwrap().selected);
        assert_eq!(pipeline.selection().len(), 1);
    }

    #[test]
    fn removing_a_node_drops_it_from_selection() {
        let mut pipeline = Pipeline::demo();
        pipeline.set_selection(["2".to_string(), "4".to_string()]);
        pipeline.remove_nodes(["2"]);
        assert_eq!(pipeline.selection().len(), 1);
        assert!(pipeline.selection().contains("4"));
    }

    #[test]
    fn inspector_read_does_not_mutate() {
        let mut pipeline = Pipeline::demo();
        let before = pipeline.node("4").unwrap().clone();

        // Open the inspector (read a snapshot) and "close" it. Cancel and
        // the save stub alike perform no model call, so nothing changes.
        {
            let open = pipeline.node("4").unwrap();
            assert_eq!(open.label, before.label);
        }

        let after = pipeline.node("4").unwrap();
        assert_eq!(after.label, before.label);
        assert_eq!(after.status, before.status);
        assert_eq!(after.position, before.position);
        assert_eq!(after.color, before.color);
    }

    #[test]
    fn demo_pipeline_shape() {
        let pipeline = Pipeline::demo();
        assert_eq!(pipeline.nodes().len(), 6);
        assert_eq!(pipeline.edges().len(), 5);

        for (i, node) in pipeline.nodes().iter().enumerate() {
            assert_eq!(node.id, (i + 1).to_string());
            assert_eq!(node.kind, StageKind::ALL[i]);
            assert_eq!(node.status, STATUS_READY);
            assert!(!node.selected);
        }
        for (i, edge) in pipeline.edges().iter().enumerate() {
            assert_eq!(edge.id, format!("e{}", i + 1));
            assert_eq!(edge.source, (i + 1).to_string());
            assert_eq!(edge.target, (i + 2).to_string());
        }
    }

    #[test]
    fn payload_colors_flow_into_nodes() {
        let mut pipeline = Pipeline::new();
        let node = pipeline
            .drop_payload(&payload_json(3), Position::new(40.0, 60.0))
            .unwrap();
        assert_eq!(node.kind, StageKind::Transformer);
        assert_eq!(node.color, ColorTag::Purple);
        assert_eq!(node.label, "Transformer");
        assert_eq!(node.position, Position::new(40.0, 60.0));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn set_selection_is_idempotent(picks in prop::collection::vec(0usize..6, 0..12)) {
                let mut pipeline = Pipeline::demo();
                let ids: Vec<String> =
                    picks.iter().map(|i| (i + 1).to_string()).collect();

                pipeline.set_selection(ids.clone());
                let first: Vec<bool> =
                    pipeline.nodes().iter().map(|n| n.selected).collect();
                let first_set = pipeline.selection().clone();

                pipeline.set_selection(ids);
                let second: Vec<bool> =
                    pipeline.nodes().iter().map(|n| n.selected).collect();

                prop_assert_eq!(first, second);
                prop_assert_eq!(&first_set, pipeline.selection());
            }

            #[test]
            fn add_node_ids_strictly_increase(kinds in prop::collection::vec(0usize..6, 1..40)) {
                let mut pipeline = Pipeline::new();
                let mut prev = 0u32;
                for k in kinds {
                    let id = pipeline
                        .add_node(StageKind::ALL[k], Position::ZERO)
                        .id
                        .clone();
                    let n: u32 = id.parse().unwrap();
                    prop_assert!(n > prev);
                    prev = n;
                }
            }
        }
    }
}
