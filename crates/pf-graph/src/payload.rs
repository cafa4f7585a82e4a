//! Palette → canvas drag payload.
//!
//! The palette serializes this record onto the drag-and-drop transfer
//! channel as JSON; the canvas deserializes it on drop. Unknown stage or
//! color tags fail deserialization, which the drop handler treats as the
//! malformed no-op case.

use serde::{Deserialize, Serialize};

use crate::catalog::{ColorTag, StageDef, StageKind};
use crate::error::PayloadError;
use crate::graph::STATUS_READY;

/// Renderer node type tag carried in the payload.
const NODE_KIND_CUSTOM: &str = "custom";

/// The full drag record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragPayload {
    pub node_kind: String,
    pub data: PayloadData,
}

/// The node-facing part of the drag record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadData {
    pub label: String,
    pub status: String,
    pub icon: StageKind,
    pub color: ColorTag,
}

impl DragPayload {
    /// Build the payload a palette card publishes for a catalog entry.
    pub fn for_stage(def: &StageDef) -> Self {
        Self {
            node_kind: NODE_KIND_CUSTOM.to_string(),
            data: PayloadData {
                label: def.name.to_string(),
                status: STATUS_READY.to_string(),
                icon: def.kind,
                color: def.color,
            },
        }
    }

    pub fn to_json(&self) -> Result<String, PayloadError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a payload off the transfer channel.
    pub fn from_json(raw: &str) -> Result<Self, PayloadError> {
        if raw.trim().is_empty() {
            return Err(PayloadError::Empty);
        }
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::STAGES;

    #[test]
    fn round_trips_for_catalog_entry() {
        let payload = DragPayload::for_stage(&STAGES[0]);
        let json = payload.to_json().unwrap();
        let back = DragPayload::from_json(&json).unwrap();
        assert_eq!(back, payload);
        assert_eq!(back.data.icon, StageKind::Ingest);
        assert_eq!(back.data.color, ColorTag::Blue);
    }

    #[test]
    fn empty_payload_is_rejected() {
        assert!(matches!(
            DragPayload::from_json(""),
            Err(PayloadError::Empty)
        ));
        assert!(matches!(
            DragPayload::from_json("   "),
            Err(PayloadError::Empty)
        ));
    }

    #[test]
    fn garbage_payload_is_rejected() {
        assert!(matches!(
            DragPayload::from_json("not json at all"),
            Err(PayloadError::Json(_))
        ));
        // Valid JSON, wrong shape.
        assert!(matches!(
            DragPayload::from_json(r#"{"foo": 1}"#),
            Err(PayloadError::Json(_))
        ));
        // Right shape, unknown stage tag.
        let raw = r#"{"node_kind":"custom","data":{"label":"X","status":"Ready","icon":"mystery","color":"blue"}}"#;
        assert!(matches!(
            DragPayload::from_json(raw),
            Err(PayloadError::Json(_))
        ));
    }
}
