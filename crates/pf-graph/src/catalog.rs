//! Static stage catalog.
//!
//! The six stage types are a closed enumeration: icon and color lookups are
//! total `match` dispatch, so an unknown kind is a compile error rather than
//! a silent fallback.

use serde::{Deserialize, Serialize};

/// A named category of pipeline processing step.
///
/// Serde tags match the wire form used in the drag payload
/// (`"ingest"`, `"profiler"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageKind {
    Ingest,
    Profiler,
    Deduplication,
    Transformer,
    Deidentification,
    Destination,
}

/// Display color family assigned to a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Blue,
    Indigo,
    Green,
    Purple,
    Orange,
    Red,
}

impl StageKind {
    /// All kinds, in canonical pipeline order.
    pub const ALL: [StageKind; 6] = [
        StageKind::Ingest,
        StageKind::Profiler,
        StageKind::Deduplication,
        StageKind::Transformer,
        StageKind::Deidentification,
        StageKind::Destination,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            StageKind::Ingest => "Ingest",
            StageKind::Profiler => "Profiler",
            StageKind::Deduplication => "De-duplication",
            StageKind::Transformer => "Transformer",
            StageKind::Deidentification => "De-Identification",
            StageKind::Destination => "Destination Writer",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            StageKind::Ingest => "Load raw input data",
            StageKind::Profiler => "Reshape and map data",
            StageKind::Deduplication => "Clean and format",
            StageKind::Transformer => "Reshape and map data",
            StageKind::Deidentification => "Remove duplicate entries",
            StageKind::Destination => "Save final output",
        }
    }

    /// Glyph drawn in the stage's icon chip.
    pub const fn icon(self) -> &'static str {
        match self {
            StageKind::Ingest => "🗄",
            StageKind::Profiler => "📊",
            StageKind::Deduplication => "🛡",
            StageKind::Transformer => "⚡",
            StageKind::Deidentification => "🔄",
            StageKind::Destination => "📤",
        }
    }

    pub const fn color(self) -> ColorTag {
        match self {
            StageKind::Ingest => ColorTag::Blue,
            StageKind::Profiler => ColorTag::Indigo,
            StageKind::Deduplication => ColorTag::Green,
            StageKind::Transformer => ColorTag::Purple,
            StageKind::Deidentification => ColorTag::Orange,
            StageKind::Destination => ColorTag::Red,
        }
    }
}

/// One entry in the fixed stage catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageDef {
    pub kind: StageKind,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: ColorTag,
}

impl StageDef {
    const fn of(kind: StageKind) -> Self {
        Self {
            kind,
            name: kind.name(),
            description: kind.description(),
            icon: kind.icon(),
            color: kind.color(),
        }
    }
}

/// The fixed palette catalog: six entries, defined at compile time and
/// read-only to all components.
pub const STAGES: [StageDef; 6] = [
    StageDef::of(StageKind::Ingest),
    StageDef::of(StageKind::Profiler),
    StageDef::of(StageKind::Deduplication),
    StageDef::of(StageKind::Transformer),
    StageDef::of(StageKind::Deidentification),
    StageDef::of(StageKind::Destination),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_every_kind_once() {
        assert_eq!(STAGES.len(), StageKind::ALL.len());
        for (def, kind) in STAGES.iter().zip(StageKind::ALL) {
            assert_eq!(def.kind, kind);
        }
    }

    #[test]
    fn serde_tags_match_wire_form() {
        let json = serde_json::to_string(&StageKind::Deidentification).unwrap();
        assert_eq!(json, "\"deidentification\"");
        let kind: StageKind = serde_json::from_str("\"ingest\"").unwrap();
        assert_eq!(kind, StageKind::Ingest);

        let color: ColorTag = serde_json::from_str("\"indigo\"").unwrap();
        assert_eq!(color, ColorTag::Indigo);
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert!(serde_json::from_str::<StageKind>("\"mystery\"").is_err());
    }
}
