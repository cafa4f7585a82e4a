//! pf-graph: graph/model layer for pipeforge.
//!
//! Provides:
//! - The static stage catalog (closed `StageKind` enumeration)
//! - Core graph data structures (Node, Edge)
//! - The mutable `Pipeline` model owning nodes, edges, ids, and selection
//! - The palette drag payload codec
//!
//! # Example
//!
//! ```
//! use pf_core::Position;
//! use pf_graph::{Pipeline, StageKind};
//!
//! let mut pipeline = Pipeline::new();
//! let a = pipeline.add_node(StageKind::Ingest, Position::ZERO).id.clone();
//! let b = pipeline
//!     .add_node(StageKind::Destination, Position::new(200.0, 0.0))
//!     .id
//!     .clone();
//! pipeline.connect(&a, &b);
//!
//! assert_eq!(pipeline.nodes().len(), 2);
//! assert_eq!(pipeline.edges().len(), 1);
//! ```

pub mod catalog;
pub mod error;
pub mod graph;
pub mod model;
pub mod payload;

// Re-exports for ergonomics
pub use catalog::{ColorTag, STAGES, StageDef, StageKind};
pub use error::PayloadError;
pub use graph::{Edge, Node, STATUS_READY};
pub use model::Pipeline;
pub use payload::{DragPayload, PayloadData};
