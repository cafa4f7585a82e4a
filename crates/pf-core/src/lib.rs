//! pf-core: stable foundation for pipeforge.
//!
//! Contains:
//! - geom (canvas positions, UI-toolkit agnostic)
//! - ids (monotonic string-id allocation for graph objects)

pub mod geom;
pub mod ids;

// Re-exports: nice ergonomics for downstream crates
pub use geom::Position;
pub use ids::IdSeq;
