//! Transient canvas gesture state.
//!
//! Local view state only: none of this belongs in the graph model.

use egui::{Pos2, Rect, Vec2};

/// An in-progress node move.
#[derive(Clone, Debug)]
pub struct DragState {
    pub node_id: String,
    /// Offset from the pointer to the card's top-left at drag start, so
    /// the card does not jump under the cursor.
    pub grab_offset: Vec2,
}

/// An in-progress rubber-band selection.
#[derive(Clone, Debug)]
pub struct BoxSelection {
    pub start_pos: Pos2,
    pub current_pos: Pos2,
}

impl BoxSelection {
    pub fn rect(&self) -> Rect {
        Rect::from_two_pos(self.start_pos, self.current_pos)
    }
}

/// An in-progress connect gesture from a node's source handle.
#[derive(Clone, Debug)]
pub struct ConnectState {
    pub source_id: String,
    pub from: Pos2,
    pub current_pos: Pos2,
}
