use serde::{Deserialize, Serialize};

/// A point in canvas coordinates.
///
/// The graph model stores positions in this plain struct so it stays
/// independent of any UI toolkit; the editor converts to its own vector
/// types at the rendering boundary.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Translate by (dx, dy).
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}
