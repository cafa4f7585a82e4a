pub mod interaction;
pub mod style;

pub use interaction::{BoxSelection, ConnectState, DragState};
pub use style::*;
