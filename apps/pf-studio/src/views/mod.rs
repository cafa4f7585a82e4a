pub mod canvas_view;
pub mod inspector_view;
pub mod logs_view;
pub mod palette_view;

pub use canvas_view::{CanvasActions, CanvasView};
pub use inspector_view::{InspectorAction, InspectorView};
pub use logs_view::LogsView;
pub use palette_view::PaletteView;
