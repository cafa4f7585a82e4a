//! Canvas geometry and colors.

use egui::{Color32, Pos2, Rect, Vec2};
use pf_graph::ColorTag;

pub const GRID_SPACING: f32 = 20.0;
pub const GRID_DOT_RADIUS: f32 = 1.5;

pub const NODE_SIZE: Vec2 = Vec2::new(156.0, 52.0);
pub const HANDLE_RADIUS: f32 = 4.0;
pub const ACTION_ICON_SIZE: f32 = 14.0;

pub const CANVAS_FILL: Color32 = Color32::from_gray(30);
pub const GRID_DOT: Color32 = Color32::from_gray(48);
pub const CARD_FILL: Color32 = Color32::from_gray(52);
pub const CARD_STROKE: Color32 = Color32::from_gray(90);
pub const EDGE_STROKE: Color32 = Color32::from_gray(140);
pub const HANDLE_FILL: Color32 = Color32::from_gray(150);
pub const SELECTION_RING: Color32 = Color32::from_rgb(0x3B, 0x82, 0xF6);

/// Card rectangle for a node whose top-left is at `pos` (screen space).
pub fn node_rect(pos: Pos2) -> Rect {
    Rect::from_min_size(pos, NODE_SIZE)
}

/// Target handle: left edge, vertically centered.
pub fn input_handle(rect: Rect) -> Pos2 {
    Pos2::new(rect.left(), rect.center().y)
}

/// Source handle: right edge, vertically centered.
pub fn output_handle(rect: Rect) -> Pos2 {
    Pos2::new(rect.right(), rect.center().y)
}

/// Accent color for a stage's color family.
pub fn accent(tag: ColorTag) -> Color32 {
    match tag {
        ColorTag::Blue => Color32::from_rgb(0x3B, 0x82, 0xF6),
        ColorTag::Indigo => Color32::from_rgb(0x63, 0x66, 0xF1),
        ColorTag::Green => Color32::from_rgb(0x22, 0xC5, 0x5E),
        ColorTag::Purple => Color32::from_rgb(0xA8, 0x55, 0xF7),
        ColorTag::Orange => Color32::from_rgb(0xF9, 0x73, 0x16),
        ColorTag::Red => Color32::from_rgb(0xEF, 0x44, 0x44),
    }
}

/// Translucent fill for a stage's icon chip.
pub fn chip_fill(tag: ColorTag) -> Color32 {
    accent(tag).gamma_multiply(0.25)
}
