use egui::{Color32, FontId, Pos2, Rect, Stroke, Vec2};
use egui::epaint::CubicBezierShape;
use pf_core::Position;
use pf_graph::{Node, Pipeline};
use tracing::{debug, info};

use crate::canvas::{
    ACTION_ICON_SIZE, BoxSelection, CANVAS_FILL, CARD_FILL, CARD_STROKE, ConnectState, DragState,
    EDGE_STROKE, GRID_DOT, GRID_DOT_RADIUS, GRID_SPACING, HANDLE_FILL, HANDLE_RADIUS,
    SELECTION_RING, accent, chip_fill, input_handle, node_rect, output_handle,
};

/// What the canvas asks the app shell to do after a frame.
#[derive(Default)]
pub struct CanvasActions {
    /// A node was plain-clicked: open its configuration sheet.
    pub open_inspector: Option<String>,
    /// Empty canvas was clicked: dismiss the sheet.
    pub clicked_empty: bool,
}

/// The node-graph rendering surface.
///
/// Holds only transient gesture state; the `Pipeline` passed to `show`
/// stays the single authority on nodes, edges, and selection.
#[derive(Default)]
pub struct CanvasView {
    drag: Option<DragState>,
    box_select: Option<BoxSelection>,
    connect: Option<ConnectState>,
    hovered: Option<String>,
}

impl CanvasView {
    pub fn show(&mut self, ui: &mut egui::Ui, pipeline: &mut Pipeline) -> CanvasActions {
        let mut actions = CanvasActions::default();

        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
        let rect = response.rect;
        let painter = painter.with_clip_rect(rect);

        painter.rect_filled(rect, 0.0, CANVAS_FILL);
        draw_dot_grid(&painter, rect);

        // Model positions are canvas-local; the panel origin moves as other
        // panels resize, so convert at this boundary only.
        let to_screen = |p: Position| rect.min + Vec2::new(p.x, p.y);
        let to_canvas = |p: Pos2| Position::new(p.x - rect.left(), p.y - rect.top());

        self.hovered = response
            .hover_pos()
            .and_then(|pos| hit_test_node(pipeline, pos, to_screen));

        // Palette drop. A payload that fails to parse is discarded without
        // creating anything.
        if let Some(json) = response.dnd_release_payload::<String>() {
            if let Some(pos) = response.hover_pos() {
                match pipeline.drop_payload(&json, to_canvas(pos)) {
                    Ok(node) => debug!(node = %node.id, "palette drop"),
                    Err(err) => debug!(%err, "discarding malformed palette drop"),
                }
            }
        }

        let pointer = response.interact_pointer_pos();

        if response.drag_started() {
            if let Some(pos) = pointer {
                if let Some(node) = hit_test_output_handle(pipeline, pos, to_screen) {
                    let from = output_handle(node_rect(to_screen(node.position)));
                    self.connect = Some(ConnectState {
                        source_id: node.id.clone(),
                        from,
                        current_pos: pos,
                    });
                } else if let Some(node_id) = hit_test_node(pipeline, pos, to_screen) {
                    if let Some(node) = pipeline.node(&node_id) {
                        self.drag = Some(DragState {
                            node_id,
                            grab_offset: to_screen(node.position) - pos,
                        });
                    }
                } else {
                    self.box_select = Some(BoxSelection {
                        start_pos: pos,
                        current_pos: pos,
                    });
                }
            }
        }

        if response.dragged() {
            if let Some(pos) = pointer {
                if let Some(connect) = &mut self.connect {
                    connect.current_pos = pos;
                } else if let Some(drag) = &self.drag {
                    pipeline.move_node(&drag.node_id, to_canvas(pos + drag.grab_offset));
                } else if let Some(box_select) = &mut self.box_select {
                    box_select.current_pos = pos;
                }
            }
        }

        if response.drag_stopped() {
            if let Some(connect) = self.connect.take() {
                if let Some(pos) = pointer {
                    // Permissive: releasing on the source node itself makes
                    // a self-loop, and repeat connections make duplicates.
                    if let Some(target_id) = hit_test_node(pipeline, pos, to_screen) {
                        pipeline.connect(&connect.source_id, &target_id);
                    }
                }
            }
            if let Some(box_select) = self.box_select.take() {
                // Partial containment: touching the band is enough.
                let band = box_select.rect();
                let ids: Vec<String> = pipeline
                    .nodes()
                    .iter()
                    .filter(|n| band.intersects(node_rect(to_screen(n.position))))
                    .map(|n| n.id.clone())
                    .collect();
                pipeline.set_selection(ids);
            }
            self.drag = None;
        }

        if response.clicked() {
            if let Some(pos) = pointer {
                if let Some(node_id) = hit_test_node(pipeline, pos, to_screen) {
                    if let Some(action) = self.hit_test_action_icon(pipeline, &node_id, pos, to_screen)
                    {
                        self.apply_node_action(pipeline, &node_id, action);
                    } else if ui.input(|i| i.modifiers.shift) {
                        let mut ids: Vec<String> =
                            pipeline.selection().iter().cloned().collect();
                        if let Some(at) = ids.iter().position(|id| *id == node_id) {
                            ids.remove(at);
                        } else {
                            ids.push(node_id);
                        }
                        pipeline.set_selection(ids);
                    } else {
                        pipeline.set_selection([node_id.clone()]);
                        actions.open_inspector = Some(node_id);
                    }
                } else {
                    pipeline.set_selection(std::iter::empty::<String>());
                    actions.clicked_empty = true;
                }
            }
        }

        if ui.input(|i| i.key_pressed(egui::Key::Delete)) && !pipeline.selection().is_empty() {
            let doomed: Vec<String> = pipeline.selection().iter().cloned().collect();
            pipeline.remove_nodes(doomed.iter().map(String::as_str));
        }

        for edge in pipeline.edges() {
            // Dangling edges (endpoint deleted) are simply not drawn.
            if let Some((source, target)) = pipeline.edge_endpoints(edge) {
                let from = output_handle(node_rect(to_screen(source.position)));
                let to = input_handle(node_rect(to_screen(target.position)));
                draw_edge(&painter, from, to, Stroke::new(2.0, EDGE_STROKE));
            }
        }

        if let Some(connect) = &self.connect {
            painter.line_segment(
                [connect.from, connect.current_pos],
                Stroke::new(2.0, SELECTION_RING),
            );
        }

        for node in pipeline.nodes() {
            let hovered = self.hovered.as_deref() == Some(node.id.as_str());
            draw_node_card(&painter, node, to_screen(node.position), hovered);
        }

        if let Some(box_select) = &self.box_select {
            let band = box_select.rect();
            painter.rect_filled(band, 0.0, SELECTION_RING.gamma_multiply(0.12));
            painter.rect_stroke(band, 0.0, Stroke::new(1.0, SELECTION_RING));
        }

        actions
    }

    fn hit_test_action_icon(
        &self,
        pipeline: &Pipeline,
        node_id: &str,
        pos: Pos2,
        to_screen: impl Fn(Position) -> Pos2,
    ) -> Option<NodeAction> {
        // Icons only exist on the hovered card.
        if self.hovered.as_deref() != Some(node_id) {
            return None;
        }
        let node = pipeline.node(node_id)?;
        let rect = node_rect(to_screen(node.position));
        for (i, action) in [NodeAction::Edit, NodeAction::Copy, NodeAction::Delete]
            .into_iter()
            .enumerate()
        {
            if action_icon_rect(rect, i).contains(pos) {
                return Some(action);
            }
        }
        None
    }

    fn apply_node_action(&mut self, pipeline: &mut Pipeline, node_id: &str, action: NodeAction) {
        match action {
            // Edit and copy have no defined semantics yet.
            NodeAction::Edit => info!(node = %node_id, "edit action (stub)"),
            NodeAction::Copy => info!(node = %node_id, "copy action (stub)"),
            NodeAction::Delete => pipeline.remove_nodes([node_id]),
        }
    }
}

#[derive(Clone, Copy)]
enum NodeAction {
    Edit,
    Copy,
    Delete,
}

fn hit_test_node(
    pipeline: &Pipeline,
    pos: Pos2,
    to_screen: impl Fn(Position) -> Pos2,
) -> Option<String> {
    // Later nodes draw on top, so hit test back to front.
    pipeline
        .nodes()
        .iter()
        .rev()
        .find(|n| node_rect(to_screen(n.position)).contains(pos))
        .map(|n| n.id.clone())
}

fn hit_test_output_handle<'a>(
    pipeline: &'a Pipeline,
    pos: Pos2,
    to_screen: impl Fn(Position) -> Pos2,
) -> Option<&'a Node> {
    let grab = HANDLE_RADIUS + 4.0;
    pipeline.nodes().iter().rev().find(|n| {
        let handle = output_handle(node_rect(to_screen(n.position)));
        (handle - pos).length() <= grab
    })
}

fn action_icon_rect(card: Rect, index: usize) -> Rect {
    let step = ACTION_ICON_SIZE + 2.0;
    Rect::from_min_size(
        Pos2::new(
            card.right() - 6.0 - (3 - index) as f32 * step,
            card.top() + 4.0,
        ),
        Vec2::splat(ACTION_ICON_SIZE),
    )
}

fn draw_dot_grid(painter: &egui::Painter, rect: Rect) {
    let mut x = rect.left() - (rect.left() % GRID_SPACING);
    while x < rect.right() {
        let mut y = rect.top() - (rect.top() % GRID_SPACING);
        while y < rect.bottom() {
            painter.circle_filled(Pos2::new(x, y), GRID_DOT_RADIUS, GRID_DOT);
            y += GRID_SPACING;
        }
        x += GRID_SPACING;
    }
}

fn draw_edge(painter: &egui::Painter, from: Pos2, to: Pos2, stroke: Stroke) {
    let reach = ((to.x - from.x).abs() * 0.5).max(30.0);
    painter.add(CubicBezierShape::from_points_stroke(
        [
            from,
            from + Vec2::new(reach, 0.0),
            to - Vec2::new(reach, 0.0),
            to,
        ],
        false,
        Color32::TRANSPARENT,
        stroke,
    ));
}

fn draw_node_card(painter: &egui::Painter, node: &Node, pos: Pos2, hovered: bool) {
    let rect = node_rect(pos);
    painter.rect_filled(rect, 6.0, CARD_FILL);
    let stroke = if node.selected {
        Stroke::new(2.0, SELECTION_RING)
    } else {
        Stroke::new(1.0, CARD_STROKE)
    };
    painter.rect_stroke(rect, 6.0, stroke);

    // Icon chip tinted by the stage color.
    let chip = Rect::from_min_size(rect.min + Vec2::new(8.0, 12.0), Vec2::splat(28.0));
    painter.rect_filled(chip, 4.0, chip_fill(node.color));
    painter.text(
        chip.center(),
        egui::Align2::CENTER_CENTER,
        node.kind.icon(),
        FontId::proportional(14.0),
        accent(node.color),
    );

    painter.text(
        rect.min + Vec2::new(44.0, 10.0),
        egui::Align2::LEFT_TOP,
        &node.label,
        FontId::proportional(13.0),
        Color32::WHITE,
    );
    painter.text(
        rect.min + Vec2::new(44.0, 27.0),
        egui::Align2::LEFT_TOP,
        &node.status,
        FontId::proportional(11.0),
        Color32::from_gray(160),
    );

    painter.circle_filled(input_handle(rect), HANDLE_RADIUS, HANDLE_FILL);
    painter.circle_filled(output_handle(rect), HANDLE_RADIUS, HANDLE_FILL);

    if hovered {
        let glyphs = ["✏", "🗐", "🗑"];
        for (i, glyph) in glyphs.iter().enumerate() {
            let icon_rect = action_icon_rect(rect, i);
            painter.rect_filled(icon_rect, 2.0, Color32::from_gray(70));
            painter.text(
                icon_rect.center(),
                egui::Align2::CENTER_CENTER,
                *glyph,
                FontId::proportional(10.0),
                Color32::from_gray(220),
            );
        }
    }
}
