use egui::{Color32, RichText, Vec2};
use pf_graph::{DragPayload, STAGES, StageDef, StageKind};
use tracing::{debug, info};

use crate::canvas::{accent, chip_fill};

/// The stage palette: one draggable card per catalog entry.
///
/// Dragging a card publishes the serialized payload onto the drag-and-drop
/// channel; the canvas deserializes it on drop. Card-click highlighting is
/// palette-local state and never touches the graph model.
pub struct PaletteView {
    collapsed: bool,
    selected_stage: Option<StageKind>,
}

impl Default for PaletteView {
    fn default() -> Self {
        Self {
            collapsed: false,
            selected_stage: None,
        }
    }
}

impl PaletteView {
    pub fn show(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.strong("Stages");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let chevron = if self.collapsed { "⏵" } else { "⏷" };
                if ui.small_button(chevron).clicked() {
                    self.collapsed = !self.collapsed;
                }
            });
        });
        ui.separator();

        if self.collapsed {
            return;
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            for def in &STAGES {
                self.stage_card(ui, def);
                ui.add_space(6.0);
            }
        });

        ui.separator();
        let help = ui.add(
            egui::Label::new(RichText::new("?  Help & Support").color(Color32::from_gray(150)))
                .sense(egui::Sense::click()),
        );
        if help.on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
            info!("help & support (stub)");
        }
    }

    fn stage_card(&mut self, ui: &mut egui::Ui, def: &StageDef) {
        let payload = match DragPayload::for_stage(def).to_json() {
            Ok(json) => json,
            Err(err) => {
                debug!(%err, stage = def.name, "failed to build drag payload");
                return;
            }
        };

        let selected = self.selected_stage == Some(def.kind);
        let drag_id = egui::Id::new(("palette_card", def.kind));

        let inner = ui.dnd_drag_source(drag_id, payload, |ui| {
            egui::Frame::none()
                .fill(if selected {
                    chip_fill(def.color)
                } else {
                    ui.visuals().faint_bg_color
                })
                .stroke(if selected {
                    egui::Stroke::new(1.0, accent(def.color))
                } else {
                    egui::Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color)
                })
                .rounding(6.0)
                .inner_margin(8.0)
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        let (chip, _) =
                            ui.allocate_exact_size(Vec2::splat(28.0), egui::Sense::hover());
                        ui.painter().rect_filled(chip, 4.0, chip_fill(def.color));
                        ui.painter().text(
                            chip.center(),
                            egui::Align2::CENTER_CENTER,
                            def.icon,
                            egui::FontId::proportional(14.0),
                            accent(def.color),
                        );
                        ui.vertical(|ui| {
                            ui.label(RichText::new(def.name).strong().size(13.0));
                            ui.label(
                                RichText::new(def.description)
                                    .size(11.0)
                                    .color(Color32::from_gray(150)),
                            );
                        });
                    });
                });
        });

        // The drag source claims drags; clicks still toggle the highlight.
        let click = ui.interact(
            inner.response.rect,
            drag_id.with("click"),
            egui::Sense::click(),
        );
        if click.clicked() {
            self.selected_stage = if selected { None } else { Some(def.kind) };
        }
    }
}
