use egui::{Color32, RichText};
use pf_graph::Node;
use tracing::info;

use crate::canvas::{accent, chip_fill};

/// What the inspector sheet asks the app shell to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InspectorAction {
    KeepOpen,
    Close,
}

/// The "Stage Configuration" detail sheet.
///
/// Pure read path: it renders a snapshot of the clicked node and never
/// mutates it. Cancel and the "Save configuration" stub both just close
/// the sheet; save must stay a true no-op until configuration semantics
/// exist.
#[derive(Default)]
pub struct InspectorView;

impl InspectorView {
    pub fn show(&self, ui: &mut egui::Ui, node: &Node) -> InspectorAction {
        let mut action = InspectorAction::KeepOpen;

        ui.horizontal(|ui| {
            ui.heading("Stage Configuration");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let badge = egui::Frame::none()
                    .fill(chip_fill(node.color))
                    .rounding(8.0)
                    .inner_margin(egui::Margin::symmetric(8.0, 4.0));
                badge.show(ui, |ui| {
                    ui.label(RichText::new(&node.label).color(accent(node.color)).size(12.0));
                });
            });
        });
        ui.separator();

        ui.add_space(8.0);
        ui.label(
            RichText::new(format!("{} · {}", node.id, node.status))
                .size(11.0)
                .color(Color32::from_gray(140)),
        );
        ui.add_space(40.0);
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(format!("{} configuration component comes here", node.label))
                    .color(Color32::from_gray(140)),
            );
        });
        ui.add_space(40.0);
        ui.separator();

        ui.horizontal(|ui| {
            if ui.button("Cancel").clicked() {
                action = InspectorAction::Close;
            }
            let save = egui::Button::new(
                RichText::new("Save configuration").color(Color32::WHITE),
            )
            .fill(Color32::from_rgb(0x02, 0x8F, 0x33));
            if ui.add(save).clicked() {
                // Stub: closes without touching the node.
                info!(node = %node.id, "save configuration (stub)");
                action = InspectorAction::Close;
            }
        });

        action
    }
}
