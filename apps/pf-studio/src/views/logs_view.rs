use egui::{Color32, RichText};

/// The logs panel. Collapsible; the body is a placeholder until log
/// streaming exists.
pub struct LogsView {
    collapsed: bool,
}

impl Default for LogsView {
    fn default() -> Self {
        Self { collapsed: false }
    }
}

impl LogsView {
    pub fn show(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.strong("Logs");
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

        ui.centered_and_justified(|ui| {
            ui.label(RichText::new("Log comes here").color(Color32::from_gray(140)));
        });
    }
}
