use std::time::Instant;

use egui::{Color32, RichText};
use pf_graph::Pipeline;
use tracing::info;

use crate::views::{CanvasView, InspectorAction, InspectorView, LogsView, PaletteView};

const RUN_GREEN: Color32 = Color32::from_rgb(0x02, 0x8F, 0x33);
const SAVED_GREEN: Color32 = Color32::from_rgb(0x00, 0xAC, 0x3C);

pub struct StudioApp {
    pipeline: Pipeline,
    canvas: CanvasView,
    palette: PaletteView,
    logs: LogsView,
    inspector: InspectorView,
    /// Id of the node whose configuration sheet is open, if any.
    open_node: Option<String>,
    saved_at: Instant,
}

impl StudioApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            pipeline: Pipeline::demo(),
            canvas: CanvasView::default(),
            palette: PaletteView::default(),
            logs: LogsView::default(),
            inspector: InspectorView,
            open_node: None,
            saved_at: Instant::now(),
        }
    }

    fn header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("⬅").clicked() {
                info!("back navigation (stub)");
            }
            ui.separator();
            ui.label(RichText::new("ETL Pipeline").color(Color32::from_gray(150)));
            ui.label(RichText::new("›").weak());
            ui.strong("Data analysis execute pipeline-v2");

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let run = egui::Button::new(RichText::new("Run ⏵").color(Color32::WHITE))
                    .fill(RUN_GREEN);
                if ui.add(run).clicked() {
                    // Visual-only control: no execution engine behind it.
                    info!("run requested (stub)");
                }

                let saved_s = self.saved_at.elapsed().as_secs().max(1);
                ui.label(
                    RichText::new(format!("Saved {saved_s}s ago"))
                        .color(SAVED_GREEN)
                        .size(11.0),
                );
                egui::Frame::none()
                    .fill(ui.visuals().faint_bg_color)
                    .rounding(4.0)
                    .inner_margin(egui::Margin::symmetric(6.0, 2.0))
                    .show(ui, |ui| {
                        ui.label(RichText::new("Draft").size(11.0));
                    });
            });
        });
    }

    fn inspector_window(&mut self, ctx: &egui::Context) {
        let Some(open_id) = self.open_node.clone() else {
            return;
        };
        // The sheet follows its node: if the node was deleted, it closes.
        let Some(node) = self.pipeline.node(&open_id) else {
            self.open_node = None;
            return;
        };

        let mut action = InspectorAction::KeepOpen;
        egui::Window::new("Stage Configuration")
            .title_bar(false)
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 48.0))
            .fixed_size(egui::vec2(340.0, 420.0))
            .resizable(false)
            .collapsible(false)
            .show(ctx, |ui| {
                action = self.inspector.show(ui, node);
            });

        if action == InspectorAction::Close {
            self.open_node = None;
        }
    }
}

impl eframe::App for StudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            self.header(ui);
        });

        egui::SidePanel::left("stages")
            .default_width(260.0)
            .show(ctx, |ui| {
                self.palette.show(ui);
            });

        egui::SidePanel::right("logs")
            .default_width(240.0)
            .show(ctx, |ui| {
                self.logs.show(ui);
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let actions = self.canvas.show(ui, &mut self.pipeline);
                if let Some(node_id) = actions.open_inspector {
                    self.open_node = Some(node_id);
                }
                if actions.clicked_empty {
                    self.open_node = None;
                }
            });

        self.inspector_window(ctx);
    }
}
