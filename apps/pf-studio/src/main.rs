#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod canvas;
mod views;

use app::StudioApp;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_title("Pipeforge"),
        ..Default::default()
    };

    eframe::run_native(
        "Pipeforge",
        options,
        Box::new(|cc| Ok(Box::new(StudioApp::new(cc)))),
    )
}
