#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the egui-based requisition dashboard.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use eframe::egui;
use reqdash::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use reqdash::logging;
use reqdash::records::config;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let app_config = match config::load_or_default() {
        Ok(app_config) => app_config,
        Err(err) => {
            tracing::warn!(%err, "Falling back to default configuration");
            config::AppConfig::default()
        }
    };

    let viewport = egui::ViewportBuilder::default()
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_maximized(true);

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Requisition Dashboard",
        native_options,
        Box::new(move |_cc| match EguiApp::new(&app_config) {
            Ok(app) => Ok(Box::new(app)),
            Err(err) => Ok(Box::new(LaunchError { message: err })),
        }),
    )?;
    Ok(())
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start UI");
                ui.label(&self.message);
            });
        });
    }
}
