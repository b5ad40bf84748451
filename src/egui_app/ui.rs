//! egui renderer for the dashboard UI.

use crate::egui_app::controller::DashboardController;
use crate::records::config::AppConfig;
use eframe::egui::{self, Margin};

mod chrome;
mod detail_view;
mod filter_bar;
mod helpers;
mod records_table;
pub(crate) mod style;
mod summary_cards;

/// Smallest viewport the layout stays usable at.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(960.0, 600.0);

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: DashboardController,
    visuals_set: bool,
}

impl EguiApp {
    /// Create the app and kick off the initial records fetch.
    pub fn new(config: &AppConfig) -> Result<Self, String> {
        let mut controller = DashboardController::new(config)
            .map_err(|err| format!("Failed to start records client: {err}"))?;
        controller.request_refresh();
        Ok(Self {
            controller,
            visuals_set: false,
        })
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn handle_hotkeys(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::F) && i.modifiers.command) {
            self.controller.ui.dashboard.search_focus_requested = true;
        }
        if ctx.input(|i| i.key_pressed(egui::Key::F5)) {
            self.controller.request_refresh();
        }
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.process_fetch_results();
        self.handle_hotkeys(ctx);

        self.render_header(ctx);
        self.render_status(ctx);
        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(style::palette().bg_primary)
                    .inner_margin(Margin::same(16)),
            )
            .show(ctx, |ui| {
                self.render_error_banner(ui);
                self.render_summary_cards(ui);
                ui.add_space(12.0);
                self.render_filter_bar(ui);
                ui.add_space(8.0);
                self.render_records_table(ui);
            });
        self.render_detail_overlay(ctx);
        ctx.request_repaint();
    }
}
