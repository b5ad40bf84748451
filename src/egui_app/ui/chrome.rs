use super::EguiApp;
use super::style;
use eframe::egui::{self, Frame, Margin, RichText, StrokeKind};

impl EguiApp {
    pub(super) fn render_header(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::top("header")
            .frame(
                Frame::new()
                    .fill(palette.bg_secondary)
                    .inner_margin(Margin::symmetric(16, 10)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new("All Requisitions")
                                .heading()
                                .color(palette.text_primary),
                        );
                        ui.label(
                            RichText::new("Home • Requisitions")
                                .small()
                                .color(palette.text_muted),
                        );
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .button(RichText::new("Close").color(palette.text_primary))
                            .clicked()
                        {
                            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                        let refresh = ui.add_enabled(
                            !self.controller.loading(),
                            egui::Button::new(
                                RichText::new("Refresh").color(palette.text_primary),
                            ),
                        );
                        if refresh.clicked() {
                            self.controller.request_refresh();
                        }
                    });
                });
            });
    }

    pub(super) fn render_status(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::bottom("status_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .stroke(style::outer_border())
                    .inner_margin(Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                let status = self.controller.ui.status.clone();
                ui.horizontal(|ui| {
                    ui.add_space(6.0);
                    let (badge_rect, _) =
                        ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                    ui.painter().rect_filled(badge_rect, 0.0, status.badge_color);
                    ui.painter().rect_stroke(
                        badge_rect,
                        0.0,
                        style::inner_border(),
                        StrokeKind::Inside,
                    );
                    ui.add_space(8.0);
                    ui.label(RichText::new(&status.badge_label).color(palette.text_primary));
                    ui.separator();
                    ui.label(RichText::new(&status.text).color(palette.text_primary));
                });
            });
    }

    pub(super) fn render_error_banner(&mut self, ui: &mut egui::Ui) {
        let Some(message) = self.controller.ui.dashboard.error_banner.clone() else {
            return;
        };
        let palette = style::palette();
        Frame::new()
            .fill(style::banner_fill())
            .stroke(egui::Stroke::new(1.0, palette.danger))
            .corner_radius(4.0)
            .inner_margin(Margin::symmetric(12, 8))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.colored_label(palette.danger, "⚠");
                    ui.label(RichText::new(message).color(palette.text_primary));
                });
            });
        ui.add_space(8.0);
    }
}
