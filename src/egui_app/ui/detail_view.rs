use super::EguiApp;
use super::helpers::{detail_field, pill};
use super::style;
use crate::egui_app::state::RecordDetailView;
use eframe::egui::{self, Align2, RichText};

impl EguiApp {
    pub(super) fn render_detail_overlay(&mut self, ctx: &egui::Context) {
        let Some(detail) = self.controller.ui.detail.clone() else {
            return;
        };
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.controller.close_detail();
            return;
        }

        self.render_detail_backdrop(ctx);

        let mut open = true;
        egui::Window::new(RichText::new(&detail.heading).strong())
            .id(egui::Id::new("record_detail"))
            .anchor(Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .order(egui::Order::Foreground)
            .collapsible(false)
            .resizable(false)
            .default_width(480.0)
            .open(&mut open)
            .show(ctx, |ui| {
                self.render_detail_body(ui, &detail);
            });

        if !open {
            self.controller.close_detail();
        }
    }

    fn render_detail_backdrop(&mut self, ctx: &egui::Context) {
        let rect = ctx.viewport_rect();
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Background,
            egui::Id::new("record_detail_backdrop_paint"),
        ));
        painter.rect_filled(
            rect,
            0.0,
            egui::Color32::from_rgba_premultiplied(0, 0, 0, 160),
        );

        egui::Area::new(egui::Id::new("record_detail_backdrop_blocker"))
            .order(egui::Order::Middle)
            .fixed_pos(rect.min)
            .show(ctx, |ui| {
                let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());
                if response.clicked() {
                    self.controller.close_detail();
                }
            });
    }

    fn render_detail_body(&mut self, ui: &mut egui::Ui, detail: &RecordDetailView) {
        let palette = style::palette();
        ui.horizontal(|ui| {
            pill(ui, &detail.status);
            pill(ui, &detail.priority);
        });
        ui.add_space(8.0);

        egui::Grid::new("record_detail_grid")
            .num_columns(2)
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                detail_field(ui, "Title", &detail.title);
                detail_field(ui, "Customer", &detail.customer_name);
                detail_field(ui, "Mobile", &detail.customer_mobile);
                detail_field(ui, "Vehicle", &detail.vehicle_no);
                detail_field(ui, "Branch", &detail.branch);
                detail_field(ui, "Assigned to", &detail.assigned_to);
                detail_field(ui, "Created by", &detail.created_by);
                detail_field(ui, "Cost", &detail.cost);
                detail_field(ui, "Location", &detail.location);
                detail_field(ui, "Remarks", &detail.remarks);
            });
        ui.add_space(6.0);
        ui.separator();
        ui.add_space(6.0);

        egui::Grid::new("record_detail_timestamps")
            .num_columns(2)
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                detail_field(ui, "Requested", &detail.requested_at);
                detail_field(ui, "Preferred", &detail.preferred_at);
                detail_field(ui, "Completed", &detail.completed_at);
                detail_field(ui, "Verified", &detail.verified_at);
                detail_field(ui, "Created", &detail.created_at);
                detail_field(ui, "Updated", &detail.updated_at);
            });
        ui.add_space(10.0);

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .button(RichText::new("Close").color(palette.text_primary))
                .clicked()
            {
                self.controller.close_detail();
            }
        });
    }
}
