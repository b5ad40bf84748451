use super::EguiApp;
use super::helpers;
use eframe::egui::{self, Ui};

use crate::records::{Status, StatusFilter};

impl EguiApp {
    pub(super) fn render_filter_bar(&mut self, ui: &mut Ui) {
        let active = self.controller.ui.dashboard.filter;
        let visible = self.controller.visible_len();
        let total = self.controller.record_count();
        ui.horizontal(|ui| {
            if ui
                .selectable_label(active == StatusFilter::All, "All")
                .clicked()
            {
                self.controller.set_status_filter(StatusFilter::All);
            }
            for &status in &Status::KNOWN {
                let option = StatusFilter::Only(status);
                if ui.selectable_label(active == option, status.label()).clicked() {
                    self.controller.set_status_filter(option);
                }
            }
            ui.separator();

            let mut query = self.controller.ui.dashboard.search_query.clone();
            let response = ui.add(
                egui::TextEdit::singleline(&mut query)
                    .hint_text("Search requisitions...")
                    .desired_width(220.0),
            );
            if self.controller.ui.dashboard.search_focus_requested {
                response.request_focus();
                self.controller.ui.dashboard.search_focus_requested = false;
            }
            if response.changed() {
                self.controller.set_search(query);
            }

            let filters_active = active != StatusFilter::All
                || !self.controller.ui.dashboard.search_query.is_empty();
            let clear = ui.add_enabled(filters_active, egui::Button::new("Clear"));
            if clear.clicked() {
                self.controller.clear_filters();
            }
            if self.controller.loading() {
                ui.add(egui::Spinner::new().size(16.0));
            }

            helpers::right_aligned_note(
                ui,
                format!(
                    "{visible} of {total} requisition{}",
                    if total == 1 { "" } else { "s" }
                ),
            );
        });
    }
}
