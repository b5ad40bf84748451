use super::EguiApp;
use super::style;
use eframe::egui::{Frame, Margin, RichText, Ui};

impl EguiApp {
    pub(super) fn render_summary_cards(&mut self, ui: &mut Ui) {
        let cards = self.controller.ui.dashboard.cards.clone();
        if cards.is_empty() {
            return;
        }
        let palette = style::palette();
        ui.columns(cards.len(), |columns| {
            for (column, card) in columns.iter_mut().zip(&cards) {
                Frame::new()
                    .fill(palette.bg_secondary)
                    .stroke(style::outer_border())
                    .corner_radius(4.0)
                    .inner_margin(Margin::symmetric(12, 10))
                    .show(column, |ui| {
                        ui.set_min_width(ui.available_width());
                        ui.label(RichText::new(&card.title).small().color(palette.text_muted));
                        ui.label(
                            RichText::new(card.value.to_string())
                                .heading()
                                .color(card.accent),
                        );
                        ui.label(
                            RichText::new("requisitions")
                                .small()
                                .color(palette.text_muted),
                        );
                    });
            }
        });
    }
}
