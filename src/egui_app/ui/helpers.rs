use super::style;
use crate::egui_app::state::PillView;
use eframe::egui::{self, Frame, Margin, RichText, Ui};

/// Render a status/priority chip inline in the current layout.
pub(super) fn pill(ui: &mut Ui, pill: &PillView) {
    Frame::new()
        .fill(pill.fill)
        .corner_radius(9.0)
        .inner_margin(Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(&pill.label).small().color(pill.text));
        });
}

/// Rough character-based truncation to avoid layout thrash in painted cells.
pub(super) fn clamp_label_for_width(text: &str, available_width: f32) -> String {
    let width = available_width.max(1.0);
    let approx_char_width = 8.0;
    let max_chars = (width / approx_char_width).floor().max(4.0) as usize;
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(1);
    let mut clamped: String = text.chars().take(keep).collect();
    clamped.push('…');
    clamped
}

/// Label + value pair inside a two-column detail grid.
pub(super) fn detail_field(ui: &mut Ui, label: &str, value: &str) {
    let palette = style::palette();
    ui.label(RichText::new(label).color(palette.text_muted));
    ui.label(RichText::new(value).color(palette.text_primary));
    ui.end_row();
}

/// Right-aligned small muted label, used for row counts.
pub(super) fn right_aligned_note(ui: &mut Ui, text: String) {
    let palette = style::palette();
    ui.allocate_ui_with_layout(
        egui::vec2(ui.available_width(), 0.0),
        egui::Layout::right_to_left(egui::Align::Center),
        |ui| {
            ui.label(RichText::new(text).color(palette.text_muted).small());
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_keeps_short_labels_intact() {
        assert_eq!(clamp_label_for_width("Globex", 200.0), "Globex");
    }

    #[test]
    fn clamp_truncates_long_labels_with_ellipsis() {
        let clamped = clamp_label_for_width("A very long customer name indeed", 80.0);
        assert!(clamped.ends_with('…'));
        assert!(clamped.chars().count() <= 10);
    }
}
