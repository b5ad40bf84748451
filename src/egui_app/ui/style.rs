use crate::records::{Priority, Status};
use eframe::egui::{
    Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

/// Base colors shared by every panel.
#[derive(Clone, Copy)]
pub(crate) struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_tertiary: Color32,
    pub panel_outline: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent_blue: Color32,
    pub danger: Color32,
}

pub(crate) fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(13, 14, 17),
        bg_secondary: Color32::from_rgb(24, 26, 31),
        bg_tertiary: Color32::from_rgb(38, 41, 48),
        panel_outline: Color32::from_rgb(46, 50, 58),
        text_primary: Color32::from_rgb(198, 204, 213),
        text_muted: Color32::from_rgb(134, 142, 153),
        accent_blue: Color32::from_rgb(96, 156, 245),
        danger: Color32::from_rgb(224, 108, 97),
    }
}

pub(crate) fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_secondary;
    visuals.panel_fill = palette.bg_secondary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.hyperlink_color = palette.accent_blue;
    visuals.extreme_bg_color = palette.bg_primary;
    visuals.faint_bg_color = palette.bg_secondary;
    visuals.error_fg_color = palette.danger;
    visuals.warn_fg_color = palette.danger;
    visuals.selection.bg_fill = palette.bg_tertiary;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent_blue);
    visuals.widgets.noninteractive.bg_fill = palette.bg_secondary;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    set_widget_tones(&mut visuals.widgets.inactive, palette);
    set_widget_tones(&mut visuals.widgets.hovered, palette);
    set_widget_tones(&mut visuals.widgets.active, palette);
    set_widget_tones(&mut visuals.widgets.open, palette);
    visuals.window_corner_radius = CornerRadius::same(4);
    visuals.menu_corner_radius = CornerRadius::same(4);
    visuals.popup_shadow = Shadow::NONE;
    visuals.button_frame = true;
}

fn set_widget_tones(vis: &mut WidgetVisuals, palette: Palette) {
    vis.corner_radius = CornerRadius::same(3);
    vis.bg_fill = palette.bg_tertiary;
    vis.weak_bg_fill = palette.bg_secondary;
    vis.bg_stroke = Stroke::new(1.0, palette.panel_outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}

/// (fill, text) pair for a status chip. `Unknown` stays neutral.
pub(crate) fn status_colors(status: Status) -> (Color32, Color32) {
    match status {
        Status::Accepted => (Color32::from_rgb(24, 56, 40), Color32::from_rgb(118, 208, 151)),
        Status::Pending => (Color32::from_rgb(62, 48, 22), Color32::from_rgb(233, 180, 102)),
        Status::Closed => (Color32::from_rgb(21, 54, 57), Color32::from_rgb(108, 199, 204)),
        Status::Rejected => (Color32::from_rgb(64, 28, 28), Color32::from_rgb(229, 122, 111)),
        Status::Unknown => neutral_pill(),
    }
}

/// (fill, text) pair for a priority chip. `Unknown` stays neutral.
pub(crate) fn priority_colors(priority: Priority) -> (Color32, Color32) {
    match priority {
        Priority::Low => (Color32::from_rgb(29, 36, 48), Color32::from_rgb(136, 160, 196)),
        Priority::Normal => (Color32::from_rgb(33, 37, 44), Color32::from_rgb(170, 178, 189)),
        Priority::High => (Color32::from_rgb(62, 48, 22), Color32::from_rgb(233, 180, 102)),
        Priority::Urgent => (Color32::from_rgb(64, 28, 28), Color32::from_rgb(229, 122, 111)),
        Priority::Unknown => neutral_pill(),
    }
}

fn neutral_pill() -> (Color32, Color32) {
    let palette = palette();
    (palette.bg_tertiary, palette.text_muted)
}

/// Accent for the "Total" summary card.
pub(crate) fn total_accent() -> Color32 {
    palette().accent_blue
}

/// Accent for a per-status summary card.
pub(crate) fn status_accent(status: Status) -> Color32 {
    status_colors(status).1
}

pub(crate) fn outer_border() -> Stroke {
    Stroke::new(1.0, palette().panel_outline)
}

pub(crate) fn inner_border() -> Stroke {
    Stroke::new(1.0, Color32::from_rgb(32, 35, 41))
}

pub(crate) fn row_hover_fill() -> Color32 {
    Color32::from_rgb(30, 33, 39)
}

pub(crate) fn row_selected_fill() -> Color32 {
    Color32::from_rgb(37, 42, 52)
}

/// Muted bar painted in place of data while a fetch is in flight.
pub(crate) fn skeleton_fill() -> Color32 {
    Color32::from_rgb(34, 37, 43)
}

pub(crate) fn banner_fill() -> Color32 {
    Color32::from_rgb(48, 26, 26)
}
