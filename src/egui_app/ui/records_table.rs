use super::EguiApp;
use super::helpers::clamp_label_for_width;
use super::style;
use crate::egui_app::state::PillView;
use eframe::egui::{self, Align2, Frame, Sense, TextStyle, Ui};

const ROW_HEIGHT: f32 = 30.0;
const SKELETON_ROWS: usize = 8;
const CELL_PADDING: f32 = 10.0;
const PILL_HEIGHT: f32 = 18.0;

struct Column {
    title: &'static str,
    width: f32,
}

const COLUMNS: &[Column] = &[
    Column { title: "Req No", width: 110.0 },
    Column { title: "Customer", width: 190.0 },
    Column { title: "Vehicle", width: 120.0 },
    Column { title: "Branch", width: 130.0 },
    Column { title: "Cost", width: 80.0 },
    Column { title: "Priority", width: 100.0 },
    Column { title: "Requested", width: 110.0 },
    Column { title: "Status", width: 100.0 },
];

fn column_offset(index: usize) -> f32 {
    COLUMNS[..index].iter().map(|column| column.width).sum()
}

fn table_width() -> f32 {
    column_offset(COLUMNS.len())
}

impl EguiApp {
    pub(super) fn render_records_table(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        Frame::new()
            .fill(palette.bg_secondary)
            .stroke(style::outer_border())
            .show(ui, |ui| {
                self.render_table_header(ui);
                if self.controller.ui.dashboard.loading {
                    self.render_skeleton_rows(ui);
                } else if self.controller.ui.dashboard.rows.is_empty() {
                    self.render_empty_state(ui);
                } else {
                    let total_rows = self.controller.ui.dashboard.rows.len();
                    egui::ScrollArea::vertical()
                        .id_salt("records_scroll")
                        .show_rows(ui, ROW_HEIGHT, total_rows, |ui, row_range| {
                            for row in row_range {
                                self.render_record_row(ui, row);
                            }
                        });
                }
            });
    }

    fn render_table_header(&self, ui: &mut Ui) {
        let palette = style::palette();
        let width = ui.available_width().max(table_width());
        let (rect, _) = ui.allocate_exact_size(egui::vec2(width, ROW_HEIGHT), Sense::hover());
        let font_id = TextStyle::Button.resolve(ui.style());
        for (index, column) in COLUMNS.iter().enumerate() {
            ui.painter().text(
                egui::pos2(
                    rect.left() + column_offset(index) + CELL_PADDING,
                    rect.center().y,
                ),
                Align2::LEFT_CENTER,
                column.title,
                font_id.clone(),
                palette.text_muted,
            );
        }
        ui.painter()
            .line_segment([rect.left_bottom(), rect.right_bottom()], style::outer_border());
    }

    fn render_record_row(&mut self, ui: &mut Ui, row_index: usize) {
        let Some(row) = self.controller.ui.dashboard.rows.get(row_index).cloned() else {
            return;
        };
        let palette = style::palette();
        let is_selected = self.controller.ui.dashboard.selected_visible == Some(row_index);
        let width = ui.available_width().max(table_width());
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(width, ROW_HEIGHT), Sense::click());
        if is_selected {
            ui.painter().rect_filled(rect, 0.0, style::row_selected_fill());
        } else if response.hovered() {
            ui.painter().rect_filled(rect, 0.0, style::row_hover_fill());
        }
        ui.painter()
            .line_segment([rect.left_bottom(), rect.right_bottom()], style::inner_border());

        let font_id = TextStyle::Body.resolve(ui.style());
        let text_cells = [
            (0, row.requisition_no.as_str()),
            (1, row.customer.as_str()),
            (2, row.vehicle.as_str()),
            (3, row.branch.as_str()),
            (4, row.cost.as_str()),
            (6, row.requested.as_str()),
        ];
        for (index, text) in text_cells {
            let label = clamp_label_for_width(text, COLUMNS[index].width - CELL_PADDING * 2.0);
            ui.painter().text(
                egui::pos2(
                    rect.left() + column_offset(index) + CELL_PADDING,
                    rect.center().y,
                ),
                Align2::LEFT_CENTER,
                label,
                font_id.clone(),
                palette.text_primary,
            );
        }
        paint_pill_cell(ui, rect, 5, &row.priority);
        paint_pill_cell(ui, rect, 7, &row.status);

        if response.clicked() {
            self.controller.select_visible_row(row_index);
        }
    }

    fn render_skeleton_rows(&self, ui: &mut Ui) {
        let width = ui.available_width().max(table_width());
        for _ in 0..SKELETON_ROWS {
            let (rect, _) = ui.allocate_exact_size(egui::vec2(width, ROW_HEIGHT), Sense::hover());
            for (index, column) in COLUMNS.iter().enumerate() {
                let bar_width = (column.width - CELL_PADDING * 2.0) * 0.7;
                let bar = egui::Rect::from_min_size(
                    egui::pos2(
                        rect.left() + column_offset(index) + CELL_PADDING,
                        rect.center().y - 5.0,
                    ),
                    egui::vec2(bar_width, 10.0),
                );
                ui.painter().rect_filled(bar, 3.0, style::skeleton_fill());
            }
            ui.painter()
                .line_segment([rect.left_bottom(), rect.right_bottom()], style::inner_border());
        }
    }

    fn render_empty_state(&self, ui: &mut Ui) {
        let palette = style::palette();
        let width = ui.available_width().max(table_width());
        let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 120.0), Sense::hover());
        ui.painter().text(
            rect.center(),
            Align2::CENTER_CENTER,
            "No requisitions found",
            TextStyle::Body.resolve(ui.style()),
            palette.text_muted,
        );
    }
}

fn paint_pill_cell(ui: &Ui, row_rect: egui::Rect, column: usize, pill: &PillView) {
    let font_id = TextStyle::Small.resolve(ui.style());
    let char_count = pill.label.chars().count() as f32;
    let pill_width = (char_count * 7.0 + 16.0).min(COLUMNS[column].width - CELL_PADDING * 2.0);
    let pill_rect = egui::Rect::from_min_size(
        egui::pos2(
            row_rect.left() + column_offset(column) + CELL_PADDING,
            row_rect.center().y - PILL_HEIGHT * 0.5,
        ),
        egui::vec2(pill_width, PILL_HEIGHT),
    );
    ui.painter()
        .rect_filled(pill_rect, PILL_HEIGHT * 0.5, pill.fill);
    ui.painter().text(
        pill_rect.center(),
        Align2::CENTER_CENTER,
        &pill.label,
        font_id,
        pill.text,
    );
}
