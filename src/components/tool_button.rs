use eframe::egui;

/// Solid colored toolbar button with a white label
pub struct ToolButton<'a> {
    pub label: &'a str,
    pub fill: egui::Color32,
    pub selected: bool,
}

impl<'a> ToolButton<'a> {
    pub fn new(label: &'a str, fill: egui::Color32, selected: bool) -> Self {
        Self {
            label,
            fill,
            selected,
        }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let font_id = egui::FontId::proportional(14.0);
        let galley = ui.painter().layout_no_wrap(
            self.label.to_owned(),
            font_id.clone(),
            egui::Color32::WHITE,
        );
        let padding = egui::vec2(12.0, 6.0);
        let button_size = galley.size() + 2.0 * padding;
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if response.hovered() {
                self.fill.gamma_multiply(0.85)
            } else {
                self.fill
            };

            ui.painter().rect_filled(rect, 4.0, bg_color);
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.label,
                font_id,
                egui::Color32::WHITE,
            );

            // Highlight the active tool
            if self.selected {
                ui.painter().rect_stroke(
                    rect.expand(2.0),
                    5.0,
                    egui::Stroke::new(2.0, egui::Color32::from_rgb(255, 193, 7)),
                );
            }
        }

        response.on_hover_cursor(egui::CursorIcon::PointingHand)
    }
}
