use crate::SketchApp;
use crate::components::ToolButton;
use crate::tool::{PALETTE, ToolKind};

pub fn toolbar(app: &mut SketchApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal_wrapped(|ui| {
            if ToolButton::new("Clear", egui::Color32::BLACK, false)
                .show(ui)
                .clicked()
            {
                app.clear_canvas(ctx);
            }

            let active_tool = app.canvas().tool();
            for tool in ToolKind::ALL {
                if ToolButton::new(tool.label(), tool.accent(), tool == active_tool)
                    .show(ui)
                    .clicked()
                {
                    app.select_tool(tool);
                }
            }

            ui.separator();

            let mut color = app.canvas().color();
            for swatch in PALETTE {
                let (rect, response) =
                    ui.allocate_exact_size(egui::vec2(18.0, 18.0), egui::Sense::click());
                ui.painter().rect_filled(rect, 2.0, swatch);
                if swatch == color {
                    ui.painter()
                        .rect_stroke(rect.expand(1.5), 2.0, egui::Stroke::new(1.5, egui::Color32::GRAY));
                }
                if response.clicked() {
                    color = swatch;
                }
            }
            egui::color_picker::color_edit_button_srgba(
                ui,
                &mut color,
                egui::color_picker::Alpha::Opaque,
            );
            if color != app.canvas().color() {
                app.select_color(color);
            }

            ui.separator();
            ui.label(format!("Shapes: {}", app.canvas().len()));
        });
        ui.add_space(4.0);
    });
}
