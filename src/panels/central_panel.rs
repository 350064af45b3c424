use crate::SketchApp;

pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(app.config().background))
        .show(ctx, |ui| {
            // The drawing surface fills whatever the toolbar leaves over
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::drag());
            let canvas_rect = response.rect;

            app.handle_input(ctx, canvas_rect.min, response.contains_pointer());

            app.render(&painter, canvas_rect.min);
        });
}
