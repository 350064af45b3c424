use crate::canvas::Canvas;
use crate::config::CanvasConfig;
use crate::input::InputHandler;
use crate::panels::{central_panel, toolbar};
use crate::surface::PainterSurface;
use crate::tool::ToolKind;

pub struct SketchApp {
    canvas: Canvas,
    input: InputHandler,
    config: CanvasConfig,
}

impl Default for SketchApp {
    fn default() -> Self {
        Self::with_config(CanvasConfig::default())
    }
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: CanvasConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self::with_config(config)
    }

    pub fn with_config(config: CanvasConfig) -> Self {
        Self {
            canvas: Canvas::new(config.initial_color, config.initial_tool),
            input: InputHandler::new(),
            config,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn select_tool(&mut self, tool: ToolKind) {
        log::info!("Tool selected from UI: {}", tool);
        self.canvas.set_tool(tool);
    }

    pub fn select_color(&mut self, color: egui::Color32) {
        log::info!("Color selected from UI: {:?}", color);
        self.canvas.set_color(color);
    }

    pub fn clear_canvas(&mut self, ctx: &egui::Context) {
        let removed = self.canvas.clear();
        log::info!("Cleared canvas ({} shapes removed)", removed);
        ctx.request_repaint();
    }

    /// Feed this frame's pointer input to the canvas
    pub fn handle_input(&mut self, ctx: &egui::Context, origin: egui::Pos2, over_canvas: bool) {
        for event in self.input.process_input(ctx, origin, over_canvas) {
            self.canvas.handle_event(event);
        }
    }

    /// Replay all shapes onto the canvas area starting at `origin`
    pub fn render(&self, painter: &egui::Painter, origin: egui::Pos2) {
        let mut surface = PainterSurface::new(painter, origin, self.config.stroke_width);
        self.canvas.render(&mut surface);
    }
}

impl eframe::App for SketchApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        toolbar(self, ctx);
        central_panel(self, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Color32, pos2};

    #[test]
    fn test_app_starts_from_config() {
        let config = CanvasConfig {
            initial_color: Color32::RED,
            initial_tool: ToolKind::Circle,
            ..Default::default()
        };
        let app = SketchApp::with_config(config);

        assert!(app.canvas().is_empty());
        assert_eq!(app.canvas().color(), Color32::RED);
        assert_eq!(app.canvas().tool(), ToolKind::Circle);
    }

    #[test]
    fn test_clear_canvas_empties_shapes() {
        let ctx = egui::Context::default();
        let mut app = SketchApp::default();
        app.canvas.pointer_down(pos2(1.0, 1.0));
        app.canvas.pointer_down(pos2(2.0, 2.0));

        app.clear_canvas(&ctx);
        assert!(app.canvas().is_empty());
    }

    #[test]
    fn test_full_frame_runs() {
        let ctx = egui::Context::default();
        let mut app = SketchApp::default();
        app.select_tool(ToolKind::Rectangle);

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            toolbar(&mut app, ctx);
            central_panel(&mut app, ctx);
        });

        assert!(app.canvas().is_empty());
        assert_eq!(app.canvas().tool(), ToolKind::Rectangle);
    }
}
