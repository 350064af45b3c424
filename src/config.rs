use egui::{Color32, Vec2, vec2};

use crate::tool::ToolKind;

/// Window and canvas defaults for the application
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasConfig {
    pub title: String,
    pub window_size: Vec2,
    pub min_window_size: Vec2,
    pub background: Color32,
    /// Width of every stroke, in points
    pub stroke_width: f32,
    pub initial_color: Color32,
    pub initial_tool: ToolKind,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            title: "Sketch Canvas".to_owned(),
            window_size: vec2(600.0, 600.0),
            min_window_size: vec2(420.0, 240.0),
            background: Color32::WHITE,
            stroke_width: 2.0,
            initial_color: Color32::BLACK,
            initial_tool: ToolKind::Freehand,
        }
    }
}

impl CanvasConfig {
    /// Native window options for `eframe::run_native`
    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(self.title.clone())
                .with_inner_size(self.window_size)
                .with_min_inner_size(self.min_window_size),
            ..Default::default()
        }
    }
}
