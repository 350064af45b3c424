use egui::{Color32, Pos2, Rect};

use super::{Drawable, common};
use crate::surface::Surface;
use crate::tool::ToolKind;

/// Straight segment from a fixed start to the latest drag point
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    color: Color32,
    start: Pos2,
    end: Option<Pos2>,
}

impl Line {
    pub fn new(color: Color32, start: Pos2) -> Self {
        Self {
            color,
            start,
            end: None,
        }
    }

    pub fn start(&self) -> Pos2 {
        self.start
    }

    /// `None` until the first drag
    pub fn end(&self) -> Option<Pos2> {
        self.end
    }
}

impl Drawable for Line {
    fn kind(&self) -> ToolKind {
        ToolKind::Line
    }

    fn color(&self) -> Color32 {
        self.color
    }

    fn points(&self) -> Vec<Pos2> {
        std::iter::once(self.start).chain(self.end).collect()
    }

    fn update(&mut self, point: Pos2) {
        self.end = Some(point);
    }

    fn bounds(&self) -> Option<Rect> {
        self.end.map(|end| common::box_between(self.start, end))
    }

    fn render(&self, surface: &mut dyn Surface) {
        if let Some(end) = self.end {
            surface.line(self.start, end, self.color);
        }
    }
}
