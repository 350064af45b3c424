use egui::{Color32, Pos2, Rect};

use super::{Drawable, common};
use crate::surface::Surface;
use crate::tool::ToolKind;

/// Axis-aligned box between a fixed anchor and the latest drag point
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    color: Color32,
    anchor: Pos2,
    current: Pos2,
}

impl Rectangle {
    pub fn new(color: Color32, anchor: Pos2) -> Self {
        Self {
            color,
            anchor,
            current: anchor,
        }
    }

    pub fn anchor(&self) -> Pos2 {
        self.anchor
    }

    pub fn current(&self) -> Pos2 {
        self.current
    }
}

impl Drawable for Rectangle {
    fn kind(&self) -> ToolKind {
        ToolKind::Rectangle
    }

    fn color(&self) -> Color32 {
        self.color
    }

    fn points(&self) -> Vec<Pos2> {
        vec![self.anchor, self.current]
    }

    fn update(&mut self, point: Pos2) {
        self.current = point;
    }

    fn bounds(&self) -> Option<Rect> {
        Some(common::box_between(self.anchor, self.current))
    }

    fn render(&self, surface: &mut dyn Surface) {
        surface.rect(common::box_between(self.anchor, self.current), self.color);
    }
}
