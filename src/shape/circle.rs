use egui::{Color32, Pos2, Rect};

use super::{Drawable, common};
use crate::surface::Surface;
use crate::tool::ToolKind;

/// Circle whose diameter is the horizontal extent of the drag.
///
/// The vertical extent is ignored, so a non-square drag still draws a true
/// circle anchored at the top-left of the dragged box.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    color: Color32,
    anchor: Pos2,
    current: Pos2,
}

impl Circle {
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

impl Drawable for Circle {
    fn kind(&self) -> ToolKind {
        ToolKind::Circle
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
        Some(common::square_between(self.anchor, self.current))
    }

    fn render(&self, surface: &mut dyn Surface) {
        surface.circle(common::square_between(self.anchor, self.current), self.color);
    }
}
