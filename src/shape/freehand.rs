use egui::{Color32, Pos2, Rect};

use super::{Drawable, common};
use crate::surface::Surface;
use crate::tool::ToolKind;

/// Polyline that grows by one point for every drag event
#[derive(Debug, Clone, PartialEq)]
pub struct Freehand {
    color: Color32,
    points: Vec<Pos2>,
}

impl Freehand {
    pub fn new(color: Color32, start: Pos2) -> Self {
        Self {
            color,
            points: vec![start],
        }
    }
}

impl Drawable for Freehand {
    fn kind(&self) -> ToolKind {
        ToolKind::Freehand
    }

    fn color(&self) -> Color32 {
        self.color
    }

    fn points(&self) -> Vec<Pos2> {
        self.points.clone()
    }

    fn update(&mut self, point: Pos2) {
        self.points.push(point);
    }

    fn bounds(&self) -> Option<Rect> {
        if self.points.len() < 2 {
            return None;
        }
        common::bounds_of(&self.points)
    }

    fn render(&self, surface: &mut dyn Surface) {
        // A lone press leaves no mark
        if self.points.len() < 2 {
            return;
        }
        surface.polyline(&self.points, self.color);
    }
}
