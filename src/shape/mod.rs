use egui::{Color32, Pos2, Rect};

mod circle;
mod common;
mod freehand;
mod line;
mod rectangle;

pub use circle::Circle;
pub use freehand::Freehand;
pub use line::Line;
pub use rectangle::Rectangle;

use crate::surface::Surface;
use crate::tool::ToolKind;

/// Common contract of every shape on the canvas
pub trait Drawable {
    /// The tool that creates this kind of shape
    fn kind(&self) -> ToolKind;

    /// Stroke color, fixed when the shape was created
    fn color(&self) -> Color32;

    /// The defining points currently retained by the shape
    fn points(&self) -> Vec<Pos2>;

    /// Feed the latest drag position into the shape's geometry
    fn update(&mut self, point: Pos2);

    /// Box covered by what [`Drawable::render`] draws, `None` when it draws nothing
    fn bounds(&self) -> Option<Rect>;

    /// Draw the shape in its own color
    fn render(&self, surface: &mut dyn Surface);
}

/// Enumeration of all shape variants the canvas can hold
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Freehand(Freehand),
    Line(Line),
    Rectangle(Rectangle),
    Circle(Circle),
}

impl Drawable for Shape {
    fn kind(&self) -> ToolKind {
        match self {
            Shape::Freehand(s) => s.kind(),
            Shape::Line(s) => s.kind(),
            Shape::Rectangle(s) => s.kind(),
            Shape::Circle(s) => s.kind(),
        }
    }

    fn color(&self) -> Color32 {
        match self {
            Shape::Freehand(s) => s.color(),
            Shape::Line(s) => s.color(),
            Shape::Rectangle(s) => s.color(),
            Shape::Circle(s) => s.color(),
        }
    }

    fn points(&self) -> Vec<Pos2> {
        match self {
            Shape::Freehand(s) => s.points(),
            Shape::Line(s) => s.points(),
            Shape::Rectangle(s) => s.points(),
            Shape::Circle(s) => s.points(),
        }
    }

    fn update(&mut self, point: Pos2) {
        match self {
            Shape::Freehand(s) => s.update(point),
            Shape::Line(s) => s.update(point),
            Shape::Rectangle(s) => s.update(point),
            Shape::Circle(s) => s.update(point),
        }
    }

    fn bounds(&self) -> Option<Rect> {
        match self {
            Shape::Freehand(s) => s.bounds(),
            Shape::Line(s) => s.bounds(),
            Shape::Rectangle(s) => s.bounds(),
            Shape::Circle(s) => s.bounds(),
        }
    }

    fn render(&self, surface: &mut dyn Surface) {
        match self {
            Shape::Freehand(s) => s.render(surface),
            Shape::Line(s) => s.render(surface),
            Shape::Rectangle(s) => s.render(surface),
            Shape::Circle(s) => s.render(surface),
        }
    }
}

/// Factory functions for creating shapes
pub mod factory {
    use super::*;

    /// Start a new shape of the given kind at the press position
    pub fn create(kind: ToolKind, color: Color32, start: Pos2) -> Shape {
        match kind {
            ToolKind::Freehand => Shape::Freehand(Freehand::new(color, start)),
            ToolKind::Line => Shape::Line(Line::new(color, start)),
            ToolKind::Rectangle => Shape::Rectangle(Rectangle::new(color, start)),
            ToolKind::Circle => Shape::Circle(Circle::new(color, start)),
        }
    }
}
