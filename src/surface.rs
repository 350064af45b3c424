use egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2};

/// Something shapes can draw themselves onto.
///
/// All coordinates are canvas-local: the canvas' top-left corner is the origin.
pub trait Surface {
    /// Draw connected segments through `points`
    fn polyline(&mut self, points: &[Pos2], color: Color32);

    /// Draw a single straight segment
    fn line(&mut self, from: Pos2, to: Pos2, color: Color32);

    /// Draw the outline of an axis-aligned rectangle
    fn rect(&mut self, rect: Rect, color: Color32);

    /// Draw the outline of the circle inscribed in the square `bounds`
    fn circle(&mut self, bounds: Rect, color: Color32);
}

/// Draws onto an egui [`Painter`], offsetting canvas-local points by the
/// canvas origin on screen.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    offset: Vec2,
    stroke_width: f32,
}

impl<'a> PainterSurface<'a> {
    /// Creates a surface for the canvas whose top-left corner sits at `origin`
    pub fn new(painter: &'a Painter, origin: Pos2, stroke_width: f32) -> Self {
        Self {
            painter,
            offset: origin.to_vec2(),
            stroke_width,
        }
    }

    /// Screen position of a canvas-local point
    pub fn to_screen(&self, point: Pos2) -> Pos2 {
        point + self.offset
    }

    pub fn to_screen_rect(&self, rect: Rect) -> Rect {
        rect.translate(self.offset)
    }

    fn stroke(&self, color: Color32) -> Stroke {
        Stroke::new(self.stroke_width, color)
    }
}

impl Surface for PainterSurface<'_> {
    fn polyline(&mut self, points: &[Pos2], color: Color32) {
        if points.len() < 2 {
            return;
        }

        let screen_points = points.iter().map(|p| self.to_screen(*p)).collect();
        self.painter
            .add(egui::Shape::line(screen_points, self.stroke(color)));
    }

    fn line(&mut self, from: Pos2, to: Pos2, color: Color32) {
        self.painter
            .line_segment([self.to_screen(from), self.to_screen(to)], self.stroke(color));
    }

    fn rect(&mut self, rect: Rect, color: Color32) {
        self.painter
            .rect_stroke(self.to_screen_rect(rect), 0.0, self.stroke(color));
    }

    fn circle(&mut self, bounds: Rect, color: Color32) {
        let bounds = self.to_screen_rect(bounds);
        self.painter
            .circle_stroke(bounds.center(), bounds.width() / 2.0, self.stroke(color));
    }
}

/// A primitive captured by [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Polyline { points: Vec<Pos2>, color: Color32 },
    Line { from: Pos2, to: Pos2, color: Color32 },
    Rect { rect: Rect, color: Color32 },
    Circle { bounds: Rect, color: Color32 },
}

impl Primitive {
    pub fn color(&self) -> Color32 {
        match self {
            Primitive::Polyline { color, .. }
            | Primitive::Line { color, .. }
            | Primitive::Rect { color, .. }
            | Primitive::Circle { color, .. } => *color,
        }
    }
}

/// Headless surface that records every draw call, in order
#[derive(Debug, Default)]
pub struct RecordingSurface {
    primitives: Vec<Primitive>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

impl Surface for RecordingSurface {
    fn polyline(&mut self, points: &[Pos2], color: Color32) {
        self.primitives.push(Primitive::Polyline {
            points: points.to_vec(),
            color,
        });
    }

    fn line(&mut self, from: Pos2, to: Pos2, color: Color32) {
        self.primitives.push(Primitive::Line { from, to, color });
    }

    fn rect(&mut self, rect: Rect, color: Color32) {
        self.primitives.push(Primitive::Rect { rect, color });
    }

    fn circle(&mut self, bounds: Rect, color: Color32) {
        self.primitives.push(Primitive::Circle { bounds, color });
    }
}
