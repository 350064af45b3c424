use egui::{Color32, Pos2};

use crate::error::{CanvasError, CanvasResult};
use crate::input::CanvasEvent;
use crate::shape::{Drawable, Shape, factory};
use crate::surface::Surface;
use crate::tool::ToolKind;

/// Ordered list of shapes plus the tool and color used for the next one.
///
/// Only the last shape ever receives drag updates; everything before it is
/// left untouched once a newer shape has been started.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    shapes: Vec<Shape>,
    color: Color32,
    tool: ToolKind,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(Color32::BLACK, ToolKind::default())
    }
}

impl Canvas {
    pub fn new(color: Color32, tool: ToolKind) -> Self {
        Self {
            shapes: Vec::new(),
            color,
            tool,
        }
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    /// Takes effect at the next pointer press
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.tool = tool;
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    /// Takes effect at the next pointer press
    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// The shape that drag events currently feed into
    pub fn active_shape(&self) -> Option<&Shape> {
        self.shapes.last()
    }

    /// Start a new shape of the current tool and color at `point`
    pub fn pointer_down(&mut self, point: Pos2) {
        let shape = factory::create(self.tool, self.color, point);
        log::debug!("Starting {} #{} at {:?}", self.tool, self.shapes.len(), point);
        self.shapes.push(shape);
    }

    /// Forward a drag position to the most recently started shape
    pub fn pointer_drag(&mut self, point: Pos2) -> CanvasResult {
        let shape = self.shapes.last_mut().ok_or(CanvasError::NoActiveShape)?;
        shape.update(point);
        Ok(())
    }

    /// Ends the gesture. Shapes need no explicit commit, so nothing changes.
    pub fn pointer_up(&mut self, point: Pos2) {
        if let Some(shape) = self.shapes.last() {
            log::debug!(
                "Finished {} at {:?} with {} points",
                shape.kind(),
                point,
                shape.points().len()
            );
        }
    }

    /// Dispatch an input event to the matching pointer handler
    pub fn handle_event(&mut self, event: CanvasEvent) {
        match event {
            CanvasEvent::PointerDown { position } => self.pointer_down(position),
            CanvasEvent::PointerDrag { position } => {
                if let Err(err) = self.pointer_drag(position) {
                    log::trace!("Ignoring drag to {position:?}: {err}");
                }
            }
            CanvasEvent::PointerUp { position } => self.pointer_up(position),
        }
    }

    /// Remove every shape, returning how many were removed
    pub fn clear(&mut self) -> usize {
        let removed = self.shapes.len();
        self.shapes.clear();
        removed
    }

    /// Replay every shape in the order it was drawn
    pub fn render(&self, surface: &mut dyn Surface) {
        for shape in &self.shapes {
            shape.render(surface);
        }
    }
}
