use egui::{Context, PointerButton, Pos2};

/// Pointer events delivered to the canvas, in canvas-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasEvent {
    /// Primary button pressed over the canvas
    PointerDown { position: Pos2 },
    /// Pointer moved while the button pressed on the canvas is still held
    PointerDrag { position: Pos2 },
    /// Button released, ending the gesture
    PointerUp { position: Pos2 },
}

impl CanvasEvent {
    pub fn position(&self) -> Pos2 {
        match self {
            CanvasEvent::PointerDown { position }
            | CanvasEvent::PointerDrag { position }
            | CanvasEvent::PointerUp { position } => *position,
        }
    }
}

/// The slice of egui pointer state the canvas cares about for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    /// Latest pointer position in screen coordinates
    pub position: Option<Pos2>,
    /// Where the held button went down, which may differ from `position`
    /// when the pointer moved within the press frame
    pub press_position: Option<Pos2>,
    pub pressed: bool,
    pub released: bool,
    pub down: bool,
    /// Whether the pointer is over the canvas and not covered by another layer
    pub over_canvas: bool,
}

impl PointerSample {
    /// Read the primary button state from the current egui frame
    pub fn read(ctx: &Context, over_canvas: bool) -> Self {
        ctx.input(|input| Self {
            position: input.pointer.interact_pos(),
            press_position: input.pointer.press_origin(),
            pressed: input.pointer.button_pressed(PointerButton::Primary),
            released: input.pointer.button_released(PointerButton::Primary),
            down: input.pointer.button_down(PointerButton::Primary),
            over_canvas,
        })
    }
}

/// Turns raw pointer state into [`CanvasEvent`]s.
///
/// A gesture only starts with a press over the canvas. Once started it keeps
/// reporting drags, even outside the canvas, until the button is released.
#[derive(Debug, Default)]
pub struct InputHandler {
    gesture_active: bool,
    last_position: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a press on the canvas is still being held
    pub fn is_gesture_active(&self) -> bool {
        self.gesture_active
    }

    /// Process this frame's egui input for a canvas whose top-left corner is at `origin`
    pub fn process_input(&mut self, ctx: &Context, origin: Pos2, over_canvas: bool) -> Vec<CanvasEvent> {
        self.handle_sample(PointerSample::read(ctx, over_canvas), origin)
    }

    pub fn handle_sample(&mut self, sample: PointerSample, origin: Pos2) -> Vec<CanvasEvent> {
        let mut events = Vec::new();
        let to_local = |pos: Pos2| (pos - origin).to_pos2();
        let local = sample.position.map(to_local);

        if sample.pressed {
            let pressed_at = sample.press_position.or(sample.position).map(to_local);
            if let (true, Some(position)) = (sample.over_canvas, pressed_at) {
                self.gesture_active = true;
                self.last_position = Some(position);
                events.push(CanvasEvent::PointerDown { position });
            }
        }

        // Movement within the press or release frame counts as a drag too
        if self.gesture_active && (sample.down || sample.released) {
            if let Some(position) = local {
                if self.last_position != Some(position) {
                    self.last_position = Some(position);
                    events.push(CanvasEvent::PointerDrag { position });
                }
            }
        }

        if sample.released && self.gesture_active {
            self.gesture_active = false;
            if let Some(position) = local.or(self.last_position.take()) {
                events.push(CanvasEvent::PointerUp { position });
            }
            self.last_position = None;
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    const ORIGIN: Pos2 = pos2(100.0, 50.0);

    fn sample(x: f32, y: f32) -> PointerSample {
        PointerSample {
            position: Some(pos2(x, y)),
            down: true,
            over_canvas: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_press_over_canvas_starts_gesture() {
        let mut handler = InputHandler::new();
        let events = handler.handle_sample(
            PointerSample { pressed: true, ..sample(110.0, 60.0) },
            ORIGIN,
        );

        assert_eq!(events, vec![CanvasEvent::PointerDown { position: pos2(10.0, 10.0) }]);
        assert!(handler.is_gesture_active());
    }

    #[test]
    fn test_press_outside_canvas_is_ignored() {
        let mut handler = InputHandler::new();
        let press = PointerSample { pressed: true, over_canvas: false, ..sample(10.0, 10.0) };
        assert!(handler.handle_sample(press, ORIGIN).is_empty());

        // Dragging into the canvas afterwards does not start anything
        assert!(handler.handle_sample(sample(150.0, 150.0), ORIGIN).is_empty());
        assert!(!handler.is_gesture_active());
    }

    #[test]
    fn test_drag_reports_only_position_changes() {
        let mut handler = InputHandler::new();
        handler.handle_sample(PointerSample { pressed: true, ..sample(100.0, 50.0) }, ORIGIN);

        let first = handler.handle_sample(sample(120.0, 50.0), ORIGIN);
        let still = handler.handle_sample(sample(120.0, 50.0), ORIGIN);
        let outside = handler.handle_sample(
            PointerSample { over_canvas: false, ..sample(90.0, 40.0) },
            ORIGIN,
        );

        assert_eq!(first, vec![CanvasEvent::PointerDrag { position: pos2(20.0, 0.0) }]);
        assert!(still.is_empty());
        assert_eq!(outside, vec![CanvasEvent::PointerDrag { position: pos2(-10.0, -10.0) }]);
    }

    #[test]
    fn test_release_ends_gesture() {
        let mut handler = InputHandler::new();
        handler.handle_sample(PointerSample { pressed: true, ..sample(100.0, 50.0) }, ORIGIN);

        let release = PointerSample {
            released: true,
            down: false,
            ..sample(105.0, 55.0)
        };
        assert_eq!(
            handler.handle_sample(release, ORIGIN),
            vec![
                CanvasEvent::PointerDrag { position: pos2(5.0, 5.0) },
                CanvasEvent::PointerUp { position: pos2(5.0, 5.0) },
            ]
        );
        assert!(!handler.is_gesture_active());

        // Movement after release is not a drag
        let hover = PointerSample { down: false, ..sample(130.0, 80.0) };
        assert!(handler.handle_sample(hover, ORIGIN).is_empty());
    }

    #[test]
    fn test_release_at_last_drag_position_adds_no_drag() {
        let mut handler = InputHandler::new();
        handler.handle_sample(PointerSample { pressed: true, ..sample(100.0, 50.0) }, ORIGIN);
        handler.handle_sample(sample(110.0, 60.0), ORIGIN);

        let events = handler.handle_sample(
            PointerSample { released: true, down: false, ..sample(110.0, 60.0) },
            ORIGIN,
        );
        assert_eq!(events, vec![CanvasEvent::PointerUp { position: pos2(10.0, 10.0) }]);
        assert_eq!(events[0].position(), pos2(10.0, 10.0));
    }

    #[test]
    fn test_press_anchors_at_press_origin() {
        let mut handler = InputHandler::new();
        let press = PointerSample {
            pressed: true,
            press_position: Some(pos2(100.0, 50.0)),
            ..sample(108.0, 56.0)
        };

        assert_eq!(
            handler.handle_sample(press, ORIGIN),
            vec![
                CanvasEvent::PointerDown { position: pos2(0.0, 0.0) },
                CanvasEvent::PointerDrag { position: pos2(8.0, 6.0) },
            ]
        );
    }

    #[test]
    fn test_click_within_one_frame() {
        let mut handler = InputHandler::new();
        let click = PointerSample {
            pressed: true,
            released: true,
            down: false,
            ..sample(120.0, 70.0)
        };

        assert_eq!(
            handler.handle_sample(click, ORIGIN),
            vec![
                CanvasEvent::PointerDown { position: pos2(20.0, 20.0) },
                CanvasEvent::PointerUp { position: pos2(20.0, 20.0) },
            ]
        );
        assert!(!handler.is_gesture_active());
    }

    #[test]
    fn test_release_without_position_uses_last_known() {
        let mut handler = InputHandler::new();
        handler.handle_sample(PointerSample { pressed: true, ..sample(120.0, 70.0) }, ORIGIN);

        let release = PointerSample {
            position: None,
            released: true,
            ..Default::default()
        };
        assert_eq!(
            handler.handle_sample(release, ORIGIN),
            vec![CanvasEvent::PointerUp { position: pos2(20.0, 20.0) }]
        );
    }

    #[test]
    fn test_process_input_without_pointer_yields_nothing() {
        let ctx = egui::Context::default();
        let mut handler = InputHandler::new();
        assert!(handler.process_input(&ctx, ORIGIN, true).is_empty());
    }
}
