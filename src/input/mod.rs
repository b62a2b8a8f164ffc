use egui::{Context, PointerButton, Pos2, Rect};

mod mapper;
pub use mapper::CoordinateMapper;

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// The position in screen coordinates
    pub position: Pos2,
    /// Whether this position is within the canvas bounds
    pub is_in_canvas: bool,
}

/// Pointer signals the drawing controller reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Mouse button was pressed over the canvas
    PointerDown {
        location: InputLocation,
        button: PointerButton,
    },
    /// Mouse button was released
    PointerUp {
        location: InputLocation,
        button: PointerButton,
    },
    /// Mouse moved (with or without buttons pressed)
    PointerMove { location: InputLocation },
    /// Pointer moved onto the canvas
    PointerEnter { location: InputLocation },
    /// Pointer moved off the canvas
    PointerLeave { last_known_location: InputLocation },
}

/// Handles converting raw egui input into our domain-specific InputEvents
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    was_in_canvas: bool,
    canvas_rect: Rect,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(Rect::NOTHING)
    }
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            was_in_canvas: false,
            canvas_rect,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    /// Creates an InputLocation from a position
    fn make_location(&self, pos: Pos2) -> InputLocation {
        InputLocation {
            position: pos,
            is_in_canvas: self.canvas_rect.contains(pos),
        }
    }

    /// Process raw egui input and generate our InputEvents
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let (hover_pos, pressed, released) = ctx.input(|input| {
            (
                input.pointer.hover_pos(),
                input.pointer.button_pressed(PointerButton::Primary),
                input.pointer.button_released(PointerButton::Primary),
            )
        });
        self.translate(hover_pos, pressed, released)
    }

    /// Turns one frame of pointer state into events, in enter/move/down/up/leave order.
    pub fn translate(&mut self, hover_pos: Option<Pos2>, pressed: bool, released: bool) -> Vec<InputEvent> {
        let mut events = Vec::new();

        match hover_pos {
            Some(pos) => {
                let location = self.make_location(pos);

                if location.is_in_canvas && !self.was_in_canvas {
                    events.push(InputEvent::PointerEnter { location });
                }

                if Some(pos) != self.last_pointer_pos {
                    events.push(InputEvent::PointerMove { location });
                }

                if pressed && location.is_in_canvas {
                    events.push(InputEvent::PointerDown {
                        location,
                        button: PointerButton::Primary,
                    });
                }
                if released {
                    events.push(InputEvent::PointerUp {
                        location,
                        button: PointerButton::Primary,
                    });
                }

                if !location.is_in_canvas && self.was_in_canvas {
                    events.push(InputEvent::PointerLeave {
                        last_known_location: location,
                    });
                }

                self.was_in_canvas = location.is_in_canvas;
                self.last_pointer_pos = Some(pos);
            }
            None => {
                // Pointer left the window
                if let Some(last) = self.last_pointer_pos.take() {
                    if self.was_in_canvas {
                        events.push(InputEvent::PointerLeave {
                            last_known_location: self.make_location(last),
                        });
                    }
                }
                self.was_in_canvas = false;
            }
        }

        events
    }
}
