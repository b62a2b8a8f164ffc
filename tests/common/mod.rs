#![allow(dead_code)]

use egui::{Color32, Pos2, Vec2, pos2};
use sketch_canvas::{CanvasConfig, DrawingController, Surface, Tool};

/// Where the test canvas sits on screen.
pub const ORIGIN: Pos2 = pos2(100.0, 50.0);

/// One call a controller made on a surface.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    FillRect { origin: Pos2, size: Vec2, color: Color32 },
    StrokeLine { from: Pos2, to: Pos2, width: f32, color: Color32 },
    FillCircle { center: Pos2, radius: f32, color: Color32 },
    Clear,
}

/// Surface that only remembers what was drawn on it.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    /// Calls made since the most recent clear.
    pub fn since_last_clear(&self) -> &[DrawCall] {
        match self.calls.iter().rposition(|call| *call == DrawCall::Clear) {
            Some(index) => &self.calls[index + 1..],
            None => &self.calls,
        }
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, origin: Pos2, size: Vec2, color: Color32) {
        self.calls.push(DrawCall::FillRect { origin, size, color });
    }

    fn stroke_line(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32) {
        self.calls.push(DrawCall::StrokeLine { from, to, width, color });
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.calls.push(DrawCall::FillCircle { center, radius, color });
    }

    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }
}

/// A raster-backed controller on an 800x600 canvas mounted at [`ORIGIN`].
pub fn raster_controller(config: &CanvasConfig) -> DrawingController {
    let mut controller: DrawingController = DrawingController::new(config);
    controller.mount_raster(ORIGIN, config).unwrap();
    controller
}

pub fn recording_controller() -> DrawingController<RecordingSurface> {
    let mut controller = DrawingController::new(&CanvasConfig::default());
    controller.mount(ORIGIN, RecordingSurface::default(), RecordingSurface::default());
    controller
}

/// Screen position that maps onto `local` with the controller's current brush.
pub fn client<S: Surface>(controller: &DrawingController<S>, local: Pos2) -> Pos2 {
    controller
        .mapper()
        .to_screen(local, controller.brush().size())
        .unwrap()
}

/// Press at `from`, move through `through`, release. All positions surface-local.
pub fn drag<S: Surface>(controller: &mut DrawingController<S>, tool: Tool, from: Pos2, through: &[Pos2]) {
    controller.select_tool(tool);
    let start = client(controller, from);
    controller.pointer_down(start);
    for &local in through {
        let at = client(controller, local);
        controller.pointer_move(at);
    }
    controller.pointer_up();
}
