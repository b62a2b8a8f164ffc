use egui::{Pos2, Vec2};

/// Maps screen-space pointer positions onto the drawing surface.
///
/// Both outputs are shifted up-left by half the brush so a stamp drawn from
/// its top-left corner ends up centered under the pointer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CoordinateMapper {
    /// Screen position of the surface's top-left corner, `None` until mounted
    origin: Option<Pos2>,
}

impl CoordinateMapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mounted_at(origin: Pos2) -> Self {
        Self {
            origin: Some(origin),
        }
    }

    pub fn set_origin(&mut self, origin: Pos2) {
        self.origin = Some(origin);
    }

    pub fn is_mounted(&self) -> bool {
        self.origin.is_some()
    }

    /// Surface-local drawing position for a pointer at `client`.
    pub fn to_surface(&self, client: Pos2, brush_size: u32) -> Option<Pos2> {
        let origin = self.origin?;
        Some(client - origin.to_vec2() - half_brush(brush_size))
    }

    /// Screen position of the hover indicator's top-left corner.
    pub fn cursor_position(&self, client: Pos2, brush_size: u32) -> Pos2 {
        client - half_brush(brush_size)
    }

    /// Inverse of [`Self::to_surface`].
    pub fn to_screen(&self, local: Pos2, brush_size: u32) -> Option<Pos2> {
        let origin = self.origin?;
        Some(local + origin.to_vec2() + half_brush(brush_size))
    }
}

fn half_brush(brush_size: u32) -> Vec2 {
    Vec2::splat(brush_size as f32 / 2.0)
}
