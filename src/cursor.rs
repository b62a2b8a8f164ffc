use egui::{Pos2, Rect};

use crate::geometry::stamp_rect;

/// Floating square that shows the brush footprint under the pointer.
///
/// Cosmetic only, it never touches either raster layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverCursor {
    /// Screen-space square, already offset by half the brush
    pub rect: Rect,
}

impl HoverCursor {
    pub fn new(top_left: Pos2, brush_size: u32) -> Self {
        Self {
            rect: stamp_rect(top_left, brush_size),
        }
    }

    pub fn size(&self) -> f32 {
        self.rect.width()
    }
}
