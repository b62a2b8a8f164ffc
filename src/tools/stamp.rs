use egui::{Color32, Pos2, Vec2};

use super::Tool;
use crate::state::BrushSettings;
use crate::surface::Surface;

/// Default canvas background, which the eraser paints with.
pub const BACKGROUND_COLOR: Color32 = Color32::WHITE;

/// One square dab of the pencil or eraser.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stamp {
    /// Top-left corner in surface-local coordinates
    pub position: Pos2,
    pub size: f32,
    pub color: Color32,
}

impl Stamp {
    /// The stamp `tool` leaves at `position`. `None` for tools that don't stamp.
    pub fn for_tool(
        tool: Tool,
        position: Pos2,
        brush: &BrushSettings,
        background: Color32,
    ) -> Option<Self> {
        let color = match tool {
            Tool::Pencil => brush.color,
            Tool::Eraser => background,
            Tool::Pointer | Tool::Line | Tool::Rectangle | Tool::Circle => return None,
        };
        Some(Self {
            position,
            size: brush.size() as f32,
            color,
        })
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        surface.fill_rect(self.position, Vec2::splat(self.size), self.color);
    }
}
