use egui::{Color32, Pos2, Vec2};

use super::Tool;
use crate::geometry::{self, RectClampMode};
use crate::state::BrushSettings;
use crate::surface::Surface;

/// A shape-tool drag resolved to concrete geometry.
///
/// The preview frame and the commit are both drawn from this value, so what
/// lands on the committed layer is exactly the last preview.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragShape {
    Line { from: Pos2, to: Pos2, width: f32 },
    Rectangle { origin: Pos2, size: Vec2 },
    Circle { center: Pos2, radius: f32 },
}

impl DragShape {
    /// Resolves a drag from `origin` to `current`. `None` for non-shape tools.
    pub fn from_drag(
        tool: Tool,
        origin: Pos2,
        current: Pos2,
        brush: &BrushSettings,
        clamp_mode: RectClampMode,
    ) -> Option<Self> {
        match tool {
            Tool::Line => Some(Self::Line {
                from: origin,
                to: geometry::line_end(current, brush.size()),
                width: brush.size() as f32,
            }),
            Tool::Rectangle => Some(Self::Rectangle {
                origin,
                size: geometry::clamp_rect_size(origin, current, clamp_mode),
            }),
            Tool::Circle => Some(Self::Circle {
                center: origin,
                radius: geometry::clamp_radius(origin, current),
            }),
            Tool::Pointer | Tool::Pencil | Tool::Eraser => None,
        }
    }

    pub fn draw(&self, surface: &mut impl Surface, color: Color32) {
        match *self {
            Self::Line { from, to, width } => surface.stroke_line(from, to, width, color),
            Self::Rectangle { origin, size } => surface.fill_rect(origin, size, color),
            Self::Circle { center, radius } => surface.fill_circle(center, radius, color),
        }
    }
}
