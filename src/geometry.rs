//! Pure geometry shared by the preview and commit paths.
//!
//! Both paths call the same helpers with the same inputs, so the shape that
//! lands on the committed layer is exactly the last preview frame.

use egui::{Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Largest circle radius a drag can produce.
pub const MAX_RADIUS: f32 = 150.0;

/// Largest rectangle extent, per axis, in either direction.
pub const MAX_EXTENT: f32 = 300.0;

/// How the rectangle tool turns a drag delta into a width and height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RectClampMode {
    /// Each axis is clamped with its own delta.
    #[default]
    PerAxis,
    /// When the vertical delta is negative, the vertical delta clamps both
    /// dimensions. Kept for parity with the web canvas this tool replaced.
    Legacy,
}

/// Radius of a disc anchored at `origin` and dragged to `current`.
///
/// Always in `[0, MAX_RADIUS]` for finite inputs.
pub fn clamp_radius(origin: Pos2, current: Pos2) -> f32 {
    let dx = (current.x - origin.x).abs();
    let dy = (current.y - origin.y).abs();
    (dx * dx + dy * dy).sqrt().min(MAX_RADIUS)
}

/// Clamp one axis of a drag: negative deltas into `[-MAX_EXTENT, 0]`,
/// non-negative ones into `[0, MAX_EXTENT]`.
pub fn clamp_extent(delta: f32) -> f32 {
    if delta < 0.0 {
        delta.clamp(-MAX_EXTENT, 0.0)
    } else {
        delta.clamp(0.0, MAX_EXTENT)
    }
}

/// Signed width and height of a rectangle anchored at `origin` and dragged to `current`.
pub fn clamp_rect_size(origin: Pos2, current: Pos2, mode: RectClampMode) -> Vec2 {
    let dx = current.x - origin.x;
    let dy = current.y - origin.y;

    match mode {
        RectClampMode::PerAxis => Vec2::new(clamp_extent(dx), clamp_extent(dy)),
        RectClampMode::Legacy if dy < 0.0 => {
            let h = clamp_extent(dy);
            Vec2::new(h, h)
        }
        RectClampMode::Legacy => Vec2::new(clamp_extent(dx), clamp_extent(dy)),
    }
}

/// End point of a line drag: the current position shifted back by half a brush.
pub fn line_end(current: Pos2, brush_size: u32) -> Pos2 {
    current + Vec2::splat(brush_size as f32 / 2.0)
}

/// The square a pencil or eraser stamp covers, top-left at `position`.
pub fn stamp_rect(position: Pos2, brush_size: u32) -> Rect {
    Rect::from_min_size(position, Vec2::splat(brush_size as f32))
}

/// Rectangle spanned by an origin and a possibly negative size.
pub fn normalized_rect(origin: Pos2, size: Vec2) -> Rect {
    Rect::from_two_pos(origin, origin + size)
}

pub(crate) fn is_finite_pos(pos: Pos2) -> bool {
    pos.x.is_finite() && pos.y.is_finite()
}
