use egui::{Color32, Pos2, Vec2};

mod raster;
pub use raster::RasterSurface;

/// A 2D drawing surface the controller paints on.
///
/// These are the only four operations the drawing session needs from its host.
/// The committed and preview layers are each one `Surface`.
pub trait Surface {
    /// Fill the rectangle at `origin` with extent `size`.
    /// Negative sizes extend left/up from the origin.
    fn fill_rect(&mut self, origin: Pos2, size: Vec2, color: Color32);

    /// Stroke a straight segment `width` pixels wide. Ends are square (butt caps).
    fn stroke_line(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32);

    /// Fill the disc of `radius` around `center`.
    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32);

    /// Reset every pixel to transparent.
    fn clear(&mut self);
}
