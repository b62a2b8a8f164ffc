use std::ops::Range;

use egui::{Color32, ColorImage, Pos2, Rect, Vec2};
use image::{Rgba, RgbaImage};

use super::Surface;
use crate::error::{CanvasError, CanvasResult};
use crate::geometry::{is_finite_pos, normalized_rect};

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// In-memory RGBA raster implementing [`Surface`].
///
/// A pixel is painted when its center lies inside the shape. Anything outside
/// the image is clipped.
#[derive(Clone)]
pub struct RasterSurface {
    image: RgbaImage,
    /// Bumped on every mutation so texture uploads can be skipped for unchanged layers
    generation: u64,
}

impl std::fmt::Debug for RasterSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterSurface")
            .field("width", &self.image.width())
            .field("height", &self.image.height())
            .field("generation", &self.generation)
            .finish()
    }
}

impl RasterSurface {
    /// Creates a fully transparent surface.
    pub fn new(width: u32, height: u32) -> CanvasResult<Self> {
        if width == 0 || height == 0 {
            return Err(CanvasError::InvalidDimensions { width, height });
        }
        Ok(Self {
            image: RgbaImage::from_pixel(width, height, TRANSPARENT),
            generation: 0,
        })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Color at pixel `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color32> {
        self.image.get_pixel_checked(x, y).map(|Rgba([r, g, b, a])| {
            Color32::from_rgba_unmultiplied(*r, *g, *b, *a)
        })
    }

    /// True when no pixel has been painted since the last clear.
    pub fn is_blank(&self) -> bool {
        self.image.pixels().all(|p| p[3] == 0)
    }

    /// Number of pixels exactly equal to `color`.
    pub fn count_pixels(&self, color: Color32) -> usize {
        let target = to_rgba(color);
        self.image.pixels().filter(|p| **p == target).count()
    }

    /// Converts to an egui image ready for texture upload.
    pub fn to_color_image(&self) -> ColorImage {
        let size = [self.image.width() as usize, self.image.height() as usize];
        ColorImage::from_rgba_unmultiplied(size, self.image.as_raw())
    }

    fn touch(&mut self) {
        self.generation += 1;
    }

    fn fill_where(&mut self, bounds: Rect, color: Color32, covers: impl Fn(Pos2) -> bool) {
        let xs = pixel_span(bounds.min.x, bounds.max.x, self.image.width());
        let ys = pixel_span(bounds.min.y, bounds.max.y, self.image.height());
        let rgba = to_rgba(color);

        for y in ys {
            for x in xs.clone() {
                if covers(Pos2::new(x as f32 + 0.5, y as f32 + 0.5)) {
                    self.image.put_pixel(x, y, rgba);
                }
            }
        }
        self.touch();
    }
}

impl Surface for RasterSurface {
    fn fill_rect(&mut self, origin: Pos2, size: Vec2, color: Color32) {
        if !is_finite_pos(origin) || !size.x.is_finite() || !size.y.is_finite() {
            log::trace!("Skipping rect with non-finite geometry: {:?} {:?}", origin, size);
            return;
        }
        let rect = normalized_rect(origin, size);
        // Pixel spans already restrict to the rect, every center inside them is covered.
        self.fill_where(rect, color, |_| true);
    }

    fn stroke_line(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32) {
        if !is_finite_pos(from) || !is_finite_pos(to) || !width.is_finite() {
            log::trace!("Skipping line with non-finite geometry: {:?} -> {:?}", from, to);
            return;
        }
        let dir = to - from;
        let length = dir.length();
        if length == 0.0 || width <= 0.0 {
            return;
        }

        let half_width = width / 2.0;
        let bounds = Rect::from_two_pos(from, to).expand(half_width);
        self.fill_where(bounds, color, |p| {
            let rel = p - from;
            let along = rel.dot(dir) / length;
            if along < 0.0 || along > length {
                return false;
            }
            let across = (dir.x * rel.y - dir.y * rel.x).abs() / length;
            across <= half_width
        });
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        if !is_finite_pos(center) || !radius.is_finite() {
            log::trace!("Skipping circle with non-finite geometry: {:?} r={}", center, radius);
            return;
        }
        if radius <= 0.0 {
            return;
        }

        let bounds = Rect::from_center_size(center, Vec2::splat(radius * 2.0));
        let radius_sq = radius * radius;
        self.fill_where(bounds, color, |p| (p - center).length_sq() <= radius_sq);
    }

    fn clear(&mut self) {
        for pixel in self.image.pixels_mut() {
            *pixel = TRANSPARENT;
        }
        self.touch();
    }
}

fn to_rgba(color: Color32) -> Rgba<u8> {
    Rgba(color.to_srgba_unmultiplied())
}

/// Pixel indices whose centers fall in `[lo, hi)`, clipped to `[0, limit)`.
fn pixel_span(lo: f32, hi: f32, limit: u32) -> Range<u32> {
    let start = (lo - 0.5).ceil().max(0.0);
    let end = (hi - 0.5).ceil().min(limit as f32);
    if start >= end {
        0..0
    } else {
        start as u32..end as u32
    }
}
