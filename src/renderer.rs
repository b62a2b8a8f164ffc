// src/renderer.rs
use egui::{Color32, Rect, Stroke};

use crate::controller::DrawingController;
use crate::cursor::HoverCursor;
use crate::surface::RasterSurface;
use crate::texture_manager::{LayerKind, TextureManager};

const UV_FULL: Rect = Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));

/// Paints the canvas: background, committed layer, preview layer, hover cursor.
#[derive(Default)]
pub struct Renderer {
    textures: TextureManager,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the current frame
    ///
    /// Args:
    ///     ctx (egui::Context): The egui context for the current frame
    ///     painter (egui::Painter): The painter to draw with
    ///     rect (egui::Rect): The on-screen canvas area
    ///     controller (DrawingController): Owner of the layers being shown
    ///     background (Color32): Color painted under both layers
    pub fn render(
        &mut self,
        ctx: &egui::Context,
        painter: &egui::Painter,
        rect: Rect,
        controller: &DrawingController<RasterSurface>,
        background: Color32,
    ) {
        painter.rect_filled(rect, 0.0, background);

        if let Some(layers) = controller.layers() {
            self.paint_layer(ctx, painter, rect, LayerKind::Committed, &layers.committed);
            self.paint_layer(ctx, painter, rect, LayerKind::Preview, &layers.preview);
        }

        if let Some(cursor) = controller.hover_cursor() {
            paint_hover_cursor(painter, cursor);
        }
    }

    fn paint_layer(
        &mut self,
        ctx: &egui::Context,
        painter: &egui::Painter,
        rect: Rect,
        kind: LayerKind,
        surface: &RasterSurface,
    ) {
        let texture = self.textures.get_or_upload(
            kind,
            surface.generation(),
            || surface.to_color_image(),
            ctx,
        );
        let size = egui::vec2(surface.width() as f32, surface.height() as f32);
        painter.image(texture, Rect::from_min_size(rect.min, size), UV_FULL, Color32::WHITE);
    }
}

fn paint_hover_cursor(painter: &egui::Painter, cursor: HoverCursor) {
    painter.rect_stroke(cursor.rect, 0.0, Stroke::new(1.0, Color32::from_gray(96)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CanvasConfig;
    use crate::tools::Tool;

    #[test]
    fn test_render_basics() {
        let config = CanvasConfig {
            width: 32,
            height: 32,
            ..CanvasConfig::default()
        };
        let mut controller: DrawingController = DrawingController::new(&config);
        controller.mount_raster(egui::pos2(0.0, 0.0), &config).unwrap();
        controller.select_tool(Tool::Pencil);
        controller.pointer_enter(egui::pos2(5.0, 5.0));

        let mut renderer = Renderer::new();
        let ctx = egui::Context::default();
        let layer_id = egui::LayerId::background();
        let rect = Rect::from_min_size(egui::pos2(0.0, 0.0), config.size());
        let painter = egui::Painter::new(ctx.clone(), layer_id, rect);

        renderer.render(&ctx, &painter, rect, &controller, config.background);
        assert_eq!(renderer.textures.cache_size(), 2);

        // Nothing changed, nothing re-uploaded
        let uploads = renderer.textures.uploads();
        renderer.render(&ctx, &painter, rect, &controller, config.background);
        assert_eq!(renderer.textures.uploads(), uploads);
    }
}
