use egui::{Color32, Vec2};
use serde::{Deserialize, Serialize};

use crate::geometry::RectClampMode;
use crate::tools::BACKGROUND_COLOR;

/// Canvas setup, persisted with the rest of the app state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct CanvasConfig {
    /// Surface width in pixels
    pub width: u32,
    /// Surface height in pixels
    pub height: u32,
    /// Color painted under both layers, and what the eraser paints with
    pub background: Color32,
    /// How rectangle drags are clamped
    pub rect_clamp: RectClampMode,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background: BACKGROUND_COLOR,
            rect_clamp: RectClampMode::PerAxis,
        }
    }
}

impl CanvasConfig {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}
