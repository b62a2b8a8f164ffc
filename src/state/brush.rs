use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::{CanvasError, CanvasResult};

pub const MIN_BRUSH_SIZE: u32 = 1;
pub const MAX_BRUSH_SIZE: u32 = 50;
pub const DEFAULT_BRUSH_SIZE: u32 = 5;

/// Size and color every draw operation reads.
///
/// Stored settings go through [`StoredBrush`] so a size outside the allowed
/// range never reaches a live brush.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredBrush")]
pub struct BrushSettings {
    /// Side of a pencil stamp and width of a line, in pixels
    size: u32,
    pub color: Color32,
    /// Whether the pointer is currently over the surface
    #[serde(skip)]
    pub hover_active: bool,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            size: DEFAULT_BRUSH_SIZE,
            color: Color32::BLACK,
            hover_active: false,
        }
    }
}

/// Brush settings as found in storage, before range checks.
#[derive(Deserialize)]
#[serde(default)]
struct StoredBrush {
    size: u32,
    color: Color32,
}

impl Default for StoredBrush {
    fn default() -> Self {
        let brush = BrushSettings::default();
        Self {
            size: brush.size,
            color: brush.color,
        }
    }
}

impl From<StoredBrush> for BrushSettings {
    fn from(stored: StoredBrush) -> Self {
        let mut brush = BrushSettings {
            color: stored.color,
            ..BrushSettings::default()
        };
        brush.set_size(stored.size);
        brush
    }
}

impl BrushSettings {
    /// Creates settings, rejecting sizes outside `MIN_BRUSH_SIZE..=MAX_BRUSH_SIZE`.
    pub fn new(size: u32, color: Color32) -> CanvasResult<Self> {
        if !(MIN_BRUSH_SIZE..=MAX_BRUSH_SIZE).contains(&size) {
            return Err(CanvasError::InvalidBrushSize(size));
        }
        Ok(Self {
            size,
            color,
            hover_active: false,
        })
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Sets the size, clamped into the allowed range.
    pub fn set_size(&mut self, size: u32) {
        self.size = size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE);
    }

    /// Sets the color from a CSS hex string such as `#000` or `#1e90ff`.
    pub fn set_color_hex(&mut self, hex: &str) -> CanvasResult<()> {
        self.color = parse_hex_color(hex)?;
        Ok(())
    }
}

/// Parses `#rgb` or `#rrggbb` (the leading `#` is optional) into an opaque color.
pub fn parse_hex_color(hex: &str) -> CanvasResult<Color32> {
    let invalid = || CanvasError::InvalidColor(hex.to_owned());
    let digits = hex.trim().trim_start_matches('#');
    if !digits.is_ascii() {
        return Err(invalid());
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
    match digits.len() {
        3 => {
            // Each short digit doubles: `f` -> `ff`
            let r = channel(&digits[0..1])?;
            let g = channel(&digits[1..2])?;
            let b = channel(&digits[2..3])?;
            Ok(Color32::from_rgb(r * 17, g * 17, b * 17))
        }
        6 => Ok(Color32::from_rgb(
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        )),
        _ => Err(invalid()),
    }
}

/// Formats an opaque color as `#rrggbb`.
pub fn to_hex_color(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_canvas_defaults() {
        let brush = BrushSettings::default();
        assert_eq!(brush.size(), 5);
        assert_eq!(brush.color, Color32::BLACK);
        assert!(!brush.hover_active);
    }

    #[test]
    fn test_new_rejects_out_of_range_size() {
        assert_eq!(
            BrushSettings::new(0, Color32::BLACK).unwrap_err(),
            CanvasError::InvalidBrushSize(0)
        );
        assert_eq!(
            BrushSettings::new(51, Color32::BLACK).unwrap_err(),
            CanvasError::InvalidBrushSize(51)
        );
        assert!(BrushSettings::new(50, Color32::BLACK).is_ok());
    }

    #[test]
    fn test_set_size_clamps() {
        let mut brush = BrushSettings::default();
        brush.set_size(0);
        assert_eq!(brush.size(), MIN_BRUSH_SIZE);
        brush.set_size(400);
        assert_eq!(brush.size(), MAX_BRUSH_SIZE);
    }

    #[test]
    fn test_stored_size_is_clamped_on_restore() {
        let brush: BrushSettings = serde_json::from_str(r#"{ "size": 0 }"#).unwrap();
        assert_eq!(brush.size(), MIN_BRUSH_SIZE);
        assert_eq!(brush.color, Color32::BLACK);

        let brush: BrushSettings = serde_json::from_str(r#"{ "size": 9999 }"#).unwrap();
        assert_eq!(brush.size(), MAX_BRUSH_SIZE);

        let brush: BrushSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(brush, BrushSettings::default());
    }

    #[test]
    fn test_saved_brush_restores_unchanged() {
        let mut brush = BrushSettings::new(12, Color32::RED).unwrap();
        brush.hover_active = true;
        let json = serde_json::to_string(&brush).unwrap();
        let restored: BrushSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.size(), 12);
        assert_eq!(restored.color, Color32::RED);
        assert!(!restored.hover_active);
    }

    #[test]
    fn test_parse_short_and_long_hex() {
        assert_eq!(parse_hex_color("#000").unwrap(), Color32::BLACK);
        assert_eq!(parse_hex_color("#fff").unwrap(), Color32::WHITE);
        assert_eq!(parse_hex_color("#1e90ff").unwrap(), Color32::from_rgb(0x1e, 0x90, 0xff));
        assert_eq!(parse_hex_color("ff0000").unwrap(), Color32::from_rgb(255, 0, 0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "#", "#12", "#12345", "#gggggg", "#ééé"] {
            assert!(matches!(parse_hex_color(bad), Err(CanvasError::InvalidColor(_))), "{bad}");
        }
    }

    #[test]
    fn test_hex_formatting() {
        assert_eq!(to_hex_color(Color32::from_rgb(0x1e, 0x90, 0xff)), "#1e90ff");
    }

    #[test]
    fn test_set_color_hex_keeps_old_color_on_error() {
        let mut brush = BrushSettings::default();
        assert!(brush.set_color_hex("not a color").is_err());
        assert_eq!(brush.color, Color32::BLACK);
    }
}
