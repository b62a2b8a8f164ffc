mod brush;
mod session;

pub use brush::{
    BrushSettings, DEFAULT_BRUSH_SIZE, MAX_BRUSH_SIZE, MIN_BRUSH_SIZE, parse_hex_color,
    to_hex_color,
};
pub use session::{DrawingSessionState, HoldState, PointerState};
