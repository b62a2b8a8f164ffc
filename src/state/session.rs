use egui::Pos2;
use serde::{Deserialize, Serialize};

use super::BrushSettings;
use crate::tools::Tool;

/// Where the pointer is and whether it is held down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    /// Current position in surface-local coordinates
    pub position: Pos2,
    pub pressed: bool,
    /// Anchor recorded at press-down for shape tools
    pub press_origin: Option<Pos2>,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            position: Pos2::ZERO,
            pressed: false,
            press_origin: None,
        }
    }
}

/// Hold state derived from the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldState {
    Idle,
    Pressed,
}

/// Everything a pointer handler reads and writes, kept in one place.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawingSessionState {
    pub tool: Tool,
    pub brush: BrushSettings,
    #[serde(skip)]
    pub pointer: PointerState,
}

impl DrawingSessionState {
    pub fn hold_state(&self) -> HoldState {
        if self.pointer.pressed {
            HoldState::Pressed
        } else {
            HoldState::Idle
        }
    }

    /// The hover indicator shows only for drawing tools while over the surface.
    pub fn shows_hover_cursor(&self) -> bool {
        self.tool.draws() && self.brush.hover_active
    }
}
