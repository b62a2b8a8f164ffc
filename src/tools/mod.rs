use serde::{Deserialize, Serialize};

mod shape;
mod stamp;
pub use shape::DragShape;
pub use stamp::{BACKGROUND_COLOR, Stamp};

/// The tool that pointer input is dispatched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tool {
    /// Moves the pointer around without drawing
    #[default]
    Pointer,
    Pencil,
    Eraser,
    Line,
    Rectangle,
    Circle,
}

impl Tool {
    /// Toolbar order.
    pub const ALL: [Tool; 6] = [
        Tool::Pointer,
        Tool::Pencil,
        Tool::Eraser,
        Tool::Line,
        Tool::Rectangle,
        Tool::Circle,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Pointer => "Pointer",
            Self::Pencil => "Pencil",
            Self::Eraser => "Eraser",
            Self::Line => "Line",
            Self::Rectangle => "Rectangle",
            Self::Circle => "Circle",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Pointer => "🖱",
            Self::Pencil => "✏",
            Self::Eraser => "⌫",
            Self::Line => "╱",
            Self::Rectangle => "⬛",
            Self::Circle => "⏺",
        }
    }

    /// Shape tools draw a preview while held and commit on release.
    pub fn is_shape(&self) -> bool {
        matches!(self, Self::Line | Self::Rectangle | Self::Circle)
    }

    /// Every tool except the pointer puts pixels on the surface.
    pub fn draws(&self) -> bool {
        !matches!(self, Self::Pointer)
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
