use thiserror::Error;

/// Errors raised while validating canvas inputs.
///
/// Drawing itself never fails; these only come out of constructors and parsers
/// that sit between the UI controls and the drawing session.
#[derive(Debug, Error, PartialEq)]
pub enum CanvasError {
    #[error("Brush size {0} is out of range ({min}..={max})", min = crate::state::MIN_BRUSH_SIZE, max = crate::state::MAX_BRUSH_SIZE)]
    InvalidBrushSize(u32),

    #[error("Invalid color: {0:?}")]
    InvalidColor(String),

    #[error("Invalid surface dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Result type for canvas validation
pub type CanvasResult<T> = Result<T, CanvasError>;
