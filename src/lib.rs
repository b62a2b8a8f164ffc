#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod cursor;
pub mod error;
pub mod geometry;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod surface;
pub mod texture_manager;
pub mod tools;

pub use app::PaintApp;
pub use config::CanvasConfig;
pub use controller::{DrawingController, Layers};
pub use cursor::HoverCursor;
pub use error::{CanvasError, CanvasResult};
pub use geometry::RectClampMode;
pub use input::{CoordinateMapper, InputEvent, InputHandler, InputLocation};
pub use renderer::Renderer;
pub use state::{
    BrushSettings, DrawingSessionState, HoldState, MAX_BRUSH_SIZE, MIN_BRUSH_SIZE, PointerState,
};
pub use surface::{RasterSurface, Surface};
pub use tools::{DragShape, Stamp, Tool};
