//! The drawing surface controller.
//!
//! Every pointer signal goes through the same procedure: map the position
//! onto the surface, update [`DrawingSessionState`], then draw straight away.
//! Per-tool behavior is decided in one place, the `dispatch` match.
//!
//! ```text
//!            press-down                 move
//!   ┌──────┐ ─────────────► ┌─────────┐ ──┐
//!   │ Idle │                │ Pressed │   │ stamp / redraw preview
//!   └──────┘ ◄───────────── └─────────┘ ◄─┘
//!            press-up (commit shape)
//!            leave    (cancel shape)
//! ```

use egui::{Color32, PointerButton, Pos2};

use crate::config::CanvasConfig;
use crate::cursor::HoverCursor;
use crate::error::CanvasResult;
use crate::geometry::RectClampMode;
use crate::input::{CoordinateMapper, InputEvent};
use crate::state::{BrushSettings, DrawingSessionState, HoldState, PointerState};
use crate::surface::{RasterSurface, Surface};
use crate::tools::{DragShape, Stamp, Tool};

/// The two rasters the controller paints on.
#[derive(Debug, Clone)]
pub struct Layers<S> {
    /// Finalized pixels, only cleared by an explicit reset
    pub committed: S,
    /// Ghost of the shape being dragged, redrawn from scratch every move
    pub preview: S,
}

/// Which part of a hold a pointer signal belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Press,
    Move,
    Release,
}

pub struct DrawingController<S = RasterSurface> {
    session: DrawingSessionState,
    mapper: CoordinateMapper,
    /// `None` until the host surface is mounted, every draw is a no-op until then
    layers: Option<Layers<S>>,
    background: Color32,
    rect_clamp: RectClampMode,
    /// Last pointer position in screen space, for the hover indicator
    client_position: Option<Pos2>,
}

impl<S: Surface> DrawingController<S> {
    /// Creates an unmounted controller.
    pub fn new(config: &CanvasConfig) -> Self {
        Self::with_session(DrawingSessionState::default(), config)
    }

    /// Creates an unmounted controller that resumes a saved tool and brush.
    pub fn with_session(mut session: DrawingSessionState, config: &CanvasConfig) -> Self {
        session.pointer = PointerState::default();
        session.brush.hover_active = false;
        Self {
            session,
            mapper: CoordinateMapper::new(),
            layers: None,
            background: config.background,
            rect_clamp: config.rect_clamp,
            client_position: None,
        }
    }

    /// Attaches the layers and places the surface's top-left corner at `origin` on screen.
    pub fn mount(&mut self, origin: Pos2, committed: S, preview: S) {
        log::debug!("Mounting drawing surface at {:?}", origin);
        self.layers = Some(Layers { committed, preview });
        self.mapper.set_origin(origin);
    }

    /// Moves the surface on screen, e.g. after a layout change.
    pub fn set_origin(&mut self, origin: Pos2) {
        self.mapper.set_origin(origin);
    }

    pub fn is_mounted(&self) -> bool {
        self.layers.is_some() && self.mapper.is_mounted()
    }

    pub fn session(&self) -> &DrawingSessionState {
        &self.session
    }

    pub fn tool(&self) -> Tool {
        self.session.tool
    }

    pub fn brush(&self) -> &BrushSettings {
        &self.session.brush
    }

    pub fn pointer(&self) -> &PointerState {
        &self.session.pointer
    }

    pub fn hold_state(&self) -> HoldState {
        self.session.hold_state()
    }

    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    pub fn layers(&self) -> Option<&Layers<S>> {
        self.layers.as_ref()
    }

    pub fn committed(&self) -> Option<&S> {
        self.layers.as_ref().map(|layers| &layers.committed)
    }

    pub fn preview(&self) -> Option<&S> {
        self.layers.as_ref().map(|layers| &layers.preview)
    }

    pub fn rect_clamp(&self) -> RectClampMode {
        self.rect_clamp
    }

    pub fn set_rect_clamp(&mut self, mode: RectClampMode) {
        self.rect_clamp = mode;
        self.redraw_preview();
    }

    /// Routes one input event to the matching pointer handler.
    pub fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::PointerDown { location, button } => {
                if *button == PointerButton::Primary && location.is_in_canvas {
                    self.pointer_down(location.position);
                }
            }
            InputEvent::PointerUp { button, .. } => {
                if *button == PointerButton::Primary {
                    self.pointer_up();
                }
            }
            InputEvent::PointerMove { location } => {
                if location.is_in_canvas {
                    self.pointer_move(location.position);
                }
            }
            InputEvent::PointerEnter { location } => {
                self.pointer_enter(location.position);
            }
            InputEvent::PointerLeave { .. } => {
                self.pointer_leave();
            }
        }
    }

    /// Pointer moved to `client` (screen coordinates).
    pub fn pointer_move(&mut self, client: Pos2) {
        let Some(local) = self.map(client) else {
            return;
        };
        self.client_position = Some(client);
        self.session.pointer.position = local;

        if self.session.pointer.pressed {
            self.dispatch(Phase::Move);
        }
    }

    /// Primary button pressed at `client` (screen coordinates).
    pub fn pointer_down(&mut self, client: Pos2) {
        let Some(local) = self.map(client) else {
            return;
        };
        self.client_position = Some(client);
        self.session.pointer.position = local;
        self.session.pointer.pressed = true;
        log::debug!("Pointer down at {:?} with {}", local, self.session.tool);

        self.dispatch(Phase::Press);
    }

    /// Primary button released. Shapes commit at the last known position,
    /// so the committed shape is the last preview frame.
    pub fn pointer_up(&mut self) {
        if !self.session.pointer.pressed {
            return;
        }
        self.session.pointer.pressed = false;
        self.dispatch(Phase::Release);
    }

    pub fn pointer_enter(&mut self, client: Pos2) {
        self.session.brush.hover_active = true;
        self.client_position = Some(client);
    }

    /// Pointer left the surface: hover ends and the hold is released.
    /// A shape that was being dragged is dropped without committing.
    pub fn pointer_leave(&mut self) {
        self.session.brush.hover_active = false;
        if self.session.pointer.pressed {
            self.session.pointer.pressed = false;
            if self.session.tool.is_shape() {
                log::debug!("Pointer left mid-drag, cancelling {}", self.session.tool);
            }
            self.cancel_shape();
        }
    }

    /// Sets the surface-local position directly, as the X/Y readouts do.
    /// Draws exactly like a pointer move when the button is held.
    pub fn set_position(&mut self, local: Pos2) {
        self.session.pointer.position = local;
        if let Some(client) = self.mapper.to_screen(local, self.session.brush.size()) {
            self.client_position = Some(client);
        }
        if self.session.pointer.pressed {
            self.dispatch(Phase::Move);
        }
    }

    /// Switches tool. A shape in progress is dropped; committed pixels are untouched.
    pub fn select_tool(&mut self, tool: Tool) {
        if tool == self.session.tool {
            return;
        }
        log::info!("Tool selected: {} -> {}", self.session.tool, tool);
        self.cancel_shape();
        self.session.tool = tool;
    }

    pub fn set_brush_size(&mut self, size: u32) {
        self.session.brush.set_size(size);
        self.redraw_preview();
    }

    pub fn set_brush_color(&mut self, color: Color32) {
        self.session.brush.color = color;
        self.redraw_preview();
    }

    /// Sets the brush color from a CSS hex string. The old color stays on error.
    pub fn set_brush_color_hex(&mut self, hex: &str) -> CanvasResult<()> {
        self.session.brush.set_color_hex(hex)?;
        self.redraw_preview();
        Ok(())
    }

    /// Clears both layers. Safe to call at any time, any number of times.
    pub fn reset(&mut self) {
        log::info!("Resetting canvas");
        if let Some(layers) = &mut self.layers {
            layers.committed.clear();
            layers.preview.clear();
        }
    }

    pub fn clear_preview(&mut self) {
        if let Some(layers) = &mut self.layers {
            layers.preview.clear();
        }
    }

    /// The brush-size indicator, when a drawing tool is over the surface.
    pub fn hover_cursor(&self) -> Option<HoverCursor> {
        if !self.session.shows_hover_cursor() {
            return None;
        }
        let client = self.client_position?;
        let size = self.session.brush.size();
        Some(HoverCursor::new(self.mapper.cursor_position(client, size), size))
    }

    /// The shape the current drag resolves to, if a shape tool is held.
    pub fn pending_shape(&self) -> Option<DragShape> {
        let pointer = &self.session.pointer;
        let origin = pointer.press_origin?;
        DragShape::from_drag(
            self.session.tool,
            origin,
            pointer.position,
            &self.session.brush,
            self.rect_clamp,
        )
    }

    fn map(&self, client: Pos2) -> Option<Pos2> {
        let local = self.mapper.to_surface(client, self.session.brush.size());
        if local.is_none() {
            log::debug!("Ignoring pointer at {:?}, surface not mounted", client);
        }
        local
    }

    fn dispatch(&mut self, phase: Phase) {
        match (self.session.tool, phase) {
            (Tool::Pointer, _) => {}
            (Tool::Pencil | Tool::Eraser, Phase::Press | Phase::Move) => self.stamp(),
            (Tool::Pencil | Tool::Eraser, Phase::Release) => {}
            (Tool::Line | Tool::Rectangle | Tool::Circle, Phase::Press) => {
                self.session.pointer.press_origin = Some(self.session.pointer.position);
            }
            (Tool::Line | Tool::Rectangle | Tool::Circle, Phase::Move) => self.redraw_preview(),
            (Tool::Line | Tool::Rectangle | Tool::Circle, Phase::Release) => self.commit_shape(),
        }
    }

    fn stamp(&mut self) {
        let session = &self.session;
        let Some(stamp) = Stamp::for_tool(
            session.tool,
            session.pointer.position,
            &session.brush,
            self.background,
        ) else {
            return;
        };
        if let Some(layers) = &mut self.layers {
            log::trace!("Stamp {:?}", stamp);
            stamp.draw(&mut layers.committed);
        }
    }

    /// While a shape is held, clears the preview and draws it again from the current state.
    /// Without a pending shape the preview is already blank.
    fn redraw_preview(&mut self) {
        let Some(shape) = self.pending_shape() else {
            return;
        };
        let color = self.session.brush.color;
        if let Some(layers) = &mut self.layers {
            layers.preview.clear();
            shape.draw(&mut layers.preview, color);
        }
    }

    fn commit_shape(&mut self) {
        let shape = self.pending_shape();
        let color = self.session.brush.color;
        if let Some(layers) = &mut self.layers {
            if let Some(shape) = shape {
                log::debug!("Committing {:?}", shape);
                shape.draw(&mut layers.committed, color);
            }
            layers.preview.clear();
        }
        self.session.pointer.press_origin = None;
    }

    fn cancel_shape(&mut self) {
        if self.session.pointer.press_origin.take().is_some() {
            self.clear_preview();
        }
    }
}

impl<S: Surface> Default for DrawingController<S> {
    fn default() -> Self {
        Self::new(&CanvasConfig::default())
    }
}

impl DrawingController<RasterSurface> {
    /// Mounts fresh transparent rasters sized from `config`, or only moves the
    /// surface if it is already mounted.
    pub fn mount_raster(&mut self, origin: Pos2, config: &CanvasConfig) -> CanvasResult<()> {
        if self.layers.is_some() {
            self.set_origin(origin);
            return Ok(());
        }
        let committed = RasterSurface::new(config.width, config.height)?;
        let preview = RasterSurface::new(config.width, config.height)?;
        self.mount(origin, committed, preview);
        Ok(())
    }
}
