use crate::config::CanvasConfig;
use crate::controller::DrawingController;
use crate::input::InputHandler;
use crate::panels::{central_panel, tools_panel};
use crate::renderer::Renderer;
use crate::state::DrawingSessionState;

/// We derive Deserialize/Serialize so we can persist app state on shutdown.
/// Only the canvas setup, the selected tool and the brush are kept; pixels are not.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct PaintApp {
    config: CanvasConfig,
    /// Snapshot of the controller's session, refreshed on save
    session: DrawingSessionState,
    #[serde(skip)]
    controller: DrawingController,
    #[serde(skip)]
    renderer: Renderer,
    #[serde(skip)]
    input: InputHandler,
}

impl Default for PaintApp {
    fn default() -> Self {
        Self::with_config(CanvasConfig::default(), DrawingSessionState::default())
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Load previous app state (if any).
        let restored: PaintApp = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        log::info!(
            "Starting with {} and brush size {}",
            restored.session.tool,
            restored.session.brush.size()
        );
        Self::with_config(restored.config, restored.session)
    }

    pub fn with_config(config: CanvasConfig, session: DrawingSessionState) -> Self {
        Self {
            controller: DrawingController::with_session(session.clone(), &config),
            config,
            session,
            renderer: Renderer::new(),
            input: InputHandler::default(),
        }
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn controller(&self) -> &DrawingController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut DrawingController {
        &mut self.controller
    }

    /// Mounts the surface at `rect` and feeds this frame's pointer input to the controller.
    pub fn handle_input(&mut self, ctx: &egui::Context, rect: egui::Rect) {
        if let Err(err) = self.controller.mount_raster(rect.min, &self.config) {
            log::error!("Failed to mount drawing surface: {}", err);
            return;
        }
        self.input.set_canvas_rect(rect);

        for event in self.input.process_input(ctx) {
            self.controller.handle_event(&event);
        }
    }

    pub fn render_canvas(&mut self, ctx: &egui::Context, painter: &egui::Painter, rect: egui::Rect) {
        self.renderer
            .render(ctx, painter, rect, &self.controller, self.config.background);
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.session = self.controller.session().clone();
        self.config.rect_clamp = self.controller.rect_clamp();
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
