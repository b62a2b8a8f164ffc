use crate::PaintApp;

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let canvas_size = app.config().size();
        let (response, painter) = ui.allocate_painter(canvas_size, egui::Sense::drag());
        let canvas_rect = response.rect;

        // Handle input
        app.handle_input(ctx, canvas_rect);

        // Render the canvas
        app.render_canvas(ctx, &painter, canvas_rect);
    });
}
