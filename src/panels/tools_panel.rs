use egui::color_picker::{self, Alpha};

use crate::PaintApp;
use crate::components::ToolButton;
use crate::geometry::RectClampMode;
use crate::state::{MAX_BRUSH_SIZE, MIN_BRUSH_SIZE, to_hex_color};
use crate::tools::Tool;

pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::SidePanel::right("tools_panel")
        .resizable(false)
        .default_width(180.0)
        .show(ctx, |ui| {
            position_readouts(app, ui);

            if ui.button("Reset").clicked() {
                app.controller_mut().reset();
            }
            ui.separator();

            let active_tool = app.controller().tool();
            ui.heading(format!("Tools: {}", active_tool));
            ui.horizontal_wrapped(|ui| {
                for tool in Tool::ALL {
                    if ToolButton::new(tool, tool == active_tool).show(ui).clicked() {
                        log::info!("Tool selected from UI: {}", tool);
                        app.controller_mut().select_tool(tool);
                    }
                }
            });
            ui.separator();

            brush_options(app, ui);
        });
}

/// Editable X/Y of the pointer in surface coordinates.
fn position_readouts(app: &mut PaintApp, ui: &mut egui::Ui) {
    let mut position = app.controller().pointer().position;
    let changed = egui::Grid::new("position_grid")
        .num_columns(2)
        .show(ui, |ui| {
            ui.label("X:");
            let x = ui.add(egui::DragValue::new(&mut position.x).speed(1.0));
            ui.end_row();
            ui.label("Y:");
            let y = ui.add(egui::DragValue::new(&mut position.y).speed(1.0));
            ui.end_row();
            x.changed() || y.changed()
        })
        .inner;

    if changed {
        app.controller_mut().set_position(position);
    }
}

fn brush_options(app: &mut PaintApp, ui: &mut egui::Ui) {
    ui.heading("Options");

    let mut size = app.controller().brush().size();
    ui.label("Size");
    if ui
        .add(egui::Slider::new(&mut size, MIN_BRUSH_SIZE..=MAX_BRUSH_SIZE))
        .changed()
    {
        app.controller_mut().set_brush_size(size);
    }

    let mut color = app.controller().brush().color;
    ui.horizontal(|ui| {
        ui.label("Color");
        if color_picker::color_edit_button_srgba(ui, &mut color, Alpha::Opaque).changed() {
            app.controller_mut().set_brush_color(color);
        }
    });

    // Hex entry, only applied once it parses.
    let id = ui.make_persistent_id("brush_hex");
    let mut hex = ui
        .data_mut(|data| data.get_temp::<String>(id))
        .unwrap_or_else(|| to_hex_color(color));
    let response = ui.text_edit_singleline(&mut hex);
    if response.changed() {
        if let Err(err) = app.controller_mut().set_brush_color_hex(&hex) {
            log::debug!("Ignoring color input: {}", err);
        }
    }
    if response.has_focus() {
        ui.data_mut(|data| data.insert_temp(id, hex));
    } else {
        ui.data_mut(|data| data.remove::<String>(id));
    }

    ui.separator();
    let mut legacy = app.controller().rect_clamp() == RectClampMode::Legacy;
    if ui
        .checkbox(&mut legacy, "Legacy rectangle clamp")
        .on_hover_text("Clamp both sides with the vertical drag when dragging upwards")
        .changed()
    {
        let mode = if legacy {
            RectClampMode::Legacy
        } else {
            RectClampMode::PerAxis
        };
        app.controller_mut().set_rect_clamp(mode);
    }
}
