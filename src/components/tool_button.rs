use egui::{Button, Response, RichText, Ui, Vec2};

use crate::tools::Tool;

const BUTTON_SIZE: Vec2 = Vec2::new(32.0, 32.0);

/// Toolbar entry for one tool: its icon, highlighted while the tool is active.
pub struct ToolButton {
    tool: Tool,
    selected: bool,
}

impl ToolButton {
    pub fn new(tool: Tool, selected: bool) -> Self {
        Self { tool, selected }
    }

    pub fn show(self, ui: &mut Ui) -> Response {
        let icon = RichText::new(self.tool.icon()).size(18.0);
        let response = ui.add(Button::new(icon).selected(self.selected).min_size(BUTTON_SIZE));
        response.on_hover_text(self.hover_text())
    }

    fn hover_text(&self) -> String {
        if self.tool.is_shape() {
            format!("{} (drag to preview, release to commit)", self.tool)
        } else {
            self.tool.name().to_owned()
        }
    }
}
