use egui::{Color32, Response, Sense, Stroke, Ui};

use crate::tool_state::PaletteColor;

/// Round palette swatch, outlined when it is the active brush color
pub struct ColorButton {
    pub swatch: PaletteColor,
    pub selected: bool,
}

impl ColorButton {
    pub fn new(swatch: PaletteColor, selected: bool) -> Self {
        Self { swatch, selected }
    }

    pub fn show(&self, ui: &mut Ui) -> Response {
        let button_size = egui::vec2(40.0, 40.0);
        let (rect, response) = ui.allocate_exact_size(button_size, Sense::click());

        if ui.is_rect_visible(rect) {
            let center = rect.center();
            let radius = rect.width() / 2.0 - 4.0;
            ui.painter().circle_filled(center, radius, self.swatch.color());

            if self.selected {
                let accent = ui.visuals().selection.bg_fill;
                ui.painter().circle_stroke(center, radius, Stroke::new(3.0, accent));
            } else if response.hovered() {
                ui.painter()
                    .circle_stroke(center, radius, Stroke::new(1.0, Color32::from_gray(120)));
            }
        }

        response.on_hover_text(self.swatch.label())
    }
}
