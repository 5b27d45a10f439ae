use egui::{Button, RichText, Slider};

use crate::components::ColorButton;
use crate::state::DoodleState;
use crate::tool_state::PaletteColor;

/// Brush size, palette and history buttons along the top of the window
pub fn tools_panel(state: &mut DoodleState, ctx: &egui::Context) {
    egui::TopBottomPanel::top("tools_panel")
        .resizable(false)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.heading("Doodle Tools");
            ui.add_space(8.0);

            // Brush size
            let mut width = state.tool().width();
            ui.label(format!("Brush Size: {}px", width as i32));
            let range = state.tool().width_range();
            let slider = ui.add(Slider::new(&mut width, range).show_value(false));
            if slider.changed() {
                state.set_brush_width(width);
            }
            ui.add_space(8.0);

            // Palette
            ui.label("Brush Color:");
            let selected = state.tool().selected_palette();
            ui.horizontal(|ui| {
                for swatch in PaletteColor::ALL {
                    if ColorButton::new(swatch, selected == Some(swatch))
                        .show(ui)
                        .clicked()
                    {
                        log::info!("Palette color selected: {}", swatch.label());
                        state.select_palette(swatch);
                    }
                }
            });
            ui.add_space(8.0);

            // Undo/Redo/Clear
            ui.horizontal(|ui| {
                if ui.add_enabled(state.can_undo(), Button::new("Undo")).clicked() {
                    state.undo();
                }
                if ui.add_enabled(state.can_redo(), Button::new("Redo")).clicked() {
                    state.redo();
                }
                let error_color = ui.visuals().error_fg_color;
                let clear = Button::new(RichText::new("Clear").color(egui::Color32::WHITE))
                    .fill(error_color);
                if ui.add(clear).clicked() {
                    state.clear();
                }
            });
            ui.add_space(8.0);
        });
}
