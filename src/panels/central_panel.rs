use crate::input::{GestureTracker, PointerSample};
use crate::renderer::Renderer;
use crate::state::DoodleState;

/// The drawing surface: feeds drags into the state, then paints it
pub fn central_panel(
    state: &mut DoodleState,
    gestures: &mut GestureTracker,
    renderer: &Renderer,
    ctx: &egui::Context,
) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(renderer.background()))
        .show(ctx, |ui| {
            let available_size = ui.available_size();
            let (response, painter) = ui.allocate_painter(available_size, egui::Sense::drag());

            gestures.drive(PointerSample::from_response(&response), state);

            renderer.render(&painter, response.rect, state);
        });
}
