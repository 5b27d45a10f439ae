use crate::state::DoodleState;
use egui::{Color32, Painter, Pos2, Rect, Shape, Stroke as EguiStroke};

/// Draws the canvas. Pure consumer of `DoodleState`.
#[derive(Debug, Clone)]
pub struct Renderer {
    background: Color32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Color32::WHITE)
    }
}

impl Renderer {
    pub fn new(background: Color32) -> Self {
        Self { background }
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    /// Paint the canvas into `rect`
    pub fn render(&self, painter: &Painter, rect: Rect, state: &DoodleState) {
        painter.extend(self.shapes(rect, state));
    }

    /// Shapes for one frame: background, committed strokes oldest first,
    /// then the live stroke on top using the current brush.
    pub fn shapes(&self, rect: Rect, state: &DoodleState) -> Vec<Shape> {
        let mut shapes = vec![Shape::rect_filled(rect, 0.0, self.background)];

        for stroke in state.history().committed() {
            push_polyline(&mut shapes, stroke.points(), stroke.color(), stroke.width());
        }

        if let Some(live) = state.history().live_stroke() {
            let tool = state.tool();
            push_polyline(&mut shapes, live.points(), tool.color(), tool.width());
        }

        shapes
    }
}

/// Polyline with round caps and joins, approximated by a dot on every vertex
fn push_polyline(shapes: &mut Vec<Shape>, points: &[Pos2], color: Color32, width: f32) {
    let radius = width / 2.0;
    match points {
        [] => {}
        [single] => shapes.push(Shape::circle_filled(*single, radius, color)),
        _ => {
            shapes.push(Shape::line(points.to_vec(), EguiStroke::new(width, color)));
            shapes.extend(
                points
                    .iter()
                    .map(|point| Shape::circle_filled(*point, radius, color)),
            );
        }
    }
}
