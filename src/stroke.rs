use egui::{Color32, Pos2};
use std::fmt;

/// Identifies a stroke within the history that created it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StrokeId(usize);

impl StrokeId {
    pub fn new(raw: usize) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> usize {
        self.0
    }
}

impl fmt::Display for StrokeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A completed freehand line. Never mutated once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    id: StrokeId,
    points: Vec<Pos2>,
    color: Color32,
    width: f32,
}

impl Stroke {
    pub fn new(id: StrokeId, color: Color32, width: f32, points: Vec<Pos2>) -> Self {
        Self {
            id,
            points,
            color,
            width,
        }
    }

    pub fn id(&self) -> StrokeId {
        self.id
    }

    /// Points in drawing order
    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }
}

/// The polyline under construction while a drag gesture is active.
///
/// It carries no color or width of its own: the renderer previews it with the
/// current tool state, and the same tool state is applied when it is frozen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrokeBuilder {
    points: Vec<Pos2>,
}

impl StrokeBuilder {
    /// Start a builder seeded with the gesture's first point
    pub fn starting_at(origin: Pos2) -> Self {
        Self {
            points: vec![origin],
        }
    }

    pub fn add_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Consume the builder, producing the immutable stroke
    pub fn freeze(self, id: StrokeId, color: Color32, width: f32) -> Stroke {
        Stroke::new(id, color, width, self.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_drawing_order() {
        let mut builder = StrokeBuilder::starting_at(Pos2::new(1.0, 1.0));
        builder.add_point(Pos2::new(2.0, 3.0));
        builder.add_point(Pos2::new(5.0, 8.0));

        let stroke = builder.freeze(StrokeId::new(7), Color32::RED, 12.0);
        assert_eq!(stroke.id(), StrokeId::new(7));
        assert_eq!(
            stroke.points(),
            &[Pos2::new(1.0, 1.0), Pos2::new(2.0, 3.0), Pos2::new(5.0, 8.0)]
        );
        assert_eq!(stroke.color(), Color32::RED);
        assert_eq!(stroke.width(), 12.0);
    }

    #[test]
    fn default_builder_is_empty() {
        let builder = StrokeBuilder::default();
        assert!(builder.is_empty());
        assert_eq!(builder.len(), 0);
    }

    #[test]
    fn stroke_id_display() {
        assert_eq!(StrokeId::new(3).to_string(), "#3");
    }
}
