use crate::stroke::StrokeId;
use egui::Color32;

/// Emitted by `DoodleState` after a transition has actually happened
#[derive(Debug, Clone, PartialEq)]
pub enum DoodleEvent {
    StrokeStarted {
        /// Redo entries invalidated by the new stroke
        discarded_redo: usize,
    },
    StrokeCommitted {
        id: StrokeId,
    },
    Undone {
        id: StrokeId,
    },
    Redone {
        id: StrokeId,
    },
    Cleared {
        moved: usize,
    },
    BrushWidthChanged {
        old: f32,
        new: f32,
    },
    BrushColorChanged {
        old: Color32,
        new: Color32,
    },
}
