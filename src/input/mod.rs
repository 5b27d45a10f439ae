use egui::{Pos2, Response};

mod gestures;
pub use gestures::{GestureEvent, GestureSink, GestureTracker};

/// What the canvas widget reported about the pointer during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    /// Pointer position while it interacts with the canvas
    pub pos: Option<Pos2>,
    pub drag_started: bool,
    pub dragging: bool,
    pub drag_stopped: bool,
}

impl PointerSample {
    /// Read the drag state of a widget allocated with `Sense::drag()`
    pub fn from_response(response: &Response) -> Self {
        Self {
            pos: response.interact_pointer_pos(),
            drag_started: response.drag_started(),
            dragging: response.dragged(),
            drag_stopped: response.drag_stopped(),
        }
    }

    pub fn started_at(pos: Pos2) -> Self {
        Self {
            pos: Some(pos),
            drag_started: true,
            dragging: true,
            drag_stopped: false,
        }
    }

    pub fn moved_to(pos: Pos2) -> Self {
        Self {
            pos: Some(pos),
            dragging: true,
            ..Self::default()
        }
    }

    pub fn stopped_at(pos: Option<Pos2>) -> Self {
        Self {
            pos,
            drag_stopped: true,
            ..Self::default()
        }
    }

    pub fn idle() -> Self {
        Self::default()
    }
}
