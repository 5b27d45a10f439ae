use egui::Pos2;

use super::PointerSample;

/// Drag gesture on the canvas, delivered in start, moves, end order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    DragStart(Pos2),
    DragMove(Pos2),
    DragEnd,
    /// The drag was interrupted; consumers treat it like `DragEnd`
    DragCancel,
}

/// Anything that can be driven by canvas drag gestures
pub trait GestureSink {
    fn on_gesture(&mut self, event: GestureEvent);
}

/// Turns per-frame pointer samples into discrete drag events.
///
/// Moves that do not change the pointer position are dropped, so a stroke
/// never receives the same point twice in a row from one frame to the next.
#[derive(Debug, Default)]
pub struct GestureTracker {
    last_pos: Option<Pos2>,
    active: bool,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.active
    }

    /// Process one frame's sample and return the resulting events
    pub fn observe(&mut self, sample: PointerSample) -> Vec<GestureEvent> {
        let mut events = Vec::new();

        if sample.drag_started {
            if let Some(pos) = sample.pos {
                if self.active {
                    events.push(GestureEvent::DragCancel);
                }
                events.push(GestureEvent::DragStart(pos));
                self.active = true;
                self.last_pos = Some(pos);
            }
        }

        if !self.active {
            return events;
        }

        if sample.dragging || sample.drag_stopped {
            if let Some(pos) = sample.pos {
                if self.last_pos != Some(pos) {
                    events.push(GestureEvent::DragMove(pos));
                    self.last_pos = Some(pos);
                }
            }
        }

        if sample.drag_stopped {
            events.push(GestureEvent::DragEnd);
            self.reset();
        } else if !sample.dragging {
            // The widget stopped reporting the drag without releasing it
            events.push(GestureEvent::DragCancel);
            self.reset();
        }

        events
    }

    /// Observe a sample and forward the events to `sink`
    pub fn drive(&mut self, sample: PointerSample, sink: &mut impl GestureSink) {
        for event in self.observe(sample) {
            sink.on_gesture(event);
        }
    }

    fn reset(&mut self) {
        self.active = false;
        self.last_pos = None;
    }
}
