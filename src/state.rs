use crate::event::{DoodleEvent, EventBus, EventHandler};
use crate::history::StrokeHistory;
use crate::input::{GestureEvent, GestureSink};
use crate::stroke::StrokeId;
use crate::tool_state::{PaletteColor, ToolState};
use egui::{Color32, Pos2};

/// All mutable state of the doodle pad, owned by the app.
///
/// The UI only ever changes things through these methods; observers
/// subscribed with [`DoodleState::subscribe`] are told about each transition
/// that actually happened. No-ops (undo with nothing drawn, a move without a
/// stroke, ...) emit nothing.
#[derive(Debug, Default)]
pub struct DoodleState {
    history: StrokeHistory,
    tool: ToolState,
    event_bus: EventBus,
}

impl DoodleState {
    pub fn new(tool: ToolState) -> Self {
        Self {
            history: StrokeHistory::new(),
            tool,
            event_bus: EventBus::new(),
        }
    }

    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.event_bus.subscribe(handler);
    }

    pub fn history(&self) -> &StrokeHistory {
        &self.history
    }

    pub fn tool(&self) -> &ToolState {
        &self.tool
    }

    pub fn set_brush_width(&mut self, width: f32) {
        let old = self.tool.width();
        let new = self.tool.set_width(width);
        if old != new {
            self.event_bus.emit(DoodleEvent::BrushWidthChanged { old, new });
        }
    }

    pub fn set_brush_color(&mut self, color: Color32) {
        let old = self.tool.color();
        self.tool.set_color(color);
        if old != color {
            log::info!("Brush color set to {:?}", color);
            self.event_bus.emit(DoodleEvent::BrushColorChanged { old, new: color });
        }
    }

    pub fn select_palette(&mut self, swatch: PaletteColor) {
        self.set_brush_color(swatch.color());
    }

    pub fn start_stroke(&mut self, origin: Pos2) {
        let discarded_redo = self.history.start_stroke(origin);
        self.event_bus.emit(DoodleEvent::StrokeStarted { discarded_redo });
    }

    pub fn extend_stroke(&mut self, point: Pos2) {
        self.history.extend_stroke(point);
    }

    pub fn commit_stroke(&mut self) -> Option<StrokeId> {
        let id = self.history.commit_stroke(&self.tool)?;
        self.event_bus.emit(DoodleEvent::StrokeCommitted { id });
        Some(id)
    }

    pub fn undo(&mut self) -> Option<StrokeId> {
        let id = self.history.undo()?;
        self.event_bus.emit(DoodleEvent::Undone { id });
        Some(id)
    }

    pub fn redo(&mut self) -> Option<StrokeId> {
        let id = self.history.redo()?;
        self.event_bus.emit(DoodleEvent::Redone { id });
        Some(id)
    }

    pub fn clear(&mut self) {
        let moved = self.history.clear();
        if moved > 0 {
            log::info!("Cleared canvas ({} strokes)", moved);
            self.event_bus.emit(DoodleEvent::Cleared { moved });
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

impl GestureSink for DoodleState {
    fn on_gesture(&mut self, event: GestureEvent) {
        match event {
            GestureEvent::DragStart(origin) => self.start_stroke(origin),
            GestureEvent::DragMove(point) => self.extend_stroke(point),
            GestureEvent::DragEnd | GestureEvent::DragCancel => {
                self.commit_stroke();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<DoodleEvent>>>);

    impl EventHandler for Recorder {
        fn handle_event(&mut self, event: &DoodleEvent) {
            self.0.borrow_mut().push(event.clone());
        }
    }

    fn observed() -> (DoodleState, Recorder) {
        let state = DoodleState::default();
        let recorder = Recorder::default();
        state.subscribe(Box::new(recorder.clone()));
        (state, recorder)
    }

    #[test]
    fn no_ops_emit_nothing() {
        let (mut state, recorder) = observed();
        state.undo();
        state.redo();
        state.clear();
        state.extend_stroke(Pos2::ZERO);
        state.commit_stroke();
        state.set_brush_width(10.0);
        state.select_palette(PaletteColor::Black);
        assert!(recorder.0.borrow().is_empty());
    }

    #[test]
    fn drawing_and_undoing_emit_events() {
        let (mut state, recorder) = observed();
        state.on_gesture(GestureEvent::DragStart(Pos2::new(1.0, 1.0)));
        state.on_gesture(GestureEvent::DragMove(Pos2::new(2.0, 2.0)));
        state.on_gesture(GestureEvent::DragEnd);
        let id = state.history().committed()[0].id();
        state.undo();
        state.start_stroke(Pos2::ZERO);

        assert_eq!(
            *recorder.0.borrow(),
            vec![
                DoodleEvent::StrokeStarted { discarded_redo: 0 },
                DoodleEvent::StrokeCommitted { id },
                DoodleEvent::Undone { id },
                DoodleEvent::StrokeStarted { discarded_redo: 1 },
            ]
        );
    }

    #[test]
    fn brush_changes_report_clamped_width() {
        let (mut state, recorder) = observed();
        state.set_brush_width(500.0);
        state.select_palette(PaletteColor::Orange);
        assert_eq!(
            *recorder.0.borrow(),
            vec![
                DoodleEvent::BrushWidthChanged { old: 10.0, new: 50.0 },
                DoodleEvent::BrushColorChanged {
                    old: Color32::BLACK,
                    new: PaletteColor::Orange.color(),
                },
            ]
        );
    }

    #[test]
    fn cancel_commits_like_end() {
        let mut state = DoodleState::default();
        state.on_gesture(GestureEvent::DragStart(Pos2::new(4.0, 4.0)));
        state.on_gesture(GestureEvent::DragCancel);
        assert_eq!(state.history().committed().len(), 1);
        assert!(!state.history().is_drawing());
    }
}
