use crate::stroke::{Stroke, StrokeBuilder, StrokeId};
use crate::tool_state::ToolState;
use egui::Pos2;

/// Committed strokes, the redo buffer, and the stroke being drawn.
///
/// Every operation is total: undo, redo, commit and clear on empty
/// collections leave the history untouched. A stroke lives in exactly one of
/// `committed` or `redo` at any time.
#[derive(Debug, Default)]
pub struct StrokeHistory {
    /// What is currently drawn, oldest first
    committed: Vec<Stroke>,
    /// Strokes removed by undo or clear, most recently removed last
    redo: Vec<Stroke>,
    live: Option<StrokeBuilder>,
    next_id: usize,
}

impl StrokeHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a live stroke at `origin`. Any new drawing invalidates the redo
    /// buffer, so it is emptied here. Returns how many redo entries were dropped.
    pub fn start_stroke(&mut self, origin: Pos2) -> usize {
        if let Some(stale) = self.live.take() {
            log::debug!("Discarding unfinished stroke with {} points", stale.len());
        }
        self.live = Some(StrokeBuilder::starting_at(origin));

        let dropped = self.redo.len();
        self.redo.clear();
        dropped
    }

    /// Append a point to the live stroke. Returns `false` when no stroke is active.
    pub fn extend_stroke(&mut self, point: Pos2) -> bool {
        match &mut self.live {
            Some(builder) => {
                builder.add_point(point);
                true
            }
            None => {
                log::debug!("Ignoring point {:?}: no stroke in progress", point);
                false
            }
        }
    }

    /// Freeze the live stroke with the given brush and append it to the
    /// committed strokes.
    pub fn commit_stroke(&mut self, tool: &ToolState) -> Option<StrokeId> {
        let builder = self.live.take()?;
        if builder.is_empty() {
            return None;
        }

        let id = self.allocate_id();
        self.committed.push(builder.freeze(id, tool.color(), tool.width()));
        Some(id)
    }

    /// Drop the live stroke without committing it
    pub fn cancel_stroke(&mut self) -> bool {
        self.live.take().is_some()
    }

    /// Move the newest committed stroke onto the redo buffer
    pub fn undo(&mut self) -> Option<StrokeId> {
        let stroke = self.committed.pop()?;
        let id = stroke.id();
        self.redo.push(stroke);
        Some(id)
    }

    /// Move the newest redo entry back to the end of the committed strokes
    pub fn redo(&mut self) -> Option<StrokeId> {
        let stroke = self.redo.pop()?;
        let id = stroke.id();
        self.committed.push(stroke);
        Some(id)
    }

    /// Move every committed stroke, oldest first, onto the end of the redo
    /// buffer. Existing redo entries are kept below them.
    ///
    /// Undo cannot reverse a clear since nothing is left committed; the
    /// strokes come back one at a time through redo, newest first.
    pub fn clear(&mut self) -> usize {
        let moved = self.committed.len();
        self.redo.append(&mut self.committed);
        moved
    }

    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn committed(&self) -> &[Stroke] {
        &self.committed
    }

    pub fn redo_buffer(&self) -> &[Stroke] {
        &self.redo
    }

    pub fn live_stroke(&self) -> Option<&StrokeBuilder> {
        self.live.as_ref()
    }

    pub fn is_drawing(&self) -> bool {
        self.live.is_some()
    }

    fn allocate_id(&mut self) -> StrokeId {
        self.next_id += 1;
        StrokeId::new(self.next_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Color32;

    fn draw(history: &mut StrokeHistory, tool: &ToolState, at: f32) -> StrokeId {
        history.start_stroke(Pos2::new(at, at));
        history.extend_stroke(Pos2::new(at + 1.0, at + 2.0));
        history.commit_stroke(tool).unwrap()
    }

    #[test]
    fn new_history_is_empty() {
        let history = StrokeHistory::new();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert!(!history.is_drawing());
    }

    #[test]
    fn extend_without_live_stroke_is_ignored() {
        let mut history = StrokeHistory::new();
        assert!(!history.extend_stroke(Pos2::new(3.0, 4.0)));
        assert!(history.live_stroke().is_none());
    }

    #[test]
    fn commit_without_live_stroke_is_noop() {
        let mut history = StrokeHistory::new();
        assert_eq!(history.commit_stroke(&ToolState::default()), None);
        assert!(history.committed().is_empty());
    }

    #[test]
    fn single_point_stroke_commits() {
        let mut history = StrokeHistory::new();
        history.start_stroke(Pos2::new(10.0, 10.0));
        let id = history.commit_stroke(&ToolState::default());
        assert!(id.is_some());
        assert_eq!(history.committed()[0].points(), &[Pos2::new(10.0, 10.0)]);
        assert!(!history.is_drawing());
    }

    #[test]
    fn commit_uses_brush_at_commit_time() {
        let mut history = StrokeHistory::new();
        let mut tool = ToolState::default();
        history.start_stroke(Pos2::ZERO);
        tool.set_color(Color32::RED);
        tool.set_width(30.0);
        history.commit_stroke(&tool);

        tool.set_color(Color32::BLUE);
        let stroke = &history.committed()[0];
        assert_eq!(stroke.color(), Color32::RED);
        assert_eq!(stroke.width(), 30.0);
    }

    #[test]
    fn restarting_discards_unfinished_stroke() {
        let mut history = StrokeHistory::new();
        history.start_stroke(Pos2::new(1.0, 1.0));
        history.extend_stroke(Pos2::new(2.0, 2.0));
        history.start_stroke(Pos2::new(9.0, 9.0));
        assert_eq!(history.live_stroke().unwrap().points(), &[Pos2::new(9.0, 9.0)]);
    }

    #[test]
    fn ids_are_unique_across_undo() {
        let mut history = StrokeHistory::new();
        let tool = ToolState::default();
        let a = draw(&mut history, &tool, 0.0);
        history.undo();
        let b = draw(&mut history, &tool, 5.0);
        assert_ne!(a, b);
    }

    #[test]
    fn cancel_drops_live_stroke() {
        let mut history = StrokeHistory::new();
        history.start_stroke(Pos2::ZERO);
        assert!(history.cancel_stroke());
        assert!(!history.cancel_stroke());
        assert!(history.committed().is_empty());
    }

    #[test]
    fn clear_keeps_existing_redo_entries_first() {
        let mut history = StrokeHistory::new();
        let tool = ToolState::default();
        let a = draw(&mut history, &tool, 0.0);
        let b = draw(&mut history, &tool, 1.0);
        let c = draw(&mut history, &tool, 2.0);
        history.undo();

        assert_eq!(history.clear(), 2);
        let redo: Vec<_> = history.redo_buffer().iter().map(Stroke::id).collect();
        assert_eq!(redo, vec![c, a, b]);
        assert!(history.committed().is_empty());
    }
}
