use crate::event::{DoodleEvent, EventHandler};

/// Traces every doodle event through the `log` facade
#[derive(Debug, Default)]
pub struct LoggingHandler {
    seen: usize,
}

impl LoggingHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of events handled so far
    pub fn seen(&self) -> usize {
        self.seen
    }
}

impl EventHandler for LoggingHandler {
    fn handle_event(&mut self, event: &DoodleEvent) {
        self.seen += 1;
        match event {
            DoodleEvent::StrokeCommitted { id } => log::debug!("Stroke {} committed", id),
            DoodleEvent::Undone { id } => log::debug!("Undo stroke {}", id),
            DoodleEvent::Redone { id } => log::debug!("Redo stroke {}", id),
            DoodleEvent::Cleared { moved } => log::debug!("Cleared {} strokes into redo", moved),
            other => log::trace!("{:?}", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stroke::StrokeId;

    #[test]
    fn counts_handled_events() {
        let mut handler = LoggingHandler::new();
        handler.handle_event(&DoodleEvent::StrokeCommitted { id: StrokeId::new(1) });
        handler.handle_event(&DoodleEvent::Cleared { moved: 1 });
        assert_eq!(handler.seen(), 2);
    }
}
