use crate::event::{DoodleEvent, EventHandler};
use std::cell::RefCell;

/// Broadcasts doodle events to registered handlers
pub struct EventBus {
    handlers: RefCell<Vec<Box<dyn EventHandler>>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &format!("<{} handlers>", self.handlers.borrow().len()))
            .finish()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
        }
    }

    /// Subscribe a handler to receive events
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.handlers.borrow_mut().push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }

    /// Emit an event to all registered handlers, in subscription order
    pub fn emit(&self, event: DoodleEvent) {
        for handler in &mut *self.handlers.borrow_mut() {
            handler.handle_event(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    struct Recorder(Rc<RefCell<Vec<DoodleEvent>>>);

    impl EventHandler for Recorder {
        fn handle_event(&mut self, event: &DoodleEvent) {
            self.0.borrow_mut().push(event.clone());
        }
    }

    #[test]
    fn every_handler_sees_every_event() {
        let bus = EventBus::new();
        let first = Rc::new(RefCell::new(Vec::new()));
        let second = Rc::new(RefCell::new(Vec::new()));
        bus.subscribe(Box::new(Recorder(first.clone())));
        bus.subscribe(Box::new(Recorder(second.clone())));
        assert_eq!(bus.handler_count(), 2);

        bus.emit(DoodleEvent::Cleared { moved: 3 });

        assert_eq!(*first.borrow(), vec![DoodleEvent::Cleared { moved: 3 }]);
        assert_eq!(*second.borrow(), vec![DoodleEvent::Cleared { moved: 3 }]);
    }
}
