mod bus;
mod events;
mod handlers;

pub use bus::EventBus;
pub use events::DoodleEvent;
pub use handlers::LoggingHandler;

/// Observer of doodle state transitions
pub trait EventHandler {
    fn handle_event(&mut self, event: &DoodleEvent);
}
