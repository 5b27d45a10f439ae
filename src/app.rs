use crate::config::DoodleConfig;
use crate::event::LoggingHandler;
use crate::input::GestureTracker;
use crate::panels::{central_panel, tools_panel};
use crate::renderer::Renderer;
use crate::state::DoodleState;
use egui::{Key, KeyboardShortcut, Modifiers};

const UNDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO: KeyboardShortcut =
    KeyboardShortcut::new(Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::Z);
const REDO_ALT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);

pub struct DoodleApp {
    state: DoodleState,
    gestures: GestureTracker,
    renderer: Renderer,
}

impl Default for DoodleApp {
    fn default() -> Self {
        Self::from_config(&DoodleConfig::default())
    }
}

impl DoodleApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &DoodleConfig) -> Self {
        Self::from_config(config)
    }

    pub fn from_config(config: &DoodleConfig) -> Self {
        let state = DoodleState::new(config.tool_state());
        state.subscribe(Box::new(LoggingHandler::new()));

        Self {
            state,
            gestures: GestureTracker::new(),
            renderer: Renderer::new(config.canvas_color()),
        }
    }

    pub fn state(&self) -> &DoodleState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut DoodleState {
        &mut self.state
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        // Shift+Cmd+Z must be checked before Cmd+Z, which would also match it
        let (redo, undo) = ctx.input_mut(|i| {
            let redo = i.consume_shortcut(&REDO) || i.consume_shortcut(&REDO_ALT);
            let undo = i.consume_shortcut(&UNDO);
            (redo, undo)
        });

        if redo {
            self.state.redo();
        }
        if undo {
            self.state.undo();
        }
    }
}

impl eframe::App for DoodleApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        tools_panel(&mut self.state, ctx);
        central_panel(&mut self.state, &mut self.gestures, &self.renderer, ctx);
    }
}
