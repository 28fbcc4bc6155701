//! The Elm-style application loop: [`Model`], [`Effect`], [`AppRunner`] and
//! [`EventLoopDriver`].
//!
//! Everything runs on the thread that owns the window's event loop. The
//! driver feeds messages into an [`AppRunner`], then asks it for a frame.

use log::debug;

use crate::game::Snapshot;
use crate::messages::Msg;

// ---------------------------------------------------------------------------
// Effect
// ---------------------------------------------------------------------------

/// A side-effect returned by [`Model::update`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Signal the application loop to stop.
    End,
}

// ---------------------------------------------------------------------------
// Model trait
// ---------------------------------------------------------------------------

/// The application model.
pub trait Model {
    /// Process a message, optionally returning a side-effect.
    fn update(&mut self, msg: Msg) -> Option<Effect>;

    /// A render-ready copy of the current state.
    fn view(&self) -> Snapshot;
}

// ---------------------------------------------------------------------------
// EventLoopDriver trait
// ---------------------------------------------------------------------------

/// A back-end that owns the main-thread event loop (e.g. winit) and drives
/// an [`AppRunner`] from its callbacks.
pub trait EventLoopDriver {
    /// Run until the model ends or the window closes.
    fn run(self, runner: AppRunner) -> Result<(), Box<dyn std::error::Error>>;
}

// ---------------------------------------------------------------------------
// AppRunner
// ---------------------------------------------------------------------------

/// Synchronous message pump around a boxed [`Model`].
pub struct AppRunner {
    model: Box<dyn Model>,
    quit: bool,
    last: Option<Snapshot>,
}

impl AppRunner {
    pub fn new(model: Box<dyn Model>) -> Self {
        Self {
            model,
            quit: false,
            last: None,
        }
    }

    /// Deliver [`Msg::Init`].
    pub fn init(&mut self) {
        self.handle_msg(Msg::Init);
    }

    /// Deliver one message. Messages after the model has ended are dropped.
    pub fn handle_msg(&mut self, msg: Msg) {
        if self.quit {
            return;
        }
        if let Some(Effect::End) = self.model.update(msg) {
            debug!("model requested end");
            self.quit = true;
        }
    }

    #[inline]
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// The model's snapshot if it changed since the previous call, else
    /// `None`. The first call always yields a frame.
    pub fn draw_frame(&mut self) -> Option<Snapshot> {
        let current = self.model.view();
        if self.last.as_ref() == Some(&current) {
            return None;
        }
        self.last = Some(current.clone());
        Some(current)
    }

    /// The model's snapshot regardless of changes (e.g. after a resize).
    pub fn view(&self) -> Snapshot {
        self.model.view()
    }
}
