//! Winit graphical backend for tictac.
//!
//! Shows the board in a native window using:
//! - [`winit`] for window creation and input events
//! - [`softbuffer`] for CPU-based pixel presentation
//!
//! The window is split into an N×N grid of equal cells. A mouse press is
//! mapped to the cell under the cursor and handed to the model; closing the
//! window sends [`Msg::Quit`].
//!
//! # Usage
//!
//! ```rust,no_run
//! use tictac_core::{AppRunner, EventLoopDriver, TicTacToe};
//! use tictac_winit::{WinitConfig, WinitDriver};
//!
//! let driver = WinitDriver::new(WinitConfig::default());
//! let runner = AppRunner::new(Box::new(TicTacToe::new(3)));
//! driver.run(runner).unwrap();
//! ```

mod error;
mod input;
mod layout;
mod renderer;

use std::num::NonZeroU32;
use std::sync::Arc;

use log::{error, info};
use winit::{
    application::ApplicationHandler,
    dpi::{PhysicalPosition, PhysicalSize},
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use tictac_core::{
    Palette,
    app::{AppRunner, EventLoopDriver},
    messages::Msg,
};

pub use error::DriverError;

use layout::Layout;
use renderer::BoardRenderer;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration for the winit driver.
#[derive(Clone, Debug)]
pub struct WinitConfig {
    /// Window title. The game status is appended to it.
    pub title: String,
    /// Initial inner width in pixels.
    pub width: u32,
    /// Initial inner height in pixels.
    pub height: u32,
    pub resizable: bool,
    pub palette: Palette,
    /// Stroke width of X and O marks, in pixels.
    pub thickness: u32,
}

impl Default for WinitConfig {
    fn default() -> Self {
        Self {
            title: "Tic tac toe".into(),
            width: 800,
            height: 600,
            resizable: false,
            palette: Palette::default(),
            thickness: 10,
        }
    }
}

// ---------------------------------------------------------------------------
// WinitDriver
// ---------------------------------------------------------------------------

/// Winit-based graphical driver.
///
/// Implements [`EventLoopDriver`]: it owns the main-thread event loop
/// and drives an [`AppRunner`].
pub struct WinitDriver {
    config: WinitConfig,
}

impl WinitDriver {
    pub fn new(config: WinitConfig) -> Self {
        Self { config }
    }

    fn run_app(self, runner: AppRunner) -> Result<(), DriverError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Wait);
        let mut app = WinitApp::new(self.config, runner);
        event_loop.run_app(&mut app)?;
        match app.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl EventLoopDriver for WinitDriver {
    fn run(self, runner: AppRunner) -> Result<(), Box<dyn std::error::Error>> {
        self.run_app(runner).map_err(Into::into)
    }
}

// ---------------------------------------------------------------------------
// WinitApp: ApplicationHandler
// ---------------------------------------------------------------------------

struct WinitApp {
    config: WinitConfig,
    runner: AppRunner,
    state: Option<WinitState>,
    /// Last cursor position; button events don't carry one.
    cursor: Option<PhysicalPosition<f64>>,
    /// First fatal error raised inside a callback.
    error: Option<DriverError>,
}

struct WinitState {
    window: Arc<Window>,
    surface: softbuffer::Surface<Arc<Window>, Arc<Window>>,
    renderer: BoardRenderer,
    title: String,
}

#[inline]
fn non_zero(v: u32) -> NonZeroU32 {
    NonZeroU32::new(v).unwrap_or(NonZeroU32::MIN)
}

impl WinitApp {
    fn new(config: WinitConfig, runner: AppRunner) -> Self {
        Self {
            config,
            runner,
            state: None,
            cursor: None,
            error: None,
        }
    }

    fn create_state(&self, event_loop: &ActiveEventLoop) -> Result<WinitState, DriverError> {
        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(PhysicalSize::new(self.config.width, self.config.height))
            .with_resizable(self.config.resizable);

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let context = softbuffer::Context::new(window.clone())?;
        let mut surface = softbuffer::Surface::new(&context, window.clone())?;

        let PhysicalSize { width, height } = window.inner_size();
        surface.resize(non_zero(width), non_zero(height))?;

        let board_size = self.runner.view().size;
        let renderer = BoardRenderer::new(
            Layout::new(width, height, board_size),
            self.config.palette,
            self.config.thickness,
        );
        info!("window {width}x{height}, {board_size}x{board_size} board");

        Ok(WinitState {
            window,
            surface,
            renderer,
            title: self.config.title.clone(),
        })
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: DriverError) {
        error!("{err}");
        if self.error.is_none() {
            self.error = Some(err);
        }
        event_loop.exit();
    }

    /// Re-rasterize if the model changed (or `force`), then present.
    fn render(&mut self, force: bool) {
        let state = match self.state.as_mut() {
            Some(s) => s,
            None => return,
        };

        let frame = if force {
            Some(self.runner.view())
        } else {
            self.runner.draw_frame()
        };

        if let Some(snap) = frame {
            state.renderer.render(&snap);
            let title = format!("{} - {}", self.config.title, snap.status_line());
            if title != state.title {
                state.window.set_title(&title);
                state.title = title;
            }
        }

        let width = state.renderer.layout().width();
        let height = state.renderer.layout().height();
        if width == 0 || height == 0 {
            return;
        }

        let mut buf = match state.surface.buffer_mut() {
            Ok(b) => b,
            Err(e) => {
                error!("skipping frame: {e}");
                return;
            }
        };

        state
            .renderer
            .blit_to_buffer(&mut buf, width as usize, height as usize);

        if let Err(e) = buf.present() {
            error!("failed to present frame: {e}");
        }
    }

    fn handle(&mut self, event_loop: &ActiveEventLoop, msg: Msg) {
        self.runner.handle_msg(msg);
        if self.runner.should_quit() {
            event_loop.exit();
            return;
        }
        self.render(false);
    }
}

impl ApplicationHandler for WinitApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return; // already initialized
        }

        self.runner.init();
        match self.create_state(event_loop) {
            Ok(state) => {
                self.state = Some(state);
                self.render(false);
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.runner.handle_msg(Msg::Quit);
                event_loop.exit();
            }

            WindowEvent::Resized(PhysicalSize { width, height }) => {
                let resized = match self.state.as_mut() {
                    Some(state) => state
                        .surface
                        .resize(non_zero(width), non_zero(height))
                        .map(|()| state.renderer.resize(width, height)),
                    None => Ok(()),
                };
                if let Err(e) = resized {
                    self.fail(event_loop, e.into());
                    return;
                }
                self.runner.handle_msg(Msg::Screen {
                    width: width as i32,
                    height: height as i32,
                });
                self.render(true);
            }

            WindowEvent::RedrawRequested => {
                self.render(false);
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Some(position);
                if let Some(state) = self.state.as_ref() {
                    let msg = input::translate_cursor_moved(position, state.renderer.layout());
                    self.runner.handle_msg(msg);
                }
            }

            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
            }

            WindowEvent::MouseInput {
                state: btn_state,
                button,
                ..
            } => {
                let Some(state) = self.state.as_ref() else {
                    return;
                };
                if let Some(msg) = input::translate_mouse_button(
                    btn_state,
                    button,
                    self.cursor,
                    state.renderer.layout(),
                ) {
                    self.handle(event_loop, msg);
                }
            }

            _ => {}
        }
    }
}
