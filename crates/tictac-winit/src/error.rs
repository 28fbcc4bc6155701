//! Fatal driver errors.

use thiserror::Error;

/// Failures that stop the driver before or while the window is up.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DriverError {
    #[error("failed to start event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("failed to set up rendering surface: {0}")]
    Surface(#[from] softbuffer::SoftBufferError),
}
