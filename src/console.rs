//! Console handle describing the render target.
//!
//! The converter never talks to the terminal directly; it renders into an
//! off-screen buffer whose width comes from this handle. Construct one
//! explicitly for tests and headless use, or detect it from the attached
//! terminal.

use crate::error::{Result, TreePromptError};

/// Render target description, owned by whoever composes the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Console {
    width: u16,
}

impl Console {
    /// A console with an explicit column width.
    pub fn new(width: u16) -> Self {
        Self { width }
    }

    /// Detect the console from the attached terminal.
    ///
    /// Fails with [`TreePromptError::MissingCapability`] when no terminal size
    /// can be queried, e.g. when stdout is not a TTY.
    pub fn detect() -> Result<Self> {
        let (width, _height) = crossterm::terminal::size().map_err(|err| {
            TreePromptError::MissingCapability(format!("cannot query terminal size: {err}"))
        })?;

        tracing::debug!(width, "detected console");
        Ok(Self { width })
    }

    /// Column width used for rendering.
    pub fn width(&self) -> u16 {
        self.width
    }
}
