//! TerminalSink: alternate-screen display that also watches for stop keys.

use std::time::Duration;

use anyhow::Result;

use crate::core::GlyphGrid;
use crate::engine::{CancelToken, DisplaySink};
use crate::input::poll_stop;
use crate::renderer::TerminalRenderer;

/// Draws through a [`TerminalRenderer`] and trips `cancel` when the user
/// presses a stop key.
///
/// Pending key events are drained after every frame without blocking, so
/// stopping takes effect at the next frame boundary.
pub struct TerminalSink {
    renderer: TerminalRenderer,
    cancel: CancelToken,
}

impl TerminalSink {
    pub fn new(cancel: CancelToken) -> Self {
        Self {
            renderer: TerminalRenderer::new(),
            cancel,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }
}

impl DisplaySink for TerminalSink {
    fn present(&mut self, grid: &GlyphGrid) -> Result<()> {
        self.renderer.draw(grid)?;
        if poll_stop(Duration::ZERO)? {
            log::info!("stop key pressed");
            self.cancel.cancel();
        }
        Ok(())
    }
}
