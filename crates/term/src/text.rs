//! TextSink: plain clear-and-print output for any writer.
//!
//! Useful for piping frames to a file or running without a TTY. Each frame
//! optionally clears the screen and homes the cursor, then prints one line
//! per grid row.

use std::io::Write;

use anyhow::Result;
use crossterm::{cursor, terminal, QueueableCommand};

use crate::core::GlyphGrid;
use crate::engine::DisplaySink;

pub struct TextSink<W: Write> {
    out: W,
    clear: bool,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, clear: true }
    }

    /// Append frames one after another instead of clearing between them.
    pub fn without_clear(mut self) -> Self {
        self.clear = false;
        self
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySink for TextSink<W> {
    fn present(&mut self, grid: &GlyphGrid) -> Result<()> {
        if self.clear {
            self.out.queue(terminal::Clear(terminal::ClearType::All))?;
            self.out.queue(cursor::MoveTo(0, 0))?;
        }
        writeln!(self.out, "{grid}")?;
        self.out.flush()?;
        Ok(())
    }
}
