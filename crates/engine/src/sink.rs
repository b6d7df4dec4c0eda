//! Display sink seam.

use anyhow::Result;

use crate::core::GlyphGrid;

/// Anything that can show a finished frame.
///
/// Implementations clear whatever they showed before and present `grid` in
/// its place. The grid is only borrowed for the call.
pub trait DisplaySink {
    fn present(&mut self, grid: &GlyphGrid) -> Result<()>;
}

impl<S: DisplaySink + ?Sized> DisplaySink for Box<S> {
    fn present(&mut self, grid: &GlyphGrid) -> Result<()> {
        (**self).present(grid)
    }
}
