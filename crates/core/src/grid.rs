//! Character grid produced by one frame.

use std::fmt;

/// Row-major 2D grid of glyphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphGrid {
    width: u16,
    height: u16,
    cells: Vec<char>,
}

impl GlyphGrid {
    pub fn new(width: u16, height: u16, fill: char) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![fill; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<char> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Write one cell. Coordinates outside the grid are ignored.
    pub fn set(&mut self, x: u16, y: u16, ch: char) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = ch;
        }
    }

    /// Become a copy of `other`, reusing this grid's allocation when possible.
    pub fn copy_from(&mut self, other: &GlyphGrid) {
        self.width = other.width;
        self.height = other.height;
        self.cells.clear();
        self.cells.extend_from_slice(&other.cells);
    }

    /// Reset every cell in a single pass, keeping the allocation.
    pub fn clear(&mut self, ch: char) {
        self.cells.fill(ch);
    }

    pub fn row(&self, y: u16) -> Option<&[char]> {
        if y >= self.height {
            return None;
        }
        let w = self.width as usize;
        let start = (y as usize) * w;
        Some(&self.cells[start..start + w])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> + '_ {
        // chunks_exact panics on a zero chunk size.
        self.cells.chunks_exact((self.width as usize).max(1))
    }

    /// Number of cells holding something other than `blank`.
    pub fn count_non_blank(&self, blank: char) -> usize {
        self.cells.iter().filter(|&&c| c != blank).count()
    }
}

/// Rows joined by `\n`, no trailing newline.
impl fmt::Display for GlyphGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                f.write_str("\n")?;
            }
            for &ch in row {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}
