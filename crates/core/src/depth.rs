//! Per-cell inverse-depth buffer.

/// Holds `1/z` of the nearest sample written to each cell this frame.
///
/// Zero means "nothing yet": any visible sample has a positive inverse depth.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthBuffer {
    width: u16,
    height: u16,
    values: Vec<f64>,
}

impl DepthBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            values: vec![0.0; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn reset(&mut self) {
        self.values.fill(0.0);
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<f64> {
        self.idx(x, y).map(|i| self.values[i])
    }

    /// Store `inv_z` if it is nearer than what the cell holds.
    ///
    /// Returns `true` when the sample won the cell. A cell's value never
    /// decreases between resets.
    #[inline]
    pub fn test_and_set(&mut self, x: u16, y: u16, inv_z: f64) -> bool {
        let Some(i) = self.idx(x, y) else {
            return false;
        };
        if inv_z > self.values[i] {
            self.values[i] = inv_z;
            true
        } else {
            false
        }
    }
}
