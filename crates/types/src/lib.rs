//! Shared types and default scene constants.
//!
//! Everything here is plain data with no external dependencies, so it can be
//! used from the renderer, the animation loop and the terminal backends alike.
//!
//! # Default Scene
//!
//! The defaults describe a torus twice as wide as its tube, viewed from a
//! distance of five units in a 50x50 character window:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_WIDTH` | 50 | Grid width in columns |
//! | `DEFAULT_HEIGHT` | 50 | Grid height in rows |
//! | `DEFAULT_R1` | 1.0 | Minor radius (tube thickness) |
//! | `DEFAULT_R2` | 2.0 | Major radius (center to tube center) |
//! | `DEFAULT_K2` | 5.0 | Viewer distance |
//! | `DEFAULT_THETA_SPACING` | 0.07 | Step around the tube cross-section |
//! | `DEFAULT_PHI_SPACING` | 0.02 | Step around the axis of revolution |
//! | `DEFAULT_DELTA_A` | 0.08 | x-axis rotation per frame (radians) |
//! | `DEFAULT_DELTA_B` | 0.03 | z-axis rotation per frame (radians) |
//!
//! When no projection scale is configured it is derived from the window and
//! torus size, see [`derive_k1`].
//!
//! # Examples
//!
//! ```
//! use tui_donut_types::{derive_k1, Angles};
//!
//! assert_eq!(derive_k1(50, 5.0, 1.0, 2.0), 31.25);
//!
//! let mut angles = Angles::new(0.0, 0.0);
//! angles.advance(0.08, 0.03);
//! assert_eq!(angles, Angles::new(0.08, 0.03));
//! ```

/// Default grid width in columns.
pub const DEFAULT_WIDTH: u16 = 50;

/// Default grid height in rows.
pub const DEFAULT_HEIGHT: u16 = 50;

/// Default minor radius.
pub const DEFAULT_R1: f64 = 1.0;

/// Default major radius.
pub const DEFAULT_R2: f64 = 2.0;

/// Default distance from the viewer to the torus center.
pub const DEFAULT_K2: f64 = 5.0;

/// Default initial x-axis rotation.
pub const DEFAULT_INITIAL_A: f64 = 1.0;

/// Default initial z-axis rotation.
pub const DEFAULT_INITIAL_B: f64 = 1.0;

/// Default angular step around the tube cross-section.
pub const DEFAULT_THETA_SPACING: f64 = 0.07;

/// Default angular step around the axis of revolution.
pub const DEFAULT_PHI_SPACING: f64 = 0.02;

/// Default x-axis rotation applied after every frame.
pub const DEFAULT_DELTA_A: f64 = 0.08;

/// Default z-axis rotation applied after every frame.
pub const DEFAULT_DELTA_B: f64 = 0.03;

/// Default luminance ramp, dimmest glyph first.
pub const DEFAULT_GLYPH_RAMP: &str = ".,-~:;=!*#$@";

/// Glyph used for cells no surface sample reached.
pub const BLANK_GLYPH: char = ' ';

/// Default pause between frames. Zero runs uncapped.
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 0;

/// Projection scale used when none is configured.
///
/// Chosen so the torus fills roughly three eighths of the window width on
/// each side of the center.
pub fn derive_k1(width: u16, k2: f64, r1: f64, r2: f64) -> f64 {
    width as f64 * k2 * 3.0 / (8.0 * (r1 + r2))
}

/// Rotation state: `a` tilts about the x-axis, `b` about the z-axis.
///
/// Both are radians and unbounded; trigonometric periodicity does the wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Angles {
    pub a: f64,
    pub b: f64,
}

impl Angles {
    pub const fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Advance both angles by one frame's worth of rotation.
    pub fn advance(&mut self, delta_a: f64, delta_b: f64) {
        self.a += delta_a;
        self.b += delta_b;
    }
}
