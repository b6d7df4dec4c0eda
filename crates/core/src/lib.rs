//! Core rendering logic - pure, deterministic, and testable
//!
//! This crate turns a validated scene and a pair of rotation angles into a
//! grid of glyphs. It has **no dependencies** on terminals or timing, which
//! keeps it:
//!
//! - **Deterministic**: the same angles and scene give byte-identical grids
//! - **Testable**: every stage of the pipeline is reachable from unit tests
//! - **Fast**: [`FrameRenderer`] reuses its buffers and never allocates per frame
//!
//! # Module Structure
//!
//! - [`config`]: user-facing [`DonutConfig`], validation into an immutable [`Scene`]
//! - [`depth`]: per-cell inverse-depth buffer
//! - [`grid`]: row-major character grid handed to display sinks
//! - [`render`]: surface sampling, rotation, projection and shading
//!
//! # Example
//!
//! ```
//! use tui_donut_core::{DonutConfig, FrameRenderer};
//! use tui_donut_types::Angles;
//!
//! let scene = DonutConfig::default().validate().unwrap();
//! let mut renderer = FrameRenderer::new(scene);
//!
//! let grid = renderer.render(Angles::new(0.0, 0.0));
//! assert_eq!(grid.width(), 50);
//! assert!(grid.count_non_blank(' ') > 0);
//! ```

pub mod config;
pub mod depth;
pub mod grid;
pub mod render;

pub use tui_donut_types as types;

pub use config::{ConfigError, DonutConfig, Scene};
pub use depth::DepthBuffer;
pub use grid::GlyphGrid;
pub use render::{luminance, ramp_index, render_frame, FrameRenderer, FrameStats, RotationTrig};
