//! Animation loop (engine-facing).
//!
//! Drives [`tui_donut_core::FrameRenderer`] frame after frame: render the
//! current angles, hand the grid to a [`DisplaySink`], advance the angles.
//! The loop stops at a frame boundary when its [`CancelToken`] is tripped or
//! an optional frame limit is reached.
//!
//! Nothing here touches the terminal directly; backends implement
//! [`DisplaySink`].

pub mod cancel;
pub mod driver;
pub mod pacer;
pub mod sink;

pub use tui_donut_core as core;
pub use tui_donut_types as types;

pub use cancel::CancelToken;
pub use driver::{AnimationDriver, RunSummary};
pub use pacer::FramePacer;
pub use sink::DisplaySink;
