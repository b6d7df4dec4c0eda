//! Terminal display backends.
//!
//! Two [`DisplaySink`](tui_donut_engine::DisplaySink) implementations:
//!
//! - [`TerminalSink`]: raw mode + alternate screen via [`TerminalRenderer`],
//!   redrawing only the cells that changed and watching for stop keys
//! - [`TextSink`]: clear-screen and print rows to any `Write`, no TTY needed
//!
//! Encoding is split from I/O ([`encode_full_into`], [`encode_diff_into`]) so
//! the byte stream can be checked without a terminal.

pub mod renderer;
pub mod sink;
pub mod text;

pub use tui_donut_core as core;
pub use tui_donut_engine as engine;
pub use tui_donut_input as input;

pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use sink::TerminalSink;
pub use text::TextSink;
