//! TUI Donut (workspace facade crate).
//!
//! Re-exports the workspace crates under one `tui_donut::{core,engine,input,term,types}`
//! namespace; the implementation lives in dedicated crates under `crates/`.

pub use tui_donut_core as core;
pub use tui_donut_engine as engine;
pub use tui_donut_input as input;
pub use tui_donut_term as term;
pub use tui_donut_types as types;
