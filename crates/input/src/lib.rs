//! Terminal stop keys.
//!
//! Raw mode swallows Ctrl-C before it becomes SIGINT, so the terminal backend
//! has to notice the key itself. This crate maps `crossterm` key events to a
//! stop request and offers a non-blocking poll over pending events. There is
//! no other interaction: the animation is not steerable from the keyboard.

pub mod map;

pub use map::{is_stop_key, poll_stop};
