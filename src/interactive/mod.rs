//! Interactive TUI interface

mod app;
mod input;
mod rendering;

pub use app::{App, Message, MessageStyle, Reveal, Screen, run_tui};
pub use input::{action_for_key, is_interrupt};
