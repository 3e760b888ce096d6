//! UI configuration
//!
//! Keybindings for navigate mode and the named styles the form uses.

pub mod keybindings;
pub mod styles;

pub use keybindings::{Action, KeyBindings};
pub use styles::Styles;
