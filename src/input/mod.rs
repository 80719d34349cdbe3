//! Keyboard input: bindings from key events to table commands.

mod command;
mod keybindings;

pub use command::Command;
pub use keybindings::{KeyCombo, KeybindingConfig};
