use std::collections::HashSet;

use macroquad::prelude::*;

/// What the simulation should do this frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Close the window and leave the frame loop
    Quit,
    /// Step one generation per released key
    Advance(usize),
    /// Nothing happened; just redraw
    Idle,
}

/// Map one frame of input to a command.
/// Every released key is one advance, so two keys released in the same frame
/// step two generations. Quitting wins over advancing.
pub fn classify(released: &HashSet<KeyCode>, quit_requested: bool) -> Command {
    if quit_requested {
        Command::Quit
    } else if !released.is_empty() {
        Command::Advance(released.len())
    } else {
        Command::Idle
    }
}

/// Poll macroquad for this frame's command.
/// Requires `prevent_quit()` to have been called so closing the window is reported here.
pub fn poll() -> Command {
    classify(&get_keys_released(), is_quit_requested())
}
