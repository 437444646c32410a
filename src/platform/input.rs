//! Keyboard mapping
//!
//! Keys are matched on `KeyboardEvent.code`, the physical key, so the layout
//! does not matter.

use crate::sim::{InputEvent, Key};

/// Map a DOM `KeyboardEvent.code` to a game key
pub fn key_from_code(code: &str) -> Option<Key> {
    match code {
        "Space" => Some(Key::Boost),
        "KeyR" => Some(Key::Restart),
        "KeyP" => Some(Key::Pause),
        "KeyB" => Some(Key::UseBonus),
        _ => None,
    }
}

/// Map a DOM key event (`keydown` when `pressed`) to an input event
pub fn event_from_code(code: &str, pressed: bool) -> Option<InputEvent> {
    let key = key_from_code(code)?;
    Some(if pressed {
        InputEvent::Down(key)
    } else {
        InputEvent::Up(key)
    })
}
