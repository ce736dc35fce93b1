//! Raw key codes delivered by the console keyboard.
//!
//! The codes are fixed by the target keyboard controller and are not
//! remappable. Drivers for other keyboards translate into these codes
//! (see [`crate::io::IO`]).

use num_enum::{IntoPrimitive, TryFromPrimitive};

#[derive(Debug, Eq, PartialEq, Copy, Clone, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum Key {
    /// Reserved, no editor reacts to it
    Stop = 0x03,
    Return = 0x0D,
    Down = 0x11,
    Delete = 0x14,
    Right = 0x1D,
    Up = 0x91,
    /// Reserved, no editor reacts to it
    Insert = 0x94,
    Left = 0x9D,
}

impl Key {
    fn new(code: u8) -> Option<Self> {
        Self::try_from(code).ok()
    }
}

/// Default printability predicate: ASCII graphic characters and space.
pub fn is_ascii_printable(code: u8) -> bool {
    (0x20..=0x7e).contains(&code)
}

/// Keystroke as seen by an editor
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum Action {
    /// Text for the line editor
    Print(u8),
    Key(Key),
    /// Any other code. Field editors with their own character set still
    /// look at it.
    Char(u8),
}

impl Action {
    /// Classify a raw key code. Codes accepted by `is_printable` are
    /// printed even when they collide with the key table.
    pub fn classify(code: u8, is_printable: impl Fn(u8) -> bool) -> Self {
        if is_printable(code) {
            Action::Print(code)
        } else if let Some(key) = Key::new(code) {
            Action::Key(key)
        } else {
            Action::Char(code)
        }
    }
}
