//! Keyboard mapping for the evil circle

/// DOM `keyCode` values for the arrow keys
pub const KEY_LEFT: u32 = 37;
pub const KEY_UP: u32 = 38;
pub const KEY_RIGHT: u32 = 39;
pub const KEY_DOWN: u32 = 40;

/// One arrow-key step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDirection {
    Left,
    Up,
    Right,
    Down,
}

impl KeyDirection {
    /// Map a legacy `keyCode`; anything but the arrows is ignored
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            KEY_LEFT => Some(KeyDirection::Left),
            KEY_UP => Some(KeyDirection::Up),
            KEY_RIGHT => Some(KeyDirection::Right),
            KEY_DOWN => Some(KeyDirection::Down),
            _ => None,
        }
    }

    /// Map a `KeyboardEvent.key` name
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" | "Left" => Some(KeyDirection::Left),
            "ArrowUp" | "Up" => Some(KeyDirection::Up),
            "ArrowRight" | "Right" => Some(KeyDirection::Right),
            "ArrowDown" | "Down" => Some(KeyDirection::Down),
            _ => None,
        }
    }

    /// Prefer the key code, fall back to the key name (some browsers report 0)
    pub fn from_event(code: u32, name: &str) -> Option<Self> {
        Self::from_key_code(code).or_else(|| Self::from_key_name(name))
    }
}
