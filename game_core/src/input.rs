//! Held-direction input snapshot and keyboard mapping

use crate::Side;

/// Which directional keys are held this frame.
///
/// Opposite directions held together cancel out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Movement direction for a paddle: 1 = up, 0 = stop, -1 = down
    pub fn dir(&self, side: Side) -> i8 {
        let (up, down) = match side {
            Side::Left => (self.left_up, self.left_down),
            Side::Right => (self.right_up, self.right_down),
        };
        up as i8 - down as i8
    }

    /// Handle key down event. Returns false for keys that do not steer a paddle.
    pub fn key_down(&mut self, key: &str) -> bool {
        self.set_key(key, true)
    }

    /// Handle key up event
    pub fn key_up(&mut self, key: &str) -> bool {
        self.set_key(key, false)
    }

    fn set_key(&mut self, key: &str, held: bool) -> bool {
        let slot = match key {
            "w" | "W" => &mut self.left_up,
            "s" | "S" => &mut self.left_down,
            "ArrowUp" => &mut self.right_up,
            "ArrowDown" => &mut self.right_down,
            _ => return false,
        };
        *slot = held;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dir_from_held_keys() {
        let input = InputState {
            left_up: true,
            right_down: true,
            ..InputState::new()
        };
        assert_eq!(input.dir(Side::Left), 1);
        assert_eq!(input.dir(Side::Right), -1);
        assert_eq!(InputState::new().dir(Side::Left), 0);
    }

    #[test]
    fn test_opposite_directions_cancel() {
        let input = InputState {
            left_up: true,
            left_down: true,
            ..InputState::new()
        };
        assert_eq!(input.dir(Side::Left), 0);
    }

    #[test]
    fn test_key_mapping() {
        let mut input = InputState::new();
        assert!(input.key_down("w"));
        assert!(input.key_down("ArrowDown"));
        assert!(!input.key_down("Escape"));
        assert_eq!(input.dir(Side::Left), 1);
        assert_eq!(input.dir(Side::Right), -1);

        assert!(input.key_up("W"));
        assert!(input.key_up("ArrowDown"));
        assert_eq!(input, InputState::new());
    }
}
