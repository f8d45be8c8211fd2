use game_core::InputState;

/// Key presses replayed on a fixed schedule: (frame, key, pressed)
const SCRIPT: &[(u32, &str, bool)] = &[
    (30, "w", true),
    (75, "w", false),
    (90, "ArrowDown", true),
    (150, "ArrowDown", false),
    (180, "s", true),
    (180, "ArrowUp", true),
    (260, "s", false),
    (300, "ArrowUp", false),
];

/// Stand-in for a keyboard: presses and releases keys by frame number,
/// repeating the script every `period` frames.
pub struct ScriptedInput {
    state: InputState,
    period: u32,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self {
            state: InputState::new(),
            period: 320,
        }
    }

    /// Input snapshot for `frame`
    pub fn poll(&mut self, frame: u32) -> InputState {
        let at = frame % self.period;
        for &(when, key, pressed) in SCRIPT {
            if when != at {
                continue;
            }
            if pressed {
                self.state.key_down(key);
            } else {
                self.state.key_up(key);
            }
        }
        self.state
    }
}

impl Default for ScriptedInput {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Side;

    #[test]
    fn test_script_holds_keys_between_events() {
        let mut input = ScriptedInput::new();
        let mut states = (0..=100).map(|frame| input.poll(frame));

        assert_eq!(states.next().map(|s| s.dir(Side::Left)), Some(0));
        let held = states.nth(49).unwrap();
        assert_eq!(held.dir(Side::Left), 1, "w held at frame 50");
        let released = states.nth(29).unwrap();
        assert_eq!(released.dir(Side::Left), 0, "w released at frame 80");
    }

    #[test]
    fn test_script_repeats() {
        let mut input = ScriptedInput::new();
        let first: Vec<_> = (0..320).map(|frame| input.poll(frame)).collect();
        let second: Vec<_> = (320..640).map(|frame| input.poll(frame)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_default_starts_idle() {
        let mut input = ScriptedInput::default();
        assert_eq!(input.poll(0), InputState::new());
    }
}
