use serde::{Deserialize, Serialize};

use crate::Side;

/// Time record for one host frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u8,  // Left player score
    pub right: u8, // Right player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left = self.left.saturating_add(1),
            Side::Right => self.right = self.right.saturating_add(1),
        }
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Events that occurred during a step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold another step's events into this one
    pub fn merge(&mut self, other: Events) {
        self.left_scored |= other.left_scored;
        self.right_scored |= other.right_scored;
        self.ball_hit_paddle |= other.ball_hit_paddle;
        self.ball_hit_wall |= other.ball_hit_wall;
    }

    pub fn scorer(&self) -> Option<Side> {
        if self.left_scored {
            Some(Side::Left)
        } else if self.right_scored {
            Some(Side::Right)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment() {
        let mut score = Score::new();
        assert_eq!(score.left, 0);
        score.increment(Side::Left);
        score.increment(Side::Left);
        score.increment(Side::Right);
        assert_eq!(score.left, 2);
        assert_eq!(score.right, 1);
    }

    #[test]
    fn test_score_saturates() {
        let mut score = Score {
            left: u8::MAX,
            right: 0,
        };
        score.increment(Side::Left);
        assert_eq!(score.left, u8::MAX);
    }

    #[test]
    fn test_score_has_winner() {
        let mut score = Score::new();
        for _ in 0..10 {
            score.increment(Side::Right);
        }
        assert_eq!(score.has_winner(11), None, "No winner below threshold");
        score.increment(Side::Right);
        assert_eq!(
            score.has_winner(11),
            Some(Side::Right),
            "Right player should win at 11"
        );
    }

    #[test]
    fn test_events_merge() {
        let mut events = Events {
            ball_hit_wall: true,
            ..Events::new()
        };
        events.merge(Events {
            right_scored: true,
            ..Events::new()
        });

        assert!(events.ball_hit_wall);
        assert!(events.right_scored);
        assert!(!events.ball_hit_paddle);
        assert_eq!(events.scorer(), Some(Side::Right));
    }
}
