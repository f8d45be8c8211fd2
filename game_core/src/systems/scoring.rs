use crate::{Ball, Config, Events, GoalLine};

/// Check if the ball left the field through a goal line.
///
/// The side opposite the crossed line scores and the ball is relaunched from
/// the center.
pub fn check_scoring(ball: &mut Ball, config: &Config, events: &mut Events) {
    let Some(exit) = config.field().goal_crossed(ball.pos) else {
        return;
    };

    match exit {
        // Right player scores
        GoalLine::Left => events.right_scored = true,
        // Left player scores
        GoalLine::Right => events.left_scored = true,
    }
    log::debug!("ball crossed the {exit:?} goal line at {:?}", ball.pos);

    ball.relaunch(exit, config);
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn ball_at(pos: Vec2, vel: Vec2) -> Ball {
        Ball::new(pos, vel, Config::new().ball_half_extent)
    }

    #[test]
    fn test_right_player_scores_when_ball_exits_left() {
        let config = Config::new();
        let mut events = Events::new();
        let mut ball = ball_at(Vec2::new(-1.05, 0.3), Vec2::new(-0.8, 0.6));

        check_scoring(&mut ball, &config, &mut events);

        assert!(events.right_scored, "Should trigger right_scored event");
        assert!(!events.left_scored);
    }

    #[test]
    fn test_left_player_scores_when_ball_exits_right() {
        let config = Config::new();
        let mut events = Events::new();
        let mut ball = ball_at(Vec2::new(1.05, 0.0), Vec2::new(0.8, 0.0));

        check_scoring(&mut ball, &config, &mut events);

        assert!(events.left_scored, "Should trigger left_scored event");
        assert!(!events.right_scored);
    }

    #[test]
    fn test_ball_resets_after_scoring() {
        let config = Config::new();
        let mut events = Events::new();
        let mut ball = ball_at(Vec2::new(1.05, -0.7), Vec2::new(0.8, -0.6));

        check_scoring(&mut ball, &config, &mut events);

        assert_eq!(
            ball.pos,
            config.field().center(),
            "Ball should reset to center"
        );
        assert_eq!(ball.vel.x, -config.launch_velocity.x);
        assert_eq!(
            ball.vel.y, config.launch_velocity.y,
            "Vertical speed is not carried over"
        );
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let config = Config::new();
        let mut events = Events::new();
        let mut ball = ball_at(Vec2::new(0.99, 0.0), Vec2::new(0.8, 0.6));
        let before = ball;

        check_scoring(&mut ball, &config, &mut events);

        assert_eq!(ball, before);
        assert_eq!(events, Events::new(), "No scoring events");
    }
}
