use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::Config;

/// Side of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// Paddle - one per side, only ever moves vertically
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,         // Center; x is fixed per side
    pub vel_y: f32,        // Set from held input each step
    pub half_extent: Vec2, // Constant
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, half_extent: Vec2) -> Self {
        Self {
            side,
            pos,
            vel_y: 0.0,
            half_extent,
        }
    }

    /// Paddle centered vertically on its side of the field
    pub fn spawn(side: Side, config: &Config) -> Self {
        let y = config.field().center().y;
        Self::new(
            side,
            Vec2::new(config.paddle_x(side), y),
            config.paddle_half_extent,
        )
    }
}

/// Ball - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub half_extent: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, half_extent: Vec2) -> Self {
        Self {
            pos,
            vel,
            half_extent,
        }
    }

    /// Ball at field center with the launch velocity
    pub fn spawn(config: &Config) -> Self {
        Self::new(
            config.field().center(),
            config.launch_velocity,
            config.ball_half_extent,
        )
    }

    /// Put the ball back at the center and serve it away from `exit`.
    ///
    /// The horizontal direction is the negation of the pre-reset direction;
    /// a ball with no horizontal speed is served back into the field from
    /// the goal line it crossed. Vertical speed always restarts from the
    /// launch value.
    pub fn relaunch(&mut self, exit: crate::GoalLine, config: &Config) {
        let speed_x = config.launch_velocity.x.abs();
        let dir_x = if self.vel.x > 0.0 {
            -1.0
        } else if self.vel.x < 0.0 {
            1.0
        } else {
            match exit {
                crate::GoalLine::Left => 1.0,
                crate::GoalLine::Right => -1.0,
            }
        };

        self.pos = config.field().center();
        self.vel = Vec2::new(dir_x * speed_x, config.launch_velocity.y);
    }
}

/// The complete entity model: both paddles and the ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entities {
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
}

impl Entities {
    /// Initial layout at match start
    pub fn new(config: &Config) -> Self {
        Self {
            left: Paddle::spawn(Side::Left, config),
            right: Paddle::spawn(Side::Right, config),
            ball: Ball::spawn(config),
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GoalLine;

    #[test]
    fn test_entities_initial_layout() {
        let config = Config::new();
        let entities = Entities::new(&config);

        assert_eq!(entities.left.pos.x, config.paddle_x(Side::Left));
        assert_eq!(entities.right.pos.x, config.paddle_x(Side::Right));
        assert_eq!(entities.left.pos.y, 0.0);
        assert_eq!(entities.left.vel_y, 0.0);
        assert_eq!(entities.ball.pos, Vec2::ZERO);
        assert_eq!(entities.ball.vel, config.launch_velocity);
    }

    #[test]
    fn test_relaunch_reverses_horizontal_direction() {
        let config = Config::new();
        let mut ball = Ball::new(
            Vec2::new(-1.2, 0.4),
            Vec2::new(-0.8, -0.6),
            config.ball_half_extent,
        );

        ball.relaunch(GoalLine::Left, &config);

        assert_eq!(ball.pos, Vec2::ZERO);
        assert_eq!(ball.vel.x, config.launch_velocity.x.abs());
        assert_eq!(
            ball.vel.y, config.launch_velocity.y,
            "Vertical speed restarts"
        );
    }

    #[test]
    fn test_relaunch_stationary_ball_uses_exit_side() {
        let config = Config::new();
        let mut ball = Ball::new(Vec2::new(1.2, 0.0), Vec2::ZERO, config.ball_half_extent);
        ball.relaunch(GoalLine::Right, &config);
        assert!(ball.vel.x < 0.0, "Served back into the field");

        let mut ball = Ball::new(Vec2::new(-1.2, 0.0), Vec2::ZERO, config.ball_half_extent);
        ball.relaunch(GoalLine::Left, &config);
        assert!(ball.vel.x > 0.0);
    }
}
