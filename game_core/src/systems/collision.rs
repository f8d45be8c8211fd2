use glam::Vec2;

use super::movement::clamp_center;
use crate::{Ball, Entities, Events, Paddle, PlayField};

/// Coordinate axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    fn get(self, v: Vec2) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
        }
    }

    fn get_mut(self, v: &mut Vec2) -> &mut f32 {
        match self {
            Axis::X => &mut v.x,
            Axis::Y => &mut v.y,
        }
    }
}

/// How to separate an overlapping ball from a paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    /// Separating axis: the one with the smaller overlap
    pub axis: Axis,
    /// Penetration depth along `axis`, always > 0
    pub overlap: f32,
    /// Push direction along `axis`, +1.0 or -1.0
    pub direction: f32,
}

impl Resolution {
    /// Push the ball out of overlap and send it away from the paddle on the
    /// separating axis. The other axis is left alone.
    pub fn apply(&self, ball: &mut Ball) {
        *self.axis.get_mut(&mut ball.pos) += self.overlap * self.direction;
        let vel = self.axis.get_mut(&mut ball.vel);
        *vel = vel.abs() * self.direction;
    }
}

/// AABB overlap test between ball and paddle.
///
/// Returns `None` unless the boxes overlap by a positive amount on both
/// axes; touching edges do not count. Equal overlaps resolve on X.
pub fn resolve(ball: &Ball, paddle: &Paddle) -> Option<Resolution> {
    let delta = ball.pos - paddle.pos;
    let overlap = (ball.half_extent + paddle.half_extent) - delta.abs();

    if !(overlap.x > 0.0 && overlap.y > 0.0) {
        return None;
    }

    let axis = if overlap.x <= overlap.y { Axis::X } else { Axis::Y };
    let offset = axis.get(delta);
    let direction = if offset > 0.0 {
        1.0
    } else if offset < 0.0 {
        -1.0
    } else if axis.get(ball.vel) > 0.0 {
        // Dead center: push back the way it came
        -1.0
    } else {
        1.0
    };

    Some(Resolution {
        axis,
        overlap: axis.get(overlap),
        direction,
    })
}

/// Bounce the ball off the top and bottom walls.
///
/// A ball whose edge has passed a wall is placed flush against it and sent
/// back into the field. A ball at least as tall as the field is held at the
/// field's vertical center and never bounces.
pub fn bounce_off_walls(ball: &mut Ball, field: &PlayField, events: &mut Events) {
    let half_height = ball.half_extent.y;

    if 2.0 * half_height >= field.top() - field.bottom() {
        ball.pos.y = clamp_center(ball.pos.y, half_height, field.bottom(), field.top());
        return;
    }

    if ball.pos.y + half_height > field.top() {
        ball.pos.y = field.top() - half_height;
        ball.vel.y = -ball.vel.y.abs();
        events.ball_hit_wall = true;
    } else if ball.pos.y - half_height < field.bottom() {
        ball.pos.y = field.bottom() + half_height;
        ball.vel.y = ball.vel.y.abs();
        events.ball_hit_wall = true;
    }
}

/// Resolve the ball against the left paddle, then the right
pub fn collide_paddles(entities: &mut Entities, events: &mut Events) {
    for paddle in [entities.left, entities.right] {
        if let Some(resolution) = resolve(&entities.ball, &paddle) {
            resolution.apply(&mut entities.ball);
            events.ball_hit_paddle = true;
        }
    }
}
