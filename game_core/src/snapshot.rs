//! Read-only view of the simulation handed to render adapters

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{Entities, Paddle, Score};

/// Position and size of a paddle as drawn
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddleView {
    pub pos: Vec2,
    pub half_extent: Vec2,
}

impl From<&Paddle> for PaddleView {
    fn from(paddle: &Paddle) -> Self {
        Self {
            pos: paddle.pos,
            half_extent: paddle.half_extent,
        }
    }
}

/// Post-step state in field coordinates (+y up, centers and half extents)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u32,
    pub ball_pos: Vec2,
    pub ball_vel: Vec2,
    pub ball_half_extent: Vec2,
    pub paddle_left: PaddleView,
    pub paddle_right: PaddleView,
    pub score: Score,
}

impl Snapshot {
    pub fn capture(tick: u32, entities: &Entities, score: Score) -> Self {
        Self {
            tick,
            ball_pos: entities.ball.pos,
            ball_vel: entities.ball.vel,
            ball_half_extent: entities.ball.half_extent,
            paddle_left: PaddleView::from(&entities.left),
            paddle_right: PaddleView::from(&entities.right),
            score,
        }
    }
}
