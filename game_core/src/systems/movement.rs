use crate::{Ball, Config, Entities, InputState, Paddle, Side};

/// Clamp a center so its extent stays inside `lower..=upper`.
///
/// If the extent is wider than the span it cannot fit either way, and the
/// center is pinned to the midpoint of the span. A NaN center ends up at the
/// lower limit.
pub fn clamp_center(center: f32, half_extent: f32, lower: f32, upper: f32) -> f32 {
    let lo = lower + half_extent;
    let hi = upper - half_extent;
    if lo > hi {
        return (lower + upper) * 0.5;
    }
    center.max(lo).min(hi)
}

/// Set paddle velocities from held input
pub fn apply_input(entities: &mut Entities, input: &InputState, config: &Config) {
    for side in [Side::Left, Side::Right] {
        let paddle = entities.paddle_mut(side);
        paddle.vel_y = input.dir(side) as f32 * config.paddle_speed;
    }
}

/// Integrate paddle positions
pub fn move_paddles(entities: &mut Entities, dt: f32) {
    for paddle in [&mut entities.left, &mut entities.right] {
        paddle.pos.y += paddle.vel_y * dt;
    }
}

/// Keep both paddles fully inside the field; never touches velocity
pub fn clamp_paddles(entities: &mut Entities, config: &Config) {
    for paddle in [&mut entities.left, &mut entities.right] {
        clamp_paddle(paddle, config);
    }
}

fn clamp_paddle(paddle: &mut Paddle, config: &Config) {
    paddle.pos.y = clamp_center(
        paddle.pos.y,
        paddle.half_extent.y,
        config.field_min.y,
        config.field_max.y,
    );
}

/// Move ball based on velocity
pub fn move_ball(ball: &mut Ball, dt: f32) {
    ball.pos += ball.vel * dt;
}
