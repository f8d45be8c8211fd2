pub mod clock;
pub mod components;
pub mod config;
pub mod field;
pub mod game;
pub mod input;
pub mod params;
pub mod resources;
pub mod snapshot;
pub mod systems;

pub use clock::*;
pub use components::*;
pub use config::*;
pub use field::*;
pub use game::*;
pub use input::*;
pub use params::*;
pub use resources::*;
pub use snapshot::*;

use systems::*;

/// Advance the entity model by one step of `dt` seconds.
///
/// `dt` is untrusted: zero, negative and non-finite values advance nothing,
/// and values above `config.max_dt` are cut down to it. The paddle clamp runs
/// on every call. The result depends only on the arguments.
pub fn step(
    entities: &Entities,
    input: &InputState,
    dt: f32,
    config: &Config,
) -> (Entities, Events) {
    let mut next = *entities;
    let mut events = Events::new();
    let dt = sanitize_dt(dt).min(config.max_dt);

    // 1. Paddle velocities from held keys
    apply_input(&mut next, input, config);

    // 2. Move paddles, then keep them on the field
    move_paddles(&mut next, dt);
    clamp_paddles(&mut next, config);

    if dt == 0.0 {
        return (next, events);
    }

    // 3. Move ball
    move_ball(&mut next.ball, dt);

    // 4. Walls, then paddles
    let field = config.field();
    bounce_off_walls(&mut next.ball, &field, &mut events);
    collide_paddles(&mut next, &mut events);
    if events.ball_hit_paddle {
        // A push off the end of a paddle parked at a wall can leave the ball
        // past that wall
        bounce_off_walls(&mut next.ball, &field, &mut events);
    }

    // 5. Check scoring (ball crossed a goal line)
    check_scoring(&mut next.ball, config, &mut events);

    (next, events)
}
