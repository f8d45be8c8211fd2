/// Game tuning parameters for Pong
///
/// All distances are in normalized field units: the default field spans
/// `[-1, 1]` on both axes with +y pointing up.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_MIN_X: f32 = -1.0;
    pub const FIELD_MIN_Y: f32 = -1.0;
    pub const FIELD_MAX_X: f32 = 1.0;
    pub const FIELD_MAX_Y: f32 = 1.0;

    // Paddle
    pub const PADDLE_X_OFFSET: f32 = 0.1; // Distance of paddle center from its goal line
    pub const PADDLE_HALF_WIDTH: f32 = 0.025;
    pub const PADDLE_HALF_HEIGHT: f32 = 0.2;
    pub const PADDLE_SPEED: f32 = 1.5; // units per second

    // Ball
    pub const BALL_HALF_SIZE: f32 = 0.025;
    pub const BALL_LAUNCH_X: f32 = 0.8;
    pub const BALL_LAUNCH_Y: f32 = 0.6;

    // Score
    pub const WIN_SCORE: u8 = 11;

    // Physics
    pub const FIXED_DT: f32 = 1.0 / 120.0;
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
    pub const MAX_SUBSTEPS: u32 = 1000; // Per host frame
}
