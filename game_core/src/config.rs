use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{PlayField, Params, Side};

/// Reasons a configuration is rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("`{0}` must be finite")]
    NotFinite(&'static str),
    #[error("`{0}` must be greater than zero")]
    NotPositive(&'static str),
    #[error("field bounds are inverted: min {min:?} is not below max {max:?}")]
    InvertedField { min: Vec2, max: Vec2 },
    #[error("`fixed_dt` ({fixed_dt}) must not exceed `max_dt` ({max_dt})")]
    FixedStepTooLarge { fixed_dt: f32, max_dt: f32 },
    #[error("`fixed_dt` ({fixed_dt}) needs over {max_substeps} steps per `max_dt`")]
    FixedStepTooSmall { fixed_dt: f32, max_substeps: u32 },
}

/// Game configuration
///
/// Missing fields fall back to [`Params`] when deserializing, so a partial
/// file only overrides what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub field_min: Vec2,
    pub field_max: Vec2,
    pub paddle_x_offset: f32,
    pub paddle_half_extent: Vec2,
    pub paddle_speed: f32,
    pub ball_half_extent: Vec2,
    pub launch_velocity: Vec2,
    pub max_dt: f32,
    pub fixed_dt: f32,
    pub win_score: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_min: Vec2::new(Params::FIELD_MIN_X, Params::FIELD_MIN_Y),
            field_max: Vec2::new(Params::FIELD_MAX_X, Params::FIELD_MAX_Y),
            paddle_x_offset: Params::PADDLE_X_OFFSET,
            paddle_half_extent: Vec2::new(
                Params::PADDLE_HALF_WIDTH,
                Params::PADDLE_HALF_HEIGHT,
            ),
            paddle_speed: Params::PADDLE_SPEED,
            ball_half_extent: Vec2::splat(Params::BALL_HALF_SIZE),
            launch_velocity: Vec2::new(Params::BALL_LAUNCH_X, Params::BALL_LAUNCH_Y),
            max_dt: Params::MAX_DT,
            fixed_dt: Params::FIXED_DT,
            win_score: Params::WIN_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self) -> PlayField {
        PlayField::new(self.field_min, self.field_max)
    }

    /// Get X position for paddle based on side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.field_min.x + self.paddle_x_offset,
            Side::Right => self.field_max.x - self.paddle_x_offset,
        }
    }

    /// Clamp paddle Y to field bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        crate::systems::clamp_center(
            y,
            self.paddle_half_extent.y,
            self.field_min.y,
            self.field_max.y,
        )
    }

    /// Check that every value is usable by the simulation.
    ///
    /// Paddles taller than the field are accepted; the clamp pins them to
    /// the field center.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let vectors = [
            ("field_min", self.field_min),
            ("field_max", self.field_max),
            ("paddle_half_extent", self.paddle_half_extent),
            ("ball_half_extent", self.ball_half_extent),
            ("launch_velocity", self.launch_velocity),
        ];
        for (name, v) in vectors {
            if !v.is_finite() {
                return Err(ConfigError::NotFinite(name));
            }
        }

        let scalars = [
            ("paddle_x_offset", self.paddle_x_offset),
            ("paddle_speed", self.paddle_speed),
            ("max_dt", self.max_dt),
            ("fixed_dt", self.fixed_dt),
        ];
        for (name, v) in scalars {
            if !v.is_finite() {
                return Err(ConfigError::NotFinite(name));
            }
        }

        if self.field_min.x >= self.field_max.x || self.field_min.y >= self.field_max.y {
            return Err(ConfigError::InvertedField {
                min: self.field_min,
                max: self.field_max,
            });
        }

        let positive = [
            ("paddle_half_extent.x", self.paddle_half_extent.x),
            ("paddle_half_extent.y", self.paddle_half_extent.y),
            ("ball_half_extent.x", self.ball_half_extent.x),
            ("ball_half_extent.y", self.ball_half_extent.y),
            ("paddle_speed", self.paddle_speed),
            ("max_dt", self.max_dt),
            ("fixed_dt", self.fixed_dt),
        ];
        for (name, v) in positive {
            if v <= 0.0 {
                return Err(ConfigError::NotPositive(name));
            }
        }
        if self.win_score == 0 {
            return Err(ConfigError::NotPositive("win_score"));
        }

        if self.fixed_dt > self.max_dt {
            return Err(ConfigError::FixedStepTooLarge {
                fixed_dt: self.fixed_dt,
                max_dt: self.max_dt,
            });
        }
        if self.fixed_dt * (Params::MAX_SUBSTEPS as f32) < self.max_dt {
            return Err(ConfigError::FixedStepTooSmall {
                fixed_dt: self.fixed_dt,
                max_substeps: Params::MAX_SUBSTEPS,
            });
        }

        Ok(())
    }
}
