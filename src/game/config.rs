//! Play-field dimensions and shot tuning.
//!
//! All values are fixed at startup. Distances are in play-field units
//! (origin top-left, y grows downward), speeds in units per step.

use std::fmt;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::bubble::BubbleColor;

pub(super) fn plugin(app: &mut App) {
    app.init_resource::<ShooterConfig>();
}

/// Play-field width (fits 7 bubbles of radius 40 side by side).
pub const FIELD_WIDTH: f32 = 560.0;

/// Play-field height.
pub const FIELD_HEIGHT: f32 = 600.0;

/// Bubbles per row. Determines the bubble radius.
pub const COLUMNS: u32 = 7;

/// Rows the field is laid out for. Nothing in the simulation reads it.
pub const ROWS: u32 = 15;

/// Distance a shot travels per step.
pub const SHOT_SPEED: f32 = 5.0;

/// Distance a falling bubble drops per step.
pub const FALL_SPEED: f32 = 5.0;

/// Radius of the launcher disc. Visual only.
pub const LAUNCHER_RADIUS: f32 = 30.0;

/// Distance from the bottom edge to the launcher centre.
pub const LAUNCHER_OFFSET: f32 = 50.0;

/// Length of the aim line drawn from the launcher centre.
pub const AIM_LINE_LENGTH: f32 = 40.0;

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShooterConfig {
    pub width: f32,
    pub height: f32,
    pub columns: u32,
    pub rows: u32,
    pub shot_speed: f32,
    pub fall_speed: f32,
    pub launcher_radius: f32,
    pub launcher_offset: f32,
    pub aim_line_length: f32,
    pub palette: Vec<BubbleColor>,
}

impl Default for ShooterConfig {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            columns: COLUMNS,
            rows: ROWS,
            shot_speed: SHOT_SPEED,
            fall_speed: FALL_SPEED,
            launcher_radius: LAUNCHER_RADIUS,
            launcher_offset: LAUNCHER_OFFSET,
            aim_line_length: AIM_LINE_LENGTH,
            palette: BubbleColor::ALL.to_vec(),
        }
    }
}

impl ShooterConfig {
    /// Radius shared by every bubble: `width / (2 * columns)`.
    pub fn bubble_radius(&self) -> f32 {
        self.width / (2.0 * self.columns as f32)
    }

    /// Launcher centre, bottom-centre of the field.
    pub fn launcher_position(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height - self.launcher_offset)
    }

    /// Map a play-field point to Bevy world space (y up, centred on the origin).
    pub fn to_world(&self, point: Vec2) -> Vec2 {
        Vec2::new(point.x - self.width / 2.0, self.height / 2.0 - point.y)
    }

    /// Inverse of [`ShooterConfig::to_world`].
    pub fn to_field(&self, world: Vec2) -> Vec2 {
        Vec2::new(world.x + self.width / 2.0, self.height / 2.0 - world.y)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |value: f32| value.is_finite() && value > 0.0;

        if !positive(self.width) || !positive(self.height) {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.columns == 0 {
            return Err(ConfigError::NoColumns);
        }
        if !positive(self.shot_speed) || !positive(self.fall_speed) {
            return Err(ConfigError::InvalidSpeed {
                shot: self.shot_speed,
                fall: self.fall_speed,
            });
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(())
    }
}

/// Rejected [`ShooterConfig`] values.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidDimensions { width: f32, height: f32 },
    NoColumns,
    InvalidSpeed { shot: f32, fall: f32 },
    EmptyPalette,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDimensions { width, height } => {
                write!(f, "play field must be positive and finite, got {width}x{height}")
            }
            ConfigError::NoColumns => write!(f, "column count must be at least 1"),
            ConfigError::InvalidSpeed { shot, fall } => {
                write!(f, "speeds must be positive and finite, got shot={shot} fall={fall}")
            }
            ConfigError::EmptyPalette => write!(f, "color palette is empty"),
        }
    }
}

impl std::error::Error for ConfigError {}
