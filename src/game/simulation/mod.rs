//! The shooter simulation: one launcher, one shot in flight, one falling bubble
//! and the field of settled bubbles.
//!
//! [`ShooterSimulation::step`] advances everything by one tick. Nothing here
//! knows about windows, meshes or the ECS beyond being stored as a resource,
//! so the whole thing can be driven tick by tick from tests.

use bevy::prelude::*;
use rand::{SeedableRng, rngs::StdRng};
use serde::Serialize;

use super::{
    bubble::{Bubble, BubbleColor, BubbleStatus},
    config::{ConfigError, ShooterConfig},
};

#[cfg(test)]
mod tests;

/// The fixed launcher at the bottom of the field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Launcher {
    pub position: Vec2,
    /// Aim angle in radians, play-field space (negative points up).
    pub angle: f32,
}

/// How a shot left flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ShotOutcome {
    /// Joined the field.
    Connected,
    /// Reached the bottom edge without touching anything.
    Discarded,
    /// Passed half height without touching anything and started falling.
    Fell,
}

#[derive(Resource, Debug, Clone)]
pub struct ShooterSimulation {
    config: ShooterConfig,
    radius: f32,
    field: Vec<Bubble>,
    active_shot: Option<Bubble>,
    falling_bubble: Option<Bubble>,
    /// Color of the bubble sitting in the launcher, fired next.
    loaded: BubbleColor,
    launcher: Launcher,
    score: u32,
    rng: StdRng,
}

impl ShooterSimulation {
    /// Create a simulation seeded from the OS.
    pub fn new(config: ShooterConfig) -> Result<Self, ConfigError> {
        Self::from_rng(config, StdRng::from_os_rng())
    }

    /// Create a simulation with a fixed seed, for reproducible color sequences.
    pub fn with_seed(config: ShooterConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::from_rng(config, StdRng::seed_from_u64(seed))
    }

    fn from_rng(config: ShooterConfig, mut rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let loaded = BubbleColor::random_from(&mut rng, &config.palette);
        let launcher = Launcher {
            position: config.launcher_position(),
            angle: 0.0,
        };

        Ok(Self {
            radius: config.bubble_radius(),
            config,
            field: Vec::new(),
            active_shot: None,
            falling_bubble: None,
            loaded,
            launcher,
            score: 0,
            rng,
        })
    }

    pub fn set_aim_angle(&mut self, angle: f32) {
        self.launcher.angle = angle;
    }

    /// Launch the loaded bubble along the aim angle.
    ///
    /// Returns `false` and changes nothing if a shot is already in flight.
    pub fn fire(&mut self) -> bool {
        if self.active_shot.is_some() {
            return false;
        }

        let mut shot = Bubble::new(self.launcher.position, self.radius, self.loaded);
        shot.velocity = Vec2::from_angle(self.launcher.angle) * self.config.shot_speed;
        self.active_shot = Some(shot);
        true
    }

    /// Advance one tick. Returns how the shot ended, if it ended this tick.
    pub fn step(&mut self) -> Option<ShotOutcome> {
        let outcome = self.advance_shot();
        self.advance_falling_bubble();
        outcome
    }

    /// True if `bubble` overlaps any settled bubble.
    pub fn collides_with_field(&self, bubble: &Bubble) -> bool {
        self.field.iter().any(|settled| bubble.overlaps(settled))
    }

    fn advance_shot(&mut self) -> Option<ShotOutcome> {
        let mut shot = self.active_shot.take()?;
        let r = self.radius;

        shot.position += shot.velocity;

        // No repositioning: the shot may sit past the wall for one tick.
        if shot.position.x - r < 0.0 || shot.position.x + r > self.config.width {
            shot.velocity.x = -shot.velocity.x;
        }

        if shot.position.y - r < 0.0 || self.collides_with_field(&shot) {
            shot.status = BubbleStatus::Connected;
            self.field.push(shot);
            self.reload();
            Some(ShotOutcome::Connected)
        } else if shot.position.y + r >= self.config.height {
            self.reload();
            Some(ShotOutcome::Discarded)
        } else if shot.position.y <= self.config.height / 2.0 {
            shot.velocity.y = self.config.fall_speed;
            shot.status = BubbleStatus::Falling;
            self.falling_bubble = Some(shot);
            self.reload();
            Some(ShotOutcome::Fell)
        } else {
            self.active_shot = Some(shot);
            None
        }
    }

    fn advance_falling_bubble(&mut self) {
        let Some(bubble) = self.falling_bubble.as_mut() else {
            return;
        };

        bubble.position.y += self.config.fall_speed;
        if bubble.position.y - self.radius > self.config.height {
            debug!("Falling bubble left the field");
            self.falling_bubble = None;
        }
    }

    /// Put a fresh bubble in the launcher.
    fn reload(&mut self) {
        self.loaded = BubbleColor::random_from(&mut self.rng, &self.config.palette);
    }

    pub fn config(&self) -> &ShooterConfig {
        &self.config
    }

    pub fn bubble_radius(&self) -> f32 {
        self.radius
    }

    /// Settled bubbles in the order they connected.
    pub fn field(&self) -> &[Bubble] {
        &self.field
    }

    pub fn active_shot(&self) -> Option<&Bubble> {
        self.active_shot.as_ref()
    }

    pub fn falling_bubble(&self) -> Option<&Bubble> {
        self.falling_bubble.as_ref()
    }

    pub fn launcher(&self) -> Launcher {
        self.launcher
    }

    pub fn loaded_color(&self) -> BubbleColor {
        self.loaded
    }

    /// Always zero: nothing pops, so nothing scores.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Copy out everything a renderer needs for one frame.
    pub fn snapshot(&self) -> SimulationSnapshot {
        let loaded = self.active_shot.is_none().then(|| BubbleView {
            x: self.launcher.position.x,
            y: self.launcher.position.y,
            radius: self.radius,
            color: self.loaded,
        });

        SimulationSnapshot {
            field: self.field.iter().map(BubbleView::from).collect(),
            active_shot: self.active_shot.as_ref().map(BubbleView::from),
            falling_bubble: self.falling_bubble.as_ref().map(BubbleView::from),
            loaded,
            launcher: LauncherView {
                x: self.launcher.position.x,
                y: self.launcher.position.y,
                angle: self.launcher.angle,
            },
            score: self.score,
        }
    }
}

/// Read-only copy of the simulation state, in play-field coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationSnapshot {
    pub field: Vec<BubbleView>,
    pub active_shot: Option<BubbleView>,
    pub falling_bubble: Option<BubbleView>,
    /// The bubble waiting in the launcher. Absent while a shot is in flight.
    pub loaded: Option<BubbleView>,
    pub launcher: LauncherView,
    pub score: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BubbleView {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: BubbleColor,
}

impl From<&Bubble> for BubbleView {
    fn from(bubble: &Bubble) -> Self {
        Self {
            x: bubble.position.x,
            y: bubble.position.y,
            radius: bubble.radius,
            color: bubble.color,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LauncherView {
    pub x: f32,
    pub y: f32,
    pub angle: f32,
}
