//! The main game module for the bubble shooter.
//!
//! This module contains all the gameplay logic including:
//! - Play-field configuration
//! - Bubble colors and states
//! - The shooter simulation (flight, collision, falling)
//! - Launcher input
//! - Drawing and the debug overlay

pub mod bubble;
pub mod config;
mod debug;
pub mod projectile;
mod render;
pub mod shooter;
pub mod simulation;

use bevy::prelude::*;

pub(super) fn plugin(app: &mut App) {
    configure_headless(app);
    app.add_plugins((shooter::plugin, render::plugin, debug::plugin));
}

/// Gameplay without input devices or rendering.
pub fn configure_headless(app: &mut App) {
    app.add_plugins((config::plugin, bubble::plugin, projectile::plugin));
}
