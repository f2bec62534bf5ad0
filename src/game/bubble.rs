//! Bubbles - the only game objects.
//!
//! Every bubble has the same radius. A bubble is flying while it is the shot,
//! connected once it has joined the field, or falling after it missed.

use bevy::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub(super) fn plugin(app: &mut App) {
    app.register_type::<BubbleColor>();
    app.register_type::<BubbleStatus>();
}

/// The five bubble colors.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Default, Serialize, Deserialize,
)]
pub enum BubbleColor {
    #[default]
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
}

impl BubbleColor {
    /// Get the actual color for rendering.
    pub fn to_color(self) -> Color {
        match self {
            BubbleColor::Red => Color::srgb(0.9, 0.2, 0.2),
            BubbleColor::Green => Color::srgb(0.2, 0.8, 0.3),
            BubbleColor::Blue => Color::srgb(0.2, 0.4, 0.9),
            BubbleColor::Yellow => Color::srgb(0.95, 0.85, 0.2),
            BubbleColor::Purple => Color::srgb(0.7, 0.3, 0.8),
        }
    }

    /// Pick a color uniformly from `palette`, falling back to the default
    /// color when the palette is empty.
    pub fn random_from(rng: &mut impl Rng, palette: &[BubbleColor]) -> Self {
        if palette.is_empty() {
            return Self::default();
        }
        palette[rng.random_range(0..palette.len())]
    }

    /// Get all possible bubble colors.
    pub const ALL: [BubbleColor; 5] = [
        BubbleColor::Red,
        BubbleColor::Green,
        BubbleColor::Blue,
        BubbleColor::Yellow,
        BubbleColor::Purple,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect, Default, Serialize, Deserialize)]
pub enum BubbleStatus {
    #[default]
    Flying,
    Connected,
    Falling,
}

/// A single bubble in play-field space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bubble {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub color: BubbleColor,
    pub status: BubbleStatus,
}

impl Bubble {
    /// A stationary flying bubble, the state every bubble starts in.
    pub fn new(position: Vec2, radius: f32, color: BubbleColor) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            radius,
            color,
            status: BubbleStatus::Flying,
        }
    }

    /// True if the two circles overlap by any amount. Touching exactly does not count.
    pub fn overlaps(&self, other: &Bubble) -> bool {
        self.position.distance(other.position) < self.radius + other.radius
    }
}
