use bevy::prelude::*;

/// Black text for light backgrounds
pub const LABEL_TEXT: Color = Color::srgb(0.1, 0.1, 0.1);

/// Black text for headers
pub const HEADER_TEXT: Color = Color::srgb(0.1, 0.1, 0.1);

/// Off-white play-field background
pub const BACKGROUND: Color = Color::srgb(0.96, 0.92, 0.84);

/// Translucent backdrop behind the pause menu
pub const OVERLAY_BACKGROUND: Color = Color::srgba(0.96, 0.92, 0.84, 0.95);

pub const LAUNCHER: Color = Color::srgb(0.5, 0.5, 0.5);

pub const AIM_LINE: Color = Color::BLACK;
