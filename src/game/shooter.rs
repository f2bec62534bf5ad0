//! Pointer and keyboard input for the launcher.
//!
//! The player aims with the mouse and fires with a click (or Space).
//! Nothing here touches the simulation directly; it only writes messages.

use bevy::{prelude::*, window::CursorMoved};

use super::{
    config::ShooterConfig,
    projectile::{AimShooter, FireShot},
};
use crate::{AppSystems, PausableSystems, screens::Screen};

pub(super) fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        (update_aim_angle, handle_fire_input)
            .in_set(AppSystems::RecordInput)
            .in_set(PausableSystems)
            .run_if(in_state(Screen::Gameplay)),
    );
}

/// Angle from the launcher to `target`, both in play-field space.
pub fn aim_angle(launcher: Vec2, target: Vec2) -> f32 {
    (target.y - launcher.y).atan2(target.x - launcher.x)
}

/// Re-aim whenever the cursor moves.
fn update_aim_angle(
    mut cursor_events: MessageReader<CursorMoved>,
    camera_query: Query<(&Camera, &GlobalTransform)>,
    config: Res<ShooterConfig>,
    mut aim_events: MessageWriter<AimShooter>,
) {
    let Some(cursor) = cursor_events.read().last() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };
    let Ok(world) = camera.viewport_to_world_2d(camera_transform, cursor.position) else {
        return;
    };

    let target = config.to_field(world);
    aim_events.write(AimShooter {
        angle: aim_angle(config.launcher_position(), target),
    });
}

/// Handle fire input (mouse click or spacebar).
fn handle_fire_input(
    mouse_input: Res<ButtonInput<MouseButton>>,
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut fire_events: MessageWriter<FireShot>,
) {
    if mouse_input.just_pressed(MouseButton::Left) || keyboard_input.just_pressed(KeyCode::Space)
    {
        fire_events.write(FireShot);
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    use super::*;

    #[test]
    fn pointing_up_is_negative_half_pi() {
        let launcher = Vec2::new(280.0, 550.0);
        assert!((aim_angle(launcher, Vec2::new(280.0, 100.0)) + FRAC_PI_2).abs() < 1e-6);
        assert!((aim_angle(launcher, Vec2::new(380.0, 450.0)) + FRAC_PI_4).abs() < 1e-6);
        assert_eq!(aim_angle(launcher, Vec2::new(500.0, 550.0)), 0.0);
    }
}
