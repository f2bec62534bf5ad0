//! Debug helpers.
//!
//! - 'D' toggles an overlay with the walls, the ceiling, the half-height line
//!   where missed shots start falling, and each bubble's collision circle.
//! - 'J' logs the current simulation snapshot as JSON.

use bevy::{color::palettes::css, input::common_conditions::input_just_pressed, prelude::*};

use super::simulation::ShooterSimulation;
use crate::screens::Screen;

pub(super) fn plugin(app: &mut App) {
    app.init_resource::<DebugOverlayVisible>();

    app.add_systems(
        Update,
        toggle_debug.run_if(in_state(Screen::Gameplay).and(input_just_pressed(KeyCode::KeyD))),
    );

    app.add_systems(
        Update,
        draw_debug_overlay.run_if(
            in_state(Screen::Gameplay)
                .and(debug_visible)
                .and(resource_exists::<ShooterSimulation>),
        ),
    );

    app.add_systems(
        Update,
        dump_snapshot.run_if(
            in_state(Screen::Gameplay)
                .and(input_just_pressed(KeyCode::KeyJ))
                .and(resource_exists::<ShooterSimulation>),
        ),
    );
}

/// Resource to track if the debug overlay is visible.
#[derive(Resource, Default)]
pub struct DebugOverlayVisible(pub bool);

fn debug_visible(debug: Res<DebugOverlayVisible>) -> bool {
    debug.0
}

fn toggle_debug(mut debug: ResMut<DebugOverlayVisible>) {
    debug.0 = !debug.0;
    let state = if debug.0 { "ON" } else { "OFF" };
    info!("Debug overlay: {}", state);
}

fn draw_debug_overlay(mut gizmos: Gizmos, simulation: Res<ShooterSimulation>) {
    let config = simulation.config();
    let (w, h) = (config.width, config.height);
    let corner = |x: f32, y: f32| config.to_world(Vec2::new(x, y));

    let wall_color = css::ORANGE.with_alpha(0.8);
    gizmos.line_2d(corner(0.0, 0.0), corner(0.0, h), wall_color);
    gizmos.line_2d(corner(w, 0.0), corner(w, h), wall_color);
    gizmos.line_2d(corner(0.0, 0.0), corner(w, 0.0), wall_color);
    gizmos.line_2d(corner(0.0, h), corner(w, h), css::RED.with_alpha(0.6));

    // Shots that reach this line without touching anything fall.
    gizmos.line_2d(
        corner(0.0, h / 2.0),
        corner(w, h / 2.0),
        css::INDIAN_RED.with_alpha(0.5),
    );

    for bubble in simulation.field() {
        gizmos.circle_2d(
            Isometry2d::from_translation(config.to_world(bubble.position)),
            bubble.radius,
            css::LIMEGREEN.with_alpha(0.6),
        );
    }
    if let Some(shot) = simulation.active_shot() {
        let at = config.to_world(shot.position);
        gizmos.circle_2d(Isometry2d::from_translation(at), shot.radius, css::AQUA);
        // Velocity, scaled up so it is visible.
        let velocity = Vec2::new(shot.velocity.x, -shot.velocity.y);
        gizmos.line_2d(at, at + velocity * 10.0, css::AQUA);
    }
}

fn dump_snapshot(simulation: Res<ShooterSimulation>) {
    match serde_json::to_string_pretty(&simulation.snapshot()) {
        Ok(json) => info!("Simulation snapshot:\n{}", json),
        Err(e) => warn!("Failed to serialize snapshot: {}", e),
    }
}
