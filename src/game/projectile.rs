//! Runs the simulation inside the app.
//!
//! Input arrives as [`AimShooter`] and [`FireShot`] messages, the simulation is
//! stepped once per frame, and every finished shot is announced with
//! [`ShotResolved`].

use bevy::prelude::*;

use super::{
    config::ShooterConfig,
    simulation::{ShooterSimulation, ShotOutcome},
};
use crate::{AppSystems, PausableSystems, screens::Screen};

pub(super) fn plugin(app: &mut App) {
    app.add_message::<AimShooter>();
    app.add_message::<FireShot>();
    app.add_message::<ShotResolved>();

    app.add_systems(OnEnter(Screen::Gameplay), setup_simulation);

    app.add_systems(
        Update,
        (apply_shooter_input, advance_simulation, log_shot_outcomes)
            .chain()
            .in_set(AppSystems::Update)
            .in_set(PausableSystems)
            .run_if(in_state(Screen::Gameplay).and(resource_exists::<ShooterSimulation>)),
    );
}

/// Message to point the launcher at `angle` radians (play-field space).
#[derive(Message, Debug, Clone, Copy)]
pub struct AimShooter {
    pub angle: f32,
}

/// Message to launch the loaded bubble. Ignored while a shot is in flight.
#[derive(Message, Debug, Clone, Copy)]
pub struct FireShot;

/// Message sent when the shot in flight connects, falls, or leaves the field.
#[derive(Message, Debug, Clone, Copy)]
pub struct ShotResolved {
    pub outcome: ShotOutcome,
}

/// Build a fresh simulation from the current config.
fn setup_simulation(mut commands: Commands, config: Res<ShooterConfig>) {
    match ShooterSimulation::new(config.clone()) {
        Ok(simulation) => {
            info!(
                "Simulation ready: {}x{} field, bubble radius {}",
                config.width,
                config.height,
                simulation.bubble_radius()
            );
            commands.insert_resource(simulation);
        }
        Err(e) => error!("Invalid shooter config, not starting: {}", e),
    }
}

/// Apply the latest aim, then any fire requests.
fn apply_shooter_input(
    mut simulation: ResMut<ShooterSimulation>,
    mut aim_events: MessageReader<AimShooter>,
    mut fire_events: MessageReader<FireShot>,
) {
    // Only the latest aim matters.
    if let Some(aim) = aim_events.read().last() {
        simulation.set_aim_angle(aim.angle);
    }

    for _ in fire_events.read() {
        if simulation.fire() {
            let launcher = simulation.launcher();
            info!(
                "Fired {:?} bubble at angle {:.3}",
                simulation.active_shot().map(|shot| shot.color),
                launcher.angle
            );
        } else {
            debug!("Shot already in flight, ignoring fire");
        }
    }
}

/// Advance the simulation by exactly one tick per frame.
fn advance_simulation(
    mut simulation: ResMut<ShooterSimulation>,
    mut resolved_events: MessageWriter<ShotResolved>,
) {
    if let Some(outcome) = simulation.step() {
        resolved_events.write(ShotResolved { outcome });
    }
}

fn log_shot_outcomes(
    simulation: Res<ShooterSimulation>,
    mut resolved_events: MessageReader<ShotResolved>,
) {
    for event in resolved_events.read() {
        match event.outcome {
            ShotOutcome::Connected => info!(
                "Bubble connected, field now holds {}",
                simulation.field().len()
            ),
            ShotOutcome::Discarded => info!("Bubble left the bottom of the field"),
            ShotOutcome::Fell => info!("Bubble missed and is falling"),
        }
    }
}
