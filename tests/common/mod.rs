//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - `StatesPlugin` lets `Screen` and `Pause` transition.
//! - we then call `bubble_pop::configure_headless` to install the simulation.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bubble_pop::game::simulation::ShooterSimulation;

pub fn app_headless() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));

    bubble_pop::configure_headless(&mut app);

    // First frame enters `Screen::Gameplay`, which builds the simulation.
    app.update();
    app
}

pub fn simulation(app: &App) -> &ShooterSimulation {
    app.world().resource::<ShooterSimulation>()
}
