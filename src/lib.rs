//! A small bubble shooter.
//!
//! The gameplay core lives in [`game::simulation`] and has no dependency on a
//! window or renderer. Everything else is wiring: input, drawing, menus.

pub mod game;
pub mod menus;
pub mod screens;
pub mod theme;

use bevy::prelude::*;

pub struct AppPlugin;

impl Plugin for AppPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(
            DefaultPlugins.set(WindowPlugin {
                primary_window: Window {
                    title: "Bubble Pop".to_string(),
                    fit_canvas_to_parent: true,
                    ..default()
                }
                .into(),
                ..default()
            }),
        );

        configure_sets(app);

        app.add_plugins((screens::plugin, menus::plugin, game::plugin));

        app.add_systems(Startup, spawn_camera);
    }
}

/// Install the states, system sets and simulation core without any windowing,
/// meshes or UI. Used by integration tests.
pub fn configure_headless(app: &mut App) {
    configure_sets(app);
    app.init_state::<screens::Screen>();
    game::configure_headless(app);
}

fn configure_sets(app: &mut App) {
    // Order new `AppSystems` variants by adding them here:
    app.configure_sets(
        Update,
        (
            AppSystems::RecordInput,
            AppSystems::Update,
            AppSystems::Render,
        )
            .chain(),
    );

    // Set up the `Pause` state.
    app.init_state::<Pause>();
    app.configure_sets(Update, PausableSystems.run_if(in_state(Pause(false))));
}

/// High-level groupings of systems for the app in the `Update` schedule.
/// When adding a new variant, make sure to order it in `configure_sets`.
#[derive(SystemSet, Debug, Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum AppSystems {
    /// Turn pointer and keyboard input into aim/fire messages.
    RecordInput,
    /// Advance the simulation.
    Update,
    /// Sync visuals with the simulation.
    Render,
}

/// Whether or not the game is paused.
#[derive(States, Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Pause(pub bool);

/// A system set for systems that shouldn't run while the game is paused.
#[derive(SystemSet, Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct PausableSystems;

fn spawn_camera(mut commands: Commands) {
    commands.spawn((Name::new("Camera"), Camera2d));
}
