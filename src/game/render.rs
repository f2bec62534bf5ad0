//! Draws the simulation.
//!
//! Every frame the visuals are synced to a [`SimulationSnapshot`]; they own no
//! game state of their own. Settled bubbles are spawned once and never move,
//! the shot, falling bubble and loaded bubble are single entities that are
//! shown, moved and recolored as needed.

use bevy::prelude::*;

use super::{
    config::ShooterConfig,
    simulation::{BubbleView, ShooterSimulation, SimulationSnapshot},
};
use crate::{AppSystems, screens::Screen, theme::palette};

pub(super) fn plugin(app: &mut App) {
    app.insert_resource(ClearColor(palette::BACKGROUND));

    app.add_systems(OnEnter(Screen::Gameplay), (spawn_launcher, spawn_score_label));

    app.add_systems(
        Update,
        (
            spawn_field_visuals,
            sync_moving_visuals,
            draw_aim_line,
            update_score_label,
        )
            .in_set(AppSystems::Render)
            .run_if(in_state(Screen::Gameplay).and(resource_exists::<ShooterSimulation>)),
    );
}

/// Z order, back to front.
const FIELD_Z: f32 = 0.0;
const LAUNCHER_Z: f32 = 1.0;
const FALLING_Z: f32 = 2.0;
const SHOT_Z: f32 = 3.0;

/// Marker for the visual of a settled bubble.
#[derive(Component, Debug, Clone, Copy)]
struct FieldBubbleVisual;

/// Which moving bubble a visual follows.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
enum MovingVisual {
    Shot,
    Falling,
    Loaded,
}

#[derive(Component)]
struct ScoreLabel;

fn spawn_launcher(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    config: Res<ShooterConfig>,
) {
    let launcher = config.to_world(config.launcher_position());
    let bubble_mesh = meshes.add(Circle::new(config.bubble_radius()));

    commands.spawn((
        Name::new("Launcher"),
        Transform::from_translation(launcher.extend(LAUNCHER_Z)),
        Mesh2d(meshes.add(Circle::new(config.launcher_radius))),
        MeshMaterial2d(materials.add(ColorMaterial::from_color(palette::LAUNCHER))),
        DespawnOnExit(Screen::Gameplay),
    ));

    for (kind, z) in [
        (MovingVisual::Loaded, SHOT_Z),
        (MovingVisual::Shot, SHOT_Z),
        (MovingVisual::Falling, FALLING_Z),
    ] {
        commands.spawn((
            Name::new(format!("{kind:?} Bubble")),
            kind,
            Transform::from_translation(launcher.extend(z)),
            Mesh2d(bubble_mesh.clone()),
            MeshMaterial2d(materials.add(ColorMaterial::default())),
            Visibility::Hidden,
            DespawnOnExit(Screen::Gameplay),
        ));
    }

    info!("Launcher spawned at {:?}", launcher);
}

fn spawn_score_label(mut commands: Commands) {
    commands.spawn((
        Name::new("Score"),
        ScoreLabel,
        Text::new("Score: 0"),
        TextFont::from_font_size(20.0),
        TextColor(palette::LABEL_TEXT),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(10.0),
            top: Val::Px(10.0),
            ..default()
        },
        DespawnOnExit(Screen::Gameplay),
    ));
}

/// Spawn a visual for every bubble that joined the field since last frame.
fn spawn_field_visuals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    simulation: Res<ShooterSimulation>,
    visuals: Query<(), With<FieldBubbleVisual>>,
) {
    let drawn = visuals.iter().count();
    let field = simulation.field();
    if field.len() <= drawn {
        return;
    }

    let config = simulation.config();
    for (index, bubble) in field.iter().enumerate().skip(drawn) {
        let world = config.to_world(bubble.position);
        commands.spawn((
            Name::new(format!("Field Bubble {index}")),
            FieldBubbleVisual,
            Transform::from_translation(world.extend(FIELD_Z)),
            Mesh2d(meshes.add(Circle::new(bubble.radius))),
            MeshMaterial2d(materials.add(ColorMaterial::from_color(bubble.color.to_color()))),
            DespawnOnExit(Screen::Gameplay),
        ));
    }
}

fn sync_moving_visuals(
    simulation: Res<ShooterSimulation>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut visuals: Query<(
        &MovingVisual,
        &mut Transform,
        &mut Visibility,
        &MeshMaterial2d<ColorMaterial>,
    )>,
) {
    let snapshot = simulation.snapshot();
    let config = simulation.config();

    for (kind, mut transform, mut visibility, material) in &mut visuals {
        let Some(view) = view_for(&snapshot, *kind) else {
            *visibility = Visibility::Hidden;
            continue;
        };

        let world = config.to_world(Vec2::new(view.x, view.y));
        transform.translation.x = world.x;
        transform.translation.y = world.y;
        *visibility = Visibility::Inherited;

        if let Some(material) = materials.get_mut(&material.0) {
            material.color = view.color.to_color();
        }
    }
}

fn view_for(snapshot: &SimulationSnapshot, kind: MovingVisual) -> Option<BubbleView> {
    match kind {
        MovingVisual::Shot => snapshot.active_shot,
        MovingVisual::Falling => snapshot.falling_bubble,
        MovingVisual::Loaded => snapshot.loaded,
    }
}

/// Short line from the launcher centre in the aim direction.
fn draw_aim_line(mut gizmos: Gizmos, simulation: Res<ShooterSimulation>) {
    let config = simulation.config();
    let launcher = simulation.launcher();
    let tip = launcher.position + Vec2::from_angle(launcher.angle) * config.aim_line_length;

    gizmos.line_2d(
        config.to_world(launcher.position),
        config.to_world(tip),
        palette::AIM_LINE,
    );
}

fn update_score_label(
    simulation: Res<ShooterSimulation>,
    mut label: Single<&mut Text, With<ScoreLabel>>,
) {
    if !simulation.is_changed() {
        return;
    }
    label.0 = format!("Score: {}", simulation.score());
}
