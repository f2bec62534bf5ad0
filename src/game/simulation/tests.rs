use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use bevy::prelude::*;

use super::*;

fn simulation() -> ShooterSimulation {
    ShooterSimulation::with_seed(ShooterConfig::default(), 42).expect("default config is valid")
}

fn shot_at(sim: &mut ShooterSimulation, position: Vec2, velocity: Vec2) {
    let mut shot = Bubble::new(position, sim.bubble_radius(), BubbleColor::Green);
    shot.velocity = velocity;
    sim.active_shot = Some(shot);
}

fn settle_at(sim: &mut ShooterSimulation, position: Vec2) {
    let mut bubble = Bubble::new(position, sim.bubble_radius(), BubbleColor::Purple);
    bubble.status = BubbleStatus::Connected;
    sim.field.push(bubble);
}

#[test]
fn fire_launches_along_aim_angle() {
    for angle in [-FRAC_PI_2, -FRAC_PI_4, -2.5, 0.3, PI] {
        let mut sim = simulation();
        let loaded = sim.loaded_color();
        sim.set_aim_angle(angle);

        assert!(sim.fire());

        let shot = sim.active_shot().expect("shot in flight");
        assert!((shot.velocity.x - 5.0 * angle.cos()).abs() < 1e-5);
        assert!((shot.velocity.y - 5.0 * angle.sin()).abs() < 1e-5);
        assert_eq!(shot.position, Vec2::new(280.0, 550.0));
        assert_eq!(shot.status, BubbleStatus::Flying);
        assert_eq!(shot.color, loaded);
    }
}

#[test]
fn fire_while_in_flight_is_ignored() {
    let mut sim = simulation();
    sim.set_aim_angle(-1.0);
    assert!(sim.fire());
    sim.step();
    let before = sim.snapshot();

    sim.set_aim_angle(-2.0);
    assert!(!sim.fire());

    let after = sim.snapshot();
    assert_eq!(before.active_shot, after.active_shot);
    assert_eq!(before.field, after.field);
    assert_eq!(before.falling_bubble, after.falling_bubble);
}

#[test]
fn step_without_shot_does_nothing() {
    let mut sim = simulation();
    let before = sim.snapshot();

    assert_eq!(sim.step(), None);

    assert_eq!(sim.snapshot(), before);
}

#[test]
fn field_collision_requires_overlap() {
    let mut sim = simulation();
    settle_at(&mut sim, Vec2::new(280.0, 200.0));
    let r = sim.bubble_radius();

    let tangent = Bubble::new(Vec2::new(360.0, 200.0), r, BubbleColor::Red);
    let overlapping = Bubble::new(Vec2::new(359.9, 200.0), r, BubbleColor::Red);
    let diagonal = Bubble::new(Vec2::new(320.0, 240.0), r, BubbleColor::Red);
    let far = Bubble::new(Vec2::new(100.0, 500.0), r, BubbleColor::Red);

    assert!(!sim.collides_with_field(&tangent));
    assert!(sim.collides_with_field(&overlapping));
    assert!(sim.collides_with_field(&diagonal));
    assert!(!sim.collides_with_field(&far));
}

#[test]
fn shot_crossing_ceiling_connects() {
    let mut sim = simulation();
    shot_at(&mut sim, Vec2::new(280.0, 42.0), Vec2::new(0.0, -5.0));

    assert_eq!(sim.step(), Some(ShotOutcome::Connected));

    assert!(sim.active_shot().is_none());
    assert!(sim.falling_bubble().is_none());
    assert_eq!(sim.field().len(), 1);
    let settled = sim.field()[0];
    assert_eq!(settled.status, BubbleStatus::Connected);
    assert_eq!(settled.position, Vec2::new(280.0, 37.0));
    assert_eq!(settled.radius, 40.0);
}

#[test]
fn shot_touching_field_connects_below_half_height() {
    let mut sim = simulation();
    settle_at(&mut sim, Vec2::new(280.0, 380.0));
    shot_at(&mut sim, Vec2::new(280.0, 465.0), Vec2::new(0.0, -5.0));

    // Exactly tangent after the first tick: keeps flying.
    assert_eq!(sim.step(), None);
    assert!(sim.active_shot().is_some());

    assert_eq!(sim.step(), Some(ShotOutcome::Connected));
    assert_eq!(sim.field().len(), 2);
    assert_eq!(sim.field()[1].position, Vec2::new(280.0, 455.0));
    assert!(sim.active_shot().is_none());
}

#[test]
fn field_keeps_insertion_order() {
    let mut sim = simulation();
    shot_at(&mut sim, Vec2::new(100.0, 42.0), Vec2::new(0.0, -5.0));
    sim.step();
    shot_at(&mut sim, Vec2::new(400.0, 42.0), Vec2::new(0.0, -5.0));
    sim.step();

    let xs: Vec<f32> = sim.field().iter().map(|b| b.position.x).collect();
    assert_eq!(xs, vec![100.0, 400.0]);
}

#[test]
fn shot_reaching_bottom_is_discarded() {
    let mut sim = simulation();
    shot_at(&mut sim, Vec2::new(280.0, 555.0), Vec2::new(0.0, 5.0));

    assert_eq!(sim.step(), Some(ShotOutcome::Discarded));

    assert!(sim.active_shot().is_none());
    assert!(sim.falling_bubble().is_none());
    assert!(sim.field().is_empty());
}

#[test]
fn missed_shot_falls_until_it_leaves_the_field() {
    let mut sim = simulation();
    shot_at(&mut sim, Vec2::new(280.0, 304.0), Vec2::new(1.0, -5.0));

    assert_eq!(sim.step(), Some(ShotOutcome::Fell));
    assert!(sim.active_shot().is_none());
    assert!(sim.field().is_empty());

    let falling = *sim.falling_bubble().expect("bubble is falling");
    assert_eq!(falling.status, BubbleStatus::Falling);
    assert_eq!(falling.velocity, Vec2::new(1.0, 5.0));
    // Already dropped once in the tick that started the fall.
    assert_eq!(falling.position, Vec2::new(281.0, 304.0));

    let mut last_y = falling.position.y;
    let mut ticks = 0;
    while let Some(bubble) = {
        sim.step();
        sim.falling_bubble().copied()
    } {
        assert_eq!(bubble.position.y, last_y + 5.0);
        assert_eq!(bubble.position.x, 281.0);
        last_y = bubble.position.y;
        ticks += 1;
        assert!(ticks < 1000, "falling bubble never left the field");
    }

    assert!(last_y - 40.0 <= 600.0);
    assert!(last_y + 5.0 - 40.0 > 600.0);
}

#[test]
fn new_fall_replaces_previous_falling_bubble() {
    let mut sim = simulation();
    shot_at(&mut sim, Vec2::new(100.0, 304.0), Vec2::new(0.0, -5.0));
    sim.step();
    shot_at(&mut sim, Vec2::new(400.0, 304.0), Vec2::new(0.0, -5.0));
    sim.step();

    let falling = sim.falling_bubble().expect("bubble is falling");
    assert_eq!(falling.position.x, 400.0);
}

#[test]
fn wall_bounce_flips_dx_once() {
    let mut sim = simulation();
    shot_at(&mut sim, Vec2::new(43.0, 450.0), Vec2::new(-4.0, -1.0));

    assert_eq!(sim.step(), None);
    let shot = *sim.active_shot().expect("still flying");
    // Past the wall, not pushed back.
    assert_eq!(shot.position.x, 39.0);
    assert_eq!(shot.velocity.x, 4.0);

    sim.step();
    let shot = *sim.active_shot().expect("still flying");
    assert_eq!(shot.position.x, 43.0);
    assert_eq!(shot.velocity.x, 4.0);
}

#[test]
fn right_wall_bounce() {
    let mut sim = simulation();
    shot_at(&mut sim, Vec2::new(517.0, 450.0), Vec2::new(4.0, -1.0));

    sim.step();
    let shot = *sim.active_shot().expect("still flying");
    assert_eq!(shot.position.x, 521.0);
    assert_eq!(shot.velocity.x, -4.0);

    sim.step();
    assert_eq!(sim.active_shot().expect("still flying").velocity.x, -4.0);
}

#[test]
fn straight_shot_on_empty_field_falls_at_half_height() {
    let mut sim = simulation();
    sim.set_aim_angle(-FRAC_PI_2);
    assert!(sim.fire());

    for tick in 1..50 {
        assert_eq!(sim.step(), None, "tick {tick}");
    }
    let shot = *sim.active_shot().expect("still flying");
    assert_eq!(shot.position.y, 305.0);
    assert!((shot.position.x - 280.0).abs() < 1e-3);

    assert_eq!(sim.step(), Some(ShotOutcome::Fell));
    assert!(sim.field().is_empty());
    assert!(sim.active_shot().is_none());
    assert_eq!(sim.falling_bubble().expect("falling").position.y, 305.0);

    // The launcher is ready again.
    assert!(sim.fire());
}

#[test]
fn score_never_moves() {
    let mut sim = simulation();
    settle_at(&mut sim, Vec2::new(280.0, 380.0));
    sim.set_aim_angle(-FRAC_PI_2);
    for _ in 0..500 {
        sim.fire();
        sim.step();
    }
    assert_eq!(sim.score(), 0);
}

#[test]
fn snapshot_shows_loaded_bubble_only_when_idle() {
    let mut sim = simulation();
    let idle = sim.snapshot();
    let loaded = idle.loaded.expect("bubble in launcher");
    assert_eq!((loaded.x, loaded.y), (280.0, 550.0));
    assert_eq!(loaded.color, sim.loaded_color());
    assert!(idle.active_shot.is_none());
    assert_eq!(idle.launcher.angle, 0.0);

    sim.set_aim_angle(-1.0);
    sim.fire();
    let flying = sim.snapshot();
    assert!(flying.loaded.is_none());
    assert_eq!(flying.active_shot.map(|b| b.color), Some(loaded.color));
    assert_eq!(flying.launcher.angle, -1.0);
}

#[test]
fn same_seed_same_colors() {
    let colors = |seed| {
        let mut sim = ShooterSimulation::with_seed(ShooterConfig::default(), seed)
            .expect("default config is valid");
        let mut out = Vec::new();
        for _ in 0..20 {
            out.push(sim.loaded_color());
            shot_at(&mut sim, Vec2::new(280.0, 555.0), Vec2::new(0.0, 5.0));
            sim.step();
        }
        out
    };
    assert_eq!(colors(9), colors(9));
}

#[test]
fn invalid_config_is_rejected() {
    let config = ShooterConfig {
        columns: 0,
        ..default()
    };
    assert_eq!(
        ShooterSimulation::new(config).err(),
        Some(ConfigError::NoColumns)
    );
}
