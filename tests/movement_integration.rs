//! Frame-level tests: input intent, integration and axis-separated collision
//! resolution driven through a headless bevy schedule.

use bevy_ecs::prelude::*;

use spritewalk::components::actor::Actor;
use spritewalk::components::collider::Rect;
use spritewalk::components::inputcontrolled::InputControlled;
use spritewalk::components::obstacle::Obstacle;
use spritewalk::game::spawn_scene;
use spritewalk::resources::animationstore::AnimationStore;
use spritewalk::resources::gameconfig::GameConfig;
use spritewalk::resources::input::InputState;
use spritewalk::resources::worldtime::WorldTime;
use spritewalk::systems::movement::move_and_collide;
use spritewalk::systems::simulation_schedule;
use spritewalk::systems::time::update_world_time;

const DT: f32 = 1.0 / 60.0;

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(InputState::default());
    world.insert_resource(AnimationStore::new());
    world
}

fn spawn_player(world: &mut World, x: i32, y: i32) -> Entity {
    world
        .spawn((Actor::new(x, y, 64, 64), InputControlled))
        .id()
}

fn spawn_obstacle(world: &mut World, x: i32, y: i32) -> Entity {
    world.spawn((Actor::new(x, y, 64, 64), Obstacle)).id()
}

fn hold(world: &mut World, right: bool, down: bool) {
    let mut input = world.resource_mut::<InputState>();
    input.maindirection_right.active = right;
    input.secondarydirection_down.active = down;
}

fn tick(world: &mut World, schedule: &mut Schedule, dt: f32) {
    update_world_time(world, dt);
    schedule.run(world);
}

fn actor(world: &World, entity: Entity) -> Actor {
    world.get::<Actor>(entity).cloned().unwrap()
}

/// Position after `n` ticks of held intent from rest, integrating
/// `v_k = min(a * k * dt, max)` and truncating each tick's displacement.
fn closed_form_travel(n: usize, accel: f64, max_speed: f64, dt: f64) -> i32 {
    (1..=n)
        .map(|k| ((accel * k as f64 * dt).min(max_speed) * dt).trunc() as i32)
        .sum()
}

#[test]
fn held_right_matches_closed_form_integration() {
    let mut world = make_world();
    let config = GameConfig::new();
    let player = spawn_scene(&mut world, &config);
    let mut schedule = simulation_schedule();

    hold(&mut world, true, false);
    let ticks = 60;
    for _ in 0..ticks {
        tick(&mut world, &mut schedule, DT);
    }

    let p = actor(&world, player);
    let t = config.player_tuning;
    let expected = 100
        + closed_form_travel(
            ticks,
            t.acceleration as f64,
            t.max_speed as f64,
            1.0 / 60.0,
        );
    assert_eq!(p.bounds().x, expected);
    assert_eq!(p.bounds().y, 100);
    assert_eq!(p.velocity().x, t.max_speed);
    assert_eq!(p.velocity().y, 0.0);
}

#[test]
fn overlapping_obstacle_reverts_x_and_leaves_y_alone() {
    let mut world = make_world();
    let player = spawn_player(&mut world, 100, 100);
    spawn_obstacle(&mut world, 160, 100);
    let mut schedule = simulation_schedule();

    hold(&mut world, true, false);
    for _ in 0..20 {
        tick(&mut world, &mut schedule, DT);
        let p = actor(&world, player);
        assert_eq!(p.bounds(), Rect::new(100, 100, 64, 64));
        assert_eq!(p.velocity().x, 0.0);
        assert_eq!(p.velocity().y, 0.0);
    }
}

#[test]
fn walking_into_a_wall_stops_flush_without_overlap() {
    let mut world = make_world();
    let player = spawn_player(&mut world, 100, 100);
    let wall = spawn_obstacle(&mut world, 300, 100);
    let mut schedule = simulation_schedule();

    hold(&mut world, true, false);
    for _ in 0..240 {
        tick(&mut world, &mut schedule, DT);
        let p = actor(&world, player);
        let w = actor(&world, wall);
        assert!(!p.collides_with(&w));
    }

    let p = actor(&world, player);
    assert!(p.bounds().right() <= 300);
    // Blocked moves are at most one max-speed step (4 px) short of the wall
    assert!(p.bounds().right() > 300 - 5);
    assert_eq!(actor(&world, wall).bounds(), Rect::new(300, 100, 64, 64));
}

#[test]
fn released_input_slides_to_a_stop() {
    let mut world = make_world();
    let player = spawn_player(&mut world, 0, 0);
    let mut schedule = simulation_schedule();

    hold(&mut world, true, true);
    for _ in 0..30 {
        tick(&mut world, &mut schedule, DT);
    }
    hold(&mut world, false, false);

    let mut prev = actor(&world, player).velocity();
    for _ in 0..60 {
        tick(&mut world, &mut schedule, DT);
        let v = actor(&world, player).velocity();
        assert!(v.x >= 0.0 && v.x <= prev.x);
        assert!(v.y >= 0.0 && v.y <= prev.y);
        prev = v;
    }
    assert_eq!(prev.x, 0.0);
    assert_eq!(prev.y, 0.0);

    let rest = actor(&world, player).bounds();
    tick(&mut world, &mut schedule, DT);
    assert_eq!(actor(&world, player).bounds(), rest);
}

#[test]
fn obstacles_never_receive_input_or_move() {
    let mut world = make_world();
    spawn_player(&mut world, 0, 0);
    let obstacle = spawn_obstacle(&mut world, 400, 400);
    let mut schedule = simulation_schedule();

    hold(&mut world, true, true);
    for _ in 0..10 {
        tick(&mut world, &mut schedule, DT);
    }

    let o = actor(&world, obstacle);
    assert_eq!(o.bounds(), Rect::new(400, 400, 64, 64));
    assert_eq!(o.velocity().x, 0.0);
    assert_eq!(o.velocity().y, 0.0);
    assert_eq!(o.input_intent(), (0, 0));
}

#[test]
fn corner_pocket_blocks_both_axes() {
    let mut store = AnimationStore::new();
    let right = Actor::new(170, 100, 64, 64);
    let below = Actor::new(100, 170, 64, 64);
    let mut player = Actor::new(100, 100, 64, 64);
    player.set_velocity_x(250.0);
    player.set_velocity_y(250.0);
    player.set_input_intent(1, 1);

    move_and_collide(&mut player, &[&right, &below], 0.1, &mut store);

    assert_eq!(player.bounds(), Rect::new(100, 100, 64, 64));
    assert_eq!(player.velocity().x, 0.0);
    assert_eq!(player.velocity().y, 0.0);
}

#[test]
fn diagonal_corner_hit_favours_x_axis() {
    let mut store = AnimationStore::new();
    let block = Actor::new(170, 170, 64, 64);
    let mut player = Actor::new(100, 100, 64, 64);
    player.set_velocity_x(250.0);
    player.set_velocity_y(250.0);
    player.set_input_intent(1, 1);

    move_and_collide(&mut player, &[&block], 0.1, &mut store);

    // X moves first and is clear; the Y step then hits the block's corner.
    assert_eq!(player.bounds(), Rect::new(125, 100, 64, 64));
    assert_eq!(player.velocity().x, 250.0);
    assert_eq!(player.velocity().y, 0.0);
}

#[test]
fn zero_delta_tick_changes_nothing() {
    let mut world = make_world();
    let player = spawn_player(&mut world, 10, 10);
    let mut schedule = simulation_schedule();

    hold(&mut world, true, true);
    tick(&mut world, &mut schedule, 0.0);

    let p = actor(&world, player);
    assert_eq!(p.bounds(), Rect::new(10, 10, 64, 64));
    assert_eq!(p.velocity().x, 0.0);
    assert_eq!(p.input_intent(), (0, 0));
}
