//! Entity spawn factories and the deferred spawn buffer.
//!
//! Every spawn during a tick goes through a `SpawnRequest` pushed onto
//! a buffer and committed after the reap pass, so the entity collection
//! is never mutated while systems iterate it. Spawned entities join the
//! world for the *next* tick.

use hecs::World;

use subhunt_core::components::*;
use subhunt_core::constants::*;
use subhunt_core::enums::Side;
use subhunt_core::types::{Position, Velocity};

/// A deferred spawn raised during a tick's update or reap passes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpawnRequest {
    DepthCharge { x: f64, y: f64 },
    HeightCharge { x: f64, y: f64 },
    Submarine { depth: f64, from: Side },
    Explosion { x: f64, y: f64 },
}

/// Set up a fresh game: just the player's ship. Submarines arrive via
/// the patrol schedule.
pub fn setup_game(world: &mut World) {
    spawn_ship(world);
}

/// Spawn the player's ship centered on the playfield, riding the
/// waterline.
pub fn spawn_ship(world: &mut World) -> hecs::Entity {
    world.spawn((
        Ship::default(),
        Position::new(
            (WORLD_WIDTH - SHIP_WIDTH) / 2.0,
            SURFACE_Y - SHIP_SURFACE_OFFSET,
        ),
        Velocity::default(),
        Extent::new(SHIP_WIDTH, SHIP_HEIGHT),
        Liveness::default(),
    ))
}

/// Spawn a depth charge sinking from the given position.
pub fn spawn_depth_charge(world: &mut World, x: f64, y: f64) -> hecs::Entity {
    world.spawn((
        DepthCharge::default(),
        Position::new(x, y),
        Velocity::new(0.0, DEPTH_CHARGE_SINK_SPEED),
        Extent::new(DEPTH_CHARGE_WIDTH, DEPTH_CHARGE_HEIGHT),
        Liveness::default(),
    ))
}

/// Spawn a height charge rising from the given position.
pub fn spawn_height_charge(world: &mut World, x: f64, y: f64) -> hecs::Entity {
    world.spawn((
        HeightCharge::default(),
        Position::new(x, y),
        Velocity::new(0.0, -HEIGHT_CHARGE_RISE_SPEED),
        Extent::new(HEIGHT_CHARGE_WIDTH, HEIGHT_CHARGE_HEIGHT),
        Liveness::default(),
    ))
}

/// Spawn a submarine entering from one side of the playfield at the
/// given depth below the surface.
pub fn spawn_submarine(world: &mut World, depth: f64, from: Side) -> hecs::Entity {
    let (x, speed) = match from {
        Side::Left => (-SUB_WIDTH, SUB_SPEED),
        Side::Right => (WORLD_WIDTH, -SUB_SPEED),
    };

    world.spawn((
        Submarine {
            sunk: false,
            fire_cooldown_ticks: SUB_FIRE_COOLDOWN_TICKS,
        },
        Position::new(x, SURFACE_Y + depth),
        Velocity::new(speed, 0.0),
        Extent::new(SUB_WIDTH, SUB_HEIGHT),
        Liveness::default(),
    ))
}

/// Spawn an explosion marker at the given position.
pub fn spawn_explosion(world: &mut World, x: f64, y: f64) -> hecs::Entity {
    world.spawn((
        Explosion {
            remaining_ticks: EXPLOSION_DURATION_TICKS,
        },
        Position::new(x, y),
        Velocity::default(),
        Extent::new(EXPLOSION_WIDTH, EXPLOSION_HEIGHT),
        Liveness::default(),
    ))
}

/// Commit pass: drain buffered spawn requests into the world. Runs
/// after the reap pass; nothing spawned here participates in the tick
/// that requested it.
pub fn commit_spawns(world: &mut World, spawn_buffer: &mut Vec<SpawnRequest>) {
    for request in spawn_buffer.drain(..) {
        match request {
            SpawnRequest::DepthCharge { x, y } => {
                spawn_depth_charge(world, x, y);
            }
            SpawnRequest::HeightCharge { x, y } => {
                spawn_height_charge(world, x, y);
            }
            SpawnRequest::Submarine { depth, from } => {
                spawn_submarine(world, depth, from);
            }
            SpawnRequest::Explosion { x, y } => {
                spawn_explosion(world, x, y);
            }
        }
    }
}
