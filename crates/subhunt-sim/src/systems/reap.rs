//! Reap pass: mark-and-sweep removal of dead entities.
//!
//! Collects every entity whose liveness flag became false during this
//! tick's update/interaction passes, runs its per-kind finalize action
//! exactly once (in removal order), then despawns through the
//! pre-allocated buffer. Finalize is the only place one-shot death
//! side effects happen: the game-over signal, scoring, and explosion
//! spawn requests.

use hecs::{Entity, World};

use subhunt_core::components::{DepthCharge, Extent, HeightCharge, Liveness, Ship, Submarine};
use subhunt_core::constants::{EXPLOSION_HEIGHT, EXPLOSION_WIDTH};
use subhunt_core::events::GameEvent;
use subhunt_core::types::Position;

use crate::engine::ScoreState;
use crate::world_setup::SpawnRequest;

/// Run the reap pass.
pub fn run(
    world: &mut World,
    despawn_buffer: &mut Vec<Entity>,
    spawn_buffer: &mut Vec<SpawnRequest>,
    events: &mut Vec<GameEvent>,
    score: &mut ScoreState,
) {
    despawn_buffer.clear();

    {
        let mut query = world.query::<&Liveness>();
        for (entity, liveness) in query.iter() {
            if !liveness.alive {
                despawn_buffer.push(entity);
            }
        }
    }

    for &entity in despawn_buffer.iter() {
        finalize(world, entity, spawn_buffer, events, score);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Per-kind finalize action, invoked exactly once per reaped entity.
fn finalize(
    world: &World,
    entity: Entity,
    spawn_buffer: &mut Vec<SpawnRequest>,
    events: &mut Vec<GameEvent>,
    score: &mut ScoreState,
) {
    // The ship's death ends the game. Raised here, not mid-tick, so the
    // signal observes final per-tick state.
    if world.get::<&Ship>(entity).is_ok() {
        events.push(GameEvent::GameOver);
        return;
    }

    if let Ok(sub) = world.get::<&Submarine>(entity) {
        if sub.sunk {
            score.subs_sunk += 1;
            if let Some((x, y)) = explosion_site(world, entity) {
                events.push(GameEvent::SubSunk { x, y });
                spawn_buffer.push(SpawnRequest::Explosion { x, y });
            }
        }
        return;
    }

    if let Ok(charge) = world.get::<&DepthCharge>(entity) {
        if charge.detonated {
            if let Some((x, y)) = explosion_site(world, entity) {
                spawn_buffer.push(SpawnRequest::Explosion { x, y });
            }
        }
        return;
    }

    if let Ok(charge) = world.get::<&HeightCharge>(entity) {
        // A fizzled charge (surfaced without hitting anything) leaves
        // no explosion behind.
        if charge.exploded {
            if let Some((x, y)) = explosion_site(world, entity) {
                spawn_buffer.push(SpawnRequest::Explosion { x, y });
            }
        }
    }

    // Expired explosion markers have no finalize action.
}

/// Explosion spawn position centered on the dying entity's box.
fn explosion_site(world: &World, entity: Entity) -> Option<(f64, f64)> {
    let pos = world.get::<&Position>(entity).ok()?;
    let extent = world.get::<&Extent>(entity).ok()?;
    Some((
        pos.x + (extent.width - EXPLOSION_WIDTH) / 2.0,
        pos.y + (extent.height - EXPLOSION_HEIGHT) / 2.0,
    ))
}
