//! Submarine update system: patrol exit and fire control.
//!
//! Submarines are not clamped to the playfield — they enter from off
//! screen and destroy themselves once fully out the other side. While
//! inside, each sub rolls the seeded RNG against a per-tick fire chance
//! (gated by a cooldown) to launch a height charge upward.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use subhunt_core::components::{Extent, Liveness, Submarine};
use subhunt_core::constants::*;
use subhunt_core::events::GameEvent;
use subhunt_core::types::{Position, Velocity};

use crate::world_setup::SpawnRequest;

/// Run the submarine pre-movement step for all live subs.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    spawn_buffer: &mut Vec<SpawnRequest>,
    events: &mut Vec<GameEvent>,
) {
    for (_entity, (sub, pos, vel, extent, liveness)) in
        world.query_mut::<(&mut Submarine, &Position, &Velocity, &Extent, &mut Liveness)>()
    {
        if !liveness.alive {
            continue;
        }

        // Fully off screen on the exit side: gone, not sunk.
        let off_left = vel.x < 0.0 && pos.x + extent.width < 0.0;
        let off_right = vel.x > 0.0 && pos.x > WORLD_WIDTH;
        if off_left || off_right {
            liveness.destroy();
            continue;
        }

        if sub.fire_cooldown_ticks > 0 {
            sub.fire_cooldown_ticks -= 1;
            continue;
        }

        // Only fire while the hull is inside the playfield.
        let inside = pos.x >= 0.0 && pos.x + extent.width <= WORLD_WIDTH;
        if inside && rng.gen_bool(SUB_FIRE_CHANCE) {
            let x = pos.x + (extent.width - HEIGHT_CHARGE_WIDTH) / 2.0;
            let y = pos.y - HEIGHT_CHARGE_HEIGHT;
            spawn_buffer.push(SpawnRequest::HeightCharge { x, y });
            events.push(GameEvent::HeightChargeLaunched { x, y });
            sub.fire_cooldown_ticks = SUB_FIRE_COOLDOWN_TICKS;
        }
    }
}
