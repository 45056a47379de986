//! Ship update system: boundary clamp and drop-latch consumption.
//!
//! Runs before movement integration. The clamp zeroes velocity as well
//! as snapping position, so the hull does not keep pressing against the
//! wall once the driving input stops.

use hecs::World;

use subhunt_core::components::{Extent, Liveness, Ship};
use subhunt_core::constants::*;
use subhunt_core::enums::Side;
use subhunt_core::events::GameEvent;
use subhunt_core::types::{Position, Velocity};

use crate::engine::ScoreState;
use crate::world_setup::SpawnRequest;

/// Run the ship's pre-movement step: clamp to the playfield, then
/// consume the drop latch (at most one depth charge per tick).
pub fn run(
    world: &mut World,
    spawn_buffer: &mut Vec<SpawnRequest>,
    events: &mut Vec<GameEvent>,
    score: &mut ScoreState,
) {
    for (_entity, (ship, pos, vel, extent, liveness)) in
        world.query_mut::<(&mut Ship, &mut Position, &mut Velocity, &Extent, &Liveness)>()
    {
        if !liveness.alive {
            continue;
        }

        if vel.x < 0.0 && pos.x <= 0.0 {
            vel.x = 0.0;
            pos.x = 0.0;
        } else if vel.x > 0.0 && pos.x + extent.width >= WORLD_WIDTH {
            vel.x = 0.0;
            pos.x = WORLD_WIDTH - extent.width;
        }

        if ship.dropping {
            let dx = match ship.drop_side {
                Side::Left => CHARGE_DROP_OFFSET_LEFT,
                Side::Right => CHARGE_DROP_OFFSET_RIGHT,
            };
            spawn_buffer.push(SpawnRequest::DepthCharge {
                x: pos.x + dx,
                y: pos.y + CHARGE_DROP_OFFSET_DOWN,
            });
            events.push(GameEvent::ChargeDropped {
                side: ship.drop_side,
            });
            score.charges_dropped += 1;
            ship.dropping = false;
        }
    }
}

/// Nudge every live ship's speed one step toward `side`, hard-clamped
/// to the maximum. Called from the command handler.
pub fn accelerate(world: &mut World, side: Side) {
    for (_entity, (_ship, vel, liveness)) in
        world.query_mut::<(&Ship, &mut Velocity, &Liveness)>()
    {
        if !liveness.alive {
            continue;
        }
        let step = match side {
            Side::Left => -SHIP_ACCEL_STEP,
            Side::Right => SHIP_ACCEL_STEP,
        };
        vel.x = (vel.x + step).clamp(-SHIP_MAX_SPEED, SHIP_MAX_SPEED);
    }
}

/// Latch a depth-charge drop on every live ship. Overwrite semantics:
/// the last request before the tick wins.
pub fn request_drop(world: &mut World, side: Side) {
    for (_entity, (ship, liveness)) in world.query_mut::<(&mut Ship, &Liveness)>() {
        if liveness.alive {
            ship.request_drop(side);
        }
    }
}
