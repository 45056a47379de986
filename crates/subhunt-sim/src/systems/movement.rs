//! Kinematic integration system.
//!
//! Updates Position from Velocity each tick: position += velocity * dt.
//! Runs last in the update pass — every per-kind system does its
//! pre-movement work (clamps, latches, lifetimes) before this.

use hecs::World;

use subhunt_core::constants::DT;
use subhunt_core::types::{Position, Velocity};

/// Run kinematic integration for all entities with Position + Velocity.
pub fn run(world: &mut World) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.x += vel.x * DT;
        pos.y += vel.y * DT;
    }
}
