//! Explosion timer system.
//!
//! Explosion markers tick down and destroy themselves. They carry no
//! interactions; they exist so the driver can render detonations.

use hecs::World;

use subhunt_core::components::{Explosion, Liveness};

/// Count down all live explosion markers.
pub fn run(world: &mut World) {
    for (_entity, (explosion, liveness)) in world.query_mut::<(&mut Explosion, &mut Liveness)>() {
        if !liveness.alive {
            continue;
        }
        explosion.remaining_ticks = explosion.remaining_ticks.saturating_sub(1);
        if explosion.remaining_ticks == 0 {
            liveness.destroy();
        }
    }
}
