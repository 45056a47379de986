//! Charge lifetime system.
//!
//! Depth charges detonate when they reach the bottom; height charges
//! fizzle once they rise clear of the ship's band at the surface.
//! Both are pre-movement checks — a charge that crosses the threshold
//! is marked this tick and reaped at the end of it.

use hecs::World;

use subhunt_core::components::{DepthCharge, Extent, HeightCharge, Liveness};
use subhunt_core::constants::*;
use subhunt_core::types::Position;

/// Run lifetime checks for all live charges.
pub fn run(world: &mut World) {
    for (_entity, (charge, pos, extent, liveness)) in
        world.query_mut::<(&mut DepthCharge, &Position, &Extent, &mut Liveness)>()
    {
        if liveness.alive && pos.y + extent.height >= WORLD_HEIGHT {
            charge.detonate(liveness);
        }
    }

    // The ship's hull tops out at SURFACE_Y - SHIP_SURFACE_OFFSET; a
    // charge wholly above that line can never hit anything.
    for (_entity, (_charge, pos, extent, liveness)) in
        world.query_mut::<(&HeightCharge, &Position, &Extent, &mut Liveness)>()
    {
        if liveness.alive && pos.y + extent.height < SURFACE_Y - SHIP_SURFACE_OFFSET {
            liveness.destroy();
        }
    }
}
