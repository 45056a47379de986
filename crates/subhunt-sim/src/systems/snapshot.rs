//! Snapshot system: queries the ECS world and builds a complete
//! GameStateSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use subhunt_core::components::*;
use subhunt_core::enums::{ContactKind, GamePhase};
use subhunt_core::events::GameEvent;
use subhunt_core::state::*;
use subhunt_core::types::{Position, SimTime, Velocity};

use crate::engine::ScoreState;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    events: Vec<GameEvent>,
    score: &ScoreState,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        ship: build_ship(world),
        contacts: build_contacts(world),
        events,
        score: ScoreView {
            subs_sunk: score.subs_sunk,
            charges_dropped: score.charges_dropped,
        },
    }
}

/// Build the ship view, if a ship exists.
fn build_ship(world: &World) -> Option<ShipView> {
    world
        .query::<(&Ship, &Position, &Velocity)>()
        .iter()
        .next()
        .map(|(_, (ship, pos, vel))| ShipView {
            position: *pos,
            speed_x: vel.x,
            health: ship.health,
        })
}

/// Build views for every non-ship entity, kind by kind so the output
/// order is stable for a given world history.
fn build_contacts(world: &World) -> Vec<ContactView> {
    let mut contacts = Vec::new();

    let mut subs = world.query::<(&Submarine, &Position, &Velocity, &Extent)>();
    for (_, (_sub, pos, vel, extent)) in subs.iter() {
        contacts.push(contact(ContactKind::Submarine, pos, vel, extent));
    }

    let mut depth_charges = world.query::<(&DepthCharge, &Position, &Velocity, &Extent)>();
    for (_, (_charge, pos, vel, extent)) in depth_charges.iter() {
        contacts.push(contact(ContactKind::DepthCharge, pos, vel, extent));
    }

    let mut height_charges = world.query::<(&HeightCharge, &Position, &Velocity, &Extent)>();
    for (_, (_charge, pos, vel, extent)) in height_charges.iter() {
        contacts.push(contact(ContactKind::HeightCharge, pos, vel, extent));
    }

    let mut explosions = world.query::<(&Explosion, &Position, &Velocity, &Extent)>();
    for (_, (_explosion, pos, vel, extent)) in explosions.iter() {
        contacts.push(contact(ContactKind::Explosion, pos, vel, extent));
    }

    contacts
}

fn contact(kind: ContactKind, pos: &Position, vel: &Velocity, extent: &Extent) -> ContactView {
    ContactView {
        kind,
        position: *pos,
        velocity: *vel,
        width: extent.width,
        height: extent.height,
    }
}
