//! Interaction pass: pairwise AABB dispatch between live contacts.
//!
//! The contact list is collected up front, so every entity present at
//! the start of the tick participates even if something earlier in the
//! pass destroyed it — removal is the reap pass's job. Entities spawned
//! this tick sit in the spawn buffer and are not in the world yet, so
//! they never interact in the tick that requested them.
//!
//! Dispatch fires for both orientations of every unordered pair and
//! matches on ordered `(ContactKind, ContactKind)` — each kind's
//! reactions live in one arm, and unrecognized pairings fall through to
//! the no-op arm. Height charges and submarines are passive targets:
//! only the ship and depth-charge arms do anything.

use hecs::World;

use subhunt_core::components::{DepthCharge, Extent, HeightCharge, Liveness, Ship, Submarine};
use subhunt_core::enums::ContactKind;
use subhunt_core::events::GameEvent;
use subhunt_core::types::{Aabb, Position};

/// A snapshot of one entity taken at the start of the pass.
#[derive(Debug, Clone, Copy)]
struct Contact {
    entity: hecs::Entity,
    kind: ContactKind,
    aabb: Aabb,
}

/// Run the interaction pass over every ordered pair of contacts.
pub fn run(world: &mut World, events: &mut Vec<GameEvent>) {
    let contacts = collect_contacts(world);

    for a in &contacts {
        for b in &contacts {
            if a.entity == b.entity {
                continue;
            }
            dispatch(world, a, b, events);
        }
    }
}

/// Collect every interactable entity with its capability tag and box.
/// Explosions are excluded: they interact with nothing.
fn collect_contacts(world: &World) -> Vec<Contact> {
    let mut contacts = Vec::new();

    let mut ships = world.query::<(&Ship, &Position, &Extent)>();
    for (entity, (_ship, pos, extent)) in ships.iter() {
        contacts.push(Contact {
            entity,
            kind: ContactKind::Ship,
            aabb: Aabb::from_parts(*pos, extent.width, extent.height),
        });
    }

    let mut subs = world.query::<(&Submarine, &Position, &Extent)>();
    for (entity, (_sub, pos, extent)) in subs.iter() {
        contacts.push(Contact {
            entity,
            kind: ContactKind::Submarine,
            aabb: Aabb::from_parts(*pos, extent.width, extent.height),
        });
    }

    let mut depth_charges = world.query::<(&DepthCharge, &Position, &Extent)>();
    for (entity, (_charge, pos, extent)) in depth_charges.iter() {
        contacts.push(Contact {
            entity,
            kind: ContactKind::DepthCharge,
            aabb: Aabb::from_parts(*pos, extent.width, extent.height),
        });
    }

    let mut height_charges = world.query::<(&HeightCharge, &Position, &Extent)>();
    for (entity, (_charge, pos, extent)) in height_charges.iter() {
        contacts.push(Contact {
            entity,
            kind: ContactKind::HeightCharge,
            aabb: Aabb::from_parts(*pos, extent.width, extent.height),
        });
    }

    contacts
}

/// React `a` to `b`. Safe to call for any pairing; only the recognized
/// arms do work, and each latch is idempotent.
fn dispatch(world: &mut World, a: &Contact, b: &Contact, events: &mut Vec<GameEvent>) {
    match (a.kind, b.kind) {
        // The ship reacts to the explosive height hazard: the hazard
        // explodes and the ship takes one hit.
        (ContactKind::Ship, ContactKind::HeightCharge) => {
            if !a.aabb.intersects(&b.aabb) {
                return;
            }
            if let Ok((charge, liveness)) =
                world.query_one_mut::<(&mut HeightCharge, &mut Liveness)>(b.entity)
            {
                charge.explode(liveness);
            }
            if let Ok((ship, liveness)) =
                world.query_one_mut::<(&mut Ship, &mut Liveness)>(a.entity)
            {
                let before = ship.health;
                ship.damage(liveness);
                if ship.health != before {
                    events.push(GameEvent::ShipDamaged {
                        health_remaining: ship.health,
                    });
                }
            }
        }

        // A depth charge reacts to a submarine: the sub is sunk and the
        // charge detonates.
        (ContactKind::DepthCharge, ContactKind::Submarine) => {
            if !a.aabb.intersects(&b.aabb) {
                return;
            }
            if let Ok((sub, liveness)) =
                world.query_one_mut::<(&mut Submarine, &mut Liveness)>(b.entity)
            {
                sub.sunk = true;
                liveness.destroy();
            }
            if let Ok((charge, liveness)) =
                world.query_one_mut::<(&mut DepthCharge, &mut Liveness)>(a.entity)
            {
                charge.detonate(liveness);
            }
        }

        // Everything else — including the passive orientations of the
        // pairs above — is a no-op, never an error.
        _ => {}
    }
}
