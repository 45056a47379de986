//! ECS components for hecs entities.
//!
//! Components are plain data structs; per-tick behavior lives in
//! systems. The exceptions are the tiny idempotent state machines
//! (`Liveness::destroy`, `Ship::damage`, `HeightCharge::explode`,
//! `DepthCharge::detonate`) which guard their own transitions so that
//! misuse is a defensive no-op rather than an error.

use serde::{Deserialize, Serialize};

use crate::constants::SHIP_START_HEALTH;
use crate::enums::Side;

/// Fixed bounding-box extents, set at spawn and never mutated.
/// Zero extents are legal and describe a degenerate point entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Extent {
    pub width: f64,
    pub height: f64,
}

impl Extent {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Liveness flag. True from spawn until `destroy()`; once false the
/// entity is reaped at the end of the current tick and never updated
/// or collided again.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Liveness {
    pub alive: bool,
}

impl Default for Liveness {
    fn default() -> Self {
        Self { alive: true }
    }
}

impl Liveness {
    /// Mark the entity dead. Idempotent; never an error.
    pub fn destroy(&mut self) {
        self.alive = false;
    }
}

/// The player's surface ship.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ship {
    /// Remaining hit points. Reaching 0 destroys the ship exactly once.
    pub health: u32,
    /// Deferred drop latch, consumed once per tick by the ship system.
    pub dropping: bool,
    /// Side remembered by the latch. Last `request_drop` before the
    /// tick wins; only one charge spawns per tick regardless.
    pub drop_side: Side,
}

impl Default for Ship {
    fn default() -> Self {
        Self {
            health: SHIP_START_HEALTH,
            dropping: false,
            drop_side: Side::Left,
        }
    }
}

impl Ship {
    /// Latch a depth-charge drop for the next update. Overwrite
    /// semantics: calling twice before the tick does not queue two.
    pub fn request_drop(&mut self, side: Side) {
        self.dropping = true;
        self.drop_side = side;
    }

    /// Remove one hit point, destroying the ship at exactly zero.
    /// No-op once dead; health never goes negative.
    pub fn damage(&mut self, liveness: &mut Liveness) {
        if self.health == 0 {
            return;
        }
        self.health -= 1;
        if self.health == 0 {
            liveness.destroy();
        }
    }
}

/// An enemy submarine patrolling at depth.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Submarine {
    /// True when destroyed by a depth charge, false when it simply
    /// left the playfield. Only sunk subs score and explode.
    pub sunk: bool,
    /// Ticks until the next height-charge launch is permitted.
    pub fire_cooldown_ticks: u32,
}

/// A depth charge sinking toward the bottom.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DepthCharge {
    /// Set when the charge goes off (sub contact or bottom impact);
    /// a detonated charge leaves an explosion behind at reap time.
    pub detonated: bool,
}

impl DepthCharge {
    /// Detonate the charge. Idempotent latch.
    pub fn detonate(&mut self, liveness: &mut Liveness) {
        self.detonated = true;
        liveness.destroy();
    }
}

/// A height charge rising toward the surface.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct HeightCharge {
    /// Set when the charge hit the ship. A charge that fizzles at the
    /// surface is destroyed without this flag and leaves no explosion.
    pub exploded: bool,
}

impl HeightCharge {
    /// Explode the charge. Idempotent latch.
    pub fn explode(&mut self, liveness: &mut Liveness) {
        self.exploded = true;
        liveness.destroy();
    }
}

/// Explosion marker left behind by detonations. Purely visual; ticks
/// down and self-destroys.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Explosion {
    pub remaining_ticks: u32,
}
