//! Events emitted by the simulation for the driver and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::Side;

/// Notable occurrences during a tick, drained into each snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A depth charge left the ship's rail.
    ChargeDropped { side: Side },
    /// A height charge hit the ship.
    ShipDamaged { health_remaining: u32 },
    /// A depth charge destroyed a submarine.
    SubSunk { x: f64, y: f64 },
    /// A submarine launched a height charge.
    HeightChargeLaunched { x: f64, y: f64 },
    /// The ship was destroyed; the session is over.
    GameOver,
}
