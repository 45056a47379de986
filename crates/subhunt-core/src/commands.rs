//! Player commands sent from the driver to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::Side;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Ship control ---
    /// Nudge the ship's speed by one step toward the given side.
    Accelerate { side: Side },
    /// Latch a depth-charge drop off the given side of the ship.
    /// At most one charge spawns per tick however often this arrives.
    DropCharge { side: Side },

    // --- Simulation control ---
    /// Set time scale (1.0 = normal, 2.0 = double).
    SetTimeScale { scale: f64 },
    /// Start a new game from the menu or after a game over.
    NewGame,
    /// Return to the main menu.
    ReturnToMenu,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}
