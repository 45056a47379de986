//! Game state snapshot — the complete visible state produced each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{ContactKind, GamePhase};
use crate::events::GameEvent;
use crate::types::{Position, SimTime, Velocity};

/// Complete game state returned by the engine after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub ship: Option<ShipView>,
    pub contacts: Vec<ContactView>,
    pub events: Vec<GameEvent>,
    pub score: ScoreView,
}

/// The player's ship for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShipView {
    pub position: Position,
    /// Horizontal speed (px/s, signed; negative = leftward).
    pub speed_x: f64,
    pub health: u32,
}

/// Any other visible entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactView {
    pub kind: ContactKind,
    pub position: Position,
    pub velocity: Velocity,
    pub width: f64,
    pub height: f64,
}

/// Running score for display.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub subs_sunk: u32,
    pub charges_dropped: u32,
}
