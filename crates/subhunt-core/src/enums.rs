//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Active,
    Paused,
    GameOver,
}

/// Capability tag for interaction dispatch.
///
/// Every entity carries exactly one kind; the interaction pass matches
/// on ordered `(ContactKind, ContactKind)` pairs, so each kind's
/// reactions are declared in one exhaustive table rather than scattered
/// type tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContactKind {
    /// The player's surface ship.
    Ship,
    /// An enemy submarine.
    Submarine,
    /// A sinking depth charge dropped by the ship.
    DepthCharge,
    /// A rising height charge fired by a submarine.
    HeightCharge,
    /// A short-lived explosion marker; interacts with nothing.
    Explosion,
}

/// Horizontal direction, used for steering and for picking which side
/// of the ship a depth charge drops from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn is_left(self) -> bool {
        self == Side::Left
    }
}
