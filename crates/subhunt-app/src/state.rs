//! Shared types between the input reader and the game loop thread.

use subhunt_core::commands::PlayerCommand;

/// Commands accepted by the game loop thread.
#[derive(Debug, Clone)]
pub enum GameLoopCommand {
    /// Forward a player command to the engine at the next tick.
    Player(PlayerCommand),
    /// Stop the loop and exit.
    Shutdown,
}
