//! Headless SUBHUNT driver.
//!
//! Runs the simulation at the fixed tick rate on a background thread
//! and reads commands from stdin:
//!
//! ```text
//! left | right        accelerate the ship
//! drop-left | drop-right   drop a depth charge
//! pause | resume
//! quit
//! ```
//!
//! On exit the final snapshot is printed as JSON.

use std::io::BufRead;
use std::sync::{Arc, Mutex};

use subhunt_core::commands::PlayerCommand;
use subhunt_core::enums::Side;
use subhunt_sim::engine::SimConfig;

mod game_loop;
mod state;

use state::GameLoopCommand;

fn main() {
    env_logger::init();

    let latest_snapshot = Arc::new(Mutex::new(None));
    let (cmd_tx, loop_handle) = game_loop::spawn_game_loop(
        SimConfig::default(),
        Arc::clone(&latest_snapshot),
    );

    // Kick off a game immediately.
    let _ = cmd_tx.send(GameLoopCommand::Player(PlayerCommand::NewGame));

    // Input collaborator: stdin lines become player commands. EOF or
    // `quit` shuts the loop down.
    let input_tx = cmd_tx.clone();
    std::thread::Builder::new()
        .name("subhunt-input".into())
        .spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                let command = match line.trim() {
                    "left" => GameLoopCommand::Player(PlayerCommand::Accelerate { side: Side::Left }),
                    "right" => {
                        GameLoopCommand::Player(PlayerCommand::Accelerate { side: Side::Right })
                    }
                    "drop-left" => {
                        GameLoopCommand::Player(PlayerCommand::DropCharge { side: Side::Left })
                    }
                    "drop-right" => {
                        GameLoopCommand::Player(PlayerCommand::DropCharge { side: Side::Right })
                    }
                    "pause" => GameLoopCommand::Player(PlayerCommand::Pause),
                    "resume" => GameLoopCommand::Player(PlayerCommand::Resume),
                    "quit" => GameLoopCommand::Shutdown,
                    "" => continue,
                    other => {
                        log::warn!("unrecognized command: {other}");
                        continue;
                    }
                };
                let quitting = matches!(command, GameLoopCommand::Shutdown);
                if input_tx.send(command).is_err() || quitting {
                    break;
                }
            }
            let _ = input_tx.send(GameLoopCommand::Shutdown);
        })
        .expect("Failed to spawn input thread");

    let _ = loop_handle.join();

    if let Ok(lock) = latest_snapshot.lock() {
        if let Some(snapshot) = lock.as_ref() {
            match serde_json::to_string_pretty(snapshot) {
                Ok(json) => println!("{json}"),
                Err(err) => log::error!("failed to serialize final snapshot: {err}"),
            }
        }
    };
}
