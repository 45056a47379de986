//! Game loop thread — runs the simulation engine at the fixed tick
//! rate and reports notable events.
//!
//! The engine is created inside this thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel; the latest snapshot
//! is stored in shared state for synchronous polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use subhunt_core::constants::TICK_RATE;
use subhunt_core::enums::GamePhase;
use subhunt_core::events::GameEvent;
use subhunt_core::state::GameStateSnapshot;
use subhunt_sim::engine::{SimConfig, SimulationEngine};

use crate::state::GameLoopCommand;

/// Nominal duration of one tick at 1x speed.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the input reader to use, plus the
/// join handle so main can wait for the session to end.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> (mpsc::Sender<GameLoopCommand>, std::thread::JoinHandle<()>) {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("subhunt-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot);
        })
        .expect("Failed to spawn game loop thread");

    (cmd_tx, handle)
}

/// The game loop. Runs until game over, Shutdown command, or channel
/// disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let mut engine = SimulationEngine::new(config);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick (engine handles pause semantics internally)
        let snapshot = engine.tick();
        report_events(&snapshot);
        let game_over = snapshot.phase == GamePhase::GameOver;

        // 3. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        if game_over {
            log::info!(
                "game over — {} subs sunk, {} charges dropped",
                engine.score().subs_sunk,
                engine.score().charges_dropped
            );
            return;
        }

        // 4. Sleep until next tick, adjusting for time_scale
        let time_scale = engine.time_scale();
        let effective_tick_duration = if time_scale > 0.001 {
            TICK_DURATION.div_f64(time_scale)
        } else {
            TICK_DURATION
        };

        next_tick_time += effective_tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else {
            // Fell behind; reset the schedule instead of spiraling.
            next_tick_time = now;
        }
    }
}

/// Log this tick's events.
fn report_events(snapshot: &GameStateSnapshot) {
    for event in &snapshot.events {
        match event {
            GameEvent::ChargeDropped { side } => {
                log::debug!("depth charge away ({side:?})");
            }
            GameEvent::ShipDamaged { health_remaining } => {
                log::warn!("ship hit, {health_remaining} health remaining");
            }
            GameEvent::SubSunk { x, y } => {
                log::info!("sub sunk at ({x:.0}, {y:.0})");
            }
            GameEvent::HeightChargeLaunched { x, y } => {
                log::debug!("height charge inbound from ({x:.0}, {y:.0})");
            }
            GameEvent::GameOver => {
                log::warn!("ship destroyed");
            }
        }
    }
}
