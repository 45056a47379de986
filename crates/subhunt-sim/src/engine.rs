//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player
//! commands at tick boundaries, runs all systems in a fixed order, and
//! produces `GameStateSnapshot`s. Completely headless, enabling
//! deterministic testing.
//!
//! The per-tick pipeline is the load-bearing part: update systems run
//! first (each kind's pre-movement step, then kinematic integration),
//! then the pairwise interaction pass over entities live at the start
//! of the tick, then the reap pass (finalize + despawn), and finally
//! the commit pass that drains buffered spawn requests into the world.
//! Spawns requested during a tick therefore never see — and are never
//! seen by — that tick's passes.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use subhunt_core::commands::PlayerCommand;
use subhunt_core::enums::GamePhase;
use subhunt_core::events::GameEvent;
use subhunt_core::state::GameStateSnapshot;
use subhunt_core::types::SimTime;

use crate::systems;
use crate::systems::patrol::PatrolSchedule;
use crate::world_setup;
use crate::world_setup::SpawnRequest;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
        }
    }
}

/// Running score for the current game.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreState {
    pub subs_sunk: u32,
    pub charges_dropped: u32,
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    time_scale: f64,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    spawn_buffer: Vec<SpawnRequest>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
    patrol: PatrolSchedule,
    score: ScoreState,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            time_scale: config.time_scale,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            spawn_buffer: Vec::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            patrol: PatrolSchedule::default(),
            score: ScoreState::default(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting
    /// snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        if events.iter().any(|e| matches!(e, GameEvent::GameOver)) {
            self.phase = GamePhase::GameOver;
        }

        systems::snapshot::build_snapshot(&self.world, &self.time, self.phase, events, &self.score)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get the current score.
    pub fn score(&self) -> ScoreState {
        self.score
    }

    /// Spawn a height charge immediately at the given position.
    #[cfg(test)]
    pub fn spawn_test_height_charge(&mut self, x: f64, y: f64) {
        world_setup::spawn_height_charge(&mut self.world, x, y);
    }

    /// Get a mutable world reference (for tests that poke entity state
    /// directly).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Accelerate { side } => {
                if self.phase == GamePhase::Active {
                    systems::ship::accelerate(&mut self.world, side);
                }
            }
            PlayerCommand::DropCharge { side } => {
                if self.phase == GamePhase::Active {
                    systems::ship::request_drop(&mut self.world, side);
                }
            }
            PlayerCommand::SetTimeScale { scale } => {
                self.time_scale = scale.clamp(0.0, 4.0);
            }
            PlayerCommand::NewGame => {
                if matches!(self.phase, GamePhase::MainMenu | GamePhase::GameOver) {
                    self.world.clear();
                    self.spawn_buffer.clear();
                    self.despawn_buffer.clear();
                    self.events.clear();
                    world_setup::setup_game(&mut self.world);
                    self.patrol = PatrolSchedule::default_patrol();
                    self.score = ScoreState::default();
                    self.time = SimTime::default();
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::ReturnToMenu => {
                if self.phase == GamePhase::GameOver {
                    self.phase = GamePhase::MainMenu;
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
        }
    }

    /// Run all systems in the authoritative per-tick order.
    fn run_systems(&mut self) {
        // 1. Scheduled submarine arrivals (buffered like every spawn)
        systems::patrol::run(&mut self.patrol, self.time.tick, &mut self.spawn_buffer);
        // 2. Update pass: per-kind pre-movement steps...
        systems::ship::run(
            &mut self.world,
            &mut self.spawn_buffer,
            &mut self.events,
            &mut self.score,
        );
        systems::submarine::run(
            &mut self.world,
            &mut self.rng,
            &mut self.spawn_buffer,
            &mut self.events,
        );
        systems::charges::run(&mut self.world);
        systems::explosion::run(&mut self.world);
        // ...then kinematic integration, last
        systems::movement::run(&mut self.world);
        // 3. Interaction pass over entities live at the start of the tick
        systems::interaction::run(&mut self.world, &mut self.events);
        // 4. Reap pass: finalize exactly once, then despawn
        systems::reap::run(
            &mut self.world,
            &mut self.despawn_buffer,
            &mut self.spawn_buffer,
            &mut self.events,
            &mut self.score,
        );
        // 5. Commit pass: buffered spawns join the world for next tick
        world_setup::commit_spawns(&mut self.world, &mut self.spawn_buffer);
    }
}
