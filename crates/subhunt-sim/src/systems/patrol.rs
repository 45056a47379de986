//! Patrol scheduling system — submarines arrive at scheduled times.

use subhunt_core::constants::{PATROL_INTERVAL_TICKS, SUB_MAX_DEPTH, SUB_MIN_DEPTH};
use subhunt_core::enums::Side;

use crate::world_setup::SpawnRequest;

/// A single scheduled submarine arrival.
#[derive(Debug, Clone)]
pub struct PatrolEntry {
    /// Tick at which this sub enters the playfield.
    pub spawn_at_tick: u64,
    /// Patrol depth in pixels below the surface.
    pub depth: f64,
    /// Which side the sub enters from.
    pub from: Side,
    /// Whether this entry has already been spawned.
    pub spawned: bool,
}

/// The complete arrival schedule for a game.
#[derive(Debug, Clone, Default)]
pub struct PatrolSchedule {
    pub entries: Vec<PatrolEntry>,
}

impl PatrolSchedule {
    /// Default patrol: eight subs at a fixed cadence, alternating
    /// sides, cycling through four depth bands.
    pub fn default_patrol() -> Self {
        let depths = [
            SUB_MIN_DEPTH,
            SUB_MIN_DEPTH + (SUB_MAX_DEPTH - SUB_MIN_DEPTH) / 3.0,
            SUB_MIN_DEPTH + (SUB_MAX_DEPTH - SUB_MIN_DEPTH) * 2.0 / 3.0,
            SUB_MAX_DEPTH,
        ];

        let entries = (0..8u64)
            .map(|i| PatrolEntry {
                spawn_at_tick: i * PATROL_INTERVAL_TICKS,
                depth: depths[(i % 4) as usize],
                from: if i % 2 == 0 { Side::Left } else { Side::Right },
                spawned: false,
            })
            .collect();

        Self { entries }
    }

    /// Total number of scheduled arrivals.
    pub fn total_subs(&self) -> usize {
        self.entries.len()
    }
}

/// Check the schedule and buffer any due arrivals. Spawns go through
/// the commit pass like every other spawn, so a due sub joins the world
/// at the end of this tick.
pub fn run(schedule: &mut PatrolSchedule, current_tick: u64, spawn_buffer: &mut Vec<SpawnRequest>) {
    for entry in &mut schedule.entries {
        if !entry.spawned && current_tick >= entry.spawn_at_tick {
            spawn_buffer.push(SpawnRequest::Submarine {
                depth: entry.depth,
                from: entry.from,
            });
            entry.spawned = true;
        }
    }
}
