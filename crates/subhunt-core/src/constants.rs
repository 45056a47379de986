//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- World geometry ---

/// Playfield width in pixels.
pub const WORLD_WIDTH: f64 = 800.0;

/// Playfield height in pixels (y grows downward).
pub const WORLD_HEIGHT: f64 = 600.0;

/// y coordinate of the water surface.
pub const SURFACE_Y: f64 = 100.0;

// --- Ship ---

/// Ship hull extents (pixels).
pub const SHIP_WIDTH: f64 = 80.0;
pub const SHIP_HEIGHT: f64 = 15.0;

/// The hull rides this many pixels above the waterline.
pub const SHIP_SURFACE_OFFSET: f64 = 12.0;

/// Starting health. Each height-charge hit removes one point.
pub const SHIP_START_HEALTH: u32 = 3;

/// Speed change per accelerate call (px/s).
pub const SHIP_ACCEL_STEP: f64 = 10.0;

/// Hard cap on horizontal ship speed (px/s, both directions).
pub const SHIP_MAX_SPEED: f64 = 100.0;

// --- Depth charges ---

/// Drop offsets from the ship's position (pixels).
/// Left drops clear the bow; right drops clear the stern (hull is 80 wide).
pub const CHARGE_DROP_OFFSET_LEFT: f64 = -5.0;
pub const CHARGE_DROP_OFFSET_RIGHT: f64 = 75.0;
pub const CHARGE_DROP_OFFSET_DOWN: f64 = 15.0;

/// Depth charge extents (pixels).
pub const DEPTH_CHARGE_WIDTH: f64 = 8.0;
pub const DEPTH_CHARGE_HEIGHT: f64 = 12.0;

/// Sink rate (px/s, downward).
pub const DEPTH_CHARGE_SINK_SPEED: f64 = 60.0;

// --- Height charges ---

/// Height charge extents (pixels).
pub const HEIGHT_CHARGE_WIDTH: f64 = 8.0;
pub const HEIGHT_CHARGE_HEIGHT: f64 = 12.0;

/// Rise rate (px/s, upward).
pub const HEIGHT_CHARGE_RISE_SPEED: f64 = 45.0;

// --- Submarines ---

/// Submarine extents (pixels).
pub const SUB_WIDTH: f64 = 60.0;
pub const SUB_HEIGHT: f64 = 20.0;

/// Patrol speed (px/s).
pub const SUB_SPEED: f64 = 30.0;

/// Shallowest and deepest patrol depths (pixels below the surface).
pub const SUB_MIN_DEPTH: f64 = 120.0;
pub const SUB_MAX_DEPTH: f64 = 420.0;

/// Minimum ticks between height-charge launches from one sub.
pub const SUB_FIRE_COOLDOWN_TICKS: u32 = 90;

/// Per-tick launch probability once the cooldown has elapsed.
pub const SUB_FIRE_CHANCE: f64 = 0.02;

// --- Explosions ---

/// Explosion extents (pixels).
pub const EXPLOSION_WIDTH: f64 = 32.0;
pub const EXPLOSION_HEIGHT: f64 = 32.0;

/// Lifetime of an explosion marker (ticks, ~0.5 s at 30 Hz).
pub const EXPLOSION_DURATION_TICKS: u32 = 15;

// --- Patrol schedule ---

/// Interval between scheduled submarine arrivals (ticks, ~8 s).
pub const PATROL_INTERVAL_TICKS: u64 = 240;
