//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for
//! read-only views). They do not own state; all entity state lives in
//! components, and cross-tick bookkeeping (schedules, score, buffers)
//! is passed in from the engine.

pub mod charges;
pub mod explosion;
pub mod interaction;
pub mod movement;
pub mod patrol;
pub mod reap;
pub mod ship;
pub mod snapshot;
pub mod submarine;
