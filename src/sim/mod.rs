//! Road simulation module
//!
//! All gameplay logic lives here:
//! - Fixed-step ticks only (timers count ticks, not wall-clock time)
//! - Stable car order (insertion order) so diffs are reproducible
//! - No networking, rendering or I/O

pub mod car;
pub mod change;
pub mod collision;
pub mod frog;
pub mod lanes;
pub mod road;
pub mod timer;

pub use car::{Car, ObstaclePool};
pub use change::{ChangeSink, StateChange};
pub use collision::{Aabb, car_hits_frog};
pub use frog::{Frog, FrogMove, MoveOutcome, UnknownMove};
pub use lanes::LaneTable;
pub use road::Road;
pub use timer::{DeathTimer, TimerStep};
