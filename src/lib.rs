//! Frogger Road - tick-driven road simulation for a two-player crossing game
//!
//! Core modules:
//! - `sim`: Lane geometry, cars, frogs, death timers and the `Road` orchestrator
//! - `config`: Tunable constants, loadable from JSON
//! - `error`: Setup-time failures

pub mod config;
pub mod error;
pub mod sim;

pub use config::RoadConfig;
pub use error::RoadError;
pub use sim::{Car, ChangeSink, Frog, FrogMove, LaneTable, Road, StateChange};

/// Game configuration constants
pub mod consts {
    /// Number of lanes on the road (top and bottom segment together)
    pub const LANE_COUNT: usize = 10;
    /// First lane of the bottom segment
    pub const MIDDLE_LANE: usize = LANE_COUNT / 2;

    /// Simulation tick length in milliseconds (death timers count down by this)
    pub const TICK_MS: i64 = 20;
    /// How long a frog stays dead before respawning
    pub const FROG_DEAD_TIME_MS: i64 = 1500;

    /// Playfield dimensions
    pub const WIDTH: f32 = 800.0;
    pub const HEIGHT: f32 = 600.0;
    /// Lane height and vertical frog step
    pub const BLOCK_SIZE: f32 = 40.0;
    /// Horizontal frog step
    pub const UNIT_SIZE: f32 = 10.0;

    /// Road segments (y of the first lane of each)
    pub const TOP_ROAD_START: f32 = 80.0;
    pub const BOTTOM_ROAD_START: f32 = 320.0;

    /// Frog spawn points
    pub const START_X1: f32 = 200.0;
    pub const START_X2: f32 = 560.0;
    pub const START_Y: f32 = 520.0;
    /// Frog hit box edge length
    pub const FROG_SIZE: f32 = 30.0;

    /// Scales every lane's base speed
    pub const CAR_SPEED_MODIFIER: f32 = 2.0;

    /// Base lane speeds (distance per tick before the modifier).
    /// Top segment alternates direction, bottom segment varies.
    pub const BASE_LANE_SPEEDS: [f32; LANE_COUNT] =
        [-0.5, 0.5, -0.5, 0.5, -0.5, -0.2, 0.8, -0.3, 0.4, -0.5];
}
