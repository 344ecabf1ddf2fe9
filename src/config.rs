//! Road configuration
//!
//! Geometry, timing and spawn constants. Defaults come from [`crate::consts`];
//! a JSON file may override any subset of them.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::RoadError;

/// Tunable road parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoadConfig {
    // === Geometry ===
    /// Lane height and vertical frog step
    pub block_size: f32,
    /// Horizontal frog step
    pub unit_size: f32,
    /// Road width (cars wrap around at this edge)
    pub width: f32,
    /// Playfield width (frogs cannot move past it)
    pub field_width: f32,
    /// Playfield height (frogs cannot move below it)
    pub height: f32,
    /// y of the first top-segment lane; moving above it wins
    pub top_road_start: f32,
    /// y of the first bottom-segment lane
    pub bottom_road_start: f32,

    // === Frogs ===
    pub start_x1: f32,
    pub start_x2: f32,
    pub start_y: f32,
    /// Hit box edge length
    pub frog_size: f32,

    // === Timing ===
    /// Multiplier applied to every lane's base speed
    pub car_speed_modifier: f32,
    /// Death cooldown in milliseconds
    pub frog_dead_time_ms: i64,
    /// Milliseconds subtracted from a running death timer per tick
    pub tick_ms: i64,
}

impl Default for RoadConfig {
    fn default() -> Self {
        Self {
            block_size: BLOCK_SIZE,
            unit_size: UNIT_SIZE,
            width: WIDTH,
            field_width: WIDTH,
            height: HEIGHT,
            top_road_start: TOP_ROAD_START,
            bottom_road_start: BOTTOM_ROAD_START,

            start_x1: START_X1,
            start_x2: START_X2,
            start_y: START_Y,
            frog_size: FROG_SIZE,

            car_speed_modifier: CAR_SPEED_MODIFIER,
            frog_dead_time_ms: FROG_DEAD_TIME_MS,
            tick_ms: TICK_MS,
        }
    }
}

impl RoadConfig {
    /// Default config with the given lane block size and road width.
    /// The playfield keeps its default width.
    pub fn with_geometry(block_size: f32, width: f32) -> Self {
        Self {
            block_size,
            width,
            ..Self::default()
        }
    }

    /// Parse a (possibly partial) JSON config and validate it
    pub fn from_json(json: &str) -> Result<Self, RoadError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RoadError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded road config from {}", path.display());
        Ok(config)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, RoadError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), RoadError> {
        let positive = [
            ("block_size", self.block_size),
            ("unit_size", self.unit_size),
            ("width", self.width),
            ("field_width", self.field_width),
            ("height", self.height),
            ("frog_size", self.frog_size),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(RoadError::InvalidConfig {
                    reason: format!("{} must be positive, got {}", name, value),
                });
            }
        }
        let finite = [
            ("car_speed_modifier", self.car_speed_modifier),
            ("top_road_start", self.top_road_start),
            ("bottom_road_start", self.bottom_road_start),
            ("start_x1", self.start_x1),
            ("start_x2", self.start_x2),
            ("start_y", self.start_y),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(RoadError::InvalidConfig {
                    reason: format!("{} must be finite, got {}", name, value),
                });
            }
        }
        if self.tick_ms <= 0 {
            return Err(RoadError::InvalidConfig {
                reason: format!("tick_ms must be positive, got {}", self.tick_ms),
            });
        }
        if self.frog_dead_time_ms < 0 {
            return Err(RoadError::InvalidConfig {
                reason: format!(
                    "frog_dead_time_ms must not be negative, got {}",
                    self.frog_dead_time_ms
                ),
            });
        }
        Ok(())
    }

    /// Ticks a killed frog stays dead: ceil(dead time / tick)
    pub fn respawn_ticks(&self) -> u64 {
        let dead = self.frog_dead_time_ms.max(0) as u64;
        dead.div_ceil(self.tick_ms.max(1) as u64)
    }
}
