//! Lane geometry
//!
//! The road has two contiguous blocks of lanes: the top segment starts at
//! `top_road_start`, the bottom segment at `bottom_road_start`, each lane one
//! block below the previous. Fixed at construction.

use serde::{Deserialize, Serialize};

use crate::config::RoadConfig;
use crate::consts::{BASE_LANE_SPEEDS, LANE_COUNT, MIDDLE_LANE};

/// Per-lane y coordinate and car speed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaneTable {
    y: [f32; LANE_COUNT],
    speed: [f32; LANE_COUNT],
}

impl LaneTable {
    pub fn new(config: &RoadConfig) -> Self {
        let mut y = [0.0; LANE_COUNT];
        y[0] = config.top_road_start;
        for i in 1..MIDDLE_LANE {
            y[i] = y[i - 1] + config.block_size;
        }
        y[MIDDLE_LANE] = config.bottom_road_start;
        for i in MIDDLE_LANE + 1..LANE_COUNT {
            y[i] = y[i - 1] + config.block_size;
        }

        let speed = BASE_LANE_SPEEDS.map(|base| base * config.car_speed_modifier);

        Self { y, speed }
    }

    /// Number of lanes
    #[inline]
    pub fn len(&self) -> usize {
        LANE_COUNT
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// y coordinate of a lane, `None` if out of range
    #[inline]
    pub fn y(&self, lane: usize) -> Option<f32> {
        self.y.get(lane).copied()
    }

    /// Signed speed of a lane (distance per tick), `None` if out of range
    #[inline]
    pub fn speed(&self, lane: usize) -> Option<f32> {
        self.speed.get(lane).copied()
    }

    /// Whether the lane belongs to the top road segment
    #[inline]
    pub fn is_top(&self, lane: usize) -> bool {
        lane < MIDDLE_LANE
    }
}
