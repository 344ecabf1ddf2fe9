//! Player frogs and their discrete moves

use std::str::FromStr;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::RoadConfig;

/// A player-controlled frog
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frog {
    /// Player 1 (true) or player 2 (false); fixed for the frog's lifetime
    pub first: bool,
    /// Top-left corner of the hit box
    pub pos: Vec2,
    pub dead: bool,
}

impl Frog {
    pub fn new(first: bool, x: f32, y: f32) -> Self {
        Self {
            first,
            pos: Vec2::new(x, y),
            dead: false,
        }
    }

    /// A living frog at its player's spawn point
    pub fn spawned(first: bool, config: &RoadConfig) -> Self {
        Self::new(first, 0.0, 0.0).respawned(config)
    }

    /// Same frog, alive again at its spawn point
    pub fn respawned(self, config: &RoadConfig) -> Self {
        let x = if self.first {
            config.start_x1
        } else {
            config.start_x2
        };
        Self {
            pos: Vec2::new(x, config.start_y),
            dead: false,
            ..self
        }
    }

    /// Slot index: 0 for player 1, 1 for player 2
    #[inline]
    pub fn slot(&self) -> usize {
        slot(self.first)
    }
}

#[inline]
pub(crate) fn slot(first: bool) -> usize {
    if first { 0 } else { 1 }
}

/// A decoded move request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrogMove {
    Up,
    Down,
    Left,
    Right,
}

/// Outcome of validating a move against the playfield
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveOutcome {
    /// Position after the move; `None` if the move was rejected
    pub pos: Option<Vec2>,
    /// The frog crossed above the top road
    pub win: bool,
}

impl FrogMove {
    pub const ALL: [FrogMove; 4] = [FrogMove::Up, FrogMove::Down, FrogMove::Left, FrogMove::Right];

    pub fn as_str(&self) -> &'static str {
        match self {
            FrogMove::Up => "up",
            FrogMove::Down => "down",
            FrogMove::Left => "left",
            FrogMove::Right => "right",
        }
    }

    /// Step `from` one block (vertical) or one unit (horizontal) and check bounds.
    ///
    /// UP is never rejected; it wins when the new y is above the top road.
    pub fn apply(self, from: Vec2, config: &RoadConfig) -> MoveOutcome {
        let Vec2 { x, y } = from;
        match self {
            FrogMove::Up => {
                let y = y - config.block_size;
                MoveOutcome {
                    pos: Some(Vec2::new(x, y)),
                    win: y < config.top_road_start,
                }
            }
            FrogMove::Down => {
                let y = y + config.block_size;
                accept_if(y < config.height, Vec2::new(x, y))
            }
            FrogMove::Left => {
                let x = x - config.unit_size;
                accept_if(x >= 0.0, Vec2::new(x, y))
            }
            FrogMove::Right => {
                let x = x + config.unit_size;
                accept_if(x < config.field_width - config.unit_size, Vec2::new(x, y))
            }
        }
    }
}

fn accept_if(ok: bool, pos: Vec2) -> MoveOutcome {
    MoveOutcome {
        pos: ok.then_some(pos),
        win: false,
    }
}

/// Error for an unrecognised move token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMove(pub String);

impl std::fmt::Display for UnknownMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown frog move '{}'", self.0)
    }
}

impl std::error::Error for UnknownMove {}

impl FromStr for FrogMove {
    type Err = UnknownMove;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Ok(FrogMove::Up),
            "down" | "d" => Ok(FrogMove::Down),
            "left" | "l" => Ok(FrogMove::Left),
            "right" | "r" => Ok(FrogMove::Right),
            _ => Err(UnknownMove(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> RoadConfig {
        RoadConfig::default()
    }

    #[test]
    fn test_spawn_points_differ_per_player() {
        let config = config();
        let one = Frog::spawned(true, &config);
        let two = Frog::spawned(false, &config);
        assert_eq!(one.pos, Vec2::new(config.start_x1, config.start_y));
        assert_eq!(two.pos, Vec2::new(config.start_x2, config.start_y));
        assert_eq!((one.slot(), two.slot()), (0, 1));
    }

    #[test]
    fn test_respawn_keeps_identity() {
        let config = config();
        let mut frog = Frog::new(false, 13.0, 170.0);
        frog.dead = true;
        let frog = frog.respawned(&config);
        assert!(!frog.first);
        assert!(!frog.dead);
        assert_eq!(frog.pos, Vec2::new(config.start_x2, config.start_y));
    }

    #[test]
    fn test_up_below_top_road_is_not_a_win() {
        let config = config();
        let from = Vec2::new(100.0, config.top_road_start + config.block_size);
        let out = FrogMove::Up.apply(from, &config);
        assert_eq!(out.pos, Some(Vec2::new(100.0, config.top_road_start)));
        assert!(!out.win);
    }

    #[test]
    fn test_up_past_top_road_wins() {
        let config = config();
        let from = Vec2::new(100.0, config.top_road_start);
        let out = FrogMove::Up.apply(from, &config);
        assert_eq!(out.pos, Some(Vec2::new(100.0, config.top_road_start - config.block_size)));
        assert!(out.win);
    }

    #[test]
    fn test_down_stops_at_playfield_bottom() {
        let config = config();
        let out = FrogMove::Down.apply(Vec2::new(0.0, config.height - config.block_size), &config);
        assert_eq!(out.pos, None);
        assert!(!out.win);

        let out = FrogMove::Down.apply(Vec2::new(0.0, 0.0), &config);
        assert_eq!(out.pos, Some(Vec2::new(0.0, config.block_size)));
    }

    #[test]
    fn test_horizontal_bounds() {
        let config = config();
        assert_eq!(FrogMove::Left.apply(Vec2::new(5.0, 0.0), &config).pos, None);
        assert_eq!(
            FrogMove::Left.apply(Vec2::new(10.0, 0.0), &config).pos,
            Some(Vec2::ZERO)
        );

        let edge = config.field_width - config.unit_size * 2.0;
        assert_eq!(FrogMove::Right.apply(Vec2::new(edge, 0.0), &config).pos, None);
        let inside = FrogMove::Right.apply(Vec2::new(edge - 1.0, 0.0), &config);
        assert!(inside.pos.is_some());
    }

    #[test]
    fn test_right_bound_follows_playfield_not_road() {
        let config = RoadConfig::with_geometry(40.0, 400.0);
        let mut pos = Vec2::new(config.start_x1, config.start_y);
        while let Some(next) = FrogMove::Right.apply(pos, &config).pos {
            pos = next;
        }
        assert_eq!(pos.x, 780.0);
    }

    #[test]
    fn test_parse_moves() {
        assert_eq!("UP".parse::<FrogMove>(), Ok(FrogMove::Up));
        assert_eq!("l".parse::<FrogMove>(), Ok(FrogMove::Left));
        for mv in FrogMove::ALL {
            assert_eq!(mv.as_str().parse::<FrogMove>(), Ok(mv));
        }
        assert!("jump".parse::<FrogMove>().is_err());
    }
}
