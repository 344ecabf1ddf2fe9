use std::error::Error;
use std::fmt;
use std::fmt::Display;

/// Errors returned by road setup and configuration loading.
///
/// Ticking and moving never fail; only the setup calls that would otherwise
/// leave the road in an unsupported state return one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum RoadError {
    /// A car was added to a lane index the road does not have.
    LaneOutOfRange {
        /// The requested lane.
        lane: usize,
        /// Number of lanes on the road.
        lanes: usize,
    },
    /// A car narrower than the right-edge respawn offset would keep wrapping
    /// without ever crossing the road.
    CarTooNarrow {
        /// The rejected car width.
        width: f32,
        /// Smallest accepted width (`block_size - 1`).
        min_width: f32,
    },
    /// Both frog slots are already taken.
    FrogSlotsFull,
    /// A configuration value is unusable.
    InvalidConfig {
        /// Which value was rejected and why.
        reason: String,
    },
    /// Reading a configuration file failed.
    Io {
        /// The underlying I/O error message.
        context: String,
    },
    /// A configuration file was not valid JSON for [`RoadConfig`].
    ///
    /// [`RoadConfig`]: crate::RoadConfig
    Parse {
        /// The underlying parser error message.
        context: String,
    },
}

impl Display for RoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoadError::LaneOutOfRange { lane, lanes } => {
                write!(f, "Lane {} is out of range (road has {} lanes).", lane, lanes)
            }
            RoadError::CarTooNarrow { width, min_width } => {
                write!(f, "Car width {} is below the minimum of {}.", width, min_width)
            }
            RoadError::FrogSlotsFull => {
                write!(f, "Both frogs are already registered on this road.")
            }
            RoadError::InvalidConfig { reason } => {
                write!(f, "Invalid road configuration: {}", reason)
            }
            RoadError::Io { context } => write!(f, "Failed to read configuration: {}", context),
            RoadError::Parse { context } => write!(f, "Failed to parse configuration: {}", context),
        }
    }
}

impl Error for RoadError {}

impl From<std::io::Error> for RoadError {
    fn from(err: std::io::Error) -> Self {
        RoadError::Io {
            context: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for RoadError {
    fn from(err: serde_json::Error) -> Self {
        RoadError::Parse {
            context: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mentions_lane() {
        let err = RoadError::LaneOutOfRange { lane: 12, lanes: 10 };
        let msg = err.to_string();
        assert!(msg.contains("12"));
        assert!(msg.contains("10"));
    }

    #[test]
    fn test_json_error_converts_to_parse() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: RoadError = json_err.into();
        assert!(matches!(err, RoadError::Parse { .. }));
    }
}
