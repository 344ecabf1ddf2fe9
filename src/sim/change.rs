//! Per-tick state diffs handed to the broadcaster

use serde::{Deserialize, Serialize};

use super::car::Car;
use super::frog::Frog;

/// Everything that changed during one tick or one accepted move
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StateChange {
    /// Every car, after this tick's update, in pool order
    pub cars: Vec<Car>,
    /// Frogs whose position or death state changed (at most one per player)
    pub frogs: Vec<Frog>,
    /// Player 1's cumulative death count, if it changed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frog1_deaths: Option<u32>,
    /// Player 2's cumulative death count, if it changed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frog2_deaths: Option<u32>,
}

impl StateChange {
    pub fn new() -> Self {
        Self::default()
    }

    /// Diff for a single moved frog
    pub fn for_frog(frog: Frog) -> Self {
        Self {
            frogs: vec![frog],
            ..Self::default()
        }
    }

    /// Record a frog, replacing an earlier entry for the same player
    pub fn push_frog(&mut self, frog: Frog) {
        match self.frogs.iter_mut().find(|f| f.first == frog.first) {
            Some(existing) => *existing = frog,
            None => self.frogs.push(frog),
        }
    }

    /// Record a player's new death count
    pub fn set_deaths(&mut self, first: bool, deaths: u32) {
        if first {
            self.frog1_deaths = Some(deaths);
        } else {
            self.frog2_deaths = Some(deaths);
        }
    }

    pub fn frog(&self, first: bool) -> Option<&Frog> {
        self.frogs.iter().find(|f| f.first == first)
    }

    /// True when only the car list is populated
    pub fn frogs_unchanged(&self) -> bool {
        self.frogs.is_empty() && self.frog1_deaths.is_none() && self.frog2_deaths.is_none()
    }
}

/// Receiver for diffs produced by accepted moves
pub trait ChangeSink {
    fn on_change(&mut self, change: StateChange);
}

impl<F: FnMut(StateChange)> ChangeSink for F {
    fn on_change(&mut self, change: StateChange) {
        self(change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_frog_keeps_one_entry_per_player() {
        let mut change = StateChange::new();
        change.push_frog(Frog::new(true, 1.0, 1.0));
        change.push_frog(Frog::new(false, 2.0, 2.0));
        change.push_frog(Frog::new(true, 3.0, 3.0));

        assert_eq!(change.frogs.len(), 2);
        assert_eq!(change.frog(true).map(|f| f.pos.x), Some(3.0));
        assert_eq!(change.frog(false).map(|f| f.pos.x), Some(2.0));
    }

    #[test]
    fn test_set_deaths_targets_player() {
        let mut change = StateChange::new();
        assert!(change.frogs_unchanged());
        change.set_deaths(false, 4);
        assert_eq!(change.frog1_deaths, None);
        assert_eq!(change.frog2_deaths, Some(4));
        assert!(!change.frogs_unchanged());
    }

    #[test]
    fn test_unchanged_counts_omitted_from_json() {
        let change = StateChange::for_frog(Frog::new(true, 0.0, 0.0));
        let json = serde_json::to_string(&change).unwrap();
        assert!(!json.contains("frog1_deaths"));
        assert!(json.contains("\"first\":true"));
    }

    #[test]
    fn test_closure_sink() {
        let mut count = 0;
        let mut sink = |_change: StateChange| count += 1;
        sink.on_change(StateChange::new());
        assert_eq!(count, 1);
    }
}
