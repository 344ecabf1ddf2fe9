//! The road: cars, both frogs and their death timers
//!
//! `tick` runs on the simulation thread at a fixed cadence; `update_frog` is
//! called from each player's input thread at arbitrary times. Within one tick
//! every car is moved and hit-tested (in pool order) before any death timer
//! advances.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU32, Ordering};

use parking_lot::Mutex;

use super::car::{Car, ObstaclePool};
use super::change::{ChangeSink, StateChange};
use super::collision::car_hits_frog;
use super::frog::{self, Frog, FrogMove};
use super::lanes::LaneTable;
use super::timer::{DeathTimer, TimerStep};
use crate::config::RoadConfig;
use crate::error::RoadError;

/// Shared game state for one two-player match
#[derive(Debug)]
pub struct Road {
    config: RoadConfig,
    lanes: LaneTable,
    cars: ObstaclePool,
    /// Player 1 and player 2; each written once, under `registration`
    frogs: [OnceLock<Mutex<Frog>>; 2],
    registration: Mutex<()>,
    /// Cumulative deaths per player, read from any thread
    deaths: [AtomicU32; 2],
    /// Only touched by `tick`; held for its whole duration
    timers: Mutex<[DeathTimer; 2]>,
}

impl Road {
    /// Road with default timing and the given lane block size and width
    pub fn new(block_size: f32, width: f32) -> Self {
        Self::build(RoadConfig::with_geometry(block_size, width))
    }

    /// Road from a full configuration
    pub fn with_config(config: RoadConfig) -> Result<Self, RoadError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: RoadConfig) -> Self {
        let lanes = LaneTable::new(&config);
        log::info!(
            "Road created: width={} block={} lanes={}",
            config.width,
            config.block_size,
            lanes.len()
        );
        Self {
            config,
            lanes,
            cars: ObstaclePool::new(),
            frogs: [OnceLock::new(), OnceLock::new()],
            registration: Mutex::new(()),
            deaths: [AtomicU32::new(0), AtomicU32::new(0)],
            timers: Mutex::new([DeathTimer::default(); 2]),
        }
    }

    pub fn config(&self) -> &RoadConfig {
        &self.config
    }

    pub fn lanes(&self) -> &LaneTable {
        &self.lanes
    }

    /// Put a car on `lane`, just off the left edge. Returns the car's id.
    ///
    /// Setup only: call before ticking starts. The car must be at least
    /// `block_size - 1` wide, since a right-edge wrap puts it at `-block_size`.
    pub fn add_car(&self, car: Car, lane: usize) -> Result<u32, RoadError> {
        let min_width = self.config.block_size - 1.0;
        let result = if !(car.width >= min_width) || !car.width.is_finite() {
            Err(RoadError::CarTooNarrow {
                width: car.width,
                min_width,
            })
        } else {
            self.cars.add(car, lane, &self.lanes)
        };
        result.inspect_err(|err| {
            log::warn!("Rejected car: {}", err);
        })
    }

    /// Register the next frog: player 1 on the first call, player 2 on the second.
    pub fn add_frog(&self) -> Result<Frog, RoadError> {
        let _guard = self.registration.lock();
        let first = self.frogs[0].get().is_none();
        let slot = frog::slot(first);

        let frog = Frog::spawned(first, &self.config);
        if self.frogs[slot].set(Mutex::new(frog)).is_err() {
            log::warn!("Rejected frog: {}", RoadError::FrogSlotsFull);
            return Err(RoadError::FrogSlotsFull);
        }
        log::info!("Frog {} joined at {:?}", slot + 1, frog.pos);
        Ok(frog)
    }

    /// Advance one tick and report what changed
    pub fn tick(&self) -> StateChange {
        let mut timers = self.timers.lock();
        let mut change = StateChange::new();
        let frogs = [self.frogs[0].get(), self.frogs[1].get()];

        self.cars.for_each_during_tick(|car| {
            car.update();
            car.wrap(self.config.width, self.config.block_size);
            for (slot, frog) in frogs.iter().enumerate() {
                if let Some(frog) = frog {
                    self.frog_car_interaction(frog, car, &mut timers[slot], &mut change);
                }
            }
            change.cars.push(car.clone());
        });

        for (slot, timer) in timers.iter_mut().enumerate() {
            if timer.advance(self.config.tick_ms) != TimerStep::Expired {
                continue;
            }
            if let Some(frog) = frogs[slot] {
                let mut frog = frog.lock();
                *frog = frog.respawned(&self.config);
                change.push_frog(*frog);
                log::debug!("Frog {} respawned", slot + 1);
            }
        }

        log::trace!(
            "Tick: {} cars, {} frogs changed",
            change.cars.len(),
            change.frogs.len()
        );
        change
    }

    fn frog_car_interaction(
        &self,
        frog: &Mutex<Frog>,
        car: &Car,
        timer: &mut DeathTimer,
        change: &mut StateChange,
    ) {
        let mut frog = frog.lock();
        if !car_hits_frog(car, &frog, self.config.block_size, self.config.frog_size) {
            return;
        }
        frog.dead = true;
        let deaths = self.deaths[frog.slot()].fetch_add(1, Ordering::AcqRel) + 1;
        change.set_deaths(frog.first, deaths);
        timer.start(self.config.frog_dead_time_ms);
        change.push_frog(*frog);
        log::debug!(
            "Frog {} hit by car {} (deaths: {})",
            frog.slot() + 1,
            car.id,
            deaths
        );
    }

    /// Apply a move for one player.
    ///
    /// An accepted move delivers a single-frog diff to `sink` before returning.
    /// Dead frogs, unregistered players and out-of-bounds moves change nothing.
    /// Returns true only when the move crossed the top road.
    pub fn update_frog<S>(&self, first: bool, mv: FrogMove, sink: &mut S) -> bool
    where
        S: ChangeSink + ?Sized,
    {
        let Some(frog) = self.frogs[frog::slot(first)].get() else {
            return false;
        };

        let (change, win) = {
            let mut frog = frog.lock();
            if frog.dead {
                return false;
            }
            let outcome = mv.apply(frog.pos, &self.config);
            let Some(pos) = outcome.pos else {
                return false;
            };
            frog.pos = pos;
            (StateChange::for_frog(*frog), outcome.win)
        };

        sink.on_change(change);
        if win {
            log::debug!("Frog {} crossed the road", frog::slot(first) + 1);
        }
        win
    }

    /// Cumulative deaths for a player
    pub fn frog_deaths(&self, first: bool) -> u32 {
        self.deaths[frog::slot(first)].load(Ordering::Acquire)
    }

    /// Current state of a player's frog, if registered
    pub fn frog(&self, first: bool) -> Option<Frog> {
        self.frogs[frog::slot(first)].get().map(|frog| *frog.lock())
    }

    /// Copies of all cars in pool order
    pub fn cars(&self) -> Vec<Car> {
        self.cars.cars()
    }

    pub fn car_count(&self) -> usize {
        self.cars.len()
    }
}
