//! Cars and the car pool
//!
//! Cars are owned by the pool behind per-car mutexes. The pool itself is a
//! copy-on-write slice: appends swap in a new slice, readers iterate whatever
//! slice was current when they took their snapshot.

use std::sync::Arc;

use glam::Vec2;
use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};

use super::lanes::LaneTable;
use crate::error::RoadError;

/// A car driving along one lane
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    /// Assigned by the pool in insertion order
    pub id: u32,
    pub lane: usize,
    /// Left edge (x) and lane top (y)
    pub pos: Vec2,
    pub width: f32,
    /// Distance per tick, sign is direction
    pub speed: f32,
    /// Wrapped to the opposite edge this tick (render hint)
    pub spawn: bool,
}

impl Car {
    /// A car of the given width, not yet placed on a lane
    pub fn new(width: f32) -> Self {
        Self {
            id: 0,
            lane: 0,
            pos: Vec2::ZERO,
            width,
            speed: 0.0,
            spawn: false,
        }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.pos.y
    }

    /// Advance one tick along the lane
    #[inline]
    pub fn update(&mut self) {
        self.pos.x += self.speed;
    }

    /// Teleport to the opposite edge once fully off the road.
    ///
    /// Leaving on the left puts the car at `road_width`; leaving on the right
    /// puts it at `-block_size`. `spawn` is set only on the tick of the wrap.
    pub fn wrap(&mut self, road_width: f32, block_size: f32) {
        if self.pos.x < -self.width {
            self.pos.x = road_width;
            self.spawn = true;
        } else if self.pos.x > road_width {
            self.pos.x = -block_size;
            self.spawn = true;
        } else {
            self.spawn = false;
        }
    }
}

type CarSlot = Arc<Mutex<Car>>;

/// Append-only set of cars with snapshot iteration
#[derive(Debug)]
pub struct ObstaclePool {
    cars: RwLock<Arc<[CarSlot]>>,
}

impl Default for ObstaclePool {
    fn default() -> Self {
        Self::new()
    }
}

impl ObstaclePool {
    pub fn new() -> Self {
        Self {
            cars: RwLock::new(Arc::from(Vec::new())),
        }
    }

    /// Place a car just off the left edge of `lane` and append it.
    ///
    /// Meant for setup before ticking starts. Concurrent ticks keep iterating
    /// their own snapshot and pick the car up from the next tick on.
    pub fn add(&self, mut car: Car, lane: usize, lanes: &LaneTable) -> Result<u32, RoadError> {
        let (Some(y), Some(speed)) = (lanes.y(lane), lanes.speed(lane)) else {
            return Err(RoadError::LaneOutOfRange {
                lane,
                lanes: lanes.len(),
            });
        };
        car.lane = lane;
        car.speed = speed;
        car.pos = Vec2::new(-car.width - 1.0, y);
        car.spawn = false;

        let mut cars = self.cars.write();
        car.id = cars.len() as u32;
        let id = car.id;
        let mut next: Vec<CarSlot> = cars.to_vec();
        next.push(Arc::new(Mutex::new(car)));
        *cars = Arc::from(next);
        Ok(id)
    }

    /// The slice current at the time of the call
    pub fn snapshot(&self) -> Arc<[CarSlot]> {
        Arc::clone(&self.cars.read())
    }

    /// Visit every car of the current snapshot in insertion order
    pub fn for_each_during_tick(&self, mut f: impl FnMut(&mut Car)) {
        let snapshot = self.snapshot();
        for slot in snapshot.iter() {
            f(&mut *slot.lock());
        }
    }

    /// Copies of all cars, in insertion order
    pub fn cars(&self) -> Vec<Car> {
        self.snapshot().iter().map(|slot| slot.lock().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.cars.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RoadConfig;

    fn lanes() -> LaneTable {
        LaneTable::new(&RoadConfig::with_geometry(40.0, 400.0))
    }

    #[test]
    fn test_add_places_car_off_left_edge() {
        let lanes = lanes();
        let pool = ObstaclePool::new();
        let id = pool.add(Car::new(60.0), 3, &lanes).unwrap();

        let cars = pool.cars();
        assert_eq!(id, 0);
        assert_eq!(cars[0].pos, Vec2::new(-61.0, lanes.y(3).unwrap()));
        assert_eq!(cars[0].speed, lanes.speed(3).unwrap());
        assert_eq!(cars[0].lane, 3);
    }

    #[test]
    fn test_add_rejects_bad_lane() {
        let pool = ObstaclePool::new();
        let err = pool.add(Car::new(40.0), 10, &lanes()).unwrap_err();
        assert_eq!(err, RoadError::LaneOutOfRange { lane: 10, lanes: 10 });
        assert!(pool.is_empty());
    }

    #[test]
    fn test_ids_follow_insertion_order() {
        let lanes = lanes();
        let pool = ObstaclePool::new();
        for lane in [4, 0, 7] {
            pool.add(Car::new(40.0), lane, &lanes).unwrap();
        }
        let order: Vec<_> = pool.cars().iter().map(|c| (c.id, c.lane)).collect();
        assert_eq!(order, vec![(0, 4), (1, 0), (2, 7)]);
    }

    #[test]
    fn test_snapshot_unaffected_by_later_add() {
        let lanes = lanes();
        let pool = ObstaclePool::new();
        pool.add(Car::new(40.0), 0, &lanes).unwrap();

        let snapshot = pool.snapshot();
        pool.add(Car::new(40.0), 1, &lanes).unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_add_during_iteration_is_visible_next_time() {
        let lanes = lanes();
        let pool = ObstaclePool::new();
        pool.add(Car::new(40.0), 0, &lanes).unwrap();

        let mut visited = 0;
        pool.for_each_during_tick(|_| {
            visited += 1;
            pool.add(Car::new(40.0), 2, &lanes).unwrap();
        });
        assert_eq!(visited, 1);

        let mut visited = 0;
        pool.for_each_during_tick(|_| visited += 1);
        assert_eq!(visited, 2);
    }

    #[test]
    fn test_wrap_left_edge() {
        let mut car = Car::new(40.0);
        car.speed = -1.0;
        car.pos.x = -40.5;
        car.wrap(400.0, 40.0);
        assert_eq!(car.x(), 400.0);
        assert!(car.spawn);

        car.update();
        car.wrap(400.0, 40.0);
        assert_eq!(car.x(), 399.0);
        assert!(!car.spawn);
    }

    #[test]
    fn test_wrap_right_edge() {
        let mut car = Car::new(40.0);
        car.pos.x = 400.5;
        car.wrap(400.0, 40.0);
        assert_eq!(car.x(), -40.0);
        assert!(car.spawn);
    }
}
