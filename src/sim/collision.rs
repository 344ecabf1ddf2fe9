//! Car/frog hit test
//!
//! Both entities are axis-aligned boxes anchored at their top-left corner:
//! a car spans its width and one lane height, a frog a fixed square.

use glam::Vec2;

use super::car::Car;
use super::frog::Frog;

/// Axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    #[inline]
    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self {
            min: origin,
            max: origin + size,
        }
    }

    /// Open-interval overlap: touching edges do not count
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

/// Box of a car in a lane of height `lane_height`
#[inline]
pub fn car_box(car: &Car, lane_height: f32) -> Aabb {
    Aabb::new(car.pos, Vec2::new(car.width, lane_height))
}

/// Box of a frog with edge `frog_size`
#[inline]
pub fn frog_box(frog: &Frog, frog_size: f32) -> Aabb {
    Aabb::new(frog.pos, Vec2::splat(frog_size))
}

/// Whether the car strikes the frog this tick. Dead frogs are never hit.
pub fn car_hits_frog(car: &Car, frog: &Frog, lane_height: f32, frog_size: f32) -> bool {
    !frog.dead && car_box(car, lane_height).overlaps(&frog_box(frog, frog_size))
}
