//! World/viewport geometry.
//!
//! Entities live in world space, fixed to the simulated document so a
//! firework does not slide when the page scrolls. The drawing surface only
//! understands viewport pixels, so every draw call converts with the scroll
//! offset sampled at draw time.

use std::ops::{Add, AddAssign, Mul, Sub};

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn distance(self, other: Vec2) -> f32 {
        (other - self).length()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

/// Viewport point plus scroll offset is the document-absolute point.
pub fn to_world(viewport: Vec2, scroll: Vec2) -> Vec2 {
    viewport + scroll
}

/// Document-absolute point back to the currently visible window.
pub fn to_viewport(world: Vec2, scroll: Vec2) -> Vec2 {
    world - scroll
}

/// Axis-aligned rectangle, in whichever space the caller keeps it.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.left && p.x <= self.right() && p.y >= self.top && p.y <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_viewport_round_trip_is_exact() {
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(153.0, 842.0),
            Vec2::new(-7.5, 1024.25),
        ];
        let scrolls = [Vec2::ZERO, Vec2::new(0.0, 640.0), Vec2::new(12.0, 3000.5)];

        for p in points {
            for s in scrolls {
                assert_eq!(to_viewport(to_world(p, s), s), p);
            }
        }
    }

    #[test]
    fn scrolling_moves_viewport_not_world() {
        let world = Vec2::new(100.0, 500.0);
        let before = to_viewport(world, Vec2::new(0.0, 0.0));
        let after = to_viewport(world, Vec2::new(0.0, 200.0));
        assert_eq!(before.y - after.y, 200.0);
        assert_eq!(before.x, after.x);
    }

    #[test]
    fn rect_contains_is_edge_inclusive() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert!(r.contains(Vec2::new(10.0, 20.0)));
        assert!(r.contains(Vec2::new(40.0, 60.0)));
        assert!(r.contains(Vec2::new(25.0, 45.0)));
        assert!(!r.contains(Vec2::new(9.9, 30.0)));
        assert!(!r.contains(Vec2::new(25.0, 60.1)));
    }

    #[test]
    fn vec2_length_and_distance() {
        assert_eq!(Vec2::new(3.0, 4.0).length(), 5.0);
        let d = Vec2::new(100.0, 500.0).distance(Vec2::new(150.0, 100.0));
        assert!((d - 403.1129).abs() < 0.001);
    }
}
