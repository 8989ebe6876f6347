//! Rising shell: travels from a launch point toward its apex, then hands
//! off to the explosion composer.

use crate::STEP_SIZE;
use crate::canvas::Canvas;
use crate::geom::{Rect, Vec2, to_viewport};
use crate::util::{self, hsl};

const TRAIL_LEN: usize = 3;

/// Horizontal scatter of the apex around the launch column, in world pixels.
const APEX_SPREAD: f32 = 100.0;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ExplosionKind {
    Mega,
    Burst,
    SubBurst,
    Willow,
    Ring,
    Mini,
    Strobe,
}

impl ExplosionKind {
    /// The shells the autonomous launcher fires.
    pub fn random_shell() -> Self {
        match fastrand::usize(0..5) {
            0 => ExplosionKind::Mega,
            1 => ExplosionKind::Willow,
            2 => ExplosionKind::Strobe,
            3 => ExplosionKind::Burst,
            _ => ExplosionKind::Ring,
        }
    }

    /// The shells a header click composes directly, no rocket.
    pub fn random_header_click() -> Self {
        match fastrand::usize(0..4) {
            0 => ExplosionKind::Mega,
            1 => ExplosionKind::Burst,
            2 => ExplosionKind::Willow,
            _ => ExplosionKind::Strobe,
        }
    }

    fn launch_speed(self) -> f32 {
        if self == ExplosionKind::Mega { 2.5 } else { 3.0 }
    }

    /// Apex height as fractions of the launch rect's height below its top:
    /// `top + h * min + random(0, 1) * h * span`.
    fn apex_fractions(self) -> (f32, f32) {
        if self == ExplosionKind::Mega {
            (0.1, 0.25)
        } else {
            (0.15, 0.3)
        }
    }
}

pub struct Rocket {
    pos: Vec2,
    start: Vec2,
    target: Vec2,
    vel: Vec2,
    trail: [Vec2; TRAIL_LEN],
    kind: ExplosionKind,
    travel: f32,
    /// Exhaust lightness, fixed per rocket; only the hue flickers per frame.
    brightness: f32,
    spent: bool,
}

impl Rocket {
    pub fn new(start: Vec2, target: Vec2, kind: ExplosionKind) -> Self {
        let travel = start.distance(target);
        let angle = (target.y - start.y).atan2(target.x - start.x);
        let speed = kind.launch_speed();

        Self {
            pos: start,
            start,
            target,
            vel: Vec2::new(angle.cos() * speed, angle.sin() * speed),
            trail: [start; TRAIL_LEN],
            kind,
            travel,
            brightness: util::random(0.6, 0.8),
            spent: false,
        }
    }

    /// Launches from a random column along the bottom edge of the header
    /// rect (world space), aiming for an apex inside the rect.
    pub fn launch(header: &Rect, kind: ExplosionKind) -> Self {
        let start = Vec2::new(
            header.left + fastrand::f32() * header.width,
            header.bottom(),
        );
        let (min_frac, span_frac) = kind.apex_fractions();
        let target = Vec2::new(
            start.x + util::random(-APEX_SPREAD, APEX_SPREAD),
            header.top
                + header.height * min_frac
                + fastrand::f32() * (header.height * span_frac),
        );
        Self::new(start, target, kind)
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn kind(&self) -> ExplosionKind {
        self.kind
    }

    pub fn traveled(&self) -> f32 {
        self.start.distance(self.pos)
    }

    /// Integrates one frame. Yields the explosion handoff exactly once, at
    /// the step where traveled distance first reaches the precomputed total;
    /// the owner removes the rocket at that point. A zero-distance rocket
    /// hands off on its very first step.
    pub fn step(&mut self) -> Option<(Vec2, ExplosionKind)> {
        if self.spent {
            return None;
        }

        self.trail.rotate_right(1);
        self.trail[0] = self.pos;
        self.pos += self.vel * STEP_SIZE;

        if self.traveled() >= self.travel {
            self.spent = true;
            Some((self.target, self.kind))
        } else {
            None
        }
    }

    /// Gold exhaust streak from the oldest trail point to the nose.
    pub fn draw(&self, canvas: &mut dyn Canvas, scroll: Vec2) {
        let color = hsl(util::random(30.0, 50.0), 1.0, self.brightness);
        canvas.stroke(
            to_viewport(self.trail[TRAIL_LEN - 1], scroll),
            to_viewport(self.pos, scroll),
            color,
            1.0,
            1.0,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::Rgb;

    struct StrokeLog {
        colors: Vec<Rgb>,
    }

    impl Canvas for StrokeLog {
        fn size(&self) -> Vec2 {
            Vec2::new(800.0, 600.0)
        }
        fn fade(&mut self, _amount: f32) {}
        fn stroke(&mut self, _from: Vec2, _to: Vec2, color: Rgb, _alpha: f32, _width: f32) {
            self.colors.push(color);
        }
        fn fill_rect(&mut self, _origin: Vec2, _size: f32, _color: Rgb, _alpha: f32) {}
        fn clear(&mut self) {}
    }

    #[test]
    fn reaches_target_in_expected_steps_and_explodes_once() {
        let start = Vec2::new(100.0, 500.0);
        let target = Vec2::new(150.0, 100.0);
        // Willow launches at speed 3; distance is ~403.11, so the handoff
        // lands on step ceil(403.11 / 3) = 135.
        let mut rocket = Rocket::new(start, target, ExplosionKind::Willow);

        let mut prev_traveled = 0.0;
        let mut handoff = None;
        for step in 1..=200 {
            if let Some(h) = rocket.step() {
                handoff = Some((step, h));
                break;
            }
            assert!(rocket.traveled() >= prev_traveled);
            prev_traveled = rocket.traveled();
        }

        let (step, (at, kind)) = handoff.expect("rocket never exploded");
        assert_eq!(step, 135);
        assert_eq!(at, target);
        assert_eq!(kind, ExplosionKind::Willow);

        // Never a second handoff.
        for _ in 0..10 {
            assert!(rocket.step().is_none());
        }
    }

    #[test]
    fn launch_speeds_are_kind_dependent() {
        let start = Vec2::new(0.0, 100.0);
        let target = Vec2::new(30.0, 0.0);

        let mega = Rocket::new(start, target, ExplosionKind::Mega);
        assert!((mega.vel.length() - 2.5).abs() < 1e-4);

        let ring = Rocket::new(start, target, ExplosionKind::Ring);
        assert!((ring.vel.length() - 3.0).abs() < 1e-4);
    }

    #[test]
    fn zero_distance_rocket_explodes_on_first_step() {
        let p = Vec2::new(42.0, 42.0);
        let mut rocket = Rocket::new(p, p, ExplosionKind::Strobe);
        assert_eq!(rocket.step(), Some((p, ExplosionKind::Strobe)));
    }

    #[test]
    fn launch_geometry_stays_inside_the_header() {
        let header = Rect::new(0.0, 50.0, 800.0, 400.0);
        for _ in 0..200 {
            let rocket = Rocket::launch(&header, ExplosionKind::Willow);

            assert_eq!(rocket.start.y, header.bottom());
            assert!(rocket.start.x >= header.left && rocket.start.x <= header.right());

            assert!((rocket.target.x - rocket.start.x).abs() <= APEX_SPREAD);
            // Non-mega apex: top + h * 0.15 .. top + h * 0.45.
            assert!(rocket.target.y >= header.top + header.height * 0.15);
            assert!(rocket.target.y <= header.top + header.height * 0.45);
        }
    }

    #[test]
    fn mega_apex_sits_higher() {
        let header = Rect::new(0.0, 0.0, 800.0, 400.0);
        for _ in 0..200 {
            let rocket = Rocket::launch(&header, ExplosionKind::Mega);
            assert!(rocket.target.y >= header.height * 0.1);
            assert!(rocket.target.y <= header.height * 0.35);
        }
    }

    #[test]
    fn exhaust_brightness_is_fixed_per_rocket() {
        let rocket = Rocket::new(
            Vec2::new(100.0, 500.0),
            Vec2::new(150.0, 100.0),
            ExplosionKind::Ring,
        );
        assert!((0.6..0.8).contains(&rocket.brightness));

        // At full saturation in the 30..50 hue band the blue channel is a
        // function of lightness alone, so a fixed brightness means a fixed
        // blue channel across frames even as the hue flickers.
        let mut log = StrokeLog { colors: Vec::new() };
        for _ in 0..20 {
            rocket.draw(&mut log, Vec2::ZERO);
        }
        assert_eq!(log.colors.len(), 20);
        assert!(log.colors.iter().all(|c| c.2 == log.colors[0].2));
    }

    #[test]
    fn velocity_points_at_the_target() {
        let start = Vec2::new(200.0, 600.0);
        let target = Vec2::new(240.0, 150.0);
        let rocket = Rocket::new(start, target, ExplosionKind::Burst);

        // Velocity direction matches the start->target direction.
        let dir = target - start;
        let cross = rocket.vel.x * dir.y - rocket.vel.y * dir.x;
        assert!(cross.abs() < 1e-2);
        assert!(rocket.vel.y < 0.0);
    }
}
