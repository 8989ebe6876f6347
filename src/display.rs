//! The frame driver: owns the live rocket/particle populations, launches
//! autonomous shells, routes clicks, and draws everything once per frame.

use crate::canvas::Canvas;
use crate::explosion;
use crate::geom::{Rect, Vec2, to_world};
use crate::particle::{Particle, StepOutcome};
use crate::rocket::{ExplosionKind, Rocket};

/// Per-frame chance of an autonomous launch while the header is in view.
pub const TRIGGER_PROB: f32 = 0.02;

const MAX_ROCKETS: usize = 4;

/// Fade applied to the surface before drawing, producing the trails.
const TRAIL_FADE: f32 = 0.15;

/// Everything the simulation needs to know about the host page this frame.
/// The host rebuilds it from live values on every frame and every click;
/// scroll offsets and header rects must never be cached across frames.
#[derive(Clone, Copy, Debug)]
pub struct PageView {
    pub scroll: Vec2,
    /// Header region in world space, if the page has one.
    pub header: Option<Rect>,
    pub is_home: bool,
}

impl PageView {
    /// True while the header's bottom edge has not scrolled off the top.
    fn header_in_view(&self) -> Option<&Rect> {
        self.header
            .as_ref()
            .filter(|h| h.bottom() - self.scroll.y > 0.0)
    }
}

pub struct FireworksDisplay {
    rockets: Vec<Rocket>,
    particles: Vec<Particle>,
    time: f32,
    enabled: bool,
    pub trigger_prob: f32,
}

impl Default for FireworksDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl FireworksDisplay {
    /// Starts stopped; the host calls `start()` once its surface exists.
    pub fn new() -> Self {
        Self {
            rockets: Vec::new(),
            particles: Vec::new(),
            time: 0.0,
            enabled: false,
            trigger_prob: TRIGGER_PROB,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn rocket_count(&self) -> usize {
        self.rockets.len()
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Idempotent. A restart after `stop()` observes no stale entities.
    pub fn start(&mut self) {
        self.enabled = true;
    }

    /// Idempotent. Clears both live populations so nothing survives into
    /// the next `start()`.
    pub fn stop(&mut self) {
        self.enabled = false;
        self.rockets.clear();
        self.particles.clear();
    }

    /// One simulation+render step. The stop flag is checked at the top of
    /// the tick, so a stopped display neither simulates nor draws.
    pub fn frame(&mut self, canvas: &mut dyn Canvas, view: &PageView, dt: f32) {
        if !self.enabled {
            return;
        }

        self.time += dt;
        if self.time > 10000.0 {
            self.time -= 10000.0;
        }

        canvas.fade(TRAIL_FADE);

        // Autonomous launches only happen on the home view while the header
        // is still visible; a missing header silently means "never".
        if view.is_home {
            if let Some(header) = view.header_in_view() {
                if self.rockets.len() < MAX_ROCKETS && fastrand::f32() < self.trigger_prob {
                    self.rockets
                        .push(Rocket::launch(header, ExplosionKind::random_shell()));
                }
            }
        }

        // Draw, step, compact; handoffs are composed after the pass so the
        // population is never spliced mid-iteration.
        let mut bursts = Vec::new();
        self.rockets.retain_mut(|rocket| {
            rocket.draw(canvas, view.scroll);
            match rocket.step() {
                Some(handoff) => {
                    bursts.push(handoff);
                    false
                }
                None => true,
            }
        });
        for (at, kind) in bursts {
            explosion::compose(&mut self.particles, at, kind);
        }

        // Same discipline for particles; a burst parent's sub-burst request
        // is deferred to after the compaction, keeping the parent's own step
        // from reentering the population it is iterating.
        let time = self.time;
        let mut sub_bursts = Vec::new();
        self.particles.retain_mut(|particle| {
            particle.draw(canvas, view.scroll, time);
            match particle.step() {
                StepOutcome::Retain => true,
                StepOutcome::Remove => false,
                StepOutcome::SubBurst(at) => {
                    sub_bursts.push(at);
                    false
                }
            }
        });
        for at in sub_bursts {
            explosion::compose(&mut self.particles, at, ExplosionKind::SubBurst);
        }
    }

    /// Click trigger. Header clicks on the home view compose one of the big
    /// shells at the world point; anywhere else gets a mini burst.
    pub fn handle_click(&mut self, at_viewport: Vec2, view: &PageView) {
        if !self.enabled {
            return;
        }

        let world = to_world(at_viewport, view.scroll);

        let header_hit = view.is_home
            && view
                .header
                .as_ref()
                .is_some_and(|header| header.contains(world));

        let kind = if header_hit {
            ExplosionKind::random_header_click()
        } else {
            ExplosionKind::Mini
        };
        explosion::compose(&mut self.particles, world, kind);
    }
}
