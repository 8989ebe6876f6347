//! Explosion star: a point mass with drag, gravity and fade-out.

use std::f32::consts::TAU;

use crate::STEP_SIZE;
use crate::canvas::Canvas;
use crate::geom::{Vec2, to_viewport};
use crate::util::{self, GOLD, Rgb, WHITE};

const TRAIL_LEN: usize = 5;

/// A burst parent hands off to a sub-burst once its alpha sinks below this.
const SUB_BURST_ALPHA: f32 = 0.3;

/// Closed set of particle behaviors. Physics constants hang off the tag so
/// the step function looks them up instead of branching per type; `Strobe`
/// shares `Normal` physics and only draws differently.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ParticleKind {
    Normal,
    Mega,
    Mini,
    Willow,
    BurstParent,
    Strobe,
}

#[derive(Clone, Copy, Debug)]
pub struct Params {
    pub drag: f32,
    pub gravity: f32,
    pub decay_min: f32,
    pub decay_max: f32,
}

impl ParticleKind {
    pub fn params(self) -> Params {
        match self {
            ParticleKind::Normal | ParticleKind::Strobe => Params {
                drag: 0.96,
                gravity: 0.015,
                decay_min: 0.008,
                decay_max: 0.015,
            },
            ParticleKind::Willow => Params {
                drag: 0.94,
                gravity: 0.04,
                decay_min: 0.003,
                decay_max: 0.006,
            },
            ParticleKind::BurstParent => Params {
                drag: 0.94,
                gravity: 0.015,
                decay_min: 0.01,
                decay_max: 0.02,
            },
            ParticleKind::Mega => Params {
                drag: 0.96,
                gravity: 0.015,
                decay_min: 0.005,
                decay_max: 0.009,
            },
            ParticleKind::Mini => Params {
                drag: 0.95,
                gravity: 0.06,
                decay_min: 0.015,
                decay_max: 0.03,
            },
        }
    }

    /// Speed range for the intrinsic isotropic velocity pick, used when the
    /// explosion recipe does not hand the particle an explicit velocity.
    fn speed_range(self) -> (f32, f32) {
        match self {
            ParticleKind::Mega => (2.0, 14.0),
            ParticleKind::Mini => (1.0, 5.0),
            _ => (1.0, 8.0),
        }
    }
}

/// What the owner must do with the particle after a step.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum StepOutcome {
    Retain,
    Remove,
    /// Remove, and compose a sub-burst at the given world position.
    SubBurst(Vec2),
}

pub struct Particle {
    pos: Vec2,
    vel: Vec2,
    trail: [Vec2; TRAIL_LEN],
    color: Rgb,
    kind: ParticleKind,
    alpha: f32,
    decay: f32,
    has_exploded: bool,
}

impl Particle {
    /// `color: None` picks a palette color; `velocity: None` picks an
    /// isotropic direction at the kind's own speed range. Willow is always
    /// gold and burst parents always white, whatever the recipe asked for.
    pub fn new(pos: Vec2, kind: ParticleKind, color: Option<Rgb>, velocity: Option<Vec2>) -> Self {
        let params = kind.params();

        let color = match kind {
            ParticleKind::Willow => GOLD,
            ParticleKind::BurstParent => WHITE,
            _ => color.unwrap_or_else(util::random_palette_color),
        };

        let vel = velocity.unwrap_or_else(|| {
            let angle = util::random(0.0, TAU);
            let (min, max) = kind.speed_range();
            let speed = util::random(min, max);
            Vec2::new(angle.cos() * speed, angle.sin() * speed)
        });

        Self {
            pos,
            vel,
            trail: [pos; TRAIL_LEN],
            color,
            kind,
            alpha: 1.0,
            decay: util::random(params.decay_min, params.decay_max),
            has_exploded: false,
        }
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn velocity(&self) -> Vec2 {
        self.vel
    }

    pub fn kind(&self) -> ParticleKind {
        self.kind
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Explicit Euler step. A burst parent crossing the sub-burst threshold
    /// is snuffed out the same frame it hands off.
    pub fn step(&mut self) -> StepOutcome {
        self.trail.rotate_right(1);
        self.trail[0] = self.pos;

        let params = self.kind.params();
        self.vel = self.vel * params.drag;
        self.vel.y += params.gravity;
        self.pos += self.vel * STEP_SIZE;
        self.alpha -= self.decay;

        if self.kind == ParticleKind::BurstParent
            && !self.has_exploded
            && self.alpha < SUB_BURST_ALPHA
        {
            self.has_exploded = true;
            self.alpha = 0.0;
            return StepOutcome::SubBurst(self.pos);
        }

        if self.alpha <= 0.0 {
            StepOutcome::Remove
        } else {
            StepOutcome::Retain
        }
    }

    /// `time` is the display clock in seconds; only the strobe modulation
    /// reads it.
    pub fn draw(&self, canvas: &mut dyn Canvas, scroll: Vec2, time: f32) {
        // Dying willow stars degrade into flickering gold embers with the
        // occasional white flash, half the frames dark.
        if self.kind == ParticleKind::Willow && self.alpha < 0.5 {
            if fastrand::f32() < 0.5 {
                return;
            }
            let white_flash = fastrand::f32() < 0.2;
            let (color, size) = if white_flash { (WHITE, 2.5) } else { (GOLD, 1.5) };
            let alpha = (self.alpha * 2.0).min(1.0);
            canvas.fill_rect(to_viewport(self.pos, scroll), size, color, alpha);
            return;
        }

        let (alpha, width) = if self.kind == ParticleKind::Strobe {
            let visible = (time * 1000.0 / 30.0).sin() > 0.0;
            (if visible { self.alpha } else { 0.1 }, 2.0)
        } else {
            (self.alpha, 1.5)
        };

        let tail = self.trail[TRAIL_LEN - 1];
        canvas.stroke(
            to_viewport(tail, scroll),
            to_viewport(self.pos, scroll),
            self.color,
            alpha,
            width,
        );
    }
}
