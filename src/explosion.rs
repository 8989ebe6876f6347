//! Explosion recipes: one call turns a burst event into a particle
//! population, appended atomically to the live set.

use std::f32::consts::TAU;

use crate::geom::Vec2;
use crate::particle::{Particle, ParticleKind};
use crate::rocket::ExplosionKind;
use crate::util::{self, random_palette_color};

/// Composes `kind` at the world position `at`. Side effect only.
pub fn compose(particles: &mut Vec<Particle>, at: Vec2, kind: ExplosionKind) {
    match kind {
        // 200 heavy stars split between two colors drawn once per burst.
        ExplosionKind::Mega => {
            let c1 = random_palette_color();
            let c2 = random_palette_color();
            for _ in 0..200 {
                let color = if fastrand::f32() < 0.5 { c1 } else { c2 };
                particles.push(Particle::new(at, ParticleKind::Mega, Some(color), None));
            }
        }
        // 20 white parents; each later composes its own sub-burst.
        ExplosionKind::Burst => {
            for _ in 0..20 {
                let angle = util::random(0.0, TAU);
                let speed = util::random(4.0, 10.0);
                particles.push(Particle::new(
                    at,
                    ParticleKind::BurstParent,
                    None,
                    Some(Vec2::new(angle.cos() * speed, angle.sin() * speed)),
                ));
            }
        }
        ExplosionKind::SubBurst => {
            let color = random_palette_color();
            for _ in 0..12 {
                let angle = util::random(0.0, TAU);
                let speed = util::random(1.0, 4.0);
                particles.push(Particle::new(
                    at,
                    ParticleKind::Normal,
                    Some(color),
                    Some(Vec2::new(angle.cos() * speed, angle.sin() * speed)),
                ));
            }
        }
        ExplosionKind::Willow => {
            for _ in 0..100 {
                let angle = util::random(0.0, TAU);
                let speed = util::random(3.0, 10.0);
                particles.push(Particle::new(
                    at,
                    ParticleKind::Willow,
                    None,
                    Some(Vec2::new(angle.cos() * speed, angle.sin() * speed)),
                ));
            }
        }
        // 80 stars on evenly spaced spokes at a fixed speed.
        ExplosionKind::Ring => {
            let count = 80;
            let color = random_palette_color();
            for i in 0..count {
                let angle = TAU * i as f32 / count as f32;
                let speed = 6.0;
                particles.push(Particle::new(
                    at,
                    ParticleKind::Normal,
                    Some(color),
                    Some(Vec2::new(angle.cos() * speed, angle.sin() * speed)),
                ));
            }
        }
        ExplosionKind::Mini => {
            let color = random_palette_color();
            for _ in 0..25 {
                particles.push(Particle::new(at, ParticleKind::Mini, Some(color), None));
            }
        }
        // The default 80-star isotropic burst; strobe stars ride it.
        ExplosionKind::Strobe => {
            let color = random_palette_color();
            for _ in 0..80 {
                particles.push(Particle::new(at, ParticleKind::Strobe, Some(color), None));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::{GOLD, WHITE};

    fn composed(kind: ExplosionKind) -> Vec<Particle> {
        let mut particles = Vec::new();
        compose(&mut particles, Vec2::new(300.0, 200.0), kind);
        particles
    }

    #[test]
    fn population_counts_match_the_recipes() {
        assert_eq!(composed(ExplosionKind::Mega).len(), 200);
        assert_eq!(composed(ExplosionKind::Burst).len(), 20);
        assert_eq!(composed(ExplosionKind::SubBurst).len(), 12);
        assert_eq!(composed(ExplosionKind::Willow).len(), 100);
        assert_eq!(composed(ExplosionKind::Ring).len(), 80);
        assert_eq!(composed(ExplosionKind::Mini).len(), 25);
        assert_eq!(composed(ExplosionKind::Strobe).len(), 80);
    }

    #[test]
    fn mega_uses_at_most_two_colors() {
        let particles = composed(ExplosionKind::Mega);
        let mut colors: Vec<_> = particles.iter().map(|p| p.color()).collect();
        colors.sort_by_key(|c| (c.0, c.1, c.2));
        colors.dedup();
        assert!(colors.len() <= 2);
        assert!(particles.iter().all(|p| p.kind() == ParticleKind::Mega));
    }

    #[test]
    fn burst_parents_are_white_and_fast() {
        for p in composed(ExplosionKind::Burst) {
            assert_eq!(p.kind(), ParticleKind::BurstParent);
            assert_eq!(p.color(), WHITE);
            let speed = p.velocity().length();
            assert!((3.999..10.001).contains(&speed));
        }
    }

    #[test]
    fn sub_burst_shares_one_color_and_stays_slow() {
        let particles = composed(ExplosionKind::SubBurst);
        let first = particles[0].color();
        for p in &particles {
            assert_eq!(p.kind(), ParticleKind::Normal);
            assert_eq!(p.color(), first);
            let speed = p.velocity().length();
            assert!((0.999..4.001).contains(&speed));
        }
    }

    #[test]
    fn willow_is_forced_gold() {
        for p in composed(ExplosionKind::Willow) {
            assert_eq!(p.kind(), ParticleKind::Willow);
            assert_eq!(p.color(), GOLD);
            let speed = p.velocity().length();
            assert!((2.999..10.001).contains(&speed));
        }
    }

    #[test]
    fn ring_spokes_are_evenly_spaced_at_fixed_speed() {
        let particles = composed(ExplosionKind::Ring);
        let first = particles[0].color();
        for (i, p) in particles.iter().enumerate() {
            let expected = TAU * i as f32 / 80.0;
            let v = p.velocity();
            let angle = v.y.atan2(v.x).rem_euclid(TAU);
            let diff = (angle - expected).abs();
            assert!(diff < 1e-3 || (TAU - diff) < 1e-3);
            assert!((v.length() - 6.0).abs() < 1e-3);
            assert_eq!(p.color(), first);
        }
    }

    #[test]
    fn mini_and_strobe_use_one_color_each() {
        let minis = composed(ExplosionKind::Mini);
        assert!(minis.iter().all(|p| p.kind() == ParticleKind::Mini));
        assert!(minis.iter().all(|p| p.color() == minis[0].color()));

        let strobes = composed(ExplosionKind::Strobe);
        assert!(strobes.iter().all(|p| p.kind() == ParticleKind::Strobe));
        assert!(strobes.iter().all(|p| p.color() == strobes[0].color()));
    }
}
