/// Gear particles thrown out of damaged enemies.
///
/// Every bounce halves and reverses the vertical speed, and the particle is
/// dropped once a bounce comes out slower than `settle_speed`.

use rand::Rng;

use crate::compute::SimContext;
use crate::config::ParticleTuning;
use crate::entities::Particle;

impl Particle {
    /// A particle at (`x`, `y`) with randomised drift, launch speed, spin,
    /// size and sprite cell.
    pub fn new(tuning: &ParticleTuning, x: f32, y: f32, rng: &mut impl Rng) -> Self {
        // Size modifier in 0.5..=1.0, rounded to one decimal.
        let modifier = ((rng.gen::<f32>() * 0.5 + 0.5) * 10.0).round() / 10.0;
        Self {
            x,
            y,
            speed_x: rng.gen::<f32>() * 6.0 - 3.0,
            speed_y: rng.gen::<f32>() * -15.0,
            gravity: tuning.gravity,
            angle: 0.0,
            va: rng.gen::<f32>() * 0.2,
            size: tuning.sprite_size * modifier,
            frame_x: rng.gen_range(0..3),
            frame_y: rng.gen_range(0..3),
            marked_for_deletion: false,
        }
    }

    pub fn update(&mut self, ctx: &SimContext) {
        let tuning = &ctx.particle;
        self.angle += self.va;
        self.speed_y += self.gravity;
        self.x -= self.speed_x;

        if self.y > ctx.field_height * tuning.floor_ratio {
            self.speed_y = -self.speed_y * tuning.bounce_damping;
            if self.speed_y > -tuning.settle_speed {
                self.marked_for_deletion = true;
            }
        }

        self.y += self.speed_y;
    }
}

/// Update every particle, then drop the settled ones.
pub fn update_particles(particles: &mut Vec<Particle>, ctx: &SimContext) {
    for particle in particles.iter_mut() {
        particle.update(ctx);
    }
    particles.retain(|p| !p.marked_for_deletion);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn ctx() -> SimContext {
        SimContext::from_config(&GameConfig::default())
    }

    fn still_particle(x: f32, y: f32) -> Particle {
        Particle {
            x,
            y,
            speed_x: 0.0,
            speed_y: 0.0,
            gravity: 0.5,
            angle: 0.0,
            va: 0.1,
            size: 50.0,
            frame_x: 0,
            frame_y: 0,
            marked_for_deletion: false,
        }
    }

    #[test]
    fn gravity_accumulates_above_floor() {
        let mut p = still_particle(100.0, 100.0);
        p.update(&ctx());
        assert_eq!(p.speed_y, 0.5);
        assert_eq!(p.y, 100.5);
        p.update(&ctx());
        assert_eq!(p.speed_y, 1.0);
        assert_eq!(p.y, 101.5);
        assert!((p.angle - 0.2).abs() < 1e-6);
        assert!(!p.marked_for_deletion);
    }

    #[test]
    fn drifts_against_speed_x() {
        let mut p = still_particle(100.0, 100.0);
        p.speed_x = 2.0;
        p.update(&ctx());
        assert_eq!(p.x, 98.0);
    }

    #[test]
    fn fast_fall_bounces_and_survives() {
        let mut p = still_particle(100.0, 401.0);
        p.speed_y = 19.5; // becomes 20 after gravity, bounces to -10
        p.update(&ctx());
        assert_eq!(p.speed_y, -10.0);
        assert_eq!(p.y, 391.0);
        assert!(!p.marked_for_deletion);
    }

    #[test]
    fn slow_bounce_settles() {
        let mut p = still_particle(100.0, 401.0);
        p.speed_y = 7.5; // 8 after gravity, bounces to -4
        p.update(&ctx());
        assert!(p.marked_for_deletion);
    }

    #[test]
    fn compaction_keeps_creation_order() {
        let mut settling = still_particle(200.0, 401.0);
        settling.speed_y = 7.5;
        let mut particles = vec![
            still_particle(100.0, 100.0),
            settling,
            still_particle(300.0, 100.0),
            still_particle(400.0, 100.0),
        ];
        update_particles(&mut particles, &ctx());
        let xs: Vec<f32> = particles.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![100.0, 300.0, 400.0]);
    }

    #[test]
    fn bouncing_particle_is_eventually_removed() {
        let mut particles = vec![still_particle(100.0, 300.0)];
        particles[0].speed_y = -15.0;
        for _ in 0..2000 {
            update_particles(&mut particles, &ctx());
            if particles.is_empty() {
                return;
            }
        }
        panic!("particle never settled");
    }

    #[test]
    fn new_particle_ranges() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let tuning = ParticleTuning::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let p = Particle::new(&tuning, 10.0, 20.0, &mut rng);
            assert!((-3.0..3.0).contains(&p.speed_x));
            assert!(p.speed_y <= 0.0 && p.speed_y > -15.0);
            assert!((25.0..=50.0).contains(&p.size));
            assert!(p.frame_x < 3 && p.frame_y < 3);
            assert_eq!((p.x, p.y), (10.0, 20.0));
        }
    }
}
