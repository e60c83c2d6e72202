//! Ambient night particles
//!
//! Purely atmospheric: fireflies drifting over the map after dark. Not
//! persisted and never consulted by behavior.

use rand::Rng;

/// Upper bound on live particles
const MAX_PARTICLES: usize = 60;

#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    phase: f32,
}

#[derive(Debug, Clone, Default)]
pub struct Environment {
    particles: Vec<Particle>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grow the swarm at night, clear it at dawn, drift what is alive
    pub fn update<R: Rng>(&mut self, is_night: bool, map_width: f32, map_height: f32, rng: &mut R) {
        if is_night && self.particles.len() < MAX_PARTICLES {
            self.particles.push(Particle {
                x: rng.gen_range(0.0..map_width),
                y: rng.gen_range(0.0..map_height),
                phase: rng.gen_range(0.0..100.0),
            });
        } else if !is_night {
            self.particles.clear();
        }

        for p in &mut self.particles {
            p.x += (p.phase * 0.05).sin() * 0.5;
            p.y += (p.phase * 0.05).cos() * 0.5;
            p.phase += 1.0;
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_particles_grow_at_night_and_clear_by_day() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut env = Environment::new();
        for _ in 0..100 {
            env.update(true, 2400.0, 1800.0, &mut rng);
        }
        assert_eq!(env.particles().len(), MAX_PARTICLES);

        env.update(false, 2400.0, 1800.0, &mut rng);
        assert!(env.particles().is_empty());
    }
}
