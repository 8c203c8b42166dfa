//! Simulation stepper: advance every live particle and prune the expired

use tracing::trace;

use super::{Config, Particle};

/// Evolve every particle by `dt` ms and drop those that reached max life.
///
/// Consumes the collection so the backing allocation is reused for the output.
/// Ordering of the result is not guaranteed.
pub fn step(dt: f32, particles: Vec<Particle>, config: &Config) -> Vec<Particle> {
    let before = particles.len();
    let live: Vec<Particle> = particles
        .into_iter()
        .map(|p| p.evolve(dt, config.dampening))
        .filter(|p| !p.is_expired(config.max_particle_life))
        .collect();

    if live.len() != before {
        trace!(pruned = before - live.len(), live = live.len(), "Pruned particles");
    }
    live
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn particle(life: f32) -> Particle {
        Particle {
            life,
            position: Vec2::new(10.0, 20.0),
            velocity: Vec2::new(0.1, -0.2),
        }
    }

    #[test]
    fn test_zero_dt_is_identity() {
        let config = Config::default();
        let input = vec![particle(0.0), particle(1200.0), particle(4999.0)];
        let output = step(0.0, input.clone(), &config);

        assert_eq!(output.len(), 3);
        for (a, b) in input.iter().zip(&output) {
            assert_eq!(a.life, b.life);
            assert_eq!(a.position, b.position);
        }
    }

    #[test]
    fn test_zero_dt_prunes_already_expired() {
        let config = Config::default();
        let output = step(0.0, vec![particle(100.0), particle(5000.0)], &config);
        assert_eq!(output.len(), 1);
        assert_eq!(output[0].life, 100.0);
    }

    #[test]
    fn test_particle_reaching_max_life_is_removed() {
        let config = Config::default();
        let output = step(20.0, vec![particle(4990.0)], &config);
        assert!(output.is_empty());
    }

    #[test]
    fn test_step_empty() {
        let config = Config::default();
        assert!(step(16.0, Vec::new(), &config).is_empty());
    }

    #[test]
    fn test_survivors_are_evolved() {
        let config = Config::default();
        let output = step(10.0, vec![particle(0.0), particle(4995.0)], &config);
        assert_eq!(output.len(), 1);
        assert_eq!(output[0].life, 10.0);
        assert!((output[0].position - Vec2::new(11.0, 18.0)).length() < 1e-5);
    }
}
