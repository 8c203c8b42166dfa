//! Randomized particle creation along the spawn edge
//!
//! Particles appear `spawn_depth` units below the bottom edge and are
//! launched with `(-cos, -sin)` of an angle in `[min_angle, max_angle]`,
//! which points them up into the canvas.

use glam::Vec2;
use rand::Rng;
use tracing::debug;

use super::{Config, Particle, Viewport};

/// Create `count` newborn particles for a canvas of size `bounds`.
///
/// Draws from the supplied RNG only; simulation state is left to the caller.
pub fn spawn<R: Rng + ?Sized>(
    count: usize,
    bounds: Viewport,
    config: &Config,
    rng: &mut R,
) -> Vec<Particle> {
    let y = bounds.height + config.spawn_depth;
    let batch: Vec<Particle> = (0..count)
        .map(|_| {
            let x = rng.gen_range(0.0..=bounds.width);
            let dir = rng.gen_range(config.min_angle..=config.max_angle);
            let speed = rng.gen_range(config.min_speed..=config.max_speed);
            let velocity = Vec2::new(-dir.cos(), -dir.sin()) * speed;
            Particle::new(Vec2::new(x, y), velocity)
        })
        .collect();

    debug!(count, width = bounds.width, height = bounds.height, "Spawned batch");
    batch
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    const PI_6_COS: f32 = 0.866_025_4;

    #[test]
    fn test_spawn_batch_shape() {
        let config = Config::default();
        let bounds = Viewport { width: 800.0, height: 600.0 };
        let mut rng = SmallRng::seed_from_u64(42);

        let batch = spawn(2, bounds, &config, &mut rng);
        assert_eq!(batch.len(), 2);
        for p in &batch {
            assert_eq!(p.life, 0.0);
            assert_eq!(p.position.y, 650.0);
            assert!((0.0..=800.0).contains(&p.position.x));
            let speed = p.velocity.length();
            assert!(speed >= 0.075 - 1e-6 && speed <= 0.5 + 1e-6, "speed {}", speed);
        }
    }

    #[test]
    fn test_spawned_particles_move_upward() {
        let config = Config::default();
        let bounds = Viewport { width: 1280.0, height: 720.0 };
        let mut rng = SmallRng::seed_from_u64(7);

        for p in spawn(200, bounds, &config, &mut rng) {
            // sin is positive on [π/6, 5π/6], so -sin points up the canvas
            assert!(p.velocity.y < 0.0);
            // |cos| <= cos(π/6) keeps the horizontal component bounded
            assert!(p.velocity.x.abs() <= p.velocity.length() * (PI_6_COS + 1e-5));
        }
    }

    #[test]
    fn test_same_seed_same_batch() {
        let config = Config::default();
        let bounds = Viewport { width: 800.0, height: 600.0 };

        let a = spawn(5, bounds, &config, &mut SmallRng::seed_from_u64(99));
        let b = spawn(5, bounds, &config, &mut SmallRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_count_is_empty() {
        let config = Config::default();
        let bounds = Viewport { width: 800.0, height: 600.0 };
        let mut rng = SmallRng::seed_from_u64(1);
        assert!(spawn(0, bounds, &config, &mut rng).is_empty());
    }
}
