//! Proximity mesh: one line segment per ordered pair of nearby particles
//!
//! Brute force over all pairs. Mutually near particles produce two
//! segments, one in each direction, and a particle is never paired with
//! itself.

use bytemuck::{Pod, Zeroable};

use super::Particle;

/// GPU-ready line endpoint (20 bytes)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 2],
    pub color: [f32; 3],
}

impl MeshVertex {
    fn of(p: &Particle, max_life: f32) -> Self {
        Self {
            position: p.position.to_array(),
            color: p.color(max_life),
        }
    }
}

/// Two independent endpoints, drawn as a line-list primitive
pub type LineSegment = [MeshVertex; 2];

/// Build a fresh segment list.
pub fn build_mesh(particles: &[Particle], range: f32, max_life: f32) -> Vec<LineSegment> {
    let mut segments = Vec::new();
    build_mesh_into(&mut segments, particles, range, max_life);
    segments
}

/// Clear `out` and refill it with the current frame's segments.
///
/// Lets the caller keep one allocation across frames.
pub fn build_mesh_into(
    out: &mut Vec<LineSegment>,
    particles: &[Particle],
    range: f32,
    max_life: f32,
) {
    out.clear();
    let range_sq = range * range;

    for (i, p) in particles.iter().enumerate() {
        let from = MeshVertex::of(p, max_life);
        for (j, w) in particles.iter().enumerate() {
            if i == j {
                continue;
            }
            if p.position.distance_squared(w.position) < range_sq {
                out.push([from, MeshVertex::of(w, max_life)]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    const RANGE: f32 = 200.0;
    const MAX_LIFE: f32 = 5000.0;

    fn at(x: f32, y: f32) -> Particle {
        Particle::new(Vec2::new(x, y), Vec2::ZERO)
    }

    #[test]
    fn test_empty_collection() {
        assert!(build_mesh(&[], RANGE, MAX_LIFE).is_empty());
    }

    #[test]
    fn test_lone_particle_has_no_segments() {
        assert!(build_mesh(&[at(5.0, 5.0)], RANGE, MAX_LIFE).is_empty());
    }

    #[test]
    fn test_pair_within_range_both_directions() {
        let particles = [at(0.0, 0.0), at(199.0, 0.0)];
        let segments = build_mesh(&particles, RANGE, MAX_LIFE);

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0][0].position, [0.0, 0.0]);
        assert_eq!(segments[0][1].position, [199.0, 0.0]);
        assert_eq!(segments[1][0].position, [199.0, 0.0]);
        assert_eq!(segments[1][1].position, [0.0, 0.0]);
    }

    #[test]
    fn test_pair_out_of_range() {
        let particles = [at(0.0, 0.0), at(201.0, 0.0)];
        assert!(build_mesh(&particles, RANGE, MAX_LIFE).is_empty());
    }

    #[test]
    fn test_exact_range_is_excluded() {
        let particles = [at(0.0, 0.0), at(120.0, 160.0)];
        assert!(build_mesh(&particles, RANGE, MAX_LIFE).is_empty());
    }

    #[test]
    fn test_vertices_carry_particle_color() {
        let mut old = at(0.0, 0.0);
        old.life = 2500.0;
        let young = at(10.0, 0.0);

        let segments = build_mesh(&[old, young], RANGE, MAX_LIFE);
        assert_eq!(segments[0][0].color, [0.5, 0.5, 0.5]);
        assert_eq!(segments[0][1].color, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_only_near_pairs_connect() {
        // a-b near, c far from both
        let particles = [at(0.0, 0.0), at(50.0, 0.0), at(1000.0, 1000.0)];
        let segments = build_mesh(&particles, RANGE, MAX_LIFE);
        assert_eq!(segments.len(), 2);
        assert!(segments
            .iter()
            .all(|s| s[0].position != [1000.0, 1000.0] && s[1].position != [1000.0, 1000.0]));
    }

    #[test]
    fn test_into_reuses_buffer() {
        let mut out = Vec::with_capacity(16);
        build_mesh_into(&mut out, &[at(0.0, 0.0), at(1.0, 0.0)], RANGE, MAX_LIFE);
        assert_eq!(out.len(), 2);
        let cap = out.capacity();

        build_mesh_into(&mut out, &[], RANGE, MAX_LIFE);
        assert!(out.is_empty());
        assert_eq!(out.capacity(), cap);
    }

    #[test]
    fn test_vertex_layout_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<MeshVertex>(), 20);
        assert_eq!(std::mem::size_of::<LineSegment>(), 40);
    }
}
