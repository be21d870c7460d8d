//! Decorative petal layer: a fixed flock of floating leaves and flowers,
//! scattered once per app start and immutable afterwards.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of particles scattered per page load.
pub const PARTICLE_COUNT: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleKind {
    Leaf,
    Flower,
}

/// One decorative, non-interactive background element.
///
/// Positions are percentages of the viewport; `delay` and `duration`
/// parameterize the float animation, `rotation` is in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub id: usize,
    pub left: f32,
    pub top: f32,
    pub size: f32,
    pub delay: f32,
    pub duration: f32,
    pub rotation: f32,
    pub kind: ParticleKind,
}

/// Scatter [`PARTICLE_COUNT`] particles with independently sampled
/// attributes. The kind alternates strictly by index parity so leaves and
/// flowers interleave evenly. Randomness is injected so tests can seed it.
pub fn scatter<R: Rng + ?Sized>(rng: &mut R) -> Vec<Particle> {
    (0..PARTICLE_COUNT)
        .map(|id| Particle {
            id,
            left: rng.gen_range(0.0..100.0),
            top: rng.gen_range(0.0..100.0),
            size: rng.gen_range(20.0..50.0),
            delay: rng.gen_range(0.0..5.0),
            duration: rng.gen_range(4.0..7.0),
            rotation: rng.gen_range(0.0..360.0),
            kind: if id % 2 == 0 {
                ParticleKind::Leaf
            } else {
                ParticleKind::Flower
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn scatter_produces_exactly_thirty() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(scatter(&mut rng).len(), PARTICLE_COUNT);
    }

    #[test]
    fn attributes_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for p in scatter(&mut rng) {
            assert!((0.0..100.0).contains(&p.left), "left {}", p.left);
            assert!((0.0..100.0).contains(&p.top), "top {}", p.top);
            assert!((20.0..50.0).contains(&p.size), "size {}", p.size);
            assert!((0.0..5.0).contains(&p.delay), "delay {}", p.delay);
            assert!((4.0..7.0).contains(&p.duration), "duration {}", p.duration);
            assert!((0.0..360.0).contains(&p.rotation), "rotation {}", p.rotation);
        }
    }

    #[test]
    fn kind_alternates_by_parity() {
        let mut rng = StdRng::seed_from_u64(1);
        for p in scatter(&mut rng) {
            let expected = if p.id % 2 == 0 {
                ParticleKind::Leaf
            } else {
                ParticleKind::Flower
            };
            assert_eq!(p.kind, expected, "particle {}", p.id);
        }
    }

    #[test]
    fn seeded_scatter_is_deterministic() {
        let a = scatter(&mut StdRng::seed_from_u64(99));
        let b = scatter(&mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
