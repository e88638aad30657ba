//! Random sampling helpers.
//!
//! Every sampler takes its generator explicitly so that parallel workers
//! can each own an independent, seedable stream.

use crate::Vec3;
use rand::{Rng, RngCore};

/// Uniform random scalar in [0, 1).
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>()
}

/// Random vector with each component drawn independently from [0, 1).
#[inline]
pub fn random_uniform(rng: &mut dyn RngCore) -> Vec3 {
    Vec3::new(gen_f32(rng), gen_f32(rng), gen_f32(rng))
}

/// Random point strictly inside the unit ball, by rejection sampling.
pub fn random_in_unit_ball(rng: &mut dyn RngCore) -> Vec3 {
    random_in_unit_ball_with_attempts(rng).0
}

/// Like [`random_in_unit_ball`], also returning how many candidates were drawn.
///
/// Candidates come from the cube [-1, 1)^3; about pi/6 of them are accepted.
pub fn random_in_unit_ball_with_attempts(rng: &mut dyn RngCore) -> (Vec3, u32) {
    let mut attempts = 0;
    loop {
        attempts += 1;
        let p = 2.0 * random_uniform(rng) - Vec3::ONE;
        if p.length_squared() < 1.0 {
            return (p, attempts);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_uniform_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let v = random_uniform(&mut rng);
            for c in v.to_array() {
                assert!((0.0..1.0).contains(&c), "component {} out of range", c);
            }
        }
    }

    #[test]
    fn test_random_in_unit_ball_inside() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10_000 {
            let p = random_in_unit_ball(&mut rng);
            assert!(p.length_squared() < 1.0);
        }
    }

    #[test]
    fn test_acceptance_rate_matches_volume_ratio() {
        let mut rng = StdRng::seed_from_u64(1234);
        let samples = 100_000;
        let mut total_attempts: u64 = 0;
        for _ in 0..samples {
            let (_, attempts) = random_in_unit_ball_with_attempts(&mut rng);
            assert!(attempts >= 1);
            total_attempts += attempts as u64;
        }

        let rate = samples as f64 / total_attempts as f64;
        let expected = std::f64::consts::PI / 6.0;
        assert!(
            (rate - expected).abs() < 0.01,
            "acceptance rate {} should be close to {}",
            rate,
            expected
        );
    }

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = StdRng::seed_from_u64(9);
        let mut b = StdRng::seed_from_u64(9);
        for _ in 0..100 {
            assert_eq!(random_in_unit_ball(&mut a), random_in_unit_ball(&mut b));
        }
    }
}
