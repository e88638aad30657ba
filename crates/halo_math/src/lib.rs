// Re-export glam for convenience
pub use glam::*;

// Halo math types
mod interval;
mod random;
mod ray;

pub use interval::Interval;
pub use random::{gen_f32, random_in_unit_ball, random_in_unit_ball_with_attempts, random_uniform};
pub use ray::Ray;

use thiserror::Error;

/// Errors raised by vector operations with a restricted domain.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    #[error("Cannot normalize a zero-length or non-finite vector: {0}")]
    DegenerateNormalization(Vec3),
}

/// Scale `v` to unit length.
///
/// Fails with [`MathError::DegenerateNormalization`] when `v` has no
/// well-defined direction.
pub fn unit_vector(v: Vec3) -> Result<Vec3, MathError> {
    let length = v.length();
    if length == 0.0 || !length.is_finite() {
        return Err(MathError::DegenerateNormalization(v));
    }
    Ok(v / length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_creation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(b / 2.0, Vec3::new(2.0, 2.5, 3.0));
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(Vec3::new(3.0, 4.0, 0.0).length(), 5.0);
    }

    #[test]
    fn test_unit_vector() {
        let u = unit_vector(Vec3::new(0.0, 3.0, 4.0)).unwrap();
        assert!((u.length() - 1.0).abs() < 1e-6);
        assert!((u - Vec3::new(0.0, 0.6, 0.8)).length() < 1e-6);
    }

    #[test]
    fn test_unit_vector_zero_is_error() {
        assert_eq!(
            unit_vector(Vec3::ZERO),
            Err(MathError::DegenerateNormalization(Vec3::ZERO))
        );
        assert!(unit_vector(Vec3::new(f32::NAN, 0.0, 0.0)).is_err());
    }
}
