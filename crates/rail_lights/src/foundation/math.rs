//! Math utilities and types
//!
//! Provides fundamental math types for light animation and beam geometry.

pub use nalgebra::{Rotation3, Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 3D rotation type
pub type Rot3 = Rotation3<f32>;

/// Linear interpolation between `a` and `b` by fraction `t`
#[must_use]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints_and_midpoint() {
        assert!((lerp(2.0, 6.0, 0.0) - 2.0).abs() < f32::EPSILON);
        assert!((lerp(2.0, 6.0, 1.0) - 6.0).abs() < f32::EPSILON);
        assert!((lerp(2.0, 6.0, 0.5) - 4.0).abs() < f32::EPSILON);
    }
}
