//! Beam and glow geometry resolution
//!
//! Converts authored keyframes into renderer-facing geometry. Authored
//! positions are vehicle-local with Z pointing backwards, so Z is negated
//! on the way out; aiming angles are degrees of elevation about the
//! lateral axis followed by azimuth about the vertical axis, applied to
//! the forward axis.

use crate::foundation::math::{lerp, Rot3, Vec3, Vec4};
use crate::lights::definition::Keyframe;

/// Sine floor for the falloff computation. A degenerate (near-zero) cone
/// angle must yield a large but finite distance, never NaN or infinity.
const MIN_SIN: f32 = 1.0e-3;

/// Unpack a packed `0xAARRGGBB` color into normalized RGBA.
#[must_use]
pub fn unpack_color(packed: u32) -> Vec4 {
    let a = ((packed >> 24) & 0xFF) as f32 / 255.0;
    let r = ((packed >> 16) & 0xFF) as f32 / 255.0;
    let g = ((packed >> 8) & 0xFF) as f32 / 255.0;
    let b = (packed & 0xFF) as f32 / 255.0;
    Vec4::new(r, g, b, a)
}

/// Vehicle-local aiming direction of a keyframe.
fn aim_direction(keyframe: &Keyframe) -> Vec3 {
    let pitch = Rot3::from_axis_angle(&Vec3::x_axis(), -keyframe.elevation.y.to_radians());
    let yaw = Rot3::from_axis_angle(&Vec3::y_axis(), -keyframe.azimuth.y.to_radians());
    yaw * (pitch * -Vec3::z())
}

fn converted_position(keyframe: &Keyframe) -> Vec3 {
    Vec3::new(keyframe.position.x, keyframe.position.y, -keyframe.position.z)
}

/// Resolved cone beam parameters for one keyframe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConeGeometry {
    /// Apex position, vehicle-local
    pub position: Vec3,
    /// Unit beam direction, vehicle-local
    pub direction: Vec3,
    /// Half-angle of the cone in radians
    pub half_angle: f32,
    /// Radius of the cone's base disc
    pub radius: f32,
    /// Distance from the apex to the base disc
    pub falloff_distance: f32,
    /// Normalized RGBA beam color
    pub color: Vec4,
}

impl ConeGeometry {
    /// Resolve a cone keyframe into beam parameters.
    #[must_use]
    pub fn from_keyframe(keyframe: &Keyframe) -> Self {
        let half_angle = keyframe.angle.to_radians() / 2.0;
        let radius = keyframe.radius / 2.0;
        Self {
            position: converted_position(keyframe),
            direction: aim_direction(keyframe),
            half_angle,
            radius,
            falloff_distance: radius / half_angle.sin().max(MIN_SIN),
            color: unpack_color(keyframe.color),
        }
    }

    /// Blend two resolved keyframes by fraction `t`. Components
    /// interpolate linearly; the direction is re-normalized afterwards,
    /// which is close enough to a spherical blend for authored aiming
    /// transitions.
    #[must_use]
    pub fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        let direction = a.direction.lerp(&b.direction, t);
        let direction = if direction.norm() > f32::EPSILON {
            direction.normalize()
        } else {
            a.direction
        };
        Self {
            position: a.position.lerp(&b.position, t),
            direction,
            half_angle: lerp(a.half_angle, b.half_angle, t),
            radius: lerp(a.radius, b.radius, t),
            falloff_distance: lerp(a.falloff_distance, b.falloff_distance, t),
            color: a.color.lerp(&b.color, t),
        }
    }

    /// Cosine of the half-angle: the dot-product threshold a direction
    /// must exceed to lie inside the beam.
    #[must_use]
    pub fn min_dot_product(&self) -> f32 {
        self.half_angle.cos()
    }
}

/// Resolved glow sprite parameters for one keyframe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlowGeometry {
    /// Sprite center, vehicle-local
    pub position: Vec3,
    /// Unit facing normal, vehicle-local
    pub normal: Vec3,
    /// Sprite radius
    pub radius: f32,
    /// Normalized RGBA color
    pub color: Vec4,
}

impl GlowGeometry {
    /// Resolve a glow keyframe into sprite parameters.
    #[must_use]
    pub fn from_keyframe(keyframe: &Keyframe) -> Self {
        Self {
            position: converted_position(keyframe),
            normal: aim_direction(keyframe),
            radius: keyframe.radius,
            color: unpack_color(keyframe.color),
        }
    }

    /// Blend two resolved keyframes by fraction `t`.
    #[must_use]
    pub fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        let normal = a.normal.lerp(&b.normal, t);
        let normal = if normal.norm() > f32::EPSILON {
            normal.normalize()
        } else {
            a.normal
        };
        Self {
            position: a.position.lerp(&b.position, t),
            normal,
            radius: lerp(a.radius, b.radius, t),
            color: a.color.lerp(&b.color, t),
        }
    }
}
