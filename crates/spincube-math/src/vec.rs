use glam::{Vec2, Vec3};

/// Conveniences for [`Vec3`] beyond what glam ships.
///
/// Addition, subtraction, `dot`, `cross`, and `normalize` come straight from
/// glam with value semantics: operands are unmodified and a new vector is
/// returned. Normalizing a zero-length vector yields non-finite components
/// (glam's behavior, inherited unchanged).
pub trait Vec3Ext {
    /// Overwrite all three components in place. Returns `self` for chaining.
    fn set(&mut self, x: f32, y: f32, z: f32) -> &mut Self;

    /// Broadcast one scalar to all three components in place.
    fn set_all(&mut self, v: f32) -> &mut Self;

    /// Component-wise average of `self` and `other`.
    fn midpoint(self, other: Self) -> Self;

    /// Angle between `self` and `other` in radians, via
    /// `acos(dot / (|a||b|))`. NaN when either vector has zero magnitude.
    fn angle_to(self, other: Self) -> f32;
}

impl Vec3Ext for Vec3 {
    #[inline]
    fn set(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self
    }

    #[inline]
    fn set_all(&mut self, v: f32) -> &mut Self {
        self.set(v, v, v)
    }

    #[inline]
    fn midpoint(self, other: Self) -> Self {
        (self + other) / 2.0
    }

    fn angle_to(self, other: Self) -> f32 {
        let denom = self.length() * other.length();
        // 0/0 and the clamp both preserve NaN for zero-magnitude operands.
        (self.dot(other) / denom).clamp(-1.0, 1.0).acos()
    }
}

/// [`Vec2`] counterpart of [`Vec3Ext`].
pub trait Vec2Ext {
    /// Component-wise average of `self` and `other`.
    fn midpoint(self, other: Self) -> Self;
}

impl Vec2Ext for Vec2 {
    #[inline]
    fn midpoint(self, other: Self) -> Self {
        (self + other) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{vec2, vec3};

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn add_then_subtract_round_trips() {
        let a = vec3(1.5, -2.0, 0.25);
        let b = vec3(4.0, 0.5, -9.0);
        let r = a + b - b;
        assert!(close(r.x, a.x) && close(r.y, a.y) && close(r.z, a.z));

        let a2 = vec2(3.0, -7.5);
        let b2 = vec2(-1.0, 2.0);
        let r2 = a2 + b2 - b2;
        assert!(close(r2.x, a2.x) && close(r2.y, a2.y));
    }

    #[test]
    fn cross_is_antisymmetric() {
        let a = vec3(1.0, 2.0, 3.0);
        let b = vec3(-4.0, 0.5, 2.0);
        assert_eq!(a.cross(b), -b.cross(a));
    }

    #[test]
    fn normalize_yields_unit_length() {
        let v = vec3(3.0, -4.0, 12.0).normalize();
        assert!(close(v.length(), 1.0));
    }

    #[test]
    fn midpoint_is_half_sum() {
        let a = vec3(2.0, 4.0, -6.0);
        let b = vec3(0.0, -2.0, 10.0);
        assert_eq!(Vec3Ext::midpoint(a, b), (a + b) / 2.0);

        let c = vec2(1.0, 5.0);
        let d = vec2(3.0, -1.0);
        assert_eq!(Vec2Ext::midpoint(c, d), vec2(2.0, 2.0));
    }

    #[test]
    fn set_chains_and_mutates_in_place() {
        let mut v = vec3(0.0, 0.0, 0.0);
        v.set(1.0, 2.0, 3.0).set_all(7.0);
        assert_eq!(v, vec3(7.0, 7.0, 7.0));
    }

    #[test]
    fn angle_between_perpendicular_axes() {
        let a = vec3(1.0, 0.0, 0.0);
        let b = vec3(0.0, 1.0, 0.0);
        assert!(close(a.angle_to(b), std::f32::consts::FRAC_PI_2));
        assert!(close(a.angle_to(a), 0.0));
    }

    #[test]
    fn angle_with_zero_vector_is_nan() {
        let a = vec3(1.0, 0.0, 0.0);
        assert!(a.angle_to(Vec3::ZERO).is_nan());
        assert!(Vec3::ZERO.angle_to(a).is_nan());
    }
}
