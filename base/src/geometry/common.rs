//! Common vector operations used by the shading code.

use super::{Normal3f, Vector3f};
use crate::pbrt::*;

/// Construct an orthonormal coordinate system from a single unit vector. Returns
/// the two vectors that complete the basis.
///
/// * `v1` - The base unit vector.
pub fn coordinate_system(v1: &Vector3f) -> (Vector3f, Vector3f) {
    let v2 = if abs(v1.x) > abs(v1.y) {
        Vector3f::new(-v1.z, 0.0, v1.x) / (v1.x * v1.x + v1.z * v1.z).sqrt()
    } else {
        Vector3f::new(0.0, v1.z, -v1.y) / (v1.y * v1.y + v1.z * v1.z).sqrt()
    };
    let v3 = v1.cross(&v2);
    (v2, v3)
}

/// Rotate a direction expressed in the local frame `(x, y, z)` into world
/// space.
///
/// * `v` - Local direction.
/// * `x` - First tangent.
/// * `y` - Second tangent.
/// * `z` - Normal.
pub fn local_to_world(v: &Vector3f, x: &Vector3f, y: &Vector3f, z: &Vector3f) -> Vector3f {
    v.x * *x + v.y * *y + v.z * *z
}

/// Mirror `v` about the normal: `R = 2(N·V)N − V`. Both vectors point away
/// from the surface.
///
/// * `v` - Direction to reflect.
/// * `n` - Surface normal.
#[inline]
pub fn reflect(v: &Vector3f, n: &Normal3f) -> Vector3f {
    2.0 * v.dot(n) * *n - *v
}

/// Refract the incoming direction `uv` through a surface with normal `n`,
/// where `n` faces against `uv`. `eta` is the ratio of the incident index
/// over the transmitted index. The caller is responsible for checking total
/// internal reflection first.
///
/// * `uv`  - Unit incident direction (pointing towards the surface).
/// * `n`   - Unit normal on the incident side.
/// * `eta` - Relative index of refraction.
pub fn refract(uv: &Vector3f, n: &Normal3f, eta: Float) -> Vector3f {
    let cos_theta = clamp((-*uv).dot(n), -1.0, 1.0);
    let r_out_perp = eta * (*uv + cos_theta * *n);
    let r_out_parallel = -(abs(1.0 - r_out_perp.length_squared())).sqrt() * *n;
    r_out_perp + r_out_parallel
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::*;
    use proptest::prelude::*;

    fn unit_vector() -> impl Strategy<Value = Vector3f> {
        (-1.0..1.0f32, -1.0..1.0f32, -1.0..1.0f32)
            .prop_filter("non-degenerate", |(x, y, z)| x * x + y * y + z * z > 0.01)
            .prop_map(|(x, y, z)| Vector3f::new(x, y, z).normalize())
    }

    #[test]
    fn reflect_about_up() {
        let n = Vector3f::new(0.0, 1.0, 0.0);
        let v = Vector3f::new(1.0, 1.0, 0.0).normalize();
        let r = reflect(&v, &n);
        assert!(approx_eq!(f32, r.x, -v.x, epsilon = 1e-6));
        assert!(approx_eq!(f32, r.y, v.y, epsilon = 1e-6));
    }

    #[test]
    fn refract_index_matched_goes_straight() {
        let n = Vector3f::new(0.0, 1.0, 0.0);
        let uv = Vector3f::new(0.6, -0.8, 0.0);
        let t = refract(&uv, &n, 1.0);
        assert!(approx_eq!(f32, t.x, uv.x, epsilon = 1e-5));
        assert!(approx_eq!(f32, t.y, uv.y, epsilon = 1e-5));
    }

    #[test]
    fn refract_obeys_snell() {
        let n = Vector3f::new(0.0, 1.0, 0.0);
        let uv = Vector3f::new(0.6, -0.8, 0.0);
        let eta = 1.0 / 1.5;
        let t = refract(&uv, &n, eta);
        // sin(theta_t) = eta * sin(theta_i)
        assert!(approx_eq!(f32, t.x, eta * 0.6, epsilon = 1e-5));
        assert!(approx_eq!(f32, t.length(), 1.0, epsilon = 1e-5));
        assert!(t.y < 0.0);
    }

    proptest! {
        #[test]
        fn coordinate_system_is_orthonormal(v in unit_vector()) {
            let (v2, v3) = coordinate_system(&v);
            prop_assert!(v.dot(&v2).abs() < 1e-4);
            prop_assert!(v.dot(&v3).abs() < 1e-4);
            prop_assert!(v2.dot(&v3).abs() < 1e-4);
            prop_assert!((v2.length() - 1.0).abs() < 1e-4);
            prop_assert!((v3.length() - 1.0).abs() < 1e-4);
        }

        #[test]
        fn reflect_preserves_angle(v in unit_vector(), n in unit_vector()) {
            let r = reflect(&v, &n);
            prop_assert!((r.dot(&n) - v.dot(&n)).abs() < 1e-4);
            prop_assert!((r.length() - 1.0).abs() < 1e-4);
        }
    }
}
