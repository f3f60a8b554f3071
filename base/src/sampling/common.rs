//! Common sampling functions.

use crate::geometry::*;
use crate::pbrt::*;

/// Sample a direction on the hemisphere about `(0, 0, 1)` with density
/// proportional to the cosine of the polar angle. Returns the direction and
/// its PDF `cosθ/π` with respect to solid angle.
///
/// * `u` - The random sample point.
#[inline]
pub fn cosine_sample_hemisphere(u: &Point2f) -> (Vector3f, Float) {
    let cos_theta = max(0.0, 1.0 - u[1]).sqrt();
    let sin_theta = u[1].sqrt();
    let phi = TWO_PI * u[0];
    let d = Vector3f::new(phi.cos() * sin_theta, phi.sin() * sin_theta, cos_theta);
    (d, cosine_hemisphere_pdf(cos_theta))
}

/// Returns the PDF for cosine-weighted sampling a direction from a hemisphere.
///
/// * `cos_theta` - Cosine term of incident radiance.
#[inline]
pub fn cosine_hemisphere_pdf(cos_theta: Float) -> Float {
    cos_theta * INV_PI
}

/// Sample a point on a unit disk by mapping from a unit square to the unit
/// circle. The concentric mapping takes points in [-1, 1]^2 to unit disk by
/// uniformly mapping concentric squares to concentric circles.
///
/// * `u` - The random sample point.
pub fn concentric_sample_disk(u: &Point2f) -> Point2f {
    // Map uniform random numbers to [-1,1]^2.
    let u_offset = Point2f::new(2.0 * u.x - 1.0, 2.0 * u.y - 1.0);

    // Handle degeneracy at the origin.
    if u_offset.x == 0.0 && u_offset.y == 0.0 {
        return Point2f::zero();
    }

    // Apply concentric mapping to point
    let (r, theta) = if abs(u_offset.x) > abs(u_offset.y) {
        (u_offset.x, PI_OVER_FOUR * (u_offset.y / u_offset.x))
    } else {
        (
            u_offset.y,
            PI_OVER_TWO - PI_OVER_FOUR * (u_offset.x / u_offset.y),
        )
    };

    r * Point2f::new(theta.cos(), theta.sin())
}

/// Uniformly sample barycentric coordinates on a triangle. Returns the
/// weights of the first two vertices; the third is `1 − b0 − b1`.
///
/// * `u` - The random sample point.
pub fn uniform_sample_triangle(u: &Point2f) -> Point2f {
    let su0 = u[0].sqrt();
    Point2f::new(1.0 - su0, (1.0 - u[1]) * su0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::*;
    use proptest::prelude::*;

    prop_range!(range_unit, f32, 0.0..1.0f32);

    prop_compose! {
        fn unit_square()(x in range_unit(), y in range_unit()) -> Point2f {
            Point2f::new(x, y)
        }
    }

    #[test]
    fn cosine_sample_pole() {
        let (d, pdf) = cosine_sample_hemisphere(&Point2f::new(0.0, 0.0));
        assert!(approx_eq!(f32, d.z, 1.0));
        assert!(approx_eq!(f32, pdf, INV_PI));
    }

    #[test]
    fn cosine_sample_mean_cos() {
        // E[cosθ] under the cosine-weighted density is 2/3.
        let n = 64;
        let mut sum = 0.0;
        for i in 0..n {
            for j in 0..n {
                let u = Point2f::new((i as Float + 0.5) / n as Float, (j as Float + 0.5) / n as Float);
                sum += cosine_sample_hemisphere(&u).0.z;
            }
        }
        let mean = sum / (n * n) as Float;
        assert!(approx_eq!(f32, mean, 2.0 / 3.0, epsilon = 1e-3));
    }

    proptest! {
        #[test]
        fn cosine_sample_is_unit_and_upper(u in unit_square()) {
            let (d, pdf) = cosine_sample_hemisphere(&u);
            prop_assert!((d.length() - 1.0).abs() < 1e-4);
            prop_assert!(d.z >= 0.0);
            prop_assert!((pdf - d.z * INV_PI).abs() < 1e-6);
        }

        #[test]
        fn concentric_disk_inside(u in unit_square()) {
            let p = concentric_sample_disk(&u);
            prop_assert!(p.x * p.x + p.y * p.y <= 1.0 + 1e-5);
        }

        #[test]
        fn triangle_barycentrics_valid(u in unit_square()) {
            let b = uniform_sample_triangle(&u);
            prop_assert!(b.x >= 0.0 && b.y >= 0.0);
            prop_assert!(b.x + b.y <= 1.0 + 1e-6);
        }
    }
}
