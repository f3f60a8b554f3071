//! 3-D Axis Aligned Bounding Boxes.

use super::{Point3, Ray};
use crate::pbrt::*;
use num_traits::Num;

/// 3-D Axis Aligned Bounding Box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds3<T> {
    /// Minimum bounds.
    pub p_min: Point3<T>,

    /// Maximum bounds.
    pub p_max: Point3<T>,
}

/// 3-D bounding box containing `Float` points.
pub type Bounds3f = Bounds3<Float>;

impl<T: Num + PartialOrd + Copy> Bounds3<T> {
    /// Creates a new 3-D bounding box from 2 points. The minimum and maximum
    /// bounds are used for each coordinate axis.
    ///
    /// * `p1` - First point.
    /// * `p2` - Second point.
    pub fn new(p1: Point3<T>, p2: Point3<T>) -> Self {
        Self {
            p_min: p1.min(&p2),
            p_max: p1.max(&p2),
        }
    }

    /// Returns a bounding box that also contains the point `p`.
    ///
    /// * `p` - The point.
    pub fn union_point(&self, p: &Point3<T>) -> Self {
        Self {
            p_min: self.p_min.min(p),
            p_max: self.p_max.max(p),
        }
    }
}

impl Bounds3f {
    /// Slab test. Returns `true` if the ray overlaps the box anywhere in
    /// `[0, ray.t_max]`.
    ///
    /// * `ray` - The ray.
    pub fn intersect_p(&self, ray: &Ray) -> bool {
        let mut t0 = 0.0;
        let mut t1 = ray.t_max;

        for axis in 0..3 {
            let inv_dir = 1.0 / ray.d[axis];
            let mut t_near = (self.p_min[axis] - ray.o[axis]) * inv_dir;
            let mut t_far = (self.p_max[axis] - ray.o[axis]) * inv_dir;
            if t_near > t_far {
                std::mem::swap(&mut t_near, &mut t_far);
            }

            // Widen by 2 * gamma(3) so flat boxes survive rounding.
            t_far *= 1.0 + 2.0 * 3.0 * (Float::EPSILON * 0.5) / (1.0 - 3.0 * (Float::EPSILON * 0.5));

            // NaN arises when the origin lies on a slab and the direction is
            // parallel to it; treat as overlapping on that axis.
            if !t_near.is_nan() && t_near > t0 {
                t0 = t_near;
            }
            if !t_far.is_nan() && t_far < t1 {
                t1 = t_far;
            }
            if t0 > t1 {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point3f, RayType, Vector3f};

    #[test]
    fn new_orders_corners() {
        let b = Bounds3f::new(Point3f::new(1.0, -1.0, 2.0), Point3f::new(-1.0, 1.0, 0.0));
        assert_eq!(b.p_min, Point3f::new(-1.0, -1.0, 0.0));
        assert_eq!(b.p_max, Point3f::new(1.0, 1.0, 2.0));
    }

    #[test]
    fn union_point_grows() {
        let b = Bounds3f::new(Point3f::zero(), Point3f::new(1.0, 1.0, 1.0)).union_point(&Point3f::new(2.0, -1.0, 0.5));
        assert_eq!(b.p_min, Point3f::new(0.0, -1.0, 0.0));
        assert_eq!(b.p_max, Point3f::new(2.0, 1.0, 1.0));
    }

    #[test]
    fn slab_test() {
        let b = Bounds3f::new(Point3f::new(-1.0, -1.0, -1.0), Point3f::new(1.0, 1.0, 1.0));
        let hit = Ray::new(Point3f::new(0.0, 0.0, -5.0), Vector3f::new(0.0, 0.0, 1.0), RayType::Camera);
        assert!(b.intersect_p(&hit));

        let miss = Ray::new(Point3f::new(3.0, 0.0, -5.0), Vector3f::new(0.0, 0.0, 1.0), RayType::Camera);
        assert!(!b.intersect_p(&miss));

        let short = hit.with_t_max(2.0);
        assert!(!b.intersect_p(&short));

        let away = Ray::new(Point3f::new(0.0, 0.0, -5.0), Vector3f::new(0.0, 0.0, -1.0), RayType::Camera);
        assert!(!b.intersect_p(&away));
    }
}
