//! Perspective camera

use crate::geometry::*;
use crate::pbrt::*;
use crate::sampling::*;

/// Pinhole camera with an optional thin lens.
#[derive(Clone, Debug)]
pub struct PerspectiveCamera {
    /// Eye position.
    pub eye: Point3f,

    /// Image width in pixels.
    pub width: usize,

    /// Image height in pixels.
    pub height: usize,

    /// Viewing direction.
    forward: Vector3f,

    /// Camera space x-axis in world space.
    right: Vector3f,

    /// Camera space y-axis in world space.
    up: Vector3f,

    /// tan(fov_w / 2).
    tan_half_w: Float,

    /// tan(fov_h / 2).
    tan_half_h: Float,

    /// Radius of the lens. 0 is a pinhole.
    lens_radius: Float,

    /// Distance to the plane in focus.
    focal_distance: Float,
}

impl PerspectiveCamera {
    /// Returns a new pinhole `PerspectiveCamera`. The vertical field of view
    /// follows from the aspect ratio.
    ///
    /// * `eye`    - Eye position.
    /// * `at`     - Point looked at.
    /// * `up`     - Approximate up direction.
    /// * `width`  - Image width in pixels.
    /// * `height` - Image height in pixels.
    /// * `fov_w`  - Horizontal field of view in degrees.
    pub fn new(
        eye: Point3f,
        at: Point3f,
        up: Vector3f,
        width: usize,
        height: usize,
        fov_w: Float,
    ) -> Self {
        let forward = (at - eye).normalize();
        let right = forward.cross(&up).normalize();
        let up = right.cross(&forward);

        let fov_w = radians(fov_w);
        let fov_h = fov_w * height as Float / width as Float;

        Self {
            eye,
            width,
            height,
            forward,
            right,
            up,
            tan_half_w: (fov_w * 0.5).tan(),
            tan_half_h: (fov_h * 0.5).tan(),
            lens_radius: 0.0,
            focal_distance: 1.0,
        }
    }

    /// Add depth of field.
    ///
    /// * `lens_radius`    - Radius of the lens.
    /// * `focal_distance` - Distance to the plane in focus.
    pub fn with_lens(mut self, lens_radius: Float, focal_distance: Float) -> Self {
        self.lens_radius = max(lens_radius, 0.0);
        self.focal_distance = max(focal_distance, EPSILON);
        self
    }

    /// Generate a primary ray through a pixel. Row 0 is the top of the image
    /// and `u_film = (0, 0)` is the top-left corner of the pixel.
    ///
    /// * `pixel`  - The pixel.
    /// * `u_film` - Position inside the pixel in [0, 1)^2.
    /// * `u_lens` - Sample on the lens in [0, 1)^2; ignored for a pinhole.
    pub fn generate_ray(&self, pixel: &Point2i, u_film: &Point2f, u_lens: &Point2f) -> Ray {
        let xs = 2.0 * (pixel.x as Float + u_film.x) / self.width as Float - 1.0;
        let ys = 2.0 * ((self.height as Int - pixel.y) as Float - u_film.y) / self.height as Float - 1.0;

        let d = xs * self.tan_half_w * self.right + ys * self.tan_half_h * self.up + self.forward;

        let ray = if self.lens_radius > 0.0 {
            // Aim at the point on the focal plane the pinhole ray would hit.
            let d = d.normalize();
            let focus = self.eye + d * (self.focal_distance / d.dot(&self.forward));
            let lens = self.lens_radius * concentric_sample_disk(u_lens);
            let origin = self.eye + lens.x * self.right + lens.y * self.up;
            Ray::new(origin, focus - origin, RayType::Camera)
        } else {
            Ray::new(self.eye, d, RayType::Camera)
        };

        ray.with_pixel(*pixel)
    }
}
