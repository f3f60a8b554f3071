//! Renderer

use super::*;
use crate::camera::*;
use crate::film::*;
use crate::geometry::*;
use crate::pbrt::*;
use crate::scene::*;
use indicatif::{ProgressBar, ProgressStyle};

/// Settings for `Renderer`.
#[derive(Copy, Clone, Debug)]
pub struct RenderSettings {
    /// Samples per pixel.
    pub spp: usize,

    /// Jitter primary rays inside each pixel.
    pub jitter: bool,

    /// Size in pixels of square tiles.
    pub tile_size: usize,

    /// Number of worker threads.
    pub threads: usize,

    /// Seed for the random streams.
    pub seed: u64,

    /// Show a progress bar.
    pub progress: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            spp: 1,
            jitter: true,
            tile_size: 16,
            threads: 1,
            seed: 0,
            progress: false,
        }
    }
}

/// Drives a shader over every pixel of the camera's image in parallel
/// tiles. Each tile owns a random stream derived from the seed and the tile
/// index, so images are reproducible for any thread count.
pub struct Renderer<'a> {
    /// The camera.
    camera: &'a PerspectiveCamera,

    /// The scene.
    scene: &'a Scene,

    /// The shader.
    shader: &'a dyn Shader,

    /// Settings.
    settings: RenderSettings,
}

impl<'a> Renderer<'a> {
    /// Create a new `Renderer`.
    ///
    /// * `camera`   - The camera.
    /// * `scene`    - The scene.
    /// * `shader`   - The shader.
    /// * `settings` - Settings.
    pub fn new(
        camera: &'a PerspectiveCamera,
        scene: &'a Scene,
        shader: &'a dyn Shader,
        settings: RenderSettings,
    ) -> Self {
        Self {
            camera,
            scene,
            shader,
            settings,
        }
    }

    /// Render the image.
    pub fn render(&self) -> Film {
        let film = Film::new(self.camera.width, self.camera.height);

        // Compute number of tiles, `n_tiles`, to use for parallel rendering.
        let tile_size = max(self.settings.tile_size, 1);
        let n_tiles = Point2::new(
            (self.camera.width + tile_size - 1) / tile_size,
            (self.camera.height + tile_size - 1) / tile_size,
        );
        let tile_count = n_tiles.x * n_tiles.y;
        let threads = max(self.settings.threads, 1);

        info!(
            "Rendering {}x{} tiles with {} threads, {} spp",
            n_tiles.x, n_tiles.y, threads, self.settings.spp
        );

        let progress = create_progress_reporter(tile_count as u64, self.settings.progress);
        progress.set_message("Rendering scene");

        let result = crossbeam::scope(|scope| {
            let (tx, rx) = crossbeam_channel::bounded(threads);

            // Spawn worker threads.
            for _ in 0..threads {
                let rxc = rx.clone();
                let progress = &progress;
                let film = &film;
                scope.spawn(move |_| {
                    for tile_idx in rxc.iter() {
                        // Render section of image corresponding to `tile`.
                        let film_tile = self.render_tile(tile_idx, n_tiles, tile_size);

                        // Merge image tile into `Film`.
                        film.merge_film_tile(&film_tile);
                        progress.inc(1);
                    }
                });
            }
            drop(rx); // Drop extra rx since we've cloned one for each woker.

            // Send work.
            for tile_idx in 0..tile_count {
                if tx.send(tile_idx).is_err() {
                    error!("All render workers exited early");
                    break;
                }
            }
        });

        if result.is_err() {
            error!("A render worker panicked; the image is incomplete");
        }

        progress.finish_with_message("Render complete");
        film
    }

    /// Render an image tile.
    ///
    /// * `tile_idx`  - Unique tile index.
    /// * `n_tiles`   - Number of tiles in (x, y) direction.
    /// * `tile_size` - Tile size in pixels.
    fn render_tile(&self, tile_idx: usize, n_tiles: Point2<usize>, tile_size: usize) -> FilmTile {
        // Get the x and y tile indices.
        let tile_x = tile_idx % n_tiles.x;
        let tile_y = tile_idx / n_tiles.x;

        let x0 = (tile_x * tile_size) as Int;
        let x1 = min(x0 + tile_size as Int, self.camera.width as Int);
        let y0 = (tile_y * tile_size) as Int;
        let y1 = min(y0 + tile_size as Int, self.camera.height as Int);

        debug!("Starting image tile ({tile_x}, {tile_y})");

        let mut film_tile = FilmTile::new(Point2i::new(x0, y0), Point2i::new(x1, y1));
        let mut rng = RNG::with_seed(self.settings.seed, tile_idx as u64);
        let spp = max(self.settings.spp, 1);

        let pixels: Vec<Point2i> = film_tile.pixels().collect();
        for pixel in pixels {
            let mut sum = RGBSpectrum::ZERO;
            for sample in 0..spp {
                let u_film = if self.settings.jitter {
                    rng.uniform_point2f()
                } else {
                    Point2f::new(0.5, 0.5)
                };
                let u_lens = rng.uniform_point2f();
                let ray = self.camera.generate_ray(&pixel, &u_film, &u_lens);

                let isect = self.scene.trace(&ray);
                let l = check_radiance(self.shader.shade(isect.as_ref(), 0, &mut rng), &pixel, sample);

                debug!("Pixel: {pixel}, sample {sample}: ray {ray} -> L = {l}");

                sum += l;
            }
            film_tile.set_pixel(&pixel, sum / spp as Float);
        }

        debug!("Finished image tile ({tile_x}, {tile_y})");

        film_tile
    }
}

/// Replace radiance that is not a finite non-negative value with black,
/// logging why.
///
/// * `l`      - Radiance returned by the shader.
/// * `pixel`  - Pixel for the log message.
/// * `sample` - Sample number for the log message.
fn check_radiance(l: RGBSpectrum, pixel: &Point2i, sample: usize) -> RGBSpectrum {
    if l.has_nans() {
        error!(
            "Not-a-number radiance value returned for pixel ({}, {}), sample {}. Setting to black.",
            pixel.x, pixel.y, sample
        );
        RGBSpectrum::ZERO
    } else if l.min_component_value() < -1e-5 {
        error!(
            "Negative radiance value, {}, returned for pixel ({}, {}), sample {}. Setting to black.",
            l, pixel.x, pixel.y, sample
        );
        RGBSpectrum::ZERO
    } else if !l.is_finite() {
        error!(
            "Infinite radiance value returned for pixel ({}, {}), sample {}. Setting to black.",
            pixel.x, pixel.y, sample
        );
        RGBSpectrum::ZERO
    } else {
        l
    }
}

/// Returns a progress bar for `len` units of work, hidden when `visible` is
/// false.
///
/// * `len`     - Total units of work.
/// * `visible` - Draw the bar.
pub fn create_progress_reporter(len: u64, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let progress = ProgressBar::new(len);
    progress.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} tiles {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    progress
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::light::*;
    use crate::material::*;
    use crate::primitive::*;
    use crate::shapes::*;
    use std::sync::Arc;

    /// White for hits, black for misses.
    struct HitMask;

    impl Shader for HitMask {
        fn shade(&self, isect: Option<&Intersection>, _depth: usize, rng: &mut RNG) -> RGBSpectrum {
            let _ = rng.uniform_float();
            match isect {
                Some(_) => RGBSpectrum::ONE,
                None => RGBSpectrum::ZERO,
            }
        }
    }

    /// Returns one random draw so images expose the random streams.
    struct Noise;

    impl Shader for Noise {
        fn shade(&self, _isect: Option<&Intersection>, _depth: usize, rng: &mut RNG) -> RGBSpectrum {
            RGBSpectrum::grey(rng.uniform_float())
        }
    }

    fn scene() -> Scene {
        let m: ArcMaterial = Arc::new(Material::from(Brdf::diffuse(RGBSpectrum::ONE)));
        // A wall at z = 5 covering the left half of the view (+x is image left).
        let tri = Triangle::new(
            Point3f::new(0.0, -100.0, 5.0),
            Point3f::new(100.0, -100.0, 5.0),
            Point3f::new(0.0, 100.0, 5.0),
        );
        let prims = vec![Arc::new(GeometricPrimitive::new(Arc::new(tri), m))];
        Scene::new(prims, vec![Light::from(AmbientLight::new(RGBSpectrum::ONE))])
    }

    fn camera() -> PerspectiveCamera {
        PerspectiveCamera::new(
            Point3f::zero(),
            Point3f::new(0.0, 0.0, 1.0),
            Vector3f::new(0.0, 1.0, 0.0),
            8,
            4,
            60.0,
        )
    }

    #[test]
    fn renders_every_pixel() {
        let (scene, camera) = (scene(), camera());
        let settings = RenderSettings {
            tile_size: 3,
            threads: 2,
            jitter: false,
            ..Default::default()
        };
        let image = Renderer::new(&camera, &scene, &HitMask, settings).render().to_image();
        for y in 0..4 {
            for x in 0..8 {
                let expected = if x < 4 { RGBSpectrum::ONE } else { RGBSpectrum::ZERO };
                assert_eq!(image.pixels[y * 8 + x], expected, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn reproducible_across_thread_counts() {
        let (scene, camera) = (scene(), camera());
        let one = RenderSettings {
            spp: 2,
            tile_size: 2,
            threads: 1,
            seed: 9,
            ..Default::default()
        };
        let four = RenderSettings { threads: 4, ..one };
        let a = Renderer::new(&camera, &scene, &Noise, one).render().to_image();
        let b = Renderer::new(&camera, &scene, &Noise, four).render().to_image();
        assert_eq!(a.pixels, b.pixels);
    }

    #[test]
    fn rejects_invalid_radiance() {
        let p = Point2i::new(0, 0);
        assert_eq!(check_radiance(RGBSpectrum::new(Float::NAN, 0.0, 0.0), &p, 0), RGBSpectrum::ZERO);
        assert_eq!(check_radiance(RGBSpectrum::new(-1.0, 0.0, 0.0), &p, 0), RGBSpectrum::ZERO);
        assert_eq!(check_radiance(RGBSpectrum::grey(INFINITY), &p, 0), RGBSpectrum::ZERO);
        assert_eq!(check_radiance(RGBSpectrum::grey(0.5), &p, 0), RGBSpectrum::grey(0.5));
    }
}
