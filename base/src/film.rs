//! Film

use crate::geometry::*;
use crate::image_io::*;
use crate::spectrum::*;
use std::sync::RwLock;

/// A rectangular region of the image rendered by one worker.
pub struct FilmTile {
    /// Top-left pixel (inclusive).
    pub p_min: Point2i,

    /// Bottom-right pixel (exclusive).
    pub p_max: Point2i,

    /// Pixel values in row-major order.
    values: Vec<RGBSpectrum>,
}

impl FilmTile {
    /// Create a black tile covering `[p_min, p_max)`.
    ///
    /// * `p_min` - Top-left pixel (inclusive).
    /// * `p_max` - Bottom-right pixel (exclusive).
    pub fn new(p_min: Point2i, p_max: Point2i) -> Self {
        let n = ((p_max.x - p_min.x) * (p_max.y - p_min.y)).max(0) as usize;
        Self {
            p_min,
            p_max,
            values: vec![RGBSpectrum::ZERO; n],
        }
    }

    /// Returns an iterator over the pixels in the tile in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Point2i> {
        let (p_min, p_max) = (self.p_min, self.p_max);
        (p_min.y..p_max.y).flat_map(move |y| (p_min.x..p_max.x).map(move |x| Point2i::new(x, y)))
    }

    /// Set the final value of a pixel.
    ///
    /// * `pixel` - Pixel in image coordinates.
    /// * `l`     - Radiance.
    pub fn set_pixel(&mut self, pixel: &Point2i, l: RGBSpectrum) {
        let width = self.p_max.x - self.p_min.x;
        let offset = (pixel.y - self.p_min.y) * width + (pixel.x - self.p_min.x);
        self.values[offset as usize] = l;
    }
}

/// Accumulates the rendered image.
pub struct Film {
    /// Image width.
    pub width: usize,

    /// Image height.
    pub height: usize,

    /// Linear radiance per pixel.
    pixels: RwLock<Vec<RGBSpectrum>>,
}

impl Film {
    /// Create a black film.
    ///
    /// * `width`  - Image width.
    /// * `height` - Image height.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: RwLock::new(vec![RGBSpectrum::ZERO; width * height]),
        }
    }

    /// Copy a finished tile into the film.
    ///
    /// * `tile` - The tile.
    pub fn merge_film_tile(&self, tile: &FilmTile) {
        let mut pixels = match self.pixels.write() {
            Ok(p) => p,
            Err(poisoned) => poisoned.into_inner(),
        };
        for (pixel, l) in tile.pixels().zip(tile.values.iter()) {
            if pixel.x < 0 || pixel.y < 0 {
                continue;
            }
            let (x, y) = (pixel.x as usize, pixel.y as usize);
            if x < self.width && y < self.height {
                pixels[y * self.width + x] = *l;
            }
        }
    }

    /// Returns a copy of the image.
    pub fn to_image(&self) -> RGBImage {
        let pixels = match self.pixels.read() {
            Ok(p) => p.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        };
        RGBImage::new(pixels, self.width, self.height)
    }

    /// Write the image to a file.
    ///
    /// * `path` - Output file path; the extension selects the format.
    pub fn write_image(&self, path: &str) -> Result<(), String> {
        write_image(path, &self.to_image())
    }
}
