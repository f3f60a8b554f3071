//! Image Texture

use super::*;
use crate::image_io::*;
use crate::pbrt::*;

/// Implements a texture backed by an image, looked up at the nearest texel
/// with repeat wrapping. `v = 0` is the bottom row of the image.
pub struct ImageTexture {
    /// The texels.
    image: RGBImage,
}

impl ImageTexture {
    /// Load an `ImageTexture` from an 8-bit image file.
    ///
    /// * `path` - Path to the image.
    pub fn new(path: &str) -> Result<Self, String> {
        read_image(path).map(Self::from)
    }
}

impl From<RGBImage> for ImageTexture {
    fn from(image: RGBImage) -> Self {
        Self { image }
    }
}

impl Texture for ImageTexture {
    fn evaluate(&self, uv: &Point2f) -> RGBSpectrum {
        let width = self.image.resolution.x;
        let height = self.image.resolution.y;
        if width == 0 || height == 0 {
            return RGBSpectrum::ZERO;
        }

        let s = (uv.x * width as Float).floor() as Int;
        let t = ((1.0 - uv.y) * height as Float).floor() as Int;
        let x = s.rem_euclid(width as Int) as usize;
        let y = t.rem_euclid(height as Int) as usize;
        self.image.pixels[y * width + x]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_texel_with_repeat() {
        let red = RGBSpectrum::new(1.0, 0.0, 0.0);
        let blue = RGBSpectrum::new(0.0, 0.0, 1.0);
        // Top row red, bottom row blue.
        let image = RGBImage::new(vec![red, red, blue, blue], 2, 2);
        let t = ImageTexture::from(image);
        assert_eq!(t.evaluate(&Point2f::new(0.25, 0.25)), blue);
        assert_eq!(t.evaluate(&Point2f::new(0.75, 0.75)), red);
        assert_eq!(t.evaluate(&Point2f::new(1.25, 1.75)), red);
    }
}
