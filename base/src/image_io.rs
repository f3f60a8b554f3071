//! Image I/O

use crate::geometry::*;
use crate::pbrt::*;
use crate::spectrum::*;
use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};
use image::*;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Stores RGB image data.
pub struct RGBImage {
    /// The pixels in row-major order, top row first.
    pub pixels: Vec<RGBSpectrum>,

    /// Image resolution.
    pub resolution: Point2<usize>,
}

impl RGBImage {
    /// Creates a new `RGBImage` from pixel data.
    ///
    /// * `pixels` - RGB pixel data.
    /// * `width`  - Width of image.
    /// * `height` - Height of image.
    pub fn new(pixels: Vec<RGBSpectrum>, width: usize, height: usize) -> Self {
        assert_eq!(width * height, pixels.len());
        Self {
            pixels,
            resolution: Point2::new(width, height),
        }
    }
}

/// Read an 8-bit image in any format the `image` crate understands.
///
/// * `path` - Input file path.
pub fn read_image(path: &str) -> Result<RGBImage, String> {
    // Read image and convert to RGB.
    let img: RgbImage = match open(path) {
        Ok(i) => i.into_rgb8(),
        Err(err) => return Err(format!("Error reading image {path}: {err}")),
    };

    let width = img.width() as usize;
    let height = img.height() as usize;

    let pixels: Vec<RGBSpectrum> = img
        .pixels()
        .map(|rgb_u8| {
            RGBSpectrum::new(
                rgb_u8[0] as Float / 255.0,
                rgb_u8[1] as Float / 255.0,
                rgb_u8[2] as Float / 255.0,
            )
        })
        .collect();

    info!("Read 8-bit image {path} ({width} x {height})");

    Ok(RGBImage::new(pixels, width, height))
}

/// Write the output image to given path. The format is chosen from the file
/// extension. Values are clamped to [0, 1] and quantized to 8 bits without
/// gamma correction.
///
/// * `path`  - Output file path.
/// * `image` - The image.
pub fn write_image(path: &str, image: &RGBImage) -> Result<(), String> {
    let res_x = image.resolution.x as u32;
    let res_y = image.resolution.y as u32;
    let bytes = to_8_bit(&image.pixels);

    match get_extension_from_filename(path).as_deref() {
        Some("ppm") => write_ppm(path, &bytes, res_x, res_y),
        Some("png") => write_8_bit(path, &bytes, res_x, res_y, ImageFormat::Png),
        Some("tga") => write_8_bit(path, &bytes, res_x, res_y, ImageFormat::Tga),
        Some(extension) => Err(format!("Extension .{extension} is not supported")),
        None => Err(format!("Can't determine file type from suffix of filename {path}")),
    }
}

/// Retrieve the lowercase extension from a file path.
///
/// * `path` - The file path.
fn get_extension_from_filename(path: &str) -> Option<String> {
    Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

/// Clamp and quantize pixels to 8-bit RGB triples.
///
/// * `pixels` - The pixels.
fn to_8_bit(pixels: &[RGBSpectrum]) -> Vec<u8> {
    pixels
        .iter()
        .flat_map(|p| p.clamp(0.0, 1.0).to_rgb())
        .map(|v| (v * 255.0).round() as u8)
        .collect()
}

/// Writes the image as a binary PPM (P6).
///
/// * `path`  - Output file path.
/// * `bytes` - 8-bit RGB pixel data.
/// * `res_x` - X resolution.
/// * `res_y` - Y resolution.
fn write_ppm(path: &str, bytes: &[u8], res_x: u32, res_y: u32) -> Result<(), String> {
    info!("Writing image {path} with resolution {res_x}x{res_y}");

    let file = File::create(path).map_err(|e| format!("Error creating {path}: {e}"))?;
    let encoder = PnmEncoder::new(BufWriter::new(file))
        .with_subtype(PnmSubtype::Pixmap(SampleEncoding::Binary));
    encoder
        .write_image(bytes, res_x, res_y, ColorType::Rgb8)
        .map_err(|e| format!("Error saving output image {path}: {e}"))
}

/// Writes the image in an 8-bit image format.
///
/// * `path`         - Output file path.
/// * `bytes`        - 8-bit RGB pixel data.
/// * `res_x`        - X resolution.
/// * `res_y`        - Y resolution.
/// * `image_format` - Image format.
fn write_8_bit(
    path: &str,
    bytes: &[u8],
    res_x: u32,
    res_y: u32,
    image_format: ImageFormat,
) -> Result<(), String> {
    info!("Writing image {path} with resolution {res_x}x{res_y}");

    let imgbuf: RgbImage = ImageBuffer::from_raw(res_x, res_y, bytes.to_vec())
        .ok_or_else(|| format!("Image buffer for {path} has the wrong size"))?;

    match imgbuf.save_with_format(path, image_format) {
        Ok(()) => Ok(()),
        Err(err) => Err(format!("Error saving output image {path}: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_lowercased() {
        assert_eq!(get_extension_from_filename("out.PPM").as_deref(), Some("ppm"));
        assert_eq!(get_extension_from_filename("dir.x/out"), None);
    }

    #[test]
    fn quantization_clamps() {
        let bytes = to_8_bit(&[RGBSpectrum::new(-1.0, 0.5, 2.0)]);
        assert_eq!(bytes, vec![0, 128, 255]);
    }

    #[test]
    fn unsupported_extension_is_an_error() {
        let image = RGBImage::new(vec![RGBSpectrum::ZERO], 1, 1);
        assert!(write_image("out.bmp.xyz", &image).is_err());
    }

    #[test]
    fn ppm_round_trip_through_reader() {
        let path = std::env::temp_dir().join("base_image_io_test.ppm");
        let path = path.to_str().unwrap().to_string();
        let image = RGBImage::new(vec![RGBSpectrum::ONE, RGBSpectrum::ZERO], 2, 1);
        write_image(&path, &image).unwrap();
        let back = read_image(&path).unwrap();
        assert_eq!(back.resolution, Point2::new(2, 1));
        assert_eq!(back.pixels[0], RGBSpectrum::ONE);
        assert_eq!(back.pixels[1], RGBSpectrum::ZERO);
        let _ = std::fs::remove_file(&path);
    }
}
