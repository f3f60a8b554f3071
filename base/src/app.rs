//! Application related stuff

use crate::light::LightSampleMode;
use crate::pbrt::*;
use crate::spectrum::RGBSpectrum;
use clap::{Parser, ValueEnum};

/// Built-in scenes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SceneKind {
    /// Diffuse Cornell box lit by a ceiling area light.
    CornellBox,

    /// Cornell box with a mirror block and a glass sphere.
    SpecularCornellBox,

    /// Cornell box lit by several unequal area lights, point lights and an
    /// ambient term.
    LightChallenge,

    /// Cornell box with a checkerboard floor.
    TexturedCornellBox,
}

/// Available shaders.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ShaderKind {
    /// Recursive path tracing.
    Path,

    /// Direct lighting only.
    Direct,
}

/// System wide options.
#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Options {
    /// Path to the image file.
    #[arg(
        value_name = "FILE",
        help = "Write the final image to the given filename (.ppm, .png or .tga)."
    )]
    pub image_file: String,

    /// Samples per pixel.
    #[arg(long, value_name = "NUM", default_value_t = 1, help = "Samples per pixel.")]
    pub spp: usize,

    /// Light sampling policy for direct lighting.
    #[arg(
        long = "light-sampler",
        short = 'l',
        value_enum,
        default_value_t = LightSampleMode::AllLights,
        help = "How direct lighting picks lights."
    )]
    pub light_sample_mode: LightSampleMode,

    /// Scene to render.
    #[arg(long, value_enum, default_value_t = SceneKind::CornellBox, help = "Built-in scene to render.")]
    pub scene: SceneKind,

    /// Shader to render with.
    #[arg(long, value_enum, default_value_t = ShaderKind::Path, help = "Shader to render with.")]
    pub shader: ShaderKind,

    /// Image width.
    #[arg(long, value_name = "NUM", default_value_t = 640, help = "Image width in pixels.")]
    pub width: usize,

    /// Image height.
    #[arg(long, value_name = "NUM", default_value_t = 640, help = "Image height in pixels.")]
    pub height: usize,

    /// Number of threads to use for rendering.
    #[arg(
        long = "nthreads",
        short = 't',
        value_name = "NUM",
        default_value_t = 0,
        help = "Use specified number of threads for rendering (0 = all logical CPUs)."
    )]
    n_threads: usize,

    /// Tile size.
    #[arg(
        long = "tilesize",
        short = 'p',
        value_name = "NUM",
        default_value_t = 16,
        help = "Size in pixels of square tiles rendered per thread."
    )]
    pub tile_size: usize,

    /// Seed for the random streams.
    #[arg(long, value_name = "NUM", default_value_t = 0, help = "Seed for the random streams.")]
    pub seed: u64,

    /// Disable jittering of primary rays inside pixels.
    #[arg(long = "no-jitter", help = "Shoot primary rays through pixel centers.")]
    pub no_jitter: bool,

    /// Depth below which recursion always continues.
    #[arg(
        long = "min-depth",
        value_name = "NUM",
        default_value_t = 1,
        help = "Depth below which Russian roulette never terminates a path."
    )]
    pub min_depth: usize,

    /// Russian roulette continuation probability.
    #[arg(
        long = "continue-prob",
        value_name = "P",
        default_value_t = 0.2,
        value_parser = parse_probability,
        help = "Probability that Russian roulette continues a path."
    )]
    pub continue_prob: Float,

    /// Hard recursion ceiling.
    #[arg(
        long = "max-depth",
        value_name = "NUM",
        default_value_t = 64,
        help = "Depth at which paths are truncated regardless of Russian roulette."
    )]
    pub max_depth: usize,

    /// Radiance of rays that leave the scene.
    #[arg(
        long,
        value_name = "FLOAT",
        num_args = 3,
        default_values_t = [0.0, 0.0, 0.2],
        help = "Background radiance (R G B)."
    )]
    pub background: Vec<Float>,

    /// Image for the floor of the textured scene.
    #[arg(
        long,
        value_name = "FILE",
        help = "Image used as the floor texture of textured-cornell-box instead of a checkerboard."
    )]
    pub texture: Option<String>,

    /// Thin lens radius.
    #[arg(
        long = "lens-radius",
        value_name = "FLOAT",
        default_value_t = 0.0,
        help = "Lens radius for depth of field; 0 is a pinhole."
    )]
    pub lens_radius: Float,

    /// Distance to the plane in focus.
    #[arg(
        long = "focal-distance",
        value_name = "FLOAT",
        default_value_t = 500.0,
        help = "Distance from the eye to the plane in focus."
    )]
    pub focal_distance: Float,

    /// Suppress all text output other than error messages.
    #[arg(long, help = "Suppress all text output other than error messages.")]
    pub quiet: bool,
}

impl Options {
    /// Returns the number of threads to use.
    pub fn threads(&self) -> usize {
        let max_threads = num_cpus::get();
        match self.n_threads {
            0 => max_threads,
            n if n > max_threads => {
                warn!("Num threads > max logical CPUs {}", max_threads);
                max_threads
            }
            n => n,
        }
    }

    /// Returns the background radiance.
    pub fn background(&self) -> RGBSpectrum {
        match self.background.as_slice() {
            [r, g, b] => RGBSpectrum::new(*r, *g, *b),
            _ => RGBSpectrum::new(0.0, 0.0, 0.2),
        }
    }
}

/// Parse a probability in (0, 1].
///
/// * `s` - The string to parse.
fn parse_probability(s: &str) -> Result<Float, String> {
    let p: Float = s.parse().map_err(|e| format!("'{s}' is not a number: {e}"))?;
    if p > 0.0 && p <= 1.0 {
        Ok(p)
    } else {
        Err(format!("{p} is not in (0, 1]"))
    }
}
