//! The API

#[macro_use]
extern crate log;

mod scenes;

use base::app::*;
use base::camera::*;
use base::geometry::*;
use base::integrator::*;
use base::pbrt::*;
use base::scene::*;
use integrators::*;
use std::time::Instant;

// Re-export.
pub use scenes::*;

/// Camera position shared by the built-in scenes.
pub const EYE: Point3f = Point3f {
    x: 280.0,
    y: 265.0,
    z: -500.0,
};

/// Point the camera looks at.
pub const AT: Point3f = Point3f {
    x: 280.0,
    y: 260.0,
    z: 0.0,
};

/// Horizontal field of view in degrees.
pub const FOV: Float = 60.0;

/// Returns the camera for the built-in scenes.
///
/// * `options` - Command line options.
pub fn create_camera(options: &Options) -> PerspectiveCamera {
    PerspectiveCamera::new(
        EYE,
        AT,
        Vector3f::new(0.0, 1.0, 0.0),
        options.width,
        options.height,
        FOV,
    )
    .with_lens(options.lens_radius, options.focal_distance)
}

/// Returns the renderer settings.
///
/// * `options` - Command line options.
pub fn render_settings(options: &Options) -> RenderSettings {
    RenderSettings {
        spp: options.spp,
        jitter: !options.no_jitter,
        tile_size: options.tile_size,
        threads: options.threads(),
        seed: options.seed,
        progress: !options.quiet,
    }
}

/// Returns the shader selected on the command line.
///
/// * `scene`   - The scene.
/// * `options` - Command line options.
pub fn create_shader<'a>(scene: &'a Scene, options: &Options) -> Box<dyn Shader + 'a> {
    match options.shader {
        ShaderKind::Path => Box::new(PathTracer::new(
            scene,
            PathTracerConfig {
                background: options.background(),
                light_sample_mode: options.light_sample_mode,
                min_depth: options.min_depth,
                continue_prob: options.continue_prob,
                max_depth: options.max_depth,
            },
        )),
        ShaderKind::Direct => Box::new(DirectShader::new(
            scene,
            options.background(),
            options.light_sample_mode,
        )),
    }
}

/// Build the selected scene, render it and write the image.
///
/// * `options` - Command line options.
pub fn render(options: &Options) -> Result<(), String> {
    if options.width == 0 || options.height == 0 {
        return Err(format!(
            "Invalid image size {}x{}",
            options.width, options.height
        ));
    }

    let scene = build_scene(options.scene, options.texture.as_deref())?;
    let camera = create_camera(options);
    let shader = create_shader(&scene, options);

    info!(
        "Rendering {:?} with {:?} shader, {} light sampling, {} spp",
        options.scene, options.shader, options.light_sample_mode, options.spp
    );

    let start = Instant::now();
    let film = Renderer::new(&camera, &scene, shader.as_ref(), render_settings(options)).render();
    let elapsed = start.elapsed();
    info!("Rendering time = {:.3} secs", elapsed.as_secs_f32());

    film.write_image(&options.image_file)?;
    info!("Wrote {}", options.image_file);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use base::image_io::*;
    use clap::Parser;

    fn options(args: &[&str]) -> Options {
        let mut argv = vec!["vi-rt"];
        argv.extend_from_slice(args);
        Options::try_parse_from(argv).unwrap()
    }

    #[test]
    fn renders_small_image() {
        let path = std::env::temp_dir().join("vi_rt_api_small.ppm");
        let path = path.to_string_lossy().to_string();
        let o = options(&[&path, "--width", "24", "--height", "24", "--nthreads", "2", "--quiet"]);
        render(&o).unwrap();

        let image = read_image(&path).unwrap();
        assert_eq!(image.resolution, Point2::new(24, 24));
        let lit = image.pixels.iter().filter(|p| !p.is_black()).count();
        assert!(lit > 24 * 24 / 2);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn direct_shader_renders_every_scene() {
        for name in ["cornell-box", "specular-cornell-box", "light-challenge", "textured-cornell-box"] {
            let o = options(&["unused.ppm", "--width", "8", "--height", "8", "--scene", name, "--shader", "direct"]);
            let scene = build_scene(o.scene, None).unwrap();
            let camera = create_camera(&o);
            let shader = create_shader(&scene, &o);
            let settings = RenderSettings {
                threads: 1,
                progress: false,
                ..render_settings(&o)
            };
            let image = Renderer::new(&camera, &scene, shader.as_ref(), settings).render().to_image();
            assert!(image.pixels.iter().any(|p| !p.is_black()), "{name}");
        }
    }

    #[test]
    fn bad_output_extension_is_an_error() {
        let o = options(&["image.exr", "--width", "4", "--height", "4", "--quiet"]);
        assert!(render(&o).is_err());
    }
}
