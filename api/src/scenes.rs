//! Built-in Scenes
//!
//! All scenes share the Cornell box frame: x in [0, 556], y in [0, 548.8],
//! z in [0, 559.2], open towards -z where the camera sits.

use base::app::*;
use base::geometry::*;
use base::light::*;
use base::material::*;
use base::pbrt::*;
use base::primitive::*;
use base::scene::*;
use base::shapes::*;
use base::spectrum::*;
use base::texture::*;
use std::sync::Arc;

/// Width of the box along x.
pub const BOX_WIDTH: Float = 556.0;

/// Height of the box along y.
pub const BOX_HEIGHT: Float = 548.8;

/// Depth of the box along z.
pub const BOX_DEPTH: Float = 559.2;

/// Build one of the built-in scenes.
///
/// * `kind`    - The scene.
/// * `texture` - Optional image for the floor of the textured scene.
pub fn build_scene(kind: SceneKind, texture: Option<&str>) -> Result<Scene, String> {
    info!("Building scene {kind:?}");
    let scene = match kind {
        SceneKind::CornellBox => cornell_box(),
        SceneKind::SpecularCornellBox => specular_cornell_box(),
        SceneKind::LightChallenge => light_challenge(),
        SceneKind::TexturedCornellBox => textured_cornell_box(texture)?,
    };
    Ok(scene)
}

/// Accumulates primitives and lights.
#[derive(Default)]
struct SceneBuilder {
    primitives: Vec<ArcPrimitive>,
    lights: Vec<Light>,
}

impl SceneBuilder {
    fn add_shape<S>(&mut self, shape: S, material: &ArcMaterial)
    where
        S: Shape + Send + Sync + 'static,
    {
        self.primitives
            .push(Arc::new(GeometricPrimitive::new(Arc::new(shape), Arc::clone(material))));
    }

    /// Add the quad `a b c d` as two triangles sharing the diagonal `a c`.
    fn add_quad(&mut self, a: Point3f, b: Point3f, c: Point3f, d: Point3f, material: &ArcMaterial) {
        let (uv_a, uv_b, uv_c, uv_d) = (
            Point2f::new(0.0, 0.0),
            Point2f::new(1.0, 0.0),
            Point2f::new(1.0, 1.0),
            Point2f::new(0.0, 1.0),
        );
        self.add_shape(Triangle::new(a, b, c).with_uvs([uv_a, uv_b, uv_c]), material);
        self.add_shape(Triangle::new(a, c, d).with_uvs([uv_a, uv_c, uv_d]), material);
    }

    /// Add the top and the four sides of an axis aligned block standing on
    /// the floor.
    fn add_block(&mut self, min: Point3f, max: Point3f, material: &ArcMaterial) {
        let p = |x: Float, y: Float, z: Float| Point3f::new(x, y, z);
        let (x0, y0, z0, x1, y1, z1) = (min.x, min.y, min.z, max.x, max.y, max.z);

        self.add_quad(p(x0, y1, z0), p(x1, y1, z0), p(x1, y1, z1), p(x0, y1, z1), material);
        self.add_quad(p(x0, y0, z0), p(x1, y0, z0), p(x1, y1, z0), p(x0, y1, z0), material);
        self.add_quad(p(x1, y0, z1), p(x0, y0, z1), p(x0, y1, z1), p(x1, y1, z1), material);
        self.add_quad(p(x0, y0, z1), p(x0, y0, z0), p(x0, y1, z0), p(x0, y1, z1), material);
        self.add_quad(p(x1, y0, z0), p(x1, y0, z1), p(x1, y1, z1), p(x1, y1, z0), material);
    }

    /// Add a downward facing rectangular emitter just below the ceiling.
    fn add_ceiling_light(&mut self, center: Point2f, size: Point2f, intensity: RGBSpectrum) {
        let y = BOX_HEIGHT - 0.8;
        let (x0, x1) = (center.x - 0.5 * size.x, center.x + 0.5 * size.x);
        let (z0, z1) = (center.y - 0.5 * size.y, center.y + 0.5 * size.y);
        let a = Point3f::new(x0, y, z0);
        let b = Point3f::new(x1, y, z0);
        let c = Point3f::new(x1, y, z1);
        let d = Point3f::new(x0, y, z1);
        self.lights
            .push(Light::from(AreaLight::new(Triangle::new(a, b, c), intensity)));
        self.lights
            .push(Light::from(AreaLight::new(Triangle::new(a, c, d), intensity)));
    }

    fn add_light<L: Into<Light>>(&mut self, light: L) {
        self.lights.push(light.into());
    }

    fn build(self) -> Scene {
        Scene::new(self.primitives, self.lights)
    }
}

fn diffuse(r: Float, g: Float, b: Float) -> ArcMaterial {
    Arc::new(Material::from(Brdf::diffuse(RGBSpectrum::new(r, g, b))))
}

/// Floor, ceiling, back wall and the red (x = 556) and green (x = 0) walls.
fn cornell_frame(builder: &mut SceneBuilder, floor: &ArcMaterial) {
    let white = diffuse(0.73, 0.73, 0.73);
    let red = diffuse(0.65, 0.05, 0.05);
    let green = diffuse(0.12, 0.45, 0.15);

    let p = |x: Float, y: Float, z: Float| Point3f::new(x, y, z);
    let (w, h, d) = (BOX_WIDTH, BOX_HEIGHT, BOX_DEPTH);

    builder.add_quad(p(0.0, 0.0, 0.0), p(w, 0.0, 0.0), p(w, 0.0, d), p(0.0, 0.0, d), floor);
    builder.add_quad(p(0.0, h, 0.0), p(0.0, h, d), p(w, h, d), p(w, h, 0.0), &white);
    builder.add_quad(p(0.0, 0.0, d), p(w, 0.0, d), p(w, h, d), p(0.0, h, d), &white);
    builder.add_quad(p(w, 0.0, 0.0), p(w, h, 0.0), p(w, h, d), p(w, 0.0, d), &red);
    builder.add_quad(p(0.0, 0.0, 0.0), p(0.0, 0.0, d), p(0.0, h, d), p(0.0, h, 0.0), &green);
}

fn standard_light(builder: &mut SceneBuilder) {
    builder.add_ceiling_light(
        Point2f::new(278.0, 279.5),
        Point2f::new(130.0, 105.0),
        RGBSpectrum::new(20.0, 18.0, 14.0),
    );
}

/// Diffuse Cornell box with two white blocks.
pub fn cornell_box() -> Scene {
    let mut builder = SceneBuilder::default();
    let white = diffuse(0.73, 0.73, 0.73);
    cornell_frame(&mut builder, &white);
    builder.add_block(Point3f::new(130.0, 0.0, 65.0), Point3f::new(295.0, 165.0, 230.0), &white);
    builder.add_block(Point3f::new(265.0, 0.0, 295.0), Point3f::new(430.0, 330.0, 460.0), &white);
    standard_light(&mut builder);
    builder.build()
}

/// Cornell box with a mirror block and a glass sphere.
pub fn specular_cornell_box() -> Scene {
    let mut builder = SceneBuilder::default();
    let white = diffuse(0.73, 0.73, 0.73);
    cornell_frame(&mut builder, &white);

    let mirror: ArcMaterial = Arc::new(Material::from(Brdf::mirror(RGBSpectrum::grey(0.9))));
    builder.add_block(Point3f::new(130.0, 0.0, 65.0), Point3f::new(295.0, 165.0, 230.0), &mirror);

    let glass: ArcMaterial = Arc::new(Material::from(Brdf::glass(
        RGBSpectrum::grey(0.9),
        RGBSpectrum::grey(0.1),
        1.5,
    )));
    builder.add_shape(Sphere::new(Point3f::new(370.0, 100.0, 380.0), 100.0), &glass);

    standard_light(&mut builder);
    builder.build()
}

/// Cornell box lit by area lights of very unequal power, two point lights
/// and a faint ambient term. Single-light policies differ most here.
pub fn light_challenge() -> Scene {
    let mut builder = SceneBuilder::default();
    let white = diffuse(0.73, 0.73, 0.73);
    cornell_frame(&mut builder, &white);
    builder.add_block(Point3f::new(130.0, 0.0, 65.0), Point3f::new(295.0, 165.0, 230.0), &white);
    builder.add_block(Point3f::new(265.0, 0.0, 295.0), Point3f::new(430.0, 330.0, 460.0), &white);

    let size = Point2f::new(60.0, 60.0);
    builder.add_ceiling_light(Point2f::new(120.0, 120.0), size, RGBSpectrum::grey(2.0));
    builder.add_ceiling_light(Point2f::new(436.0, 120.0), size, RGBSpectrum::grey(8.0));
    builder.add_ceiling_light(Point2f::new(120.0, 440.0), size, RGBSpectrum::new(40.0, 30.0, 20.0));
    builder.add_ceiling_light(Point2f::new(436.0, 440.0), size, RGBSpectrum::new(20.0, 30.0, 60.0));

    builder.add_light(PointLight::new(
        Point3f::new(60.0, 300.0, 100.0),
        RGBSpectrum::new(20000.0, 16000.0, 12000.0),
    ));
    builder.add_light(PointLight::new(
        Point3f::new(500.0, 60.0, 500.0),
        RGBSpectrum::new(4000.0, 6000.0, 8000.0),
    ));
    builder.add_light(AmbientLight::new(RGBSpectrum::grey(0.02)));

    builder.build()
}

/// Cornell box whose floor is textured, either with a checkerboard or with
/// the given image.
///
/// * `texture` - Optional path to the floor image.
pub fn textured_cornell_box(texture: Option<&str>) -> Result<Scene, String> {
    let texture: ArcTexture = match texture {
        Some(path) => Arc::new(ImageTexture::new(path)?),
        None => Arc::new(CheckerboardTexture::new(
            RGBSpectrum::grey(0.8),
            RGBSpectrum::new(0.1, 0.1, 0.3),
            8.0,
            8.0,
        )),
    };
    let floor: ArcMaterial = Arc::new(Material::Textured {
        brdf: Brdf::diffuse(RGBSpectrum::grey(0.5)),
        texture,
    });

    let mut builder = SceneBuilder::default();
    cornell_frame(&mut builder, &floor);
    let white = diffuse(0.73, 0.73, 0.73);
    builder.add_block(Point3f::new(265.0, 0.0, 295.0), Point3f::new(430.0, 330.0, 460.0), &white);
    standard_light(&mut builder);
    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area_lights(scene: &Scene) -> Vec<&AreaLight> {
        scene
            .lights()
            .iter()
            .filter_map(|l| match l {
                Light::Area(al) => Some(al),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn ceiling_lights_face_down() {
        for kind in [
            SceneKind::CornellBox,
            SceneKind::SpecularCornellBox,
            SceneKind::LightChallenge,
            SceneKind::TexturedCornellBox,
        ] {
            let scene = build_scene(kind, None).unwrap();
            let lights = area_lights(&scene);
            assert!(!lights.is_empty(), "{kind:?}");
            for l in lights {
                assert!(l.normal().y < -0.999, "{kind:?}");
                assert!(l.pdf > 0.0);
            }
        }
    }

    #[test]
    fn light_challenge_mixes_light_types() {
        let scene = light_challenge();
        let count = |t: LightType| scene.lights().iter().filter(|l| l.get_type() == t).count();
        assert_eq!(count(LightType::AREA_LIGHT), 8);
        assert_eq!(count(LightType::DELTA_POSITION_LIGHT), 2);
        assert_eq!(count(LightType::AMBIENT_LIGHT), 1);
    }

    #[test]
    fn box_is_closed_around_the_centre() {
        let scene = cornell_box();
        let o = Point3f::new(50.0, 274.0, 280.0);
        for d in [
            Vector3f::new(1.0, 0.0, 0.0),
            Vector3f::new(-1.0, 0.0, 0.0),
            Vector3f::new(0.0, 1.0, 0.0),
            Vector3f::new(0.0, -1.0, 0.0),
            Vector3f::new(0.0, 0.0, 1.0),
        ] {
            let ray = Ray::new(o, d, RayType::Camera);
            assert!(scene.trace(&ray).is_some(), "escaped along {d}");
        }
        let out = Ray::new(o, Vector3f::new(0.0, 0.0, -1.0), RayType::Camera);
        assert!(scene.trace(&out).is_none());
    }

    #[test]
    fn textured_floor_varies() {
        let scene = textured_cornell_box(None).unwrap();
        let down = |x: Float, z: Float| {
            let ray = Ray::new(Point3f::new(x, 100.0, z), Vector3f::new(0.0, -1.0, 0.0), RayType::Camera);
            let isect = scene.trace(&ray).unwrap();
            isect.material.as_ref().unwrap().diffuse(&isect.uv)
        };
        let samples: Vec<RGBSpectrum> = (0..16).map(|i| down(20.0 + 15.0 * i as Float, 100.0)).collect();
        assert!(samples.iter().any(|s| *s != samples[0]));
    }

    #[test]
    fn missing_texture_is_an_error() {
        assert!(build_scene(SceneKind::TexturedCornellBox, Some("/nonexistent/floor.png")).is_err());
    }
}
