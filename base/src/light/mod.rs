//! Light

use crate::geometry::*;

mod ambient;
mod area;
mod light_type;
mod point;
mod sample_mode;

// Re-export
pub use ambient::*;
pub use area::*;
pub use light_type::*;
pub use point::*;
pub use sample_mode::*;

/// Light sources.
#[derive(Clone, Debug)]
pub enum Light {
    /// Non-directional fill light.
    Ambient(AmbientLight),

    /// Isotropic point light.
    Point(PointLight),

    /// Emitting triangle.
    Area(AreaLight),
}

impl Light {
    /// Returns the type of light.
    pub fn get_type(&self) -> LightType {
        match self {
            Self::Ambient(_) => LightType::AMBIENT_LIGHT,
            Self::Point(_) => LightType::DELTA_POSITION_LIGHT,
            Self::Area(_) => LightType::AREA_LIGHT,
        }
    }

    /// Returns a representative position used to rank lights: the light's
    /// position or the emitter's centroid. `None` for ambient light.
    pub fn reference_point(&self) -> Option<Point3f> {
        match self {
            Self::Ambient(_) => None,
            Self::Point(l) => Some(l.p_light),
            Self::Area(l) => Some(l.centroid()),
        }
    }
}

impl From<AmbientLight> for Light {
    fn from(l: AmbientLight) -> Self {
        Self::Ambient(l)
    }
}

impl From<PointLight> for Light {
    fn from(l: PointLight) -> Self {
        Self::Point(l)
    }
}

impl From<AreaLight> for Light {
    fn from(l: AreaLight) -> Self {
        Self::Area(l)
    }
}
