//! Base

#[macro_use]
extern crate hexf;
#[macro_use]
extern crate log;

// Re-export.
pub mod pbrt;
#[macro_use]
pub mod geometry;
pub mod app;
pub mod camera;
pub mod film;
pub mod image_io;
pub mod integrator;
pub mod interaction;
pub mod light;
pub mod material;
pub mod primitive;
pub mod rng;
pub mod sampling;
pub mod scene;
pub mod shapes;
pub mod spectrum;
pub mod texture;
