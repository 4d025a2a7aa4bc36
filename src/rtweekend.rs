pub use crate::camera::Camera;
pub use crate::color::{Color, linear_to_gamma, write_color, write_ppm_header};
pub use crate::error::ConfigError;
pub use crate::hittable::{HitRecord, Hittable};
pub use crate::hittable_list::HittableList;
pub use crate::interval::Interval;
pub use crate::material::{Dielectric, Lambertian, Material, Metal};
pub use crate::ray::Ray;
pub use crate::sphere::Sphere;
pub use crate::vec3::{Point3, Vec3};

pub use rand::{Rng, RngCore, SeedableRng};
pub use std::sync::Arc;

use rand_chacha::ChaCha8Rng;

pub const INFINITY: f64 = f64::INFINITY;

/// Generator used for every stochastic decision in a render.
pub type TraceRng = ChaCha8Rng;

/// Builds the render generator from a fixed seed, so identical seeds give
/// byte-identical images.
pub fn seeded_rng(seed: u64) -> TraceRng {
    TraceRng::seed_from_u64(seed)
}

/// Draws a fresh seed from the thread-local OS-seeded generator.
pub fn entropy_seed() -> u64 {
    rand::rng().random()
}

#[inline]
pub fn random_f64<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.random::<f64>()
}

#[inline]
pub fn random_f64_range<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    min + (max - min) * random_f64(rng)
}
