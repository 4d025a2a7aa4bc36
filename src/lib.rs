//! A small Monte Carlo path tracer for spheres with diffuse, metal and glass
//! materials, writing plain-text PPM images.
//!
//! Everything commonly needed is re-exported from [`rtweekend`].

pub mod camera;
pub mod cli;
pub mod color;
pub mod error;
pub mod hittable;
pub mod hittable_list;
pub mod interval;
pub mod logger;
pub mod material;
pub mod ray;
pub mod rtweekend;
pub mod scene;
pub mod sphere;
pub mod vec3;
