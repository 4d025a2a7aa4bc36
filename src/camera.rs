use crate::rtweekend::*;
use log::{debug, info};
use std::io::{self, Write};
use std::time::Instant;

/// Closest hit distance accepted when tracing; keeps scattered rays from
/// re-hitting the surface they start on.
const SHADOW_ACNE_EPSILON: f64 = 0.001;

/// Pinhole camera at the origin looking down `-z`, with a unit focal length.
///
/// All viewport geometry is derived in [`Camera::new`] and never changes
/// afterwards.
#[derive(Debug, Clone)]
pub struct Camera {
    aspect_ratio: f64,
    image_width: u32,
    samples_per_pixel: u32,
    max_depth: u32,

    image_height: u32,
    pixel_samples_scale: f64,
    center: Point3,
    pixel00_loc: Point3,
    pixel_delta_u: Vec3,
    pixel_delta_v: Vec3,
}

impl Camera {
    pub const DEFAULT_ASPECT_RATIO: f64 = 1.0;
    pub const DEFAULT_IMAGE_WIDTH: u32 = 100;
    pub const DEFAULT_SAMPLES_PER_PIXEL: u32 = 10;
    pub const DEFAULT_MAX_DEPTH: u32 = 10;

    pub fn new(
        aspect_ratio: f64,
        image_width: u32,
        samples_per_pixel: u32,
        max_depth: u32,
    ) -> Result<Self, ConfigError> {
        if image_width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if samples_per_pixel == 0 {
            return Err(ConfigError::ZeroSamples);
        }
        if !(aspect_ratio.is_finite() && aspect_ratio > 0.0) {
            return Err(ConfigError::InvalidAspectRatio(aspect_ratio));
        }

        let image_height = ((image_width as f64 / aspect_ratio) as u32).max(1);
        let center = Point3::zero();

        let focal_length = 1.0;
        let viewport_height = 2.0;
        let viewport_width = viewport_height * (image_width as f64 / image_height as f64);

        // v runs down the image, opposite to world +y
        let viewport_u = Vec3::new(viewport_width, 0.0, 0.0);
        let viewport_v = Vec3::new(0.0, -viewport_height, 0.0);

        let pixel_delta_u = viewport_u / image_width as f64;
        let pixel_delta_v = viewport_v / image_height as f64;

        let viewport_upper_left =
            center - Vec3::new(0.0, 0.0, focal_length) - viewport_u / 2.0 - viewport_v / 2.0;
        let pixel00_loc = viewport_upper_left + 0.5 * (pixel_delta_u + pixel_delta_v);

        Ok(Self {
            aspect_ratio,
            image_width,
            samples_per_pixel,
            max_depth,
            image_height,
            pixel_samples_scale: 1.0 / samples_per_pixel as f64,
            center,
            pixel00_loc,
            pixel_delta_u,
            pixel_delta_v,
        })
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    pub fn image_width(&self) -> u32 {
        self.image_width
    }

    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    pub fn samples_per_pixel(&self) -> u32 {
        self.samples_per_pixel
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Renders `world` as a PPM image into `out`, rows top to bottom.
    pub fn render<H, W>(&self, world: &H, out: &mut W, rng: &mut dyn RngCore) -> io::Result<()>
    where
        H: Hittable + ?Sized,
        W: Write,
    {
        info!(
            "rendering {}x{} image, {} samples/pixel, max depth {}",
            self.image_width, self.image_height, self.samples_per_pixel, self.max_depth
        );
        let started = Instant::now();

        write_ppm_header(out, self.image_width, self.image_height)?;

        for j in 0..self.image_height {
            debug!("Scanlines remaining: {}", self.image_height - j);
            for i in 0..self.image_width {
                write_color(out, self.pixel_color(i, j, world, rng))?;
            }
        }
        out.flush()?;

        info!("done in {:.2?}", started.elapsed());
        Ok(())
    }

    /// Average linear radiance over `samples_per_pixel` jittered rays
    /// through pixel `(i, j)`.
    pub fn pixel_color<H>(&self, i: u32, j: u32, world: &H, rng: &mut dyn RngCore) -> Color
    where
        H: Hittable + ?Sized,
    {
        let mut pixel_color = Color::zero();
        for _ in 0..self.samples_per_pixel {
            let r = self.get_ray(i, j, rng);
            pixel_color += self.ray_color(&r, self.max_depth, world, rng);
        }
        pixel_color * self.pixel_samples_scale
    }

    /// Ray from the camera center through a random point in the unit
    /// square around pixel `(i, j)`.
    pub fn get_ray(&self, i: u32, j: u32, rng: &mut dyn RngCore) -> Ray {
        let offset = sample_square(rng);
        let pixel_sample = self.pixel00_loc
            + ((i as f64 + offset.x) * self.pixel_delta_u)
            + ((j as f64 + offset.y) * self.pixel_delta_v);

        Ray::new(self.center, pixel_sample - self.center)
    }

    /// Radiance gathered along `r`, following at most `depth` bounces.
    pub fn ray_color<H>(&self, r: &Ray, depth: u32, world: &H, rng: &mut dyn RngCore) -> Color
    where
        H: Hittable + ?Sized,
    {
        if depth == 0 {
            return Color::zero();
        }

        match world.hit(r, Interval::new(SHADOW_ACNE_EPSILON, INFINITY)) {
            Some(rec) => match rec.mat.scatter(r, &rec, rng) {
                Some((scattered, attenuation)) => {
                    attenuation * self.ray_color(&scattered, depth - 1, world, rng)
                }
                None => Color::zero(),
            },
            None => background(r),
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_ASPECT_RATIO,
            Self::DEFAULT_IMAGE_WIDTH,
            Self::DEFAULT_SAMPLES_PER_PIXEL,
            Self::DEFAULT_MAX_DEPTH,
        )
        .unwrap_or_else(|e| unreachable!("default camera settings rejected: {e}"))
    }
}

/// White-to-sky-blue vertical gradient seen by rays that escape the scene.
pub fn background(r: &Ray) -> Color {
    let unit_direction = r.dir.normalized();
    let a = 0.5 * (unit_direction.y + 1.0);
    (1.0 - a) * Color::new(1.0, 1.0, 1.0) + a * Color::new(0.5, 0.7, 1.0)
}

/// Offset in `[-0.5, 0.5)` on both image axes.
fn sample_square(rng: &mut dyn RngCore) -> Vec3 {
    Vec3::new(random_f64(rng) - 0.5, random_f64(rng) - 0.5, 0.0)
}
