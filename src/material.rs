use crate::rtweekend::*;
use std::fmt::Debug;

/// How light leaves a surface.
///
/// `scatter` returns the outgoing ray and the attenuation to apply to
/// whatever light it gathers, or `None` when the incoming ray is absorbed.
pub trait Material: Debug + Send + Sync {
    fn scatter(&self, r_in: &Ray, rec: &HitRecord<'_>, rng: &mut dyn RngCore)
    -> Option<(Ray, Color)>;
}

/// Ideal diffuse reflector.
#[derive(Debug, Clone, Copy)]
pub struct Lambertian {
    albedo: Color,
}

impl Lambertian {
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }
}

impl Material for Lambertian {
    fn scatter(
        &self,
        _r_in: &Ray,
        rec: &HitRecord<'_>,
        rng: &mut dyn RngCore,
    ) -> Option<(Ray, Color)> {
        let mut scatter_direction = rec.normal + Vec3::random_unit_vector(rng);

        // random vector almost exactly opposite the normal
        if scatter_direction.near_zero() {
            scatter_direction = rec.normal;
        }

        Some((Ray::new(rec.p, scatter_direction), self.albedo))
    }
}

/// Specular reflector. `fuzz` of 0 is a perfect mirror.
#[derive(Debug, Clone, Copy)]
pub struct Metal {
    albedo: Color,
    fuzz: f64,
}

impl Metal {
    /// `fuzz` is clamped into `[0, 1]`.
    pub fn new(albedo: Color, fuzz: f64) -> Self {
        Self {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }

    pub fn fuzz(&self) -> f64 {
        self.fuzz
    }
}

impl Material for Metal {
    fn scatter(
        &self,
        r_in: &Ray,
        rec: &HitRecord<'_>,
        rng: &mut dyn RngCore,
    ) -> Option<(Ray, Color)> {
        let mut reflected = Vec3::reflect(r_in.dir, rec.normal).normalized();
        if self.fuzz > 0.0 {
            reflected += self.fuzz * Vec3::random_unit_vector(rng);
        }
        let scattered = Ray::new(rec.p, reflected);

        // fuzz pushed the ray below the surface
        if scattered.dir.dot(rec.normal) <= 0.0 {
            return None;
        }
        Some((scattered, self.albedo))
    }
}

/// Clear refractive material such as glass or water.
#[derive(Debug, Clone, Copy)]
pub struct Dielectric {
    /// Refractive index relative to the enclosing medium.
    refraction_index: f64,
}

impl Dielectric {
    pub fn new(refraction_index: f64) -> Self {
        Self { refraction_index }
    }
}

impl Material for Dielectric {
    fn scatter(
        &self,
        r_in: &Ray,
        rec: &HitRecord<'_>,
        _rng: &mut dyn RngCore,
    ) -> Option<(Ray, Color)> {
        let ri = if rec.front_face {
            1.0 / self.refraction_index
        } else {
            self.refraction_index
        };

        let unit_direction = r_in.dir.normalized();
        let cos_theta = (-unit_direction).dot(rec.normal).min(1.0);
        let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

        let direction = if ri * sin_theta > 1.0 {
            Vec3::reflect(unit_direction, rec.normal)
        } else {
            Vec3::refract(unit_direction, rec.normal, ri)
        };

        Some((Ray::new(rec.p, direction), Color::ONE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn hit_on<'a>(r: &Ray, mat: &'a dyn Material) -> HitRecord<'a> {
        // plane y = 0 struck at t = 1 with outward normal +y
        HitRecord::new(r, 1.0, Vec3::new(0.0, 1.0, 0.0), mat)
    }

    /// Replays a fixed cycle of `u64` words.
    struct ScriptedRng {
        words: Vec<u64>,
        next: usize,
    }

    impl ScriptedRng {
        fn new(words: &[u64]) -> Self {
            Self {
                words: words.to_vec(),
                next: 0,
            }
        }
    }

    impl RngCore for ScriptedRng {
        fn next_u32(&mut self) -> u32 {
            (self.next_u64() >> 32) as u32
        }

        fn next_u64(&mut self) -> u64 {
            let word = self.words[self.next % self.words.len()];
            self.next += 1;
            word
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            for chunk in dst.chunks_mut(8) {
                let bytes = self.next_u64().to_le_bytes();
                chunk.copy_from_slice(&bytes[..chunk.len()]);
            }
        }
    }

    #[test]
    fn lambertian_falls_back_to_normal_when_direction_cancels() {
        let mat = Lambertian::new(Color::new(0.5, 0.5, 0.5));
        let r = Ray::new(Point3::new(0.0, 1.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        let rec = hit_on(&r, &mat);

        // f64 draws of 0.5, 0.0, 0.5 map to the unit vector (0, -1, 0)
        let mut rng = ScriptedRng::new(&[1 << 63, 0, 1 << 63]);
        assert_eq!(Vec3::random_unit_vector(&mut rng), -rec.normal);

        let mut rng = ScriptedRng::new(&[1 << 63, 0, 1 << 63]);
        let (scattered, attenuation) = mat.scatter(&r, &rec, &mut rng).unwrap();
        assert_eq!(scattered.dir, rec.normal);
        assert_eq!(attenuation, Color::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn lambertian_always_scatters_with_albedo() {
        let albedo = Color::new(0.2, 0.4, 0.6);
        let mat = Lambertian::new(albedo);
        let r = Ray::new(Point3::new(0.0, 1.0, 0.0), Vec3::new(0.3, -1.0, 0.1));
        let rec = hit_on(&r, &mat);
        let mut rng = seeded_rng(11);
        for _ in 0..256 {
            let (scattered, attenuation) = mat.scatter(&r, &rec, &mut rng).unwrap();
            assert_eq!(attenuation, albedo);
            assert_eq!(scattered.orig, rec.p);
            assert!(!scattered.dir.near_zero());
        }
    }

    #[test]
    fn mirror_metal_reflects_exactly() {
        let mat = Metal::new(Color::new(0.8, 0.8, 0.8), 0.0);
        let r = Ray::new(Point3::new(-1.0, 1.0, 0.0), Vec3::new(1.0, -1.0, 0.0));
        let rec = hit_on(&r, &mat);
        let mut rng = seeded_rng(0);
        let (scattered, attenuation) = mat.scatter(&r, &rec, &mut rng).unwrap();
        let expected = Vec3::reflect(r.dir, rec.normal).normalized();
        assert!((scattered.dir - expected).length() < EPS);
        assert_eq!(attenuation, Color::new(0.8, 0.8, 0.8));
    }

    #[test]
    fn metal_fuzz_is_capped() {
        assert_eq!(Metal::new(Color::ONE, 3.0).fuzz(), 1.0);
        assert_eq!(Metal::new(Color::ONE, 0.25).fuzz(), 0.25);
    }

    #[test]
    fn metal_absorbs_rays_pushed_into_surface() {
        // grazing ray: with full fuzz some reflections end up below the plane
        let mat = Metal::new(Color::ONE, 1.0);
        let r = Ray::new(Point3::new(-1.0, 0.01, 0.0), Vec3::new(1.0, -0.01, 0.0));
        let rec = hit_on(&r, &mat);
        let mut rng = seeded_rng(5);
        let mut absorbed = 0;
        for _ in 0..256 {
            match mat.scatter(&r, &rec, &mut rng) {
                Some((scattered, _)) => assert!(scattered.dir.dot(rec.normal) > 0.0),
                None => absorbed += 1,
            }
        }
        assert!(absorbed > 0);
    }

    #[test]
    fn dielectric_total_internal_reflection() {
        // leaving glass at a steep angle: 1.5 * sin(60deg) > 1
        let mat = Dielectric::new(1.5);
        let dir = Vec3::new(60f64.to_radians().sin(), 60f64.to_radians().cos(), 0.0);
        let r = Ray::new(Point3::zero(), dir);
        let rec = hit_on(&r, &mat);
        assert!(!rec.front_face);

        let mut rng = seeded_rng(0);
        let (scattered, attenuation) = mat.scatter(&r, &rec, &mut rng).unwrap();
        let reflected = Vec3::reflect(dir.normalized(), rec.normal);
        assert!((scattered.dir - reflected).length() < EPS);
        assert_eq!(attenuation, Color::ONE);
    }

    #[test]
    fn dielectric_refracts_at_normal_incidence() {
        let mat = Dielectric::new(1.5);
        let r = Ray::new(Point3::new(0.0, 1.0, 0.0), Vec3::new(0.0, -2.0, 0.0));
        let rec = hit_on(&r, &mat);
        assert!(rec.front_face);

        let mut rng = seeded_rng(0);
        let (scattered, attenuation) = mat.scatter(&r, &rec, &mut rng).unwrap();
        assert!((scattered.dir - Vec3::new(0.0, -1.0, 0.0)).length() < EPS);
        assert_eq!(attenuation, Color::ONE);
    }
}
