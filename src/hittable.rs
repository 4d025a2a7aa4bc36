use crate::rtweekend::*;

/// Result of a successful intersection. Borrows the struck surface's material
/// for the duration of one ray evaluation.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    pub p: Point3,
    /// Unit length, always facing against the incoming ray.
    pub normal: Vec3,
    pub t: f64,
    pub mat: &'a dyn Material,
    /// True when the ray struck the outside of the surface.
    pub front_face: bool,
}

impl<'a> HitRecord<'a> {
    /// `outward_normal` must be unit length.
    pub fn new(r: &Ray, t: f64, outward_normal: Vec3, mat: &'a dyn Material) -> Self {
        let front_face = r.dir.dot(outward_normal) < 0.0;
        let normal = if front_face {
            outward_normal
        } else {
            -outward_normal
        };
        Self {
            p: r.at(t),
            normal,
            t,
            mat,
            front_face,
        }
    }
}

pub trait Hittable: Send + Sync {
    /// Nearest intersection with `t` strictly inside `ray_t`, if any.
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord<'_>>;
}
