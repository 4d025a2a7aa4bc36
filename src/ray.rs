use crate::rtweekend::*;

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Ray {
    pub orig: Point3,
    pub dir: Vec3,
}

impl Ray {
    pub fn new(orig: Point3, dir: Vec3) -> Self {
        Self { orig, dir }
    }

    /// Point reached after travelling `t` direction lengths from the origin.
    pub fn at(&self, t: f64) -> Point3 {
        self.orig + t * self.dir
    }
}
