use crate::rtweekend::*;
use clap::ValueEnum;
use log::trace;

/// Built-in worlds selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Preset {
    /// Diffuse, glass (with an air bubble) and fuzzy metal spheres on a diffuse ground.
    #[default]
    Materials,
    /// One grey diffuse sphere in front of the camera.
    Single,
    /// Nothing but the sky gradient.
    Empty,
}

impl Preset {
    pub fn build(self) -> HittableList {
        let world = match self {
            Preset::Materials => materials(),
            Preset::Single => single(),
            Preset::Empty => HittableList::new(),
        };
        trace!("{self:?} scene has {} surfaces", world.len());
        world
    }
}

fn materials() -> HittableList {
    let material_ground: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.8, 0.8, 0.0)));
    let material_center: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.1, 0.2, 0.5)));
    let material_left: Arc<dyn Material> = Arc::new(Dielectric::new(1.50));
    let material_bubble: Arc<dyn Material> = Arc::new(Dielectric::new(1.00 / 1.50));
    let material_right: Arc<dyn Material> = Arc::new(Metal::new(Color::new(0.8, 0.6, 0.2), 1.0));

    let mut world = HittableList::new();
    world.add(Arc::new(Sphere::new(
        Point3::new(0.0, -100.5, -1.0),
        100.0,
        material_ground,
    )));
    world.add(Arc::new(Sphere::new(
        Point3::new(0.0, 0.0, -1.2),
        0.5,
        material_center,
    )));
    world.add(Arc::new(Sphere::new(
        Point3::new(-1.0, 0.0, -1.0),
        0.5,
        material_left,
    )));
    world.add(Arc::new(Sphere::new(
        Point3::new(-1.0, 0.0, -1.0),
        0.4,
        material_bubble,
    )));
    world.add(Arc::new(Sphere::new(
        Point3::new(1.0, 0.0, -1.0),
        0.5,
        material_right,
    )));
    world
}

fn single() -> HittableList {
    let grey: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.5, 0.5, 0.5)));
    HittableList::with_object(Arc::new(Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5, grey)))
}
