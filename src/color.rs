use crate::rtweekend::*;
use std::io::{self, Write};

/// Linear RGB radiance.
pub type Color = Vec3;

/// Gamma-2 transfer. Non-positive and NaN input map to 0.
#[inline]
pub fn linear_to_gamma(linear_component: f64) -> f64 {
    if linear_component > 0.0 {
        linear_component.sqrt()
    } else {
        0.0
    }
}

/// Writes the plain PPM (`P3`) header for a `width` x `height` image.
pub fn write_ppm_header<W: Write>(out: &mut W, width: u32, height: u32) -> io::Result<()> {
    writeln!(out, "P3")?;
    writeln!(out, "{width} {height}")?;
    writeln!(out, "255")
}

/// Writes one pixel as a `r g b` line of bytes.
pub fn write_color<W: Write>(out: &mut W, pixel_color: Color) -> io::Result<()> {
    const INTENSITY: Interval = Interval::new(0.000, 0.999);

    let to_byte = |c: f64| (256.0 * INTENSITY.clamp(linear_to_gamma(c))) as u8;
    let rbyte = to_byte(pixel_color.x);
    let gbyte = to_byte(pixel_color.y);
    let bbyte = to_byte(pixel_color.z);

    writeln!(out, "{rbyte} {gbyte} {bbyte}")
}
