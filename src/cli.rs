use crate::rtweekend::*;
use crate::scene::Preset;
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Render a sphere scene to a plain-text PPM image.
#[derive(Debug, Parser)]
#[command(name = "weekend_tracer", version)]
pub struct Args {
    /// Target width / height ratio
    #[arg(long, default_value_t = Camera::DEFAULT_ASPECT_RATIO)]
    pub aspect_ratio: f64,

    /// Image width in pixels; height is derived from the aspect ratio
    #[arg(long, default_value_t = Camera::DEFAULT_IMAGE_WIDTH)]
    pub width: u32,

    /// Random samples averaged per pixel
    #[arg(short, long, default_value_t = Camera::DEFAULT_SAMPLES_PER_PIXEL)]
    pub samples_per_pixel: u32,

    /// Maximum number of bounces followed per ray
    #[arg(long, default_value_t = Camera::DEFAULT_MAX_DEPTH)]
    pub max_depth: u32,

    /// Seed for the sample generator; a random one is chosen and logged when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the image here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// World to render
    #[arg(long, value_enum, default_value_t = Preset::Materials)]
    pub scene: Preset,

    /// Logging verbosity on stderr
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

impl Args {
    pub fn camera(&self) -> Result<Camera, ConfigError> {
        Camera::new(
            self.aspect_ratio,
            self.width,
            self.samples_per_pixel,
            self.max_depth,
        )
    }
}
