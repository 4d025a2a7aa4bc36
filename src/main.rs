use anyhow::Context;
use clap::Parser;
use log::info;
use std::fs::File;
use std::io::{self, BufWriter, Write};

use weekend_tracer::cli::Args;
use weekend_tracer::logger::init_logger;
use weekend_tracer::rtweekend::*;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    let cam = args.camera().context("invalid camera settings")?;
    let world = args.scene.build();

    let seed = args.seed.unwrap_or_else(entropy_seed);
    info!("scene {:?}, seed {seed}", args.scene);
    let mut rng = seeded_rng(seed);

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
            format!("failed to create output file {}", path.display())
        })?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    cam.render(&world, &mut out, &mut rng)
        .context("failed to write image")?;

    if let Some(path) = &args.output {
        info!("wrote {}", path.display());
    }
    Ok(())
}
