use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use sol_tracer::{render, render_parallel};
use std::time::Instant;

mod cli;
mod logger;
mod output;
mod scene_file;

use cli::Args;
use logger::init_logger;
use output::save_png;
use scene_file::SceneFile;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    let mut scene = match &args.scene {
        Some(path) => SceneFile::load(path)?,
        None => {
            info!("No scene file given, rendering the demo scene");
            SceneFile::demo()
        }
    };
    args.apply_overrides(&mut scene.options);

    if args.dump_scene {
        println!("{}", serde_json::to_string_pretty(&scene)?);
        return Ok(());
    }

    scene.options.validate().context("Invalid render options")?;

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure the render thread pool")?;
    }

    let options = &scene.options;
    info!(
        "Rendering {}x{} at {}° FOV, {} primitives, {} lights{}",
        options.image_width,
        options.image_height,
        options.clamped_field_of_view(),
        scene.primitives.len(),
        scene.lights.len(),
        if args.sequential { " (sequential)" } else { "" }
    );

    let start = Instant::now();
    let image = if args.sequential {
        render(options, scene.scene())
    } else {
        render_parallel(options, scene.scene(), args.bucket_size)
    };
    let elapsed = start.elapsed();

    info!("Image generation took {:?}", elapsed);
    info!(
        "Image is {}x{} == {} pixels and {} bytes",
        image.width,
        image.height,
        image.pixels.len(),
        image.as_rgba().len()
    );

    save_png(&image, &args.output)
}
