use clap::{Parser, ValueEnum};
use log::LevelFilter;
use sol_tracer::{ToneMapper, TracerOptions, DEFAULT_BUCKET_SIZE};
use std::path::PathBuf;

/// Log levels accepted on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
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

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ToneMapperArg {
    Aces,
    Reinhard,
    Clamp,
}

impl From<ToneMapperArg> for ToneMapper {
    fn from(arg: ToneMapperArg) -> Self {
        match arg {
            ToneMapperArg::Aces => ToneMapper::AcesFilmic,
            ToneMapperArg::Reinhard => ToneMapper::Reinhard,
            ToneMapperArg::Clamp => ToneMapper::Clamp,
        }
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "sol")]
#[command(about = "Render spheres and planes with Blinn-Phong shading")]
pub struct Args {
    /// JSON scene file; the built-in demo scene is used when omitted
    #[arg(short, long)]
    pub scene: Option<PathBuf>,

    /// Output PNG path
    #[arg(short, long, default_value = "output.png")]
    pub output: PathBuf,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Horizontal field of view in degrees, clamped to [0, 120]
    #[arg(long)]
    pub fov: Option<f32>,

    /// Distance from the eye to the image plane
    #[arg(long)]
    pub distance: Option<f32>,

    #[arg(long, value_enum)]
    pub tone_mapper: Option<ToneMapperArg>,

    /// Render on the calling thread instead of the rayon pool
    #[arg(long)]
    pub sequential: bool,

    /// Worker threads for parallel rendering (defaults to all cores)
    #[arg(long)]
    pub threads: Option<usize>,

    /// Bucket edge length in pixels for parallel rendering
    #[arg(long, default_value_t = DEFAULT_BUCKET_SIZE)]
    pub bucket_size: u32,

    /// Print the effective scene as JSON and exit
    #[arg(long)]
    pub dump_scene: bool,

    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Args {
    /// Apply the flags that were given on top of the scene's options.
    pub fn apply_overrides(&self, options: &mut TracerOptions) {
        if let Some(width) = self.width {
            options.image_width = width;
        }
        if let Some(height) = self.height {
            options.image_height = height;
        }
        if let Some(fov) = self.fov {
            options.field_of_view = fov;
        }
        if let Some(distance) = self.distance {
            options.camera_distance = distance;
        }
        if let Some(tone_mapper) = self.tone_mapper {
            options.tone_mapper = tone_mapper.into();
        }
    }
}
