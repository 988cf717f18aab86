use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
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

/// Command line arguments structure using clap derive macros
#[derive(Parser)]
#[command(name = "glyphcast")]
#[command(about = "Raycast a scene of spheres into a block of text glyphs")]
pub struct Args {
    /// Settings file (TOML); built-in defaults are used when omitted
    #[arg(short, long, help = "Settings file (TOML)")]
    pub config: Option<String>,

    /// Set the logging level (defaults to "warn")
    #[arg(long, default_value = "warn", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Frame width in glyph cells, overrides the settings file
    #[arg(long, help = "Frame width in glyph cells")]
    pub width: Option<u32>,

    /// Frame height in lines, overrides the settings file
    #[arg(long, help = "Frame height in lines")]
    pub height: Option<u32>,

    /// Distance of the image plane, overrides the settings file
    #[arg(long, help = "Distance of the image plane")]
    pub focal: Option<f64>,

    /// Number of entities to place, overrides the settings file
    #[arg(long, short = 'n', help = "Number of entities to place")]
    pub entities: Option<usize>,

    /// Seed of the placement generator, overrides the settings file
    #[arg(long, help = "Seed of the placement generator")]
    pub seed: Option<u64>,

    /// Keys to replay before the final frame (w/s move, a/d turn, +/- scale, n next, v view)
    #[arg(
        short,
        long,
        default_value = "",
        help = "Keys to replay: w/s move, a/d turn, +/- scale, n next, v view"
    )]
    pub events: String,

    /// Print a frame after every replayed event, not just the last one
    #[arg(long, help = "Print a frame after every replayed event")]
    pub every_frame: bool,

    /// Write frames to this file instead of stdout
    #[arg(short, long, help = "Write frames to this file instead of stdout")]
    pub output: Option<String>,

    /// Also save the final frame's intensities as a grayscale PNG
    #[arg(long, help = "Also save the final frame's intensities as a grayscale PNG")]
    pub png: Option<String>,

    /// Show a progress bar while rendering
    #[arg(long, help = "Show a progress bar while rendering")]
    pub progress: bool,
}
