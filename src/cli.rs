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
#[command(name = "firstray")]
#[command(about = "A minimal single-sphere ray caster")]
pub struct Args {
    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Image width in pixels (height follows from the 16:9 aspect ratio).
    /// At least 4, so the derived height reaches the 2-row minimum.
    #[arg(
        long,
        default_value = "1024",
        value_parser = clap::value_parser!(u32).range(4..),
        help = "Image width in pixels (minimum 4)"
    )]
    pub width: u32,

    /// Output file path for the rendered JPEG
    #[arg(
        short,
        long,
        default_value = "image.jpg",
        help = "Output file path for the rendered JPEG"
    )]
    pub output: String,
}
