use std::str::FromStr;
use tracing_subscriber::{
    filter::{self, LevelFilter},
    prelude::*,
};

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("Invalid LOG_LEVEL: {0}")]
    InvalidLevel(#[from] tracing::metadata::ParseLevelFilterError),
    #[error("Failed to install logger: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

// Noisy dependencies
const MUTED_TARGETS: &[&str] = &[
    "iced_wgpu",
    "iced_winit",
    "iced_graphics",
    "iced_runtime",
    "iced_core",
    "iced_tiny_skia",
    "wgpu_core",
    "wgpu_hal",
    "naga",
    "winit",
    "mio",
    "cosmic_text",
    "polling",
    "calloop",
    "async_io",
    "sctk",
];

fn is_muted(target: &str) -> bool {
    MUTED_TARGETS.iter().any(|prefix| target.starts_with(prefix))
}

pub fn setup_logger(log_level: LevelFilter) -> Result<(), LoggerError> {
    let stdout_log = tracing_subscriber::fmt::layer().pretty().with_file(false);

    tracing_subscriber::registry()
        .with(
            stdout_log
                .with_filter(log_level)
                .with_filter(filter::filter_fn(|metadata| !is_muted(metadata.target()))),
        )
        .try_init()?;

    Ok(())
}

/// Parse LOG_LEVEL environment variable.
pub fn parse_log_level() -> Result<Option<LevelFilter>, LoggerError> {
    if let Ok(l) = std::env::var("LOG_LEVEL") {
        Ok(Some(LevelFilter::from_str(&l)?))
    } else {
        Ok(None)
    }
}
