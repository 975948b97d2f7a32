use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::prelude::*;

use super::filter::DebugOnlyFilter;
#[cfg(not(feature = "dev"))]
use super::filter::ErrorOnlyFilter;
use super::filter::ErrorWarnFilter;
#[cfg(feature = "dev")]
use super::filter::InfoAndAboveFilter;
use super::format::MuraqibFormat;
use crate::config::LoggingConfig;
use crate::constants::DEFAULT_LOG_DIRECTORY;
use crate::constants::LOG_TARGET;
use crate::err_with_loc;

/// Keeps the non-blocking log writers flushing; drop it only when the engine exits.
#[must_use]
pub struct TracingGuard {
    _guards: Vec<WorkerGuard>,
}

pub fn setup_tracing(
    engine_name: &str,
    logging_config: &LoggingConfig,
) -> crate::Result<TracingGuard> {
    let base_logs_dir = Path::new(logging_config.directory.as_deref().unwrap_or(DEFAULT_LOG_DIRECTORY));

    let logs_dirs = [base_logs_dir.to_path_buf(), base_logs_dir.join("debug"), base_logs_dir.join("error")];
    for dir in &logs_dirs {
        std::fs::create_dir_all(dir)
            .map_err(|e| err_with_loc!(format!("failed_to_create_logs_directory::{}::{}", dir.display(), e)))?;
    }

    let debug_appender =
        RollingFileAppender::new(Rotation::DAILY, base_logs_dir.join("debug"), format!("{}.log", engine_name));
    let error_appender =
        RollingFileAppender::new(Rotation::DAILY, base_logs_dir.join("error"), format!("{}.log", engine_name));

    let (non_blocking_debug, debug_guard) = tracing_appender::non_blocking(debug_appender);
    let (non_blocking_error, error_guard) = tracing_appender::non_blocking(error_appender);

    let format = MuraqibFormat::new(engine_name);

    // RUST_LOG narrows what reaches the per-level layers below
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(format!("{}=debug", LOG_TARGET)));

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        // DEBUG log file
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_ansi(false)
                .event_format(format.clone())
                .with_writer(non_blocking_debug)
                .with_filter(DebugOnlyFilter),
        )
        // ERROR log file - warn and error only
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_ansi(false)
                .event_format(format.clone())
                .with_writer(non_blocking_error)
                .with_filter(ErrorWarnFilter),
        );

    #[cfg(not(feature = "dev"))]
    let subscriber = subscriber.with(
        tracing_subscriber::fmt::Layer::default()
            .with_ansi(true)
            .event_format(format.clone())
            .with_writer(std::io::stderr)
            .with_filter(ErrorOnlyFilter),
    );

    #[cfg(feature = "dev")]
    let subscriber = subscriber.with(
        tracing_subscriber::fmt::Layer::default()
            .with_ansi(true)
            .event_format(format.clone())
            .with_writer(std::io::stderr)
            .with_filter(InfoAndAboveFilter),
    );

    match tracing::subscriber::set_global_default(subscriber) {
        Ok(_) => {
            tracing::info!("{}_logging_started::debug_logs::{}", engine_name, base_logs_dir.join("debug").display());
            tracing::info!("{}_logging_started::error_logs::{}", engine_name, base_logs_dir.join("error").display());
        },
        Err(e) => {
            eprintln!("Error setting up logging: {}", e);
        },
    }

    Ok(TracingGuard { _guards: vec![debug_guard, error_guard] })
}
