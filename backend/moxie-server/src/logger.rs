use crate::error::{Result as ServerErrorResult, ServerError};

use moxie_config::LoggingConfig;

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{LevelFilter, info};

/// Where log lines go
enum Sink {
    File(PathBuf),
    Colored,
    Plain,
}

/// Initialize the fern logger.
///
/// A configured `logging.file` is created under `config_dir/logging.dir`
/// and always written without colors.
pub fn initialize(logging: &LoggingConfig, config_dir: &Path) -> ServerErrorResult<()> {
    let level_filter = *logging.level;

    let sink = match logging.file {
        Some(ref filename) => {
            let log_dir = config_dir.join(&logging.dir);
            std::fs::create_dir_all(&log_dir).map_err(|e| ServerError::Logger {
                message: format!("Failed to create log directory {}: {}", log_dir.display(), e),
            })?;
            Sink::File(log_dir.join(filename))
        }
        None if logging.colored => Sink::Colored,
        None => Sink::Plain,
    };

    let colors = matches!(sink, Sink::Colored).then(|| {
        ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red)
    });

    let dispatch = Dispatch::new()
        .level(level_filter)
        // Client internals are noisy below warn
        .level_for("hyper_util", LevelFilter::Warn)
        .level_for("reqwest", LevelFilter::Warn)
        .format(move |out, message, record| {
            let level = match colors {
                Some(colors) => colors.color(record.level()).to_string(),
                None => record.level().to_string(),
            };
            out.finish(format_args!(
                "[{date} - {level}] {message} [{target}]",
                date = humantime::format_rfc3339_seconds(SystemTime::now()),
                target = record.target(),
            ))
        });

    let dispatch = match sink {
        Sink::File(ref path) => {
            let file = fern::log_file(path).map_err(|e| ServerError::Logger {
                message: format!("Failed to open log file {}: {}", path.display(), e),
            })?;
            dispatch.chain(file)
        }
        Sink::Colored | Sink::Plain => dispatch.chain(std::io::stdout()),
    };

    dispatch.apply().map_err(|e| ServerError::Logger {
        message: format!("Failed to initialize logger: {e}"),
    })?;

    match sink {
        Sink::File(path) => info!(
            "Logger initialized: level={}, file={}",
            level_filter,
            path.display()
        ),
        _ => info!("Logger initialized: level={}, stdout", level_filter),
    }

    // Forward tracing events from dependencies into the same sink
    tracing_log::LogTracer::init().ok();

    Ok(())
}
