use std::{
    fs,
    path::{Path, PathBuf},
    time::{Duration, SystemTime},
};

use anyhow::{Context, Result, anyhow};
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{self, RollingFileAppender},
};
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    EnvFilter, Layer, filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};
use uuid::Uuid;

use crate::config::{LoggingConfig, LoggingRotation};

const LOG_FILE_PREFIX: &str = "crisis-guide.log";
const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Keeps the background log writer alive; drop it last.
pub struct LoggingGuard {
    _worker_guard: WorkerGuard,
    run_id: String,
    log_dir: PathBuf,
}

impl LoggingGuard {
    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }
}

pub fn init_tracing(logging_config: &LoggingConfig) -> Result<LoggingGuard> {
    let env_filter = build_env_filter(&logging_config.filter)?;
    let log_dir = prepare_log_dir(&logging_config.dir)?;

    let report = RetentionSweep::new(&log_dir, LOG_FILE_PREFIX, logging_config.retention_days)
        .run(SystemTime::now());
    let appender = rolling_appender(&log_dir, &logging_config.rotation);
    let (writer, worker_guard) = tracing_appender::non_blocking(appender);

    let file_layer = fmt::layer()
        .json()
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_target(true)
        .with_current_span(true)
        .with_span_list(true)
        .with_ansi(false)
        .with_writer(writer)
        .with_filter(env_filter);

    let stderr_layer = logging_config.stderr_warn_enabled.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_filter(LevelFilter::WARN)
    });

    tracing_subscriber::registry()
        .with(ErrorLayer::default())
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .context("failed to initialize tracing subscriber")?;

    let run_id = Uuid::now_v7().to_string();
    tracing::info!(
        target: "logging",
        run_id = %run_id,
        dir = %log_dir.display(),
        filter = %logging_config.filter,
        rotation = ?logging_config.rotation,
        retention_days = logging_config.retention_days,
        expired_files_removed = report.removed,
        "logging_initialized"
    );
    for warning in &report.warnings {
        tracing::warn!(target: "logging", warning = %warning, "logging_retention_warning");
    }

    Ok(LoggingGuard {
        _worker_guard: worker_guard,
        run_id,
        log_dir,
    })
}

fn build_env_filter(filter: &str) -> Result<EnvFilter> {
    if filter.trim().is_empty() {
        return Err(anyhow!("logging.filter cannot be empty"));
    }
    EnvFilter::try_new(filter).with_context(|| format!("failed to parse logging.filter '{filter}'"))
}

fn prepare_log_dir(dir: &Path) -> Result<PathBuf> {
    if dir.as_os_str().is_empty() {
        return Err(anyhow!("logging.dir cannot be empty"));
    }
    let log_dir = if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        std::env::current_dir()
            .context("failed to read current working directory for logging.dir resolution")?
            .join(dir)
    };
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create logging directory {}", log_dir.display()))?;
    Ok(log_dir)
}

fn rolling_appender(log_dir: &Path, rotation: &LoggingRotation) -> RollingFileAppender {
    match rotation {
        LoggingRotation::Daily => rolling::daily(log_dir, LOG_FILE_PREFIX),
        LoggingRotation::Hourly => rolling::hourly(log_dir, LOG_FILE_PREFIX),
    }
}

#[derive(Debug, Default)]
struct RetentionReport {
    removed: usize,
    warnings: Vec<String>,
}

/// Deletes rolled log files older than the retention window.
struct RetentionSweep<'a> {
    log_dir: &'a Path,
    prefix: &'a str,
    retention: Duration,
}

impl<'a> RetentionSweep<'a> {
    fn new(log_dir: &'a Path, prefix: &'a str, retention_days: usize) -> Self {
        Self {
            log_dir,
            prefix,
            retention: Duration::from_secs((retention_days as u64).saturating_mul(SECONDS_PER_DAY)),
        }
    }

    fn run(&self, now: SystemTime) -> RetentionReport {
        let cutoff = now
            .checked_sub(self.retention)
            .unwrap_or(SystemTime::UNIX_EPOCH);
        let mut report = RetentionReport::default();

        let entries = match fs::read_dir(self.log_dir) {
            Ok(entries) => entries,
            Err(err) => {
                report.warnings.push(format!(
                    "failed to scan logging directory {}: {err}",
                    self.log_dir.display()
                ));
                return report;
            }
        };

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    report
                        .warnings
                        .push(format!("failed to iterate logging directory entries: {err}"));
                    continue;
                }
            };
            if !entry.file_name().to_string_lossy().starts_with(self.prefix) {
                continue;
            }

            let path = entry.path();
            let modified = match entry.metadata().and_then(|metadata| {
                if metadata.is_file() {
                    metadata.modified().map(Some)
                } else {
                    Ok(None)
                }
            }) {
                Ok(Some(modified)) => modified,
                Ok(None) => continue,
                Err(err) => {
                    report
                        .warnings
                        .push(format!("failed to stat {}: {err}", path.display()));
                    continue;
                }
            };

            if modified > cutoff {
                continue;
            }
            match fs::remove_file(&path) {
                Ok(()) => report.removed += 1,
                Err(err) => report.warnings.push(format!(
                    "failed to remove expired log file {}: {err}",
                    path.display()
                )),
            }
        }

        report
    }
}
