//! Tracing subscriber initialisation.
//!
//! Only the CLI crate is allowed to call [`init_logging`]; `projector-core`
//! only *emits* spans and events and never touches subscribers.
//!
//! Logs always go to stderr (and optionally a file): stdout carries the
//! generated manifests and nothing else.
//!
//! # Verbosity mapping
//!
//! | Flag(s)  | Filter level             |
//! |----------|--------------------------|
//! | (none)   | `log.level` or WARN      |
//! | `-v`     | INFO                     |
//! | `-vv`    | DEBUG                    |
//! | `-vvv`   | TRACE                    |
//! | `--quiet`| ERROR                    |
//!
//! `RUST_LOG` overrides all of the above if set.

use std::io::IsTerminal as _;
use std::path::Path;

use anyhow::Context as _;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{cli::GlobalArgs, config::LogConfig};

/// Initialise the global tracing subscriber.
///
/// Must be called exactly once, before any tracing macros fire. When a log
/// file is configured the returned guard must be held until exit so the
/// background writer flushes.
pub fn init_logging(args: &GlobalArgs, config: &LogConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let level = derive_level(args, config);

    // RUST_LOG wins; otherwise every crate of ours gets the same level.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "projector={level},projector_core={level},projector_adapters={level}"
        ))
    });

    let use_ansi = !args.no_color && std::io::stderr().is_terminal();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match config.file.as_deref() {
        Some(path) => {
            let (writer, guard) = tracing_appender::non_blocking(file_appender(path)?);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(guard)
}

/// A non-rotating appender writing to `path`.
fn file_appender(path: &Path) -> anyhow::Result<tracing_appender::rolling::RollingFileAppender> {
    let file_name = path
        .file_name()
        .with_context(|| format!("Log file path has no file name: {}", path.display()))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    Ok(tracing_appender::rolling::never(dir, file_name))
}

/// Translate the verbosity counter, quiet flag and configured level to a
/// level string.
fn derive_level(args: &GlobalArgs, config: &LogConfig) -> String {
    if args.quiet {
        return "error".into();
    }
    match args.verbose {
        0 => config.level.clone().unwrap_or_else(|| "warn".into()),
        1 => "info".into(),
        2 => "debug".into(),
        _ => "trace".into(),
    }
}
