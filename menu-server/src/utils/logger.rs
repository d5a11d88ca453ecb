//! Logging Infrastructure
//!
//! Structured logging to the terminal, or to a daily rolling file when a log
//! directory is configured. Production uses JSON lines.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

/// Initialize the logger with optional JSON format and file output.
///
/// `RUST_LOG` takes precedence over `log_level`. The returned guard must be
/// kept alive for file output to be flushed. Calling this twice is a no-op.
pub fn init_logger_with_file(
    log_level: &str,
    json: bool,
    log_dir: Option<&str>,
) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{log_level},tower_http=info")));

    let (writer, guard) = match log_dir.map(Path::new) {
        Some(dir) if std::fs::create_dir_all(dir).is_ok() => {
            let file_appender = tracing_appender::rolling::daily(dir, "menu-server");
            let (writer, guard) = tracing_appender::non_blocking(file_appender);
            (BoxMakeWriter::new(writer), Some(guard))
        }
        _ => (BoxMakeWriter::new(std::io::stdout), None),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(guard.is_none())
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let _ = if json {
        subscriber.json().try_init()
    } else {
        subscriber.try_init()
    };

    guard
}
