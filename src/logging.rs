use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

static FILE_GUARD: OnceCell<WorkerGuard> = OnceCell::new();

/// Level filter used by [`init`].
///
/// When debug logging is disabled `info` is forced regardless of `RUST_LOG`,
/// so a stray variable in the user's environment cannot turn on verbose
/// output. With debug enabled `RUST_LOG` may override the level.
pub fn build_filter(debug: bool) -> EnvFilter {
    if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("info")
    }
}

/// Open `path` for appending log lines, creating its directory if needed.
pub fn file_appender(path: &Path) -> Result<RollingFileAppender, InitError> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut builder = RollingFileAppender::builder().rotation(Rotation::NEVER);
    if let Some(name) = path.file_name() {
        builder = builder.filename_prefix(name.to_string_lossy().into_owned());
    }
    builder.build(dir)
}

/// Initialise logging to stdout and, optionally, to `file`.
///
/// A log file that cannot be opened is skipped with a warning. Calling this
/// more than once is harmless; only the first call installs a subscriber.
pub fn init(debug: bool, file: Option<PathBuf>) {
    let mut file_error = None;
    let file_layer = file.and_then(|path| match file_appender(&path) {
        Ok(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            if FILE_GUARD.set(guard).is_err() {
                return None;
            }
            Some(fmt::layer().with_ansi(false).with_writer(writer))
        }
        Err(e) => {
            file_error = Some((path, e));
            None
        }
    });

    let _ = tracing_subscriber::registry()
        .with(build_filter(debug))
        .with(fmt::layer())
        .with(file_layer)
        .try_init();

    if let Some((path, e)) = file_error {
        tracing::warn!("cannot write log file {}: {e}", path.display());
    }
}
