//! Logging for the `taxshare` command.
//!
//! Records go to stderr, so they never interleave with a report on stdout,
//! and optionally to an append-mode file. The subscriber is installed before
//! the config file is read; [`LogSettings`] are applied once it has been.
//!
//! Level precedence: `--log-level`, then `RUST_LOG`, then `[logging] level`,
//! then [`DEFAULT_LOG_LEVEL`].

use std::fs::File;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Local;
use thiserror::Error;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::fmt::format::{FormatEvent, FormatFields, Writer};
use tracing_subscriber::fmt::writer::EitherWriter;
use tracing_subscriber::fmt::{self, FmtContext, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, Registry, reload};

use crate::cli::Cli;
use crate::config::LoggingConfig;

/// Level used when neither the command line, `RUST_LOG` nor the config file
/// names one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log level '{level}': {source}")]
    InvalidLevel {
        level: String,
        #[source]
        source: ParseError,
    },

    #[error("cannot open log file {}: {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to reload log filter: {0}")]
    Reload(#[from] reload::Error),

    #[error("a global logger is already installed: {0}")]
    AlreadyInstalled(#[from] TryInitError),
}

// ─── settings ────────────────────────────────────────────────────────────────

/// Logging options resolved from the command line, `RUST_LOG` and config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// Filter to switch to; `None` keeps the one installed at startup.
    pub level: Option<String>,
    pub file: Option<PathBuf>,
    pub console: bool,
}

impl LogSettings {
    /// `rust_log_set` reports whether `RUST_LOG` already produced the startup
    /// filter, in which case the config file's level is ignored.
    pub fn resolve(
        cli: &Cli,
        config: &LoggingConfig,
        rust_log_set: bool,
    ) -> Self {
        let level = match (&cli.log_level, rust_log_set) {
            (Some(level), _) => Some(level.clone()),
            (None, true) => None,
            (None, false) => config.level.clone(),
        };

        Self {
            level,
            file: cli.log_file.clone().or_else(|| config.file.clone()),
            console: config.console,
        }
    }
}

/// Whether `RUST_LOG` carries a usable filter.
pub fn rust_log_is_set() -> bool {
    EnvFilter::try_from_default_env().is_ok()
}

fn startup_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

// ─── formatting ──────────────────────────────────────────────────────────────

/// `LEVEL target: message fields`, with a local timestamp in front for the
/// log file.
struct EventLine {
    timestamp: bool,
}

fn level_color(level: Level) -> &'static str {
    match level {
        Level::ERROR => "1;31",
        Level::WARN => "1;33",
        Level::INFO => "1;32",
        Level::DEBUG => "1;34",
        Level::TRACE => "1;35",
    }
}

impl<S, N> FormatEvent<S, N> for EventLine
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        if self.timestamp {
            write!(writer, "{} ", Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z"))?;
        }

        let level = *meta.level();
        if writer.has_ansi_escapes() {
            write!(writer, "\x1b[{}m{level:>5}\x1b[0m ", level_color(level))?;
        } else {
            write!(writer, "{level:>5} ")?;
        }
        write!(writer, "{}: ", meta.target())?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

// ─── writers ─────────────────────────────────────────────────────────────────

/// Stderr, or nothing once the console is switched off.
#[derive(Clone)]
struct Console(Arc<AtomicBool>);

impl<'a> MakeWriter<'a> for Console {
    type Writer = EitherWriter<io::Stderr, io::Sink>;

    fn make_writer(&'a self) -> Self::Writer {
        if self.0.load(Ordering::Relaxed) {
            EitherWriter::A(io::stderr())
        } else {
            EitherWriter::B(io::sink())
        }
    }
}

/// The log file, opened after startup. Records are dropped until then.
#[derive(Clone, Default)]
struct LogFile(Arc<Mutex<Option<File>>>);

impl LogFile {
    fn lock(&self) -> MutexGuard<'_, Option<File>> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn replace(
        &self,
        file: File,
    ) {
        *self.lock() = Some(file);
    }
}

struct LockedFile<'a>(MutexGuard<'a, Option<File>>);

impl Write for LockedFile<'_> {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> io::Result<usize> {
        self.0.as_mut().map_or(Ok(buf.len()), |file| file.write(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.as_mut().map_or(Ok(()), File::flush)
    }
}

impl<'a> MakeWriter<'a> for LogFile {
    type Writer = LockedFile<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        LockedFile(self.lock())
    }
}

// ─── subscriber ──────────────────────────────────────────────────────────────

/// Handles for adjusting the installed subscriber.
pub struct Logging {
    level: reload::Handle<EnvFilter, Registry>,
    console: Arc<AtomicBool>,
    file: LogFile,
}

impl Logging {
    /// Installs the global subscriber with `RUST_LOG` or
    /// [`DEFAULT_LOG_LEVEL`], console on and no file.
    pub fn init() -> Result<Self, LoggingError> {
        let (subscriber, logging) = Self::build(startup_filter());
        subscriber.try_init()?;
        Ok(logging)
    }

    fn build(filter: EnvFilter) -> (impl Subscriber + Send + Sync + 'static, Self) {
        let (level_layer, level) = reload::Layer::new(filter);
        let console = Arc::new(AtomicBool::new(true));
        let file = LogFile::default();

        let subscriber = tracing_subscriber::registry()
            .with(level_layer)
            .with(
                fmt::layer()
                    .event_format(EventLine { timestamp: false })
                    .with_ansi(io::stderr().is_terminal())
                    .with_writer(Console(console.clone())),
            )
            .with(
                fmt::layer()
                    .event_format(EventLine { timestamp: true })
                    .with_ansi(false)
                    .with_writer(file.clone()),
            );

        (
            subscriber,
            Self {
                level,
                console,
                file,
            },
        )
    }

    /// Switches to the resolved level, opens the log file and shows or hides
    /// console output. An existing log file is appended to.
    pub fn apply(
        &self,
        settings: &LogSettings,
    ) -> Result<(), LoggingError> {
        if let Some(level) = &settings.level {
            let filter = EnvFilter::try_new(level).map_err(|source| LoggingError::InvalidLevel {
                level: level.clone(),
                source,
            })?;
            self.level.reload(filter)?;
        }

        if let Some(path) = &settings.file {
            let file = File::options()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| LoggingError::LogFile {
                    path: path.clone(),
                    source,
                })?;
            self.file.replace(file);
        }

        self.console.store(settings.console, Ordering::Relaxed);
        Ok(())
    }
}
