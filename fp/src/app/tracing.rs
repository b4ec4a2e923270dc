use std::path::PathBuf;

use tracing_subscriber::{EnvFilter, Layer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

/// Environment variable holding the console filter directives, used when no console filter is set.
pub const CONSOLE_FILTER_ENV: &str = "CONSOLE_LOG";
/// Environment variable holding the log file filter directives, used when no file filter is set.
pub const FILE_FILTER_ENV: &str = "FILE_LOG";

#[derive(Debug, thiserror::Error)]
#[error("cannot install global tracing subscriber: {0}")]
pub struct AppTracingError(#[from] TryInitError);

/// Configures and installs the global tracing subscriber: a console layer on stderr and, with the
/// `app_tracing_file` feature, an optional log file layer.
#[derive(Default)]
pub struct AppTracingBuilder {
  console_filter: Option<EnvFilter>,
  log_file_path: Option<PathBuf>,
  file_filter: Option<EnvFilter>,
}
impl AppTracingBuilder {
  #[inline]
  pub fn new() -> Self { Self::default() }

  pub fn with_console_filter(mut self, console_filter: EnvFilter) -> Self {
    self.console_filter = Some(console_filter);
    self
  }

  pub fn with_log_file_path(mut self, log_file_path: impl Into<PathBuf>) -> Self {
    self.log_file_path = Some(log_file_path.into());
    self
  }
  pub fn with_file_filter(mut self, file_filter: EnvFilter) -> Self {
    self.file_filter = Some(file_filter);
    self
  }

  /// Installs the subscriber. Fails if a global subscriber is already installed.
  pub fn build(self) -> Result<AppTracing, AppTracingError> {
    let console_filter = self.console_filter.unwrap_or_else(|| env_filter(CONSOLE_FILTER_ENV));
    let file_filter = self.file_filter;
    let file = self.log_file_path.map(|path| (path, file_filter.unwrap_or_else(|| env_filter(FILE_FILTER_ENV))));
    AppTracing::new(console_filter, file)
  }
}

fn env_filter(env: &str) -> EnvFilter {
  EnvFilter::try_from_env(env).unwrap_or_default()
}


/// Keeps the log file writer alive; drop it to flush and close the log file.
pub struct AppTracing {
  _file_tracing: FileTracing,
}
#[cfg(feature = "app_tracing_file")]
#[derive(Default)]
struct FileTracing(Option<tracing_appender::non_blocking::WorkerGuard>);
#[cfg(not(feature = "app_tracing_file"))]
#[derive(Default)]
struct FileTracing;

impl AppTracing {
  #[cfg(feature = "app_tracing_file")]
  fn new(console_filter: EnvFilter, file: Option<(PathBuf, EnvFilter)>) -> Result<Self, AppTracingError> {
    use std::fs::{create_dir_all, File};
    use std::io::{self, BufWriter};

    let layered = tracing_subscriber::registry()
      .with(tracing_subscriber::fmt::layer().with_writer(io::stderr).with_filter(console_filter));

    let Some((file_path, file_filter)) = file else {
      layered.try_init()?;
      return Ok(Self { _file_tracing: FileTracing::default() });
    };
    let result = (|| {
      if let Some(parent) = file_path.parent() {
        create_dir_all(parent)?;
      }
      File::create(&file_path)
    })();
    let _file_tracing = match result {
      Err(cause) => {
        layered.try_init()?;
        tracing::warn!(%cause, "cannot log to file; could not create and open log file '{}' for writing", file_path.display());
        FileTracing::default()
      }
      Ok(log_file) => {
        let (non_blocking, guard) = tracing_appender::non_blocking(BufWriter::new(log_file));
        layered
          .with(tracing_subscriber::fmt::layer().with_writer(non_blocking).with_ansi(false).with_filter(file_filter))
          .try_init()?;
        FileTracing(Some(guard))
      }
    };
    Ok(Self { _file_tracing })
  }

  #[cfg(not(feature = "app_tracing_file"))]
  fn new(console_filter: EnvFilter, file: Option<(PathBuf, EnvFilter)>) -> Result<Self, AppTracingError> {
    tracing_subscriber::registry()
      .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_filter(console_filter))
      .try_init()?;
    if let Some((file_path, _)) = file {
      tracing::warn!("cannot log to file '{}'; the `app_tracing_file` feature is disabled", file_path.display());
    }
    Ok(Self { _file_tracing: FileTracing })
  }
}
