//! Structured logging using tracing.
//!
//! Events are formatted by `tracing-subscriber` and written to the browser
//! console, one console call per event. Timestamps are left off because the
//! console adds its own.

use std::io;

use minidocs_core::SiteConfig;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Logging configuration options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Maximum log level.
    pub level: Level,
    /// Whether to include the target module in logs.
    pub include_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::production()
    }
}

impl LoggingConfig {
    /// Verbose logging for development builds.
    #[must_use]
    pub const fn development() -> Self {
        Self {
            level: Level::DEBUG,
            include_target: true,
        }
    }

    /// Minimal logging for release builds.
    #[must_use]
    pub const fn production() -> Self {
        Self {
            level: Level::INFO,
            include_target: false,
        }
    }

    /// Detect configuration based on build type.
    #[must_use]
    pub const fn auto() -> Self {
        if cfg!(debug_assertions) {
            Self::development()
        } else {
            Self::production()
        }
    }

    /// Build-type defaults with the level taken from the site configuration.
    ///
    /// An invalid level keeps the build-type default.
    #[must_use]
    pub fn for_site(config: &SiteConfig) -> Self {
        let mut logging = Self::auto();
        if let Ok(level) = config.level() {
            logging.level = level;
        }
        logging
    }

    /// Filter directive for this configuration.
    pub fn filter_directive(&self) -> String {
        self.level.as_str().to_lowercase()
    }
}

/// Buffers one formatted event and writes it to the console on flush/drop.
#[derive(Debug, Default)]
pub struct ConsoleWriter {
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn emit(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buffer);
        console_log(line.trim_end());
        self.buffer.clear();
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.emit();
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        self.emit();
    }
}

#[cfg(target_arch = "wasm32")]
fn console_log(line: &str) {
    web_sys::console::log_1(&line.into());
}

#[cfg(not(target_arch = "wasm32"))]
#[allow(clippy::print_stderr)]
fn console_log(line: &str) {
    eprintln!("{line}");
}

/// Install the global subscriber.
///
/// Calling this more than once leaves the first subscriber in place.
pub fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_new(config.filter_directive())
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(ConsoleWriter::default)
        .with_target(config.include_target)
        .with_ansi(false)
        .without_time()
        .try_init();

    if result.is_ok() {
        tracing::debug!(level = %config.level, "Logging initialized");
    }
}
